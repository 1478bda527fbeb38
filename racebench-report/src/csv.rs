//! CSV Output

use crate::report::Report;

/// Generate a spreadsheet-compatible CSV rendering of the report.
pub fn generate_csv_report(report: &Report) -> String {
    let mut output = String::from("operation,vector_us,list_us,set_us\n");
    for row in &report.rows {
        output.push_str(&format!(
            "{},{},{},{}\n",
            row.operation, row.vector_us, row.list_us, row.set_us
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::tests::sample_report;

    #[test]
    fn csv_has_header_and_one_line_per_operation() {
        let csv = generate_csv_report(&sample_report());
        let lines: Vec<_> = csv.lines().collect();

        assert_eq!(lines[0], "operation,vector_us,list_us,set_us");
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[3], "Insert,20,21,22");
    }
}
