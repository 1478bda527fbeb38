//! JSON Output

use crate::report::Report;

/// Generate a prettified JSON rendering of the report.
pub fn generate_json_report(report: &Report) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::tests::sample_report;

    #[test]
    fn json_round_trips() {
        let report = sample_report();
        let json = generate_json_report(&report).unwrap();

        let parsed: crate::Report = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.rows, report.rows);
        assert_eq!(parsed.meta.trials, report.meta.trials);
    }
}
