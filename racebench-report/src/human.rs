//! Human-Readable Output
//!
//! Terminal grid: a header row naming the three shapes, one column-aligned
//! row per operation in race order.

use racebench_core::Shape;

use crate::report::Report;

const GRID_WIDTH: usize = 12 + 3 * 13;

/// Format a report for terminal display.
pub fn render_human(report: &Report) -> String {
    let mut output = String::new();

    output.push('\n');
    output.push_str("Racebench Results\n");
    output.push_str(&"=".repeat(GRID_WIDTH));
    output.push_str("\n\n");

    output.push_str(&format!(
        "Corpus: {} ({} records)\n",
        report.meta.corpus_path, report.meta.corpus_records
    ));
    output.push_str(&format!("Trials: {}\n\n", report.meta.trials));

    output.push_str(&format!(
        "{:<12} {:>12} {:>12} {:>12}\n",
        "Operation",
        Shape::Vector.label(),
        Shape::List.label(),
        Shape::Set.label()
    ));
    output.push_str(&"-".repeat(GRID_WIDTH));
    output.push('\n');

    for row in &report.rows {
        output.push_str(&format!(
            "{:<12} {:>12} {:>12} {:>12}\n",
            row.operation, row.vector_us, row.list_us, row.set_us
        ));
    }

    output.push_str("\nAll values are mean elapsed microseconds per operation.\n");
    output
}
