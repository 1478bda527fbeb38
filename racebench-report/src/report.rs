//! Report Data Structures

use chrono::{DateTime, Utc};
use racebench_core::{Operation, Shape};
use racebench_stats::AggregatedResult;
use serde::{Deserialize, Serialize};

/// Current report schema version.
pub const SCHEMA_VERSION: u32 = 1;

/// Complete harness report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Run provenance.
    pub meta: ReportMeta,
    /// One row per operation, in race order.
    pub rows: Vec<OperationRow>,
}

/// Report metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMeta {
    /// Report schema version.
    pub schema_version: u32,
    /// Harness version.
    pub version: String,
    /// Report creation time.
    pub timestamp: DateTime<Utc>,
    /// Number of trials averaged over.
    pub trials: usize,
    /// Corpus source the run consumed.
    pub corpus_path: String,
    /// Number of records loaded from the corpus.
    pub corpus_records: usize,
}

impl ReportMeta {
    /// Metadata for a run finishing now, stamped with the harness version.
    pub fn new(trials: usize, corpus_path: String, corpus_records: usize) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: Utc::now(),
            trials,
            corpus_path,
            corpus_records,
        }
    }
}

/// Averaged readings for one operation across the three shapes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OperationRow {
    /// Operation name.
    pub operation: String,
    /// Mean microseconds for the contiguous sequence.
    pub vector_us: u64,
    /// Mean microseconds for the linked sequence.
    pub list_us: u64,
    /// Mean microseconds for the ordered set.
    pub set_us: u64,
}

/// Assemble a report from the aggregated means.
pub fn build_report(aggregated: &AggregatedResult, meta: ReportMeta) -> Report {
    let rows = Operation::ALL
        .iter()
        .map(|&op| OperationRow {
            operation: op.label().to_string(),
            vector_us: aggregated.mean(op, Shape::Vector),
            list_us: aggregated.mean(op, Shape::List),
            set_us: aggregated.mean(op, Shape::Set),
        })
        .collect();

    Report { meta, rows }
}
