#![warn(missing_docs)]
//! # Racebench
//!
//! Microbenchmark harness racing four operations (bulk read/construct,
//! full sort, single-element insert, single-element delete) across three
//! container shapes: a contiguous random-access sequence (`Vec<String>`), a
//! doubly-linked sequence (`LinkedList<String>`), and an ordered unique-key
//! sequence (`BTreeSet<String>`).
//!
//! A fixed corpus of text records is loaded once; every trial builds fresh
//! container instances per operation, times exactly the operation under
//! test, and the harness reports the per-operation, per-shape mean elapsed
//! microseconds over the configured number of trials.
//!
//! ## Quick Start
//!
//! ```ignore
//! fn main() {
//!     if let Err(e) = racebench::run() {
//!         eprintln!("Error: {e:#}");
//!         std::process::exit(1);
//!     }
//! }
//! ```
//!
//! ## Library Use
//!
//! ```ignore
//! use racebench::{Corpus, Orchestrator, WallClock};
//!
//! let corpus = Corpus::load("codes.txt")?;
//! let mut orchestrator = Orchestrator::new(15, WallClock);
//! let aggregated = orchestrator.run(&corpus)?;
//! ```

// Re-export core types
pub use racebench_core::{
    AllocClock, Clock, Corpus, CorpusError, CountingAllocator, MIDPOINT_PROBE, Operation,
    ScriptedClock, Shape, Timings, WallClock, allocation_snapshot, delete_race, insert_race,
    pin_to_cpu, read_race, run_operation, sort_race,
};

// Re-export measurement storage and aggregation
pub use racebench_stats::{AggregatedResult, MeasurementTable, TableError, aggregate};

// Re-export report types and renderers
pub use racebench_report::{
    OperationRow, OutputFormat, Report, ReportMeta, SCHEMA_VERSION, build_report,
    generate_csv_report, generate_json_report, render_human,
};

// Re-export the CLI harness
pub use racebench_cli::{Cli, HarnessConfig, Orchestrator, Phase, run, run_with_cli};
