#![warn(missing_docs)]
//! Racebench Stats - Measurement Storage and Aggregation
//!
//! The measurement table collects one reading per (trial, operation, shape)
//! cell; the aggregator reduces the trial axis to an integer-truncated mean.
//! Nothing beyond the arithmetic mean is computed here.

mod aggregate;
mod table;

pub use aggregate::{AggregatedResult, aggregate};
pub use table::{MeasurementTable, TableError};
