//! Measurement Table
//!
//! Per-run storage of every timing, indexed by (trial, operation, shape)
//! through named accessors rather than raw positions. Cells start
//! unpopulated so a missed write surfaces as an error at aggregation time
//! instead of silently averaging in as a zero reading.

use racebench_core::{Operation, Shape, Timings};
use thiserror::Error;

/// Invalid use of the measurement table.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TableError {
    /// Aggregation requested before every cell held a reading.
    #[error("measurement table incomplete: {populated} of {expected} cells populated")]
    Incomplete {
        /// Cells holding a reading.
        populated: usize,
        /// Cells the run was sized for.
        expected: usize,
    },
    /// The table was sized for zero trials; a mean over zero samples is
    /// undefined.
    #[error("measurement table holds no trials")]
    NoTrials,
}

/// Three-axis timing storage for one run.
///
/// The orchestrator owns the table and is its sole writer. A fresh table is
/// created per run and discarded once aggregated.
#[derive(Debug, Clone)]
pub struct MeasurementTable {
    trials: usize,
    cells: Vec<Option<u64>>,
}

impl MeasurementTable {
    /// Empty table sized for `trials` rows.
    pub fn new(trials: usize) -> Self {
        Self {
            trials,
            cells: vec![None; trials * Operation::COUNT * Shape::COUNT],
        }
    }

    /// Number of trial rows.
    pub fn trials(&self) -> usize {
        self.trials
    }

    /// Cell count once fully populated: trials × operations × shapes.
    pub fn expected_cells(&self) -> usize {
        self.cells.len()
    }

    fn index(&self, trial: usize, op: Operation, shape: Shape) -> usize {
        debug_assert!(trial < self.trials, "trial {trial} out of {}", self.trials);
        (trial * Operation::COUNT + op.index()) * Shape::COUNT + shape.index()
    }

    /// Store one reading.
    pub fn record(&mut self, trial: usize, op: Operation, shape: Shape, micros: u64) {
        let at = self.index(trial, op, shape);
        self.cells[at] = Some(micros);
    }

    /// Store a full three-shape reading for one operation.
    pub fn record_timings(&mut self, trial: usize, op: Operation, timings: Timings) {
        for shape in Shape::ALL {
            self.record(trial, op, shape, timings.get(shape));
        }
    }

    /// Reading for one cell, if populated.
    pub fn get(&self, trial: usize, op: Operation, shape: Shape) -> Option<u64> {
        self.cells[self.index(trial, op, shape)]
    }

    /// Every populated sample for one (operation, shape) column, trial order.
    pub fn samples(&self, op: Operation, shape: Shape) -> Vec<u64> {
        (0..self.trials)
            .filter_map(|trial| self.get(trial, op, shape))
            .collect()
    }

    /// Count of populated cells.
    pub fn populated(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Whether every cell holds a reading.
    pub fn is_complete(&self) -> bool {
        self.populated() == self.cells.len()
    }
}
