#![warn(missing_docs)]
//! Racebench Core - Shapes, Runners, and Timing
//!
//! This crate provides the measurement substrate for the harness:
//! - `Clock` trait with wall-clock and deterministic implementations
//! - `CountingAllocator` for allocation-metered clock stand-ins
//! - `Corpus` loading (one text record per line, order preserved)
//! - The four operation runners raced across the three container shapes

mod clock;
mod corpus;
mod meter;
mod runner;

pub use clock::{AllocClock, Clock, ScriptedClock, WallClock, pin_to_cpu};
pub use corpus::{Corpus, CorpusError};
pub use meter::{CountingAllocator, allocation_snapshot};
pub use runner::{
    MIDPOINT_PROBE, Timings, delete_race, insert_race, read_race, run_operation, sort_race,
};

/// Container shapes under comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Contiguous random-access sequence (`Vec<String>`).
    Vector,
    /// Doubly-linked sequence (`LinkedList<String>`).
    List,
    /// Ordered unique-key sequence (`BTreeSet<String>`).
    Set,
}

impl Shape {
    /// Number of shapes raced.
    pub const COUNT: usize = 3;

    /// Every shape, in report column order.
    pub const ALL: [Shape; Shape::COUNT] = [Shape::Vector, Shape::List, Shape::Set];

    /// Column label used in reports.
    pub fn label(self) -> &'static str {
        match self {
            Shape::Vector => "Vector",
            Shape::List => "List",
            Shape::Set => "Set",
        }
    }

    /// Dense index for table storage.
    pub fn index(self) -> usize {
        match self {
            Shape::Vector => 0,
            Shape::List => 1,
            Shape::Set => 2,
        }
    }
}

/// Operations under measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Bulk construction of a shape from the full corpus.
    Read,
    /// Bringing a pre-built shape into fully sorted order.
    Sort,
    /// Inserting one probe record at the structural midpoint.
    Insert,
    /// Removing the element at the structural midpoint.
    Delete,
}

impl Operation {
    /// Number of operations raced.
    pub const COUNT: usize = 4;

    /// Every operation, in the fixed per-trial execution order.
    pub const ALL: [Operation; Operation::COUNT] = [
        Operation::Read,
        Operation::Sort,
        Operation::Insert,
        Operation::Delete,
    ];

    /// Row label used in reports.
    pub fn label(self) -> &'static str {
        match self {
            Operation::Read => "Read",
            Operation::Sort => "Sort",
            Operation::Insert => "Insert",
            Operation::Delete => "Delete",
        }
    }

    /// Dense index for table storage.
    pub fn index(self) -> usize {
        match self {
            Operation::Read => 0,
            Operation::Sort => 1,
            Operation::Insert => 2,
            Operation::Delete => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_indices_are_dense() {
        for (expected, shape) in Shape::ALL.into_iter().enumerate() {
            assert_eq!(shape.index(), expected);
        }
    }

    #[test]
    fn operation_order_is_fixed() {
        let labels: Vec<_> = Operation::ALL.iter().map(|op| op.label()).collect();
        assert_eq!(labels, ["Read", "Sort", "Insert", "Delete"]);
    }
}
