//! Trial Orchestration
//!
//! One run walks `Idle → Running(trial) → Aggregating → Done`. Every trial
//! invokes the four runners in the fixed order Read, Sort, Insert, Delete
//! and stores their three-shape readings at the trial's row. The
//! orchestrator owns the measurement table and is its only writer; trials
//! are independent and strictly sequential, so the measured latencies see
//! no scheduler or cache interference from the harness itself.

use indicatif::{ProgressBar, ProgressStyle};
use racebench_core::{Clock, Corpus, Operation, run_operation};
use racebench_stats::{AggregatedResult, MeasurementTable, TableError, aggregate};

/// Orchestrator run phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No trial has started.
    Idle,
    /// Executing the given trial row.
    Running(usize),
    /// All trials recorded; reducing the trial axis.
    Aggregating,
    /// Aggregated result produced.
    Done,
}

/// Runs every trial and owns the measurement table.
pub struct Orchestrator<C: Clock> {
    clock: C,
    table: MeasurementTable,
    phase: Phase,
    show_progress: bool,
}

impl<C: Clock> Orchestrator<C> {
    /// Orchestrator sized for `trials` rows, timing through `clock`.
    pub fn new(trials: usize, clock: C) -> Self {
        Self {
            clock,
            table: MeasurementTable::new(trials),
            phase: Phase::Idle,
            show_progress: false,
        }
    }

    /// Enable the terminal progress bar.
    pub fn with_progress(mut self) -> Self {
        self.show_progress = true;
        self
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Collected measurements.
    pub fn table(&self) -> &MeasurementTable {
        &self.table
    }

    /// Run every trial over the corpus, then aggregate.
    ///
    /// Each cell's timing comes from a container built fresh for that cell;
    /// nothing is carried across operations or trials.
    pub fn run(&mut self, corpus: &Corpus) -> Result<AggregatedResult, TableError> {
        let trials = self.table.trials();

        let pb = if self.show_progress {
            ProgressBar::new(trials as u64)
        } else {
            ProgressBar::hidden()
        };
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
                )
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );

        for trial in 0..trials {
            self.phase = Phase::Running(trial);
            pb.set_message(format!("trial {}/{}", trial + 1, trials));

            for op in Operation::ALL {
                let timings = run_operation(op, corpus, &self.clock);
                self.table.record_timings(trial, op, timings);
            }

            tracing::debug!(trial, "trial complete");
            pb.inc(1);
        }
        pb.finish_with_message("Complete");

        self.phase = Phase::Aggregating;
        let aggregated = aggregate(&self.table)?;
        self.phase = Phase::Done;

        Ok(aggregated)
    }
}
