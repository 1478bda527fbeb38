//! Corpus Loading
//!
//! A corpus is an immutable ordered sequence of text records, one per input
//! line, shared read-only by every trial and runner. Records are stored
//! exactly as read: no trimming, case-folding, or deduplication.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failure to obtain the corpus from its source.
#[derive(Debug, Error)]
pub enum CorpusError {
    /// The source could not be opened or read.
    ///
    /// Surfaced to the caller before any trial begins: averaged timings
    /// over a silently substituted empty corpus would be meaningless.
    #[error("corpus source {path:?} unavailable: {source}")]
    Unavailable {
        /// Source the loader attempted to read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
}

/// Immutable ordered sequence of text records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corpus {
    records: Vec<String>,
}

impl Corpus {
    /// Load a corpus from `path`, one record per line, input order preserved.
    ///
    /// An unreadable source is an error. A readable source with zero lines
    /// yields an empty corpus, which is a legitimate degenerate input.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CorpusError> {
        let path = path.as_ref();
        let unavailable = |source| CorpusError::Unavailable {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(unavailable)?;
        let mut records = Vec::new();
        for line in BufReader::new(file).lines() {
            records.push(line.map_err(unavailable)?);
        }
        Ok(Self { records })
    }

    /// Build a corpus directly from records (tests, synthetic workloads).
    pub fn from_records(records: Vec<String>) -> Self {
        Self { records }
    }

    /// All records, in load order.
    pub fn records(&self) -> &[String] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the corpus holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
