//! Error types for loading and saving documents.
//!
//! Parsing itself never fails: malformed lines are dropped. Only the file
//! boundary can error, and each variant keeps the path it was working on.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure at the file boundary.
#[derive(Error, Debug)]
pub enum Error {
    /// The source could not be opened or read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },

    /// The destination could not be opened, written, flushed or committed.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        /// File that was being written.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },
}

/// Convenience alias for results carrying [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;
