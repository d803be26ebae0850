//! # Centralized Error Handling
//!
//! Unified error types for the entire crate using `thiserror`.
//!
//! The inference math itself is total on well-formed inputs: errors surface
//! only at the two boundaries, pedigree loading and post-enumeration
//! normalization.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for mendel operations
#[derive(Error, Debug)]
pub enum MendelError {
    /// I/O errors (file missing, permission denied, read/write failures)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Pedigree CSV parsing errors (malformed records, missing fields)
    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Invalid pedigree data (one-parent records, unknown parent names,
    /// duplicate names, population too large to enumerate)
    #[error("Invalid pedigree: {message}")]
    InvalidData { message: String },

    /// Configuration errors (invalid CLI arguments)
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// File not found errors
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    /// The observed evidence admits no assignment with positive probability,
    /// so every accumulator stayed at zero and no posterior exists
    #[error("Unsatisfiable evidence: {message}")]
    Unsatisfiable { message: String },
}

/// Type alias for Results using MendelError
pub type Result<T> = std::result::Result<T, MendelError>;

impl MendelError {
    /// Create a parse error with a line number
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }

    /// Create an invalid data error
    pub fn invalid_data(message: impl Into<String>) -> Self {
        Self::InvalidData {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an unsatisfiable-evidence error
    pub fn unsatisfiable(message: impl Into<String>) -> Self {
        Self::Unsatisfiable {
            message: message.into(),
        }
    }
}

// Convert csv reader errors to MendelError, keeping the record line if known
impl From<csv::Error> for MendelError {
    fn from(err: csv::Error) -> Self {
        let line = err
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or_default();
        Self::Parse {
            line,
            message: err.to_string(),
        }
    }
}
