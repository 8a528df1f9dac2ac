//! Custom error types and handling
//!
//! Every I/O and serialization failure is surfaced as a `BenchError`.
//! Whether a failure skips one data size or ends the run is decided by the
//! caller, not here.

use std::path::{Path, PathBuf};

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum BenchError {
    // Input errors
    #[error("Test data file {} not found. Run the test data generator first", .0.display())]
    TestDataNotFound(PathBuf),

    #[error("Error decoding JSON from {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    // Output errors
    #[error("Error encoding results: {0}")]
    Encode(#[source] serde_json::Error),

    // Shared
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl BenchError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::TestDataNotFound(_) => "TEST_DATA_NOT_FOUND",
            Self::Decode { .. } => "DECODE_ERROR",
            Self::Encode(_) => "ENCODE_ERROR",
            Self::Io { .. } => "IO_ERROR",
        }
    }

    /// Wrap an I/O error with the path it occurred on
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

/// Result type alias using BenchError
pub type BenchResult<T> = Result<T, BenchError>;
