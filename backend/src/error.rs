//! Error types for the cleaning pipeline.
//!
//! - [`SourceError`] - reading a spreadsheet or delimited-text source
//! - [`OutputError`] - serializing and writing the cleaned document
//! - [`PipelineError`] - top-level run errors
//! - [`ServerError`] - the read-only web front
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// Source Errors
// =============================================================================

/// Errors while loading rows from an input file.
#[derive(Debug, Error)]
pub enum SourceError {
    /// File missing or unreadable.
    #[error("Failed to read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed delimited text.
    #[error("Invalid delimited text in '{}': {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Workbook could not be opened or parsed.
    #[error("Failed to open workbook '{}': {message}", .path.display())]
    Workbook { path: PathBuf, message: String },

    /// Workbook contains no worksheet.
    #[error("Workbook '{}' has no sheets", .0.display())]
    NoSheets(PathBuf),

    /// The blocking reader task panicked or was cancelled.
    #[error("Reader task for '{}' did not complete: {message}", .path.display())]
    Task { path: PathBuf, message: String },
}

impl SourceError {
    /// Path of the source that failed.
    pub fn path(&self) -> &PathBuf {
        match self {
            SourceError::Io { path, .. }
            | SourceError::Csv { path, .. }
            | SourceError::Workbook { path, .. }
            | SourceError::Task { path, .. } => path,
            SourceError::NoSheets(path) => path,
        }
    }
}

// =============================================================================
// Output Errors
// =============================================================================

/// Errors while writing the cleaned document.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Filesystem failure (disk full, permissions, rename).
    #[error("Failed to write '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// =============================================================================
// Pipeline Errors (top-level)
// =============================================================================

/// Top-level run errors.
///
/// This is the error type returned by [`crate::transform::pipeline::clean_data`].
#[derive(Debug, Error)]
pub enum PipelineError {
    /// An input could not be read.
    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    /// The output could not be written.
    #[error("Output error: {0}")]
    Output(#[from] OutputError),
}

// =============================================================================
// Server Errors
// =============================================================================

/// Errors of the `serve` command.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Data file missing or unreadable at start-up.
    #[error("Cannot load data file '{}': {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Data file is not a cleaned document.
    #[error("Invalid data file '{}': {source}", .path.display())]
    InvalidData {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Listener could not bind or the server stopped with an error.
    #[error("Server IO error: {0}")]
    Io(#[from] std::io::Error),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for source reads.
pub type SourceResult<T> = Result<T, SourceError>;

/// Result type for output writes.
pub type OutputResult<T> = Result<T, OutputError>;

/// Result type for pipeline runs.
pub type PipelineResult<T> = Result<T, PipelineError>;

/// Result type for server operations.
pub type ServerResult<T> = Result<T, ServerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion_chain() {
        let source_err = SourceError::NoSheets(PathBuf::from("empty.xlsx"));
        let pipeline_err: PipelineError = source_err.into();
        let msg = pipeline_err.to_string();
        assert!(msg.contains("empty.xlsx"));
        assert!(msg.contains("no sheets"));

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let output_err = OutputError::Io {
            path: PathBuf::from("dataCleaned.json"),
            source: io,
        };
        let pipeline_err: PipelineError = output_err.into();
        assert!(pipeline_err.to_string().contains("dataCleaned.json"));
    }

    #[test]
    fn test_source_error_path() {
        let err = SourceError::Workbook {
            path: PathBuf::from("products.xlsx"),
            message: "not a zip archive".into(),
        };
        assert_eq!(err.path(), &PathBuf::from("products.xlsx"));
        assert!(err.to_string().contains("not a zip archive"));
    }
}
