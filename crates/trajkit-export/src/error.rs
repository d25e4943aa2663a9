//! Error types for the export crate.

use std::io;
use std::path::PathBuf;
use thiserror::Error;
use trajkit_core::TrajectoryError;

/// Errors that can occur while exporting or re-reading trajectories.
#[derive(Error, Debug)]
pub enum ExportError {
    /// The trajectory or axis data cannot be exported.
    #[error(transparent)]
    Trajectory(#[from] TrajectoryError),

    /// The base name is empty or contains a path separator.
    #[error("Invalid base name: {0:?}")]
    InvalidBaseName(String),

    /// The delimiter would be ambiguous with numeric text.
    #[error("Invalid delimiter: {0:?}")]
    InvalidDelimiter(char),

    /// A value in an exported file could not be parsed.
    #[error("Failed to parse field {field} of {}: {reason}", .path.display())]
    Parse {
        path: PathBuf,
        field: usize,
        reason: String,
    },

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result type alias for export operations.
pub type ExportResult<T> = Result<T, ExportError>;
