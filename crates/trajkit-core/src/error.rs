//! Error types for the core crate.
//!
//! Generation is infallible; these errors only arise when trajectories are
//! assembled from externally supplied data such as per-axis sequences.

use thiserror::Error;

/// Errors raised while building or converting trajectories.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TrajectoryError {
    /// The x, y and z sequences do not have the same length.
    #[error("Axis length mismatch: x={x}, y={y}, z={z}")]
    AxisLengthMismatch {
        /// Length of the x sequence.
        x: usize,
        /// Length of the y sequence.
        y: usize,
        /// Length of the z sequence.
        z: usize,
    },

    /// A coordinate is NaN or infinite.
    #[error("Non-finite coordinate at index {index}")]
    NonFiniteCoordinate {
        /// Index of the offending point.
        index: usize,
    },
}

/// Result type using [`TrajectoryError`]
pub type Result<T> = std::result::Result<T, TrajectoryError>;
