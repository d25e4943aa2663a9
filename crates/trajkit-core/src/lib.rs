//! # Trajkit Core
//!
//! Core types shared by every Trajkit crate.
//! Provides the point and trajectory data model that generators produce,
//! the path stitcher consumes, and the export sink serializes.
//!
//! All coordinates are flat Cartesian meters. Values are created fresh per
//! generation call and never shared mutably.

pub mod error;
pub mod point;
pub mod trajectory;

pub use error::{Result, TrajectoryError};
pub use point::Point3D;
pub use trajectory::{Bounds, Segment, Trajectory};
