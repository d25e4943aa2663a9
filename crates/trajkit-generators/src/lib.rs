//! # Trajkit Generators
//!
//! This crate produces 3-D motion trajectories as ordered point sequences
//! suitable for driving a positioning stage.
//!
//! ## Segment Generators
//!
//! - **Circle**: a ring at constant height, evenly spaced in angle
//! - **Spiral**: an outward, rising spiral with a fixed point count
//! - **Compression**: a straight lateral/vertical move in the X-Z plane
//!
//! ## Path Stitching
//!
//! - **Path Stitcher**: joins segments into one continuous path, inserting
//!   linearly interpolated points across each boundary so spacing stays close
//!   to the requested point density
//!
//! ## Composite Generators
//!
//! - **Circle Stack**: layers of concentric circles
//! - **Spiral Stack**: spirals stacked on top of each other
//!
//! Generation is permissive: degenerate parameters produce empty segments
//! rather than errors. Each parameters struct also offers a strict
//! `validate()` for callers that want to reject such input up front.

pub mod circle;
pub mod circle_stack;
pub mod compression;
pub mod error;
mod polar;
mod sampling;
pub mod spiral;
pub mod spiral_stack;
pub mod stitcher;

pub use circle::{CircleGenerator, CircleParameters};
pub use circle_stack::{CircleStackGenerator, CircleStackParameters};
pub use compression::{CompressionGenerator, CompressionParameters};
pub use error::{ParameterError, ParameterResult};
pub use spiral::{SpiralGenerator, SpiralParameters};
pub use spiral_stack::{SpiralStackGenerator, SpiralStackParameters};
pub use stitcher::{PathStitcher, StitchReport};
