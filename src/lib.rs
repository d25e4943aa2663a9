//! # Trajkit
//!
//! Trajectory generation for positioning stages: concentric circle stacks,
//! spirals and straight compression moves, stitched into continuous point
//! sequences and exported as per-axis delimited files.
//!
//! ## Architecture
//!
//! Trajkit is organized as a workspace with multiple crates:
//!
//! 1. **trajkit-core** - Points, trajectories, shared errors
//! 2. **trajkit-generators** - Segment generators, path stitcher, composites
//! 3. **trajkit-export** - Per-axis file export and import
//! 4. **trajkit-settings** - JSON/TOML configuration
//! 5. **trajkit** - Driver binary that integrates all crates

pub use trajkit_core::{Bounds, Point3D, Segment, Trajectory, TrajectoryError};

pub use trajkit_generators::{
    CircleGenerator, CircleParameters, CircleStackGenerator, CircleStackParameters,
    CompressionGenerator, CompressionParameters, ParameterError, PathStitcher, SpiralGenerator,
    SpiralParameters, SpiralStackGenerator, SpiralStackParameters, StitchReport,
};

pub use trajkit_export::{Axis, CsvExporter, ExportError, ExportedFiles};

pub use trajkit_settings::{Config, ConfigError, ExportSettings, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output on stderr, keeping stdout for results
/// - RUST_LOG environment variable support
/// - Target and line number on each event
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
