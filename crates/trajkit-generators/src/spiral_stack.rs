use crate::error::{require_finite, require_nonzero_count, require_positive, ParameterResult};
use crate::spiral::{SpiralGenerator, SpiralParameters};
use crate::stitcher::{PathStitcher, StitchReport};
use serde::{Deserialize, Serialize};
use tracing::debug;
use trajkit_core::{Segment, Trajectory};

/// Parameters for spirals stacked on top of each other
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpiralStackParameters {
    /// Final radius of every spiral (m)
    pub diameter: f64,
    /// Total height of the stack (m)
    pub height: f64,
    /// Points in each spiral
    pub points_per_spiral: usize,
    /// Number of stacked spirals
    pub spirals: usize,
    /// Start angle shared by all spirals (rad)
    pub theta_start: f64,
    /// Target spacing for the stitched transitions (m/point)
    pub point_density: f64,
}

impl Default for SpiralStackParameters {
    fn default() -> Self {
        Self {
            diameter: 0.04,
            height: 0.04,
            points_per_spiral: 1000,
            spirals: 4,
            theta_start: 0.0,
            point_density: 0.001,
        }
    }
}

impl SpiralStackParameters {
    /// Strict validation.
    pub fn validate(&self) -> ParameterResult<()> {
        require_positive("diameter", self.diameter)?;
        require_finite("height", self.height)?;
        require_nonzero_count("points_per_spiral", self.points_per_spiral)?;
        require_nonzero_count("spirals", self.spirals)?;
        require_finite("theta_start", self.theta_start)?;
        require_positive("point_density", self.point_density)?;
        Ok(())
    }
}

/// Generator for a stack of spirals.
///
/// Spiral `i` (0-based) starts at `i · height / spirals` and rises by
/// `height / spirals`, so each spiral begins where the previous one ended in
/// height. The return from each spiral's outer edge to the next spiral's
/// centre is filled in by the path stitcher.
#[derive(Debug, Clone)]
pub struct SpiralStackGenerator {
    params: SpiralStackParameters,
}

impl SpiralStackGenerator {
    /// Create a new SpiralStackGenerator with the given parameters
    pub fn new(params: SpiralStackParameters) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &SpiralStackParameters {
        &self.params
    }

    /// The spiral segments in stitching order, before stitching.
    pub fn segments(&self) -> Vec<Segment> {
        let p = &self.params;
        let spiral_height = p.height / p.spirals as f64;

        (0..p.spirals)
            .map(|index| {
                SpiralGenerator::new(SpiralParameters {
                    diameter: p.diameter,
                    spiral_height,
                    point_count: p.points_per_spiral,
                    theta_start: p.theta_start,
                    height_offset: index as f64 * p.height / p.spirals as f64,
                })
                .generate()
            })
            .collect()
    }

    /// Generate the stitched stack
    pub fn generate(&self) -> Trajectory {
        self.generate_with_report().0
    }

    pub fn generate_with_report(&self) -> (Trajectory, StitchReport) {
        let segments = self.segments();
        let (trajectory, report) =
            PathStitcher::new(self.params.point_density).stitch_with_report(&segments);
        debug!(
            "Generated spiral stack: {} spirals, {} points ({} interpolated)",
            self.params.spirals,
            trajectory.len(),
            report.inserted_points
        );
        (trajectory, report)
    }
}

impl Default for SpiralStackGenerator {
    fn default() -> Self {
        Self::new(SpiralStackParameters::default())
    }
}
