use crate::circle::{CircleGenerator, CircleParameters};
use crate::error::{
    require_finite, require_nonzero_count, require_positive, ParameterError, ParameterResult,
};
use crate::stitcher::{PathStitcher, StitchReport};
use serde::{Deserialize, Serialize};
use tracing::debug;
use trajkit_core::{Segment, Trajectory};

/// Parameters for a stack of concentric circle layers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CircleStackParameters {
    /// Diameter of the outermost circle (m)
    pub diameter: f64,
    /// Height of the top layer (m)
    pub height: f64,
    /// Target spacing between points (m/point)
    pub point_density: f64,
    /// Concentric circles in each layer
    pub circles_per_layer: usize,
    /// Layers in the stack
    pub layers: usize,
}

impl Default for CircleStackParameters {
    fn default() -> Self {
        Self {
            diameter: 0.04,
            height: 0.04,
            point_density: 0.001,
            circles_per_layer: 4,
            layers: 4,
        }
    }
}

impl CircleStackParameters {
    /// Strict validation; also rejects stacks whose innermost circle would be empty.
    pub fn validate(&self) -> ParameterResult<()> {
        require_positive("diameter", self.diameter)?;
        require_finite("height", self.height)?;
        require_positive("point_density", self.point_density)?;
        require_nonzero_count("circles_per_layer", self.circles_per_layer)?;
        require_nonzero_count("layers", self.layers)?;

        let innermost = CircleParameters {
            diameter: self.diameter / self.circles_per_layer as f64,
            point_density: self.point_density,
            height_offset: 0.0,
        };
        innermost.validate().map_err(|e| match e {
            ParameterError::EmptySegment(_) => ParameterError::EmptySegment(format!(
                "innermost circle ({} m) has no points at density {}",
                innermost.diameter, self.point_density
            )),
            other => other,
        })
    }
}

/// Generator for layered stacks of concentric circles.
///
/// Layer `h` (1-based) sits at `h · height / layers` and circle `c` (1-based)
/// within it has diameter `c · diameter / circles_per_layer`. Segments are
/// ordered layer by layer, innermost circle first, then stitched.
#[derive(Debug, Clone)]
pub struct CircleStackGenerator {
    params: CircleStackParameters,
}

impl CircleStackGenerator {
    /// Create a new CircleStackGenerator with the given parameters
    pub fn new(params: CircleStackParameters) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &CircleStackParameters {
        &self.params
    }

    /// The circle segments in stitching order, before stitching.
    pub fn segments(&self) -> Vec<Segment> {
        let p = &self.params;
        let mut segments = Vec::with_capacity(p.layers * p.circles_per_layer);

        for layer in 1..=p.layers {
            let layer_height = layer as f64 * p.height / p.layers as f64;
            for circle in 1..=p.circles_per_layer {
                let diameter = circle as f64 * p.diameter / p.circles_per_layer as f64;
                let segment = CircleGenerator::new(CircleParameters {
                    diameter,
                    point_density: p.point_density,
                    height_offset: layer_height,
                })
                .generate();
                segments.push(segment);
            }
        }

        segments
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
            "Generated circle stack: {} layers x {} circles, {} points ({} interpolated)",
            self.params.layers,
            self.params.circles_per_layer,
            trajectory.len(),
            report.inserted_points
        );
        (trajectory, report)
    }
}

impl Default for CircleStackGenerator {
    fn default() -> Self {
        Self::new(CircleStackParameters::default())
    }
}
