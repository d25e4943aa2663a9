use crate::error::{require_finite, require_nonzero_count, require_positive, ParameterResult};
use crate::polar::polar_to_rectangular;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use tracing::debug;
use trajkit_core::{Point3D, Segment};

const FULL_TURN: f64 = 2.0 * PI;

/// Parameters for a single spiral segment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpiralParameters {
    /// Final radius reached by the spiral (m). The radius grows from 0 to this value.
    pub diameter: f64,
    /// Height gained over the whole spiral (m)
    pub spiral_height: f64,
    /// Number of points in the spiral
    pub point_count: usize,
    /// Angle of the first point (rad)
    pub theta_start: f64,
    /// Z coordinate of the first point (m)
    pub height_offset: f64,
}

impl Default for SpiralParameters {
    fn default() -> Self {
        Self {
            diameter: 0.04,
            spiral_height: 0.04,
            point_count: 1000,
            theta_start: 0.0,
            height_offset: 0.0,
        }
    }
}

impl SpiralParameters {
    /// Strict validation.
    pub fn validate(&self) -> ParameterResult<()> {
        require_positive("diameter", self.diameter)?;
        require_finite("spiral_height", self.spiral_height)?;
        require_nonzero_count("point_count", self.point_count)?;
        require_finite("theta_start", self.theta_start)?;
        require_finite("height_offset", self.height_offset)?;
        Ok(())
    }
}

/// Generator for a single spiral turn.
///
/// The angle advances by `2π / point_count` per point from `theta_start` and
/// the radius and height advance linearly. An angle past `2π` is wrapped by
/// subtracting one full turn, once, so angles derived from a `theta_start`
/// above `4π` stay above `2π`. Positions are unaffected since the conversion
/// to Cartesian coordinates is periodic.
#[derive(Debug, Clone)]
pub struct SpiralGenerator {
    params: SpiralParameters,
}

impl SpiralGenerator {
    /// Create a new SpiralGenerator with the given parameters
    pub fn new(params: SpiralParameters) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &SpiralParameters {
        &self.params
    }

    /// Lazily yields the spiral's points. Calling it again restarts the sequence.
    pub fn points(&self) -> impl Iterator<Item = Point3D> + Clone {
        let p = self.params.clone();
        let count = p.point_count as f64;
        let angle_step = FULL_TURN / count;
        let radius_step = p.diameter / count;
        let height_step = p.spiral_height / count;

        (0..p.point_count).map(move |index| {
            let index = index as f64;
            let mut theta = index * angle_step + p.theta_start;
            if theta > FULL_TURN {
                theta -= FULL_TURN;
            }
            let radius = index * radius_step;
            let (x, y) = polar_to_rectangular(theta, radius);
            let z = height_step * index + p.height_offset;
            Point3D::new(x, y, z)
        })
    }

    /// Generate the spiral segment
    pub fn generate(&self) -> Segment {
        let segment: Segment = self.points().collect();
        debug!(
            "Generated spiral: {} points, theta start {} rad, z {} to {}",
            segment.len(),
            self.params.theta_start,
            self.params.height_offset,
            self.params.height_offset + self.params.spiral_height
        );
        segment
    }
}

impl Default for SpiralGenerator {
    fn default() -> Self {
        Self::new(SpiralParameters::default())
    }
}
