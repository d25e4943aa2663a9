use crate::error::{require_finite, require_positive, ParameterError, ParameterResult};
use crate::sampling::point_count;
use serde::{Deserialize, Serialize};
use tracing::debug;
use trajkit_core::{Point3D, Segment};

/// Parameters for a compression move
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompressionParameters {
    /// Vertical travel of the compression (m)
    pub vertical_displacement: f64,
    /// Lateral displacement reached at the end of the compression (m)
    pub lateral_displacement: f64,
    /// Target spacing between points (m/point)
    pub point_density: f64,
}

impl Default for CompressionParameters {
    fn default() -> Self {
        Self {
            vertical_displacement: 0.04,
            lateral_displacement: 0.02,
            point_density: 0.001,
        }
    }
}

impl CompressionParameters {
    /// Straight-line length of the move.
    pub fn distance(&self) -> f64 {
        let v = self.vertical_displacement;
        let l = self.lateral_displacement;
        (v * v + l * l).sqrt()
    }

    /// Strict validation.
    pub fn validate(&self) -> ParameterResult<()> {
        require_finite("vertical_displacement", self.vertical_displacement)?;
        require_finite("lateral_displacement", self.lateral_displacement)?;
        require_positive("point_density", self.point_density)?;

        if point_count(self.distance(), self.point_density) == 0 {
            return Err(ParameterError::EmptySegment(format!(
                "compression of length {} is shorter than point density {}",
                self.distance(),
                self.point_density
            )));
        }
        Ok(())
    }
}

/// Generator for a straight move in the X-Z plane from the origin towards
/// `(lateral_displacement, 0, vertical_displacement)`.
///
/// The endpoint itself is not emitted; the last point is one step short of it.
#[derive(Debug, Clone)]
pub struct CompressionGenerator {
    params: CompressionParameters,
}

impl CompressionGenerator {
    /// Create a new CompressionGenerator with the given parameters
    pub fn new(params: CompressionParameters) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &CompressionParameters {
        &self.params
    }

    /// `floor(distance / point_density)`
    pub fn point_count(&self) -> usize {
        point_count(self.params.distance(), self.params.point_density)
    }

    /// Lazily yields the move's points. Calling it again restarts the sequence.
    pub fn points(&self) -> impl Iterator<Item = Point3D> + Clone {
        let count = self.point_count();
        let n = count as f64;
        let lateral = self.params.lateral_displacement;
        let vertical = self.params.vertical_displacement;

        (0..count).map(move |index| {
            let index = index as f64;
            Point3D::new(index * lateral / n, 0.0, index * vertical / n)
        })
    }

    /// Generate the compression segment
    pub fn generate(&self) -> Segment {
        let segment: Segment = self.points().collect();
        debug!(
            "Generated compression: {} points over {} m",
            segment.len(),
            self.params.distance()
        );
        segment
    }
}

impl Default for CompressionGenerator {
    fn default() -> Self {
        Self::new(CompressionParameters::default())
    }
}
