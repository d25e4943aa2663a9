use crate::error::{require_finite, require_positive, ParameterError, ParameterResult};
use crate::polar::polar_to_rectangular;
use crate::sampling::point_count;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use tracing::debug;
use trajkit_core::{Point3D, Segment};

/// Parameters for a single circle segment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CircleParameters {
    /// Circle diameter (m)
    pub diameter: f64,
    /// Target spacing between points (m/point)
    pub point_density: f64,
    /// Z coordinate of the ring (m)
    pub height_offset: f64,
}

impl Default for CircleParameters {
    fn default() -> Self {
        Self {
            diameter: 0.04,
            point_density: 0.001,
            height_offset: 0.0,
        }
    }
}

impl CircleParameters {
    /// Strict validation; rejects anything that would give an empty ring.
    pub fn validate(&self) -> ParameterResult<()> {
        require_positive("diameter", self.diameter)?;
        require_positive("point_density", self.point_density)?;
        require_finite("height_offset", self.height_offset)?;

        if point_count(PI * self.diameter, self.point_density) == 0 {
            return Err(ParameterError::EmptySegment(format!(
                "point density {} is not smaller than the circumference of a {} m circle",
                self.point_density, self.diameter
            )));
        }
        Ok(())
    }
}

/// Generator for a closed ring at constant height.
///
/// Points are evenly spaced in angle over `[0, 2π)`. The point at `2π` is
/// not repeated, so the ring is closed only implicitly.
#[derive(Debug, Clone)]
pub struct CircleGenerator {
    params: CircleParameters,
}

impl CircleGenerator {
    /// Create a new CircleGenerator with the given parameters
    pub fn new(params: CircleParameters) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &CircleParameters {
        &self.params
    }

    /// Number of points the ring will contain: `floor(π·diameter / point_density)`.
    pub fn point_count(&self) -> usize {
        point_count(PI * self.params.diameter, self.params.point_density)
    }

    /// Lazily yields the ring's points. Calling it again restarts the sequence.
    pub fn points(&self) -> impl Iterator<Item = Point3D> + Clone {
        let count = self.point_count();
        let radius = self.params.diameter / 2.0;
        let step = 2.0 * PI / count as f64;
        let z = self.params.height_offset;

        (0..count).map(move |index| {
            let theta = index as f64 * step;
            let (x, y) = polar_to_rectangular(theta, radius);
            Point3D::new(x, y, z)
        })
    }

    /// Generate the circle segment
    pub fn generate(&self) -> Segment {
        let segment: Segment = self.points().collect();
        debug!(
            "Generated circle: diameter {} m, {} points at z = {}",
            self.params.diameter,
            segment.len(),
            self.params.height_offset
        );
        segment
    }
}

impl Default for CircleGenerator {
    fn default() -> Self {
        Self::new(CircleParameters::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_circle() {
        let segment = CircleGenerator::default().generate();
        assert_eq!(segment.len(), 125);

        for p in segment.iter() {
            assert_eq!(p.z, 0.0);
            let r = (p.x * p.x + p.y * p.y).sqrt();
            assert!((r - 0.02).abs() < 1e-9);
        }
    }

    #[test]
    fn test_starts_at_zero_angle_and_stays_open() {
        let segment = CircleGenerator::default().generate();
        let first = segment.first().unwrap();
        assert_eq!(*first, Point3D::new(0.02, 0.0, 0.0));

        // last point sits one angular step short of 2π
        let last = segment.last().unwrap();
        let theta = last.y.atan2(last.x) + 2.0 * PI;
        let expected = 124.0 * (2.0 * PI / 125.0);
        assert!((theta - expected).abs() < 1e-9);
    }

    #[test]
    fn test_height_offset() {
        let segment = CircleGenerator::new(CircleParameters {
            diameter: 0.01,
            point_density: 0.001,
            height_offset: 0.03,
        })
        .generate();

        assert_eq!(segment.len(), 31);
        assert!(segment.iter().all(|p| p.z == 0.03));
    }

    #[test]
    fn test_degenerate_circle_is_empty() {
        let params = CircleParameters {
            diameter: 0.0002,
            point_density: 0.001,
            height_offset: 0.0,
        };
        let generator = CircleGenerator::new(params.clone());
        assert_eq!(generator.point_count(), 0);
        assert!(generator.generate().is_empty());
        assert!(matches!(
            params.validate(),
            Err(ParameterError::EmptySegment(_))
        ));

        let zero_density = CircleGenerator::new(CircleParameters {
            point_density: 0.0,
            ..Default::default()
        });
        assert!(zero_density.generate().is_empty());
    }

    #[test]
    fn test_points_is_restartable() {
        let generator = CircleGenerator::default();
        let first: Vec<Point3D> = generator.points().collect();
        let second: Vec<Point3D> = generator.points().collect();
        assert_eq!(first, second);
        assert_eq!(first, generator.generate().into_points());
    }

    #[test]
    fn test_validate_defaults() {
        assert!(CircleParameters::default().validate().is_ok());
    }
}
