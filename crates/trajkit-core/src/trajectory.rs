//! Ordered point sequences.
//!
//! A [`Trajectory`] is the traversal order of a path. Insertion order is
//! meaningful and consecutive duplicates are allowed; nothing here
//! deduplicates or reorders points.

use crate::error::{Result, TrajectoryError};
use crate::point::Point3D;
use serde::{Deserialize, Serialize};

/// An ordered sequence of points.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trajectory {
    points: Vec<Point3D>,
}

/// The output of a single generator call.
///
/// Segments are the unit the path stitcher operates on.
pub type Segment = Trajectory;

/// Axis-aligned bounding box of a trajectory.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Point3D,
    pub max: Point3D,
}

impl Trajectory {
    /// Creates an empty trajectory.
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Creates an empty trajectory with room for `capacity` points.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    /// Appends a point.
    pub fn push(&mut self, point: Point3D) {
        self.points.push(point);
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The points in traversal order.
    pub fn points(&self) -> &[Point3D] {
        &self.points
    }

    pub fn first(&self) -> Option<&Point3D> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&Point3D> {
        self.points.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point3D> {
        self.points.iter()
    }

    /// Consumes the trajectory and returns its points.
    pub fn into_points(self) -> Vec<Point3D> {
        self.points
    }

    /// Total polyline length through consecutive points.
    pub fn path_length(&self) -> f64 {
        self.points
            .windows(2)
            .map(|pair| pair[0].distance_to(&pair[1]))
            .sum()
    }

    /// Axis-aligned bounds, or `None` for an empty trajectory.
    pub fn bounds(&self) -> Option<Bounds> {
        let first = *self.points.first()?;
        let bounds = self.points.iter().skip(1).fold(
            Bounds {
                min: first,
                max: first,
            },
            |acc, p| Bounds {
                min: Point3D::new(acc.min.x.min(p.x), acc.min.y.min(p.y), acc.min.z.min(p.z)),
                max: Point3D::new(acc.max.x.max(p.x), acc.max.y.max(p.y), acc.max.z.max(p.z)),
            },
        );
        Some(bounds)
    }

    /// Fails on the first point with a NaN or infinite coordinate.
    pub fn check_finite(&self) -> Result<()> {
        match self.points.iter().position(|p| !p.is_finite()) {
            Some(index) => Err(TrajectoryError::NonFiniteCoordinate { index }),
            None => Ok(()),
        }
    }

    /// Splits the trajectory into matched x, y and z sequences.
    ///
    /// The three vectors always have the same length and share point order.
    pub fn to_axes(&self) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
        let mut xs = Vec::with_capacity(self.len());
        let mut ys = Vec::with_capacity(self.len());
        let mut zs = Vec::with_capacity(self.len());
        for p in &self.points {
            xs.push(p.x);
            ys.push(p.y);
            zs.push(p.z);
        }
        (xs, ys, zs)
    }

    /// Rebuilds a trajectory from matched per-axis sequences.
    pub fn from_axes(xs: &[f64], ys: &[f64], zs: &[f64]) -> Result<Self> {
        if xs.len() != ys.len() || xs.len() != zs.len() {
            return Err(TrajectoryError::AxisLengthMismatch {
                x: xs.len(),
                y: ys.len(),
                z: zs.len(),
            });
        }

        Ok(xs
            .iter()
            .zip(ys)
            .zip(zs)
            .map(|((&x, &y), &z)| Point3D::new(x, y, z))
            .collect())
    }
}

impl From<Vec<Point3D>> for Trajectory {
    fn from(points: Vec<Point3D>) -> Self {
        Self { points }
    }
}

impl FromIterator<Point3D> for Trajectory {
    fn from_iter<I: IntoIterator<Item = Point3D>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl Extend<Point3D> for Trajectory {
    fn extend<I: IntoIterator<Item = Point3D>>(&mut self, iter: I) {
        self.points.extend(iter);
    }
}

impl<'a> Extend<&'a Point3D> for Trajectory {
    fn extend<I: IntoIterator<Item = &'a Point3D>>(&mut self, iter: I) {
        self.points.extend(iter.into_iter().copied());
    }
}

impl IntoIterator for Trajectory {
    type Item = Point3D;
    type IntoIter = std::vec::IntoIter<Point3D>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a Point3D;
    type IntoIter = std::slice::Iter<'a, Point3D>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Trajectory {
        vec![
            Point3D::new(0.0, 0.0, 0.0),
            Point3D::new(1.0, 0.0, 0.0),
            Point3D::new(1.0, 2.0, -1.0),
        ]
        .into()
    }

    #[test]
    fn test_to_axes_preserves_order() {
        let (xs, ys, zs) = sample().to_axes();
        assert_eq!(xs, vec![0.0, 1.0, 1.0]);
        assert_eq!(ys, vec![0.0, 0.0, 2.0]);
        assert_eq!(zs, vec![0.0, 0.0, -1.0]);
    }

    #[test]
    fn test_from_axes_mismatch() {
        let err = Trajectory::from_axes(&[0.0, 1.0], &[0.0, 1.0], &[0.0]).unwrap_err();
        assert_eq!(err, TrajectoryError::AxisLengthMismatch { x: 2, y: 2, z: 1 });
    }

    #[test]
    fn test_from_axes_roundtrip() {
        let original = sample();
        let (xs, ys, zs) = original.to_axes();
        let rebuilt = Trajectory::from_axes(&xs, &ys, &zs).unwrap();
        assert_eq!(rebuilt, original);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut t = Trajectory::new();
        t.push(Point3D::origin());
        t.push(Point3D::origin());
        assert_eq!(t.len(), 2);
        assert_eq!(t.path_length(), 0.0);
    }

    #[test]
    fn test_path_length() {
        assert_eq!(sample().path_length(), 1.0 + 5.0_f64.sqrt());
        assert_eq!(Trajectory::new().path_length(), 0.0);
    }

    #[test]
    fn test_bounds() {
        assert!(Trajectory::new().bounds().is_none());

        let bounds = sample().bounds().unwrap();
        assert_eq!(bounds.min, Point3D::new(0.0, 0.0, -1.0));
        assert_eq!(bounds.max, Point3D::new(1.0, 2.0, 0.0));
    }

    #[test]
    fn test_check_finite() {
        assert!(sample().check_finite().is_ok());

        let mut t = sample();
        t.push(Point3D::new(0.0, f64::NAN, 0.0));
        assert_eq!(
            t.check_finite(),
            Err(TrajectoryError::NonFiniteCoordinate { index: 3 })
        );
    }

    #[test]
    fn test_extend_and_iterate() {
        let mut t = Trajectory::with_capacity(4);
        t.extend(sample().iter());
        t.extend(vec![Point3D::new(5.0, 5.0, 5.0)]);
        assert_eq!(t.len(), 4);
        assert_eq!(t.first(), Some(&Point3D::origin()));
        assert_eq!(t.last(), Some(&Point3D::new(5.0, 5.0, 5.0)));

        let collected: Vec<Point3D> = t.clone().into_iter().collect();
        assert_eq!(collected, t.into_points());
    }
}
