//! Path stitching.
//!
//! Joins independently generated segments into one trajectory. Between the
//! last point of each segment and the first point of the next, the stitcher
//! inserts `floor(distance / point_density)` linearly interpolated points so
//! spacing across the boundary stays close to the density inside segments.
//!
//! The interpolation starts at the boundary point itself (fraction 0), so the
//! first inserted point repeats the last point of the previous segment. The
//! next segment's first point is not emitted by the interpolation; it arrives
//! as the first real point of that segment.

use crate::sampling::point_count;
use tracing::{trace, warn};
use trajkit_core::{Point3D, Segment, Trajectory};

/// Summary of a stitching pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StitchReport {
    /// Segments that contributed points.
    pub segments: usize,
    /// Empty segments that were skipped.
    pub skipped_empty: usize,
    /// Points copied from segments.
    pub segment_points: usize,
    /// Interpolation points inserted at boundaries.
    pub inserted_points: usize,
}

impl StitchReport {
    pub fn total_points(&self) -> usize {
        self.segment_points + self.inserted_points
    }
}

/// Concatenates segments with interpolated filler points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathStitcher {
    point_density: f64,
}

impl PathStitcher {
    /// Creates a stitcher targeting `point_density` meters per point.
    pub fn new(point_density: f64) -> Self {
        Self { point_density }
    }

    pub fn point_density(&self) -> f64 {
        self.point_density
    }

    /// Stitches `segments` in order into a single trajectory.
    pub fn stitch(&self, segments: &[Segment]) -> Trajectory {
        self.stitch_with_report(segments).0
    }

    /// Like [`PathStitcher::stitch`], also returning what was done.
    ///
    /// Empty segments are skipped, so the interpolation bridges the
    /// neighbouring non-empty segments directly.
    pub fn stitch_with_report(&self, segments: &[Segment]) -> (Trajectory, StitchReport) {
        let non_empty: Vec<&Segment> = segments.iter().filter(|s| !s.is_empty()).collect();

        let mut report = StitchReport {
            segments: non_empty.len(),
            skipped_empty: segments.len() - non_empty.len(),
            ..Default::default()
        };
        if report.skipped_empty > 0 {
            warn!(
                "Skipping {} empty segment(s) while stitching {} segments",
                report.skipped_empty,
                segments.len()
            );
        }

        let capacity = non_empty.iter().map(|s| s.len()).sum();
        let mut trajectory = Trajectory::with_capacity(capacity);

        for (index, segment) in non_empty.iter().enumerate() {
            trajectory.extend(segment.iter());
            report.segment_points += segment.len();

            let Some(next) = non_empty.get(index + 1) else {
                break;
            };
            // Both segments are non-empty, so the boundary points exist.
            if let (Some(prev), Some(next)) = (segment.last(), next.first()) {
                let inserted = self.bridge(*prev, *next, &mut trajectory);
                trace!(
                    "Boundary {} -> {}: {} interpolated points",
                    prev,
                    next,
                    inserted
                );
                report.inserted_points += inserted;
            }
        }

        (trajectory, report)
    }

    /// Appends the interpolation points between `prev` and `next`; returns how many.
    fn bridge(&self, prev: Point3D, next: Point3D, out: &mut Trajectory) -> usize {
        let dx = next.x - prev.x;
        let dy = next.y - prev.y;
        let dz = next.z - prev.z;
        let distance = (dx * dx + dy * dy + dz * dz).sqrt();

        // A zero count (coincident or close boundary points) skips the loop,
        // so the division below never sees zero.
        let count = point_count(distance, self.point_density);
        let n = count as f64;
        out.extend((0..count).map(|index| {
            let index = index as f64;
            Point3D::new(
                prev.x + index * dx / n,
                prev.y + index * dy / n,
                prev.z + index * dz / n,
            )
        }));
        count
    }
}

impl Default for PathStitcher {
    fn default() -> Self {
        Self::new(0.001)
    }
}
