//! Point-count rule shared by the generators and the stitcher.

/// Number of points needed to cover `length` at `point_density` meters per point.
///
/// Truncates towards zero like `floor(length / point_density)`. A ratio that
/// is not a finite positive number (zero or negative density, zero length,
/// NaN) gives 0, so callers never divide by a zero count.
pub(crate) fn point_count(length: f64, point_density: f64) -> usize {
    let ratio = length / point_density;
    if ratio.is_finite() && ratio > 0.0 {
        ratio.floor() as usize
    } else {
        0
    }
}
