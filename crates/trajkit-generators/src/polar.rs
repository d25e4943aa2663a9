//! Polar to Cartesian conversion.

/// Converts a polar `(theta, radius)` pair to Cartesian `(x, y)`.
///
/// Any angle is accepted. A negative radius is not rejected; it yields the
/// point reflected through the origin.
pub(crate) fn polar_to_rectangular(theta: f64, radius: f64) -> (f64, f64) {
    (radius * theta.cos(), radius * theta.sin())
}
