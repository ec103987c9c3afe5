/// Replaces a non-finite value with zero.
///
/// Used on every pairwise contribution before it is accumulated: an overflowing
/// force at extreme proximity is dropped rather than clamped to a large value.
///
/// # Example
/// ```
/// use particle_dynamics::utils::sanitize;
///
/// assert_eq!(sanitize(2.5), 2.5);
/// assert_eq!(sanitize(f64::NAN), 0.0);
/// assert_eq!(sanitize(f64::INFINITY), 0.0);
/// ```
#[inline]
pub fn sanitize(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

/// Euclidean norm of a 2D vector.
#[inline]
pub fn norm(x: f64, y: f64) -> f64 {
    (x * x + y * y).sqrt()
}

/// Returns true when `value` is finite and strictly positive.
#[inline]
pub fn is_positive_finite(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
