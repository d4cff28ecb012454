//! Thin wrapper around `glam::DVec3` shared across kernel modules.
//!
//! `DVec3` already provides componentwise `+ - * /`, `dot` and a right-handed
//! `cross`. The helpers below pin down the degenerate-case policy the
//! classifier relies on, so callers never reach for `DVec3::normalize`
//! (which yields NaN for the zero vector).

pub use glam::DVec3 as Vec3;

/// Creates a zero vector using `glam::DVec3`.
///
/// # Examples
/// ```
/// use convexity::Vec3;
/// let v = convexity::core::vec3::zero();
/// assert_eq!(v, Vec3::new(0.0, 0.0, 0.0));
/// ```
pub fn zero() -> Vec3 {
    Vec3::new(0.0, 0.0, 0.0)
}

/// Returns `v / |v|`, or the zero vector when `|v|` is exactly zero.
///
/// There is no epsilon on the zero check: tiny but non-zero vectors are
/// still scaled to unit length.
///
/// # Examples
/// ```
/// use convexity::Vec3;
/// use convexity::core::vec3::normalize;
///
/// assert_eq!(normalize(Vec3::ZERO), Vec3::ZERO);
/// assert_eq!(normalize(Vec3::new(0.0, 3.0, 0.0)), Vec3::Y);
/// ```
pub fn normalize(v: Vec3) -> Vec3 {
    let length = v.dot(v).sqrt();
    if length == 0.0 {
        return zero();
    }
    Vec3::new(v.x / length, v.y / length, v.z / length)
}

/// Multiplies every component by `s`.
///
/// # Examples
/// ```
/// use convexity::Vec3;
/// use convexity::core::vec3::scale;
/// assert_eq!(scale(Vec3::new(2.0, 4.0, 6.0), 0.5), Vec3::new(1.0, 2.0, 3.0));
/// ```
pub fn scale(v: Vec3, s: f64) -> Vec3 {
    Vec3::new(v.x * s, v.y * s, v.z * s)
}

/// Arithmetic mean of a set of points.
///
/// Returns the zero vector for an empty iterator.
///
/// # Examples
/// ```
/// use convexity::Vec3;
/// use convexity::core::vec3::mean;
///
/// let m = mean([Vec3::ZERO, Vec3::new(2.0, 0.0, 0.0)]);
/// assert_eq!(m, Vec3::new(1.0, 0.0, 0.0));
/// ```
pub fn mean<I>(points: I) -> Vec3
where
    I: IntoIterator<Item = Vec3>,
{
    let (sum, count) = points
        .into_iter()
        .fold((zero(), 0usize), |(sum, count), p| (sum + p, count + 1));
    if count == 0 {
        return zero();
    }
    scale(sum, 1.0 / count as f64)
}
