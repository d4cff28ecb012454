//! Tests for the centralized configuration constants.

use super::*;

/// Ensures default constants are sane and positive.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let cfg = GlobalConfig::default();
/// assert!(cfg.tolerance > 0.0);
/// ```
#[test]
fn default_constants_are_valid() {
    let cfg = GlobalConfig::default();
    assert_eq!(cfg.tolerance, CONVEXITY_EPSILON);
    assert!(MIN_FACE_VERTICES >= 3);
    assert_eq!(MANIFOLD_EDGE_FACES, 2);
}

/// Validates the builder rejects invalid values.
#[test]
fn new_validates_inputs() {
    assert_eq!(
        GlobalConfig::new(-1.0e-4).unwrap_err(),
        ConfigError::InvalidTolerance(-1.0e-4)
    );
    assert_eq!(
        GlobalConfig::new(f64::INFINITY).unwrap_err(),
        ConfigError::InvalidTolerance(f64::INFINITY)
    );
    assert!(GlobalConfig::new(f64::NAN).is_err());
}

#[test]
fn zero_tolerance_is_allowed() {
    let cfg = GlobalConfig::new(0.0).expect("zero is a valid tolerance");
    assert_eq!(cfg.tolerance, 0.0);
}

#[test]
fn error_message_names_the_value() {
    let msg = ConfigError::InvalidTolerance(-2.0).to_string();
    assert!(msg.contains("-2"));
    assert!(msg.contains("non-negative"));
}
