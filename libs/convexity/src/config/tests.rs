//! Tests covering check configuration behavior.

use super::*;
use crate::error::ConvexityError;
use config::constants::ConfigError;

#[test]
fn default_matches_constants() {
    let cfg = CheckConfig::default();
    assert_eq!(cfg.epsilon, CONVEXITY_EPSILON);
    assert!(!cfg.parallel_edges);
}

#[test]
fn builder_validates_input() {
    let err = CheckConfig::new(-0.5).unwrap_err();
    assert_eq!(
        err,
        ConvexityError::Config(ConfigError::InvalidTolerance(-0.5))
    );
}

#[test]
fn parallel_flag_is_chainable() {
    let cfg = CheckConfig::new(0.0).unwrap().with_parallel_edges(true);
    assert_eq!(cfg.epsilon, 0.0);
    assert!(cfg.parallel_edges);
}
