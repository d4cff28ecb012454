//! Centralized configuration values shared across the convexity workspace.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

/// Default tolerance for the per-edge convexity test.
///
/// Dihedral cosines within `±CONVEXITY_EPSILON` of zero are treated as planar
/// junctions, and the obtuse-fold sidedness test only fails when a centroid
/// sits more than this far on the outward side of the averaged edge normal.
///
/// # Examples
/// ```
/// use config::constants::CONVEXITY_EPSILON;
/// assert_eq!(CONVEXITY_EPSILON, 1.0e-4);
/// ```
pub const CONVEXITY_EPSILON: f64 = 1.0e-4;

/// Number of faces that must share an edge of a closed 2-manifold.
///
/// # Examples
/// ```
/// use config::constants::MANIFOLD_EDGE_FACES;
/// assert_eq!(MANIFOLD_EDGE_FACES, 2);
/// ```
pub const MANIFOLD_EDGE_FACES: usize = 2;

/// Smallest vertex count of a polygon face.
///
/// # Examples
/// ```
/// use config::constants::MIN_FACE_VERTICES;
/// assert!(MIN_FACE_VERTICES >= 3);
/// ```
pub const MIN_FACE_VERTICES: usize = 3;

/// Immutable snapshot of global configuration settings that can be shared
/// between crates.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert!(config.tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalConfig {
    /// Numeric tolerance propagated into the convexity classifier.
    pub tolerance: f64,
}

impl GlobalConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// tolerance.
    ///
    /// Zero is accepted and turns the classifier into a pure sign test.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(1.0e-6).expect("valid config");
    /// assert_eq!(cfg.tolerance, 1.0e-6);
    /// assert!(GlobalConfig::new(-1.0).is_err());
    /// ```
    pub fn new(tolerance: f64) -> Result<Self, ConfigError> {
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        Ok(Self { tolerance })
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            tolerance: CONVEXITY_EPSILON,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Raised when tolerance is negative, NaN or infinite.
    InvalidTolerance(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "tolerance must be finite and non-negative: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests;
