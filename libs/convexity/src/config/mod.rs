//! Kernel-level configuration helpers building on the shared `config` crate.
//!
//! The classifier takes its tolerance as a parameter; `CheckConfig` is the
//! validated carrier for that parameter at the selection layer.

use config::constants::{GlobalConfig, CONVEXITY_EPSILON};

use crate::error::ConvexityResult;

/// Convexity check configuration.
///
/// # Examples
/// ```
/// use convexity::CheckConfig;
/// let cfg = CheckConfig::default();
/// assert_eq!(cfg.epsilon, 1.0e-4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CheckConfig {
    /// Tolerance for dihedral near-planarity and the obtuse sidedness test.
    pub epsilon: f64,
    /// Scan the edges of each mesh on the rayon pool.
    pub parallel_edges: bool,
}

impl CheckConfig {
    /// Creates a configuration with an explicit tolerance.
    ///
    /// # Examples
    /// ```
    /// use convexity::CheckConfig;
    /// let cfg = CheckConfig::new(1.0e-3).unwrap();
    /// assert_eq!(cfg.epsilon, 1.0e-3);
    /// assert!(CheckConfig::new(f64::NAN).is_err());
    /// ```
    pub fn new(epsilon: f64) -> ConvexityResult<Self> {
        let global = GlobalConfig::new(epsilon)?;
        Ok(Self {
            epsilon: global.tolerance,
            parallel_edges: false,
        })
    }

    /// Enables or disables the parallel edge scan.
    #[must_use]
    pub fn with_parallel_edges(mut self, parallel_edges: bool) -> Self {
        self.parallel_edges = parallel_edges;
        self
    }
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            epsilon: CONVEXITY_EPSILON,
            parallel_edges: false,
        }
    }
}

#[cfg(test)]
mod tests;
