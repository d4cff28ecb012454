//! # Config Crate
//!
//! Centralized configuration constants for the convexity checking workspace.
//! Tolerances and topology limits are defined here so the kernel and the
//! command-line driver agree on the same defaults.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{GlobalConfig, CONVEXITY_EPSILON};
//!
//! let cfg = GlobalConfig::default();
//! assert_eq!(cfg.tolerance, CONVEXITY_EPSILON);
//!
//! // A dihedral cosine this close to zero counts as a planar junction.
//! let d: f64 = 0.00005;
//! assert!(d.abs() <= cfg.tolerance);
//! ```

pub mod constants;
