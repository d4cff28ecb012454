//! Primitive mesh generators.
//!
//! Closed polygon meshes with outward (counter-clockwise seen from outside)
//! winding, used as known-convex and known-concave references.

pub mod cube;
pub mod platonic;

use crate::error::{ConvexityError, ConvexityResult};

/// Rejects zero, negative and non-finite sizes.
fn require_positive(name: &str, value: f64) -> ConvexityResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConvexityError::InvalidDimensions(format!(
            "{name} must be positive and finite, got {value}"
        )))
    }
}
