//! # Error Types
//!
//! Boundary-layer errors for the convexity kernel. The classifier itself only
//! ever answers yes or no; these errors cover malformed input handed to mesh
//! construction, selection and configuration.
//!
//! ## Error Policy
//!
//! - A non-convex or non-manifold mesh is a `false` verdict, never an error
//! - Bad handles, empty selections and malformed faces are explicit errors
//! - Errors include context for debugging

use config::constants::ConfigError;
use thiserror::Error;

use crate::scene::MeshHandle;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur around convexity checks.
///
/// ## Example
///
/// ```rust
/// use convexity::{check_selection, CheckConfig, ConvexityError, Scene};
///
/// let scene = Scene::new();
/// match check_selection(&scene, &[], &CheckConfig::default()) {
///     Err(ConvexityError::EmptyInput) => {}
///     other => panic!("unexpected: {other:?}"),
/// }
/// ```
#[derive(Error, Debug, PartialEq)]
pub enum ConvexityError {
    /// No meshes were selected.
    #[error("no meshes selected")]
    EmptyInput,

    /// A handle does not refer to a mesh in the scene.
    #[error("invalid mesh handle {0}")]
    InvalidHandle(MeshHandle),

    /// A face lists fewer vertices than a polygon needs.
    #[error("face {face} has {vertex_count} vertices, need at least 3")]
    InvalidFace {
        /// Index of the offending face.
        face: usize,
        /// Number of vertices the face lists.
        vertex_count: usize,
    },

    /// A face references a vertex that does not exist.
    #[error("face {face} references vertex {index} (mesh has {vertex_count} vertices)")]
    InvalidIndex {
        /// Index of the offending face.
        face: usize,
        /// The out-of-range vertex index.
        index: usize,
        /// Total number of vertices in the mesh.
        vertex_count: usize,
    },

    /// Caller-supplied face normals do not line up with the faces.
    #[error("{normals} face normals supplied for {faces} faces")]
    NormalCountMismatch {
        /// Number of faces in the mesh.
        faces: usize,
        /// Number of normals supplied.
        normals: usize,
    },

    /// A primitive was requested with unusable dimensions.
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// Configuration values were rejected.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for convexity operations.
pub type ConvexityResult<T> = Result<T, ConvexityError>;

// =============================================================================
// TESTS
// =============================================================================
