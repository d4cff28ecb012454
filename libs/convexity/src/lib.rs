//! Convex-hull verification for closed polygon meshes.
//!
//! A mesh is a convex hull when none of its edges folds inward. Every edge
//! is classified from the dot product of its two face normals and tested
//! with centroid-relative sidedness checks; see [`classify`] for the rules.
//!
//! ```rust
//! use convexity::{is_convex_hull, pyramid_capped_cube, CONVEXITY_EPSILON};
//!
//! let roof = pyramid_capped_cube(1.0, 0.3).unwrap();
//! let dent = pyramid_capped_cube(1.0, -0.3).unwrap();
//! assert!(is_convex_hull(&roof, CONVEXITY_EPSILON));
//! assert!(!is_convex_hull(&dent, CONVEXITY_EPSILON));
//! ```

pub mod classify;
pub mod config;
pub mod core;
pub mod error;
pub mod mesh;
pub mod ops;
pub mod primitives;
pub mod scene;

pub use classify::{
    classify_fold, find_concave_edge, is_convex_hull, is_convex_hull_par, EdgeFailure, EdgeFold,
    FailureReason,
};
pub use self::config::CheckConfig;
pub use self::core::vec3::Vec3;
pub use error::{ConvexityError, ConvexityResult};
pub use mesh::{source::MeshSource, PolyMesh};
pub use ops::{reverse_winding, triangulate};
pub use primitives::cube::{cube, pyramid_capped_cube};
pub use primitives::platonic::{dodecahedron, icosahedron, octahedron, tetrahedron};
pub use scene::{check_selection, MeshHandle, Scene, Verdict};

pub use ::config::constants::CONVEXITY_EPSILON;
