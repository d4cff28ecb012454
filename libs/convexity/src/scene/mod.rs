//! # Scene & selection
//!
//! A scene is an ordered set of named meshes. Callers pick meshes by handle
//! and get back one verdict per selected mesh, in selection order.
//!
//! ## Example
//!
//! ```rust
//! use convexity::{check_selection, cube, pyramid_capped_cube, CheckConfig, Scene, Vec3};
//!
//! let mut scene = Scene::new();
//! let a = scene.add("box", cube(Vec3::ONE, false).unwrap());
//! let b = scene.add("dented", pyramid_capped_cube(1.0, -0.5).unwrap());
//!
//! let verdicts = check_selection(&scene, &[a, b], &CheckConfig::default()).unwrap();
//! assert_eq!(verdicts[0].to_string(), "box is Convex Hull");
//! assert_eq!(verdicts[1].to_string(), "dented is not Convex Hull");
//! ```

use std::fmt;

use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info};

use crate::classify::{is_convex_hull, is_convex_hull_par};
use crate::config::CheckConfig;
use crate::error::{ConvexityError, ConvexityResult};
use crate::mesh::PolyMesh;

// =============================================================================
// HANDLES & VERDICTS
// =============================================================================

/// Opaque reference to a mesh stored in a [`Scene`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MeshHandle(usize);

impl MeshHandle {
    /// Wraps a raw slot index.
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// The raw slot index.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for MeshHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Convexity verdict for one named mesh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    /// Display name of the mesh.
    pub name: String,
    /// Whether the mesh is a convex hull.
    pub convex: bool,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.convex {
            write!(f, "{} is Convex Hull", self.name)
        } else {
            write!(f, "{} is not Convex Hull", self.name)
        }
    }
}

// =============================================================================
// SCENE
// =============================================================================

/// Ordered collection of named meshes.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    entries: Vec<(String, PolyMesh)>,
}

impl Scene {
    /// Create an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a mesh and returns its handle. Names need not be unique.
    pub fn add(&mut self, name: impl Into<String>, mesh: PolyMesh) -> MeshHandle {
        self.entries.push((name.into(), mesh));
        MeshHandle(self.entries.len() - 1)
    }

    /// Looks up a mesh and its name.
    #[must_use]
    pub fn get(&self, handle: MeshHandle) -> Option<(&str, &PolyMesh)> {
        self.entries
            .get(handle.0)
            .map(|(name, mesh)| (name.as_str(), mesh))
    }

    /// Handle of the first mesh called `name`.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<MeshHandle> {
        self.entries
            .iter()
            .position(|(entry, _)| entry == name)
            .map(MeshHandle)
    }

    /// Handles of every mesh, in insertion order.
    pub fn handles(&self) -> impl Iterator<Item = MeshHandle> + '_ {
        (0..self.entries.len()).map(MeshHandle)
    }

    /// Number of meshes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the scene holds no meshes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// =============================================================================
// SELECTION CHECK
// =============================================================================

/// Checks every selected mesh and returns one verdict per handle.
///
/// Meshes are independent and are checked on the rayon pool; the output
/// keeps the order of `handles`.
///
/// ## Errors
///
/// - `EmptyInput` when `handles` is empty
/// - `InvalidHandle` for the first handle not present in `scene`
pub fn check_selection(
    scene: &Scene,
    handles: &[MeshHandle],
    config: &CheckConfig,
) -> ConvexityResult<Vec<Verdict>> {
    if handles.is_empty() {
        return Err(ConvexityError::EmptyInput);
    }
    let selected = handles
        .iter()
        .map(|&handle| scene.get(handle).ok_or(ConvexityError::InvalidHandle(handle)))
        .collect::<ConvexityResult<Vec<_>>>()?;

    info!(
        meshes = selected.len(),
        epsilon = config.epsilon,
        parallel_edges = config.parallel_edges,
        "checking selection"
    );

    let verdicts = selected
        .into_par_iter()
        .map(|(name, mesh)| {
            let convex = if config.parallel_edges {
                is_convex_hull_par(mesh, config.epsilon)
            } else {
                is_convex_hull(mesh, config.epsilon)
            };
            debug!(mesh = name, convex, "mesh checked");
            Verdict {
                name: name.to_string(),
                convex,
            }
        })
        .collect();
    Ok(verdicts)
}

#[cfg(test)]
mod tests;
