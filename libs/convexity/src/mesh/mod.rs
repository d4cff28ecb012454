//! # Mesh Module
//!
//! Indexed polygon mesh with precomputed edge adjacency.
//!
//! ## Structure
//!
//! - `PolyMesh` - positions, polygon faces, Newell face normals, edge table
//! - `source` - the `MeshSource` provider trait the classifier reads through
//!
//! ## Edge numbering
//!
//! Edges are undirected vertex pairs. They are numbered in order of first
//! appearance while walking faces in order and each face's vertices in
//! winding order. Every edge records the faces that use it, in face order.
//!
//! ## Example
//!
//! ```rust
//! use convexity::{PolyMesh, Vec3};
//!
//! let positions = vec![
//!     Vec3::new(0.0, 0.0, 0.0),
//!     Vec3::new(1.0, 0.0, 0.0),
//!     Vec3::new(0.0, 1.0, 0.0),
//! ];
//! let mesh = PolyMesh::new(positions, vec![vec![0, 1, 2]]).unwrap();
//! assert_eq!(mesh.edges().len(), 3);
//! assert_eq!(mesh.boundary_edge_count(), 3);
//! ```

pub mod source;

use std::collections::HashMap;

use config::constants::{MANIFOLD_EDGE_FACES, MIN_FACE_VERTICES};

use crate::core::vec3::Vec3;
use crate::error::{ConvexityError, ConvexityResult};
use source::MeshSource;

// =============================================================================
// POLYMESH STRUCT
// =============================================================================

/// Indexed face-vertex polygon mesh.
///
/// Faces may have any number of vertices (three or more) and need not be
/// planar. Face normals are computed once at construction with Newell's
/// method and are left unnormalised.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolyMesh {
    positions: Vec<Vec3>,
    faces: Vec<Vec<usize>>,
    normals: Vec<Vec3>,
    edges: Vec<[usize; 2]>,
    edge_faces: Vec<Vec<usize>>,
}

impl PolyMesh {
    // =========================================================================
    // CONSTRUCTORS
    // =========================================================================

    /// Builds a mesh from positions and polygon faces.
    ///
    /// ## Errors
    ///
    /// - `InvalidFace` when a face lists fewer than three vertices
    /// - `InvalidIndex` when a face references a missing vertex
    pub fn new(positions: Vec<Vec3>, faces: Vec<Vec<usize>>) -> ConvexityResult<Self> {
        validate_faces(&positions, &faces)?;
        let normals = faces
            .iter()
            .map(|face| newell_normal(&positions, face))
            .collect();
        Ok(Self::assemble(positions, faces, normals))
    }

    /// Builds a mesh that reports caller-supplied face normals instead of
    /// computed ones, the way a host application hands over its own data.
    ///
    /// ## Errors
    ///
    /// Same as [`PolyMesh::new`], plus `NormalCountMismatch` when the number
    /// of normals differs from the number of faces.
    pub fn with_normals(
        positions: Vec<Vec3>,
        faces: Vec<Vec<usize>>,
        normals: Vec<Vec3>,
    ) -> ConvexityResult<Self> {
        validate_faces(&positions, &faces)?;
        if normals.len() != faces.len() {
            return Err(ConvexityError::NormalCountMismatch {
                faces: faces.len(),
                normals: normals.len(),
            });
        }
        Ok(Self::assemble(positions, faces, normals))
    }

    fn assemble(positions: Vec<Vec3>, faces: Vec<Vec<usize>>, normals: Vec<Vec3>) -> Self {
        let mut edge_ids: HashMap<(usize, usize), usize> = HashMap::new();
        let mut edges = Vec::new();
        let mut edge_faces: Vec<Vec<usize>> = Vec::new();

        for (face_idx, face) in faces.iter().enumerate() {
            for (i, &a) in face.iter().enumerate() {
                let b = face[(i + 1) % face.len()];
                let key = (a.min(b), a.max(b));
                let edge = *edge_ids.entry(key).or_insert_with(|| {
                    edges.push([a, b]);
                    edge_faces.push(Vec::with_capacity(MANIFOLD_EDGE_FACES));
                    edges.len() - 1
                });
                edge_faces[edge].push(face_idx);
            }
        }

        Self {
            positions,
            faces,
            normals,
            edges,
            edge_faces,
        }
    }

    // =========================================================================
    // QUERY METHODS
    // =========================================================================

    /// Vertex positions.
    #[must_use]
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Polygon faces as vertex index lists.
    #[must_use]
    pub fn faces(&self) -> &[Vec<usize>] {
        &self.faces
    }

    /// Undirected edges, each as the vertex pair seen on first appearance.
    #[must_use]
    pub fn edges(&self) -> &[[usize; 2]] {
        &self.edges
    }

    /// Check if mesh is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Number of edges used by exactly one face.
    #[must_use]
    pub fn boundary_edge_count(&self) -> usize {
        self.edge_faces.iter().filter(|faces| faces.len() == 1).count()
    }

    /// Number of edges used by more than two faces.
    #[must_use]
    pub fn non_manifold_edge_count(&self) -> usize {
        self.edge_faces
            .iter()
            .filter(|faces| faces.len() > MANIFOLD_EDGE_FACES)
            .count()
    }

    /// True when every edge borders exactly two faces.
    #[must_use]
    pub fn is_closed_manifold(&self) -> bool {
        !self.is_empty()
            && self
                .edge_faces
                .iter()
                .all(|faces| faces.len() == MANIFOLD_EDGE_FACES)
    }
}

impl MeshSource for PolyMesh {
    fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn face_count(&self) -> usize {
        self.faces.len()
    }

    fn vertex_positions(&self) -> &[Vec3] {
        &self.positions
    }

    fn face_normals(&self) -> &[Vec3] {
        &self.normals
    }

    fn faces_of_edge(&self, edge: usize) -> &[usize] {
        self.edge_faces.get(edge).map_or(&[], Vec::as_slice)
    }

    fn verts_of_face(&self, face: usize) -> &[usize] {
        self.faces.get(face).map_or(&[], Vec::as_slice)
    }

    fn verts_of_edge(&self, edge: usize) -> [usize; 2] {
        self.edges[edge]
    }
}

// =============================================================================
// HELPERS
// =============================================================================

fn validate_faces(positions: &[Vec3], faces: &[Vec<usize>]) -> ConvexityResult<()> {
    for (face_idx, face) in faces.iter().enumerate() {
        if face.len() < MIN_FACE_VERTICES {
            return Err(ConvexityError::InvalidFace {
                face: face_idx,
                vertex_count: face.len(),
            });
        }
        if let Some(&index) = face.iter().find(|&&v| v >= positions.len()) {
            return Err(ConvexityError::InvalidIndex {
                face: face_idx,
                index,
                vertex_count: positions.len(),
            });
        }
    }
    Ok(())
}

/// Newell's polygon normal: twice the vector area, pointing out of a
/// counter-clockwise face.
pub(crate) fn newell_normal(positions: &[Vec3], face: &[usize]) -> Vec3 {
    let mut normal = Vec3::ZERO;
    for (i, &a) in face.iter().enumerate() {
        let p = positions[a];
        let q = positions[face[(i + 1) % face.len()]];
        normal.x += (p.y - q.y) * (p.z + q.z);
        normal.y += (p.z - q.z) * (p.x + q.x);
        normal.z += (p.x - q.x) * (p.y + q.y);
    }
    normal
}

#[cfg(test)]
mod tests;
