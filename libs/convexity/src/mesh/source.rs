//! # Mesh-data provider
//!
//! The convexity classifier never talks to a scene, a file or a host
//! application directly. Everything it needs is read through [`MeshSource`]:
//! two bulk arrays (positions and face normals) and three adjacency lookups.
//!
//! Indices are plain `usize` ids into the bulk arrays. Implementations are
//! expected to be read-only snapshots; the classifier calls every method
//! through `&self` and may do so from several rayon workers at once.

use crate::core::vec3::Vec3;

/// Read-only access to the geometry and topology of one polygon mesh.
///
/// ## Example
///
/// ```rust
/// use convexity::{cube, MeshSource, Vec3};
///
/// let mesh = cube(Vec3::ONE, false).unwrap();
/// assert_eq!(mesh.vertex_count(), 8);
/// assert_eq!(mesh.edge_count(), 12);
/// assert_eq!(mesh.faces_of_edge(0).len(), 2);
/// ```
pub trait MeshSource {
    /// Number of vertices.
    fn vertex_count(&self) -> usize {
        self.vertex_positions().len()
    }

    /// Number of undirected edges.
    fn edge_count(&self) -> usize;

    /// Number of faces.
    fn face_count(&self) -> usize {
        self.face_normals().len()
    }

    /// World-space vertex positions, indexed by vertex id.
    fn vertex_positions(&self) -> &[Vec3];

    /// One normal per face, indexed by face id. Need not be unit length.
    fn face_normals(&self) -> &[Vec3];

    /// Faces bordering `edge`. A closed manifold edge has exactly two.
    fn faces_of_edge(&self, edge: usize) -> &[usize];

    /// Vertex ids bounding `face`, in winding order.
    fn verts_of_face(&self, face: usize) -> &[usize];

    /// The two endpoint vertex ids of `edge`.
    ///
    /// Only called with `edge < self.edge_count()`.
    fn verts_of_edge(&self, edge: usize) -> [usize; 2];
}

impl<T: MeshSource + ?Sized> MeshSource for &T {
    fn vertex_count(&self) -> usize {
        (**self).vertex_count()
    }

    fn edge_count(&self) -> usize {
        (**self).edge_count()
    }

    fn face_count(&self) -> usize {
        (**self).face_count()
    }

    fn vertex_positions(&self) -> &[Vec3] {
        (**self).vertex_positions()
    }

    fn face_normals(&self) -> &[Vec3] {
        (**self).face_normals()
    }

    fn faces_of_edge(&self, edge: usize) -> &[usize] {
        (**self).faces_of_edge(edge)
    }

    fn verts_of_face(&self, face: usize) -> &[usize] {
        (**self).verts_of_face(face)
    }

    fn verts_of_edge(&self, edge: usize) -> [usize; 2] {
        (**self).verts_of_edge(edge)
    }
}
