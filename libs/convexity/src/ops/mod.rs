//! Shared topology operations on `PolyMesh`.
//!
//! Both operations rebuild the mesh, so face normals are recomputed from the
//! new winding even when the source carried caller-supplied normals.

use crate::error::ConvexityResult;
use crate::mesh::PolyMesh;

/// Splits every face into a triangle fan around its first vertex.
///
/// # Examples
/// ```
/// use convexity::{cube, triangulate, MeshSource, Vec3};
///
/// let tris = triangulate(&cube(Vec3::ONE, false).unwrap()).unwrap();
/// assert_eq!(tris.face_count(), 12);
/// assert_eq!(tris.edge_count(), 18);
/// ```
pub fn triangulate(mesh: &PolyMesh) -> ConvexityResult<PolyMesh> {
    let faces = mesh
        .faces()
        .iter()
        .flat_map(|face| (1..face.len() - 1).map(move |i| vec![face[0], face[i], face[i + 1]]))
        .collect();
    PolyMesh::new(mesh.positions().to_vec(), faces)
}

/// Returns an inside-out copy: every face's winding is reversed.
pub fn reverse_winding(mesh: &PolyMesh) -> ConvexityResult<PolyMesh> {
    let faces = mesh
        .faces()
        .iter()
        .map(|face| face.iter().rev().copied().collect())
        .collect();
    PolyMesh::new(mesh.positions().to_vec(), faces)
}
