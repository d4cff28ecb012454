//! Tests for PolyMesh construction and adjacency.

use super::*;
use crate::primitives::cube::cube;
use approx::assert_relative_eq;

fn quad() -> Vec<Vec3> {
    vec![
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(2.0, 0.0, 0.0),
        Vec3::new(2.0, 1.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
    ]
}

/// A cube has 8 vertices, 6 quads and 12 edges, each shared by two quads.
#[test]
fn test_cube_adjacency() {
    let mesh = cube(Vec3::ONE, false).unwrap();
    assert_eq!(mesh.vertex_count(), 8);
    assert_eq!(mesh.face_count(), 6);
    assert_eq!(mesh.edge_count(), 12);
    for edge in 0..mesh.edge_count() {
        let faces = mesh.faces_of_edge(edge);
        assert_eq!(faces.len(), 2, "edge {edge}");
        let [a, b] = mesh.verts_of_edge(edge);
        for &f in faces {
            assert!(mesh.verts_of_face(f).contains(&a));
            assert!(mesh.verts_of_face(f).contains(&b));
        }
    }
    assert!(mesh.is_closed_manifold());
    assert_eq!(mesh.boundary_edge_count(), 0);
    assert_eq!(mesh.non_manifold_edge_count(), 0);
}

#[test]
fn test_edges_numbered_in_first_appearance_order() {
    let positions = quad();
    let mesh = PolyMesh::new(positions, vec![vec![0, 1, 2], vec![0, 2, 3]]).unwrap();
    assert_eq!(mesh.edges(), &[[0, 1], [1, 2], [2, 0], [2, 3], [3, 0]]);
    assert_eq!(mesh.faces_of_edge(2), &[0, 1]);
    assert_eq!(mesh.faces_of_edge(0), &[0]);
    assert_eq!(mesh.boundary_edge_count(), 4);
    assert!(!mesh.is_closed_manifold());
}

#[test]
fn test_newell_normal_is_area_weighted() {
    let positions = quad();
    let mesh = PolyMesh::new(positions, vec![vec![0, 1, 2, 3]]).unwrap();
    let n = mesh.face_normals()[0];
    assert_relative_eq!(n.x, 0.0);
    assert_relative_eq!(n.y, 0.0);
    // Twice the 2x1 quad's area, pointing along +Z for CCW winding.
    assert_relative_eq!(n.z, 4.0);
}

#[test]
fn test_reversed_face_flips_normal() {
    let mesh = PolyMesh::new(quad(), vec![vec![3, 2, 1, 0]]).unwrap();
    assert!(mesh.face_normals()[0].z < 0.0);
}

#[test]
fn test_rejects_short_face() {
    let err = PolyMesh::new(quad(), vec![vec![0, 1]]).unwrap_err();
    assert_eq!(
        err,
        ConvexityError::InvalidFace {
            face: 0,
            vertex_count: 2
        }
    );
}

#[test]
fn test_rejects_out_of_range_index() {
    let err = PolyMesh::new(quad(), vec![vec![0, 1, 2], vec![0, 2, 7]]).unwrap_err();
    assert_eq!(
        err,
        ConvexityError::InvalidIndex {
            face: 1,
            index: 7,
            vertex_count: 4
        }
    );
}

#[test]
fn test_with_normals_keeps_supplied_values() {
    let normals = vec![Vec3::new(0.0, 0.0, 5.0)];
    let mesh = PolyMesh::with_normals(quad(), vec![vec![0, 1, 2, 3]], normals).unwrap();
    assert_eq!(mesh.face_normals(), &[Vec3::new(0.0, 0.0, 5.0)]);
}

#[test]
fn test_with_normals_checks_count() {
    let err = PolyMesh::with_normals(quad(), vec![vec![0, 1, 2, 3]], Vec::new()).unwrap_err();
    assert_eq!(
        err,
        ConvexityError::NormalCountMismatch {
            faces: 1,
            normals: 0
        }
    );
}

#[test]
fn test_non_manifold_edge_is_counted() {
    let positions = vec![
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(0.0, -1.0, 0.0),
        Vec3::new(0.0, 0.0, 1.0),
    ];
    let faces = vec![vec![0, 1, 2], vec![1, 0, 3], vec![0, 1, 4]];
    let mesh = PolyMesh::new(positions, faces).unwrap();
    assert_eq!(mesh.faces_of_edge(0), &[0, 1, 2]);
    assert_eq!(mesh.non_manifold_edge_count(), 1);
}

#[test]
fn test_out_of_range_lookups_are_empty() {
    let mesh = PolyMesh::new(quad(), vec![vec![0, 1, 2, 3]]).unwrap();
    assert!(mesh.faces_of_edge(99).is_empty());
    assert!(mesh.verts_of_face(99).is_empty());
}

#[test]
fn test_empty_mesh() {
    let mesh = PolyMesh::default();
    assert!(mesh.is_empty());
    assert!(!mesh.is_closed_manifold());
    assert_eq!(mesh.edge_count(), 0);
}
