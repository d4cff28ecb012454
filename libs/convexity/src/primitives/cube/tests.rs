//! Tests for the cube primitives.

use super::*;
use crate::mesh::source::MeshSource;

/// Test bounding corners for a non-centered box.
#[test]
fn test_cube_corners_non_centered() {
    let c = cube(Vec3::new(2.0, 3.0, 4.0), false).unwrap();
    assert_eq!(c.positions()[0], Vec3::new(0.0, 0.0, 0.0));
    assert_eq!(c.positions()[6], Vec3::new(2.0, 3.0, 4.0));
}

/// Test bounding corners for a centered cube.
#[test]
fn test_cube_corners_centered() {
    let c = cube(Vec3::new(2.0, 2.0, 2.0), true).unwrap();
    assert_eq!(c.positions()[0], Vec3::new(-1.0, -1.0, -1.0));
    assert_eq!(c.positions()[6], Vec3::new(1.0, 1.0, 1.0));
}

/// Every face normal points away from the cube's center.
#[test]
fn test_cube_faces_point_outward() {
    let c = cube(Vec3::ONE, true).unwrap();
    for (face, normal) in c.faces().iter().zip(c.face_normals()) {
        let center = face.iter().map(|&v| c.positions()[v]).sum::<Vec3>() / face.len() as f64;
        assert!(normal.dot(center) > 0.0, "face {face:?} points inward");
    }
}

#[test]
fn test_cube_rejects_negative_size() {
    let result = cube(Vec3::new(-1.0, 1.0, 1.0), false);
    assert!(matches!(result, Err(ConvexityError::InvalidDimensions(_))));
}

#[test]
fn test_cube_rejects_zero_size() {
    let result = cube(Vec3::new(1.0, 0.0, 1.0), false);
    assert!(matches!(result, Err(ConvexityError::InvalidDimensions(_))));
}

#[test]
fn test_capped_cube_topology() {
    let c = pyramid_capped_cube(1.0, 0.5).unwrap();
    assert_eq!(c.vertex_count(), 9);
    assert_eq!(c.face_count(), 9);
    assert_eq!(c.edge_count(), 16);
    assert!(c.is_closed_manifold());
    assert_eq!(c.positions()[8], Vec3::new(0.5, 0.5, 1.5));
}

#[test]
fn test_capped_cube_rejects_apex_below_floor() {
    assert!(pyramid_capped_cube(1.0, -1.0).is_err());
    assert!(pyramid_capped_cube(1.0, f64::NAN).is_err());
    assert!(pyramid_capped_cube(0.0, 0.5).is_err());
}
