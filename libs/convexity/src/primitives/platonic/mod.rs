//! Platonic solids scaled to a circumradius.

use super::require_positive;
use crate::core::vec3::{normalize, scale, Vec3};
use crate::error::ConvexityResult;
use crate::mesh::PolyMesh;

/// Golden ratio.
const PHI: f64 = 1.618_033_988_749_895;
/// Reciprocal of the golden ratio.
const INV_PHI: f64 = PHI - 1.0;

/// Regular tetrahedron.
///
/// # Examples
/// ```
/// use convexity::{is_convex_hull, tetrahedron};
/// assert!(is_convex_hull(&tetrahedron(1.0).unwrap(), 1.0e-4));
/// ```
pub fn tetrahedron(radius: f64) -> ConvexityResult<PolyMesh> {
    let points = [
        [1.0, 1.0, 1.0],
        [1.0, -1.0, -1.0],
        [-1.0, 1.0, -1.0],
        [-1.0, -1.0, 1.0],
    ];
    let faces = [[0, 1, 2], [0, 3, 1], [0, 2, 3], [1, 3, 2]];
    build(radius, &points, faces.iter().map(|f| f.to_vec()))
}

/// Regular octahedron with vertices on the axes.
pub fn octahedron(radius: f64) -> ConvexityResult<PolyMesh> {
    let points = [
        [1.0, 0.0, 0.0],
        [-1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, -1.0, 0.0],
        [0.0, 0.0, 1.0],
        [0.0, 0.0, -1.0],
    ];
    let faces = [
        [0, 2, 4],
        [2, 1, 4],
        [1, 3, 4],
        [3, 0, 4],
        [2, 0, 5],
        [1, 2, 5],
        [3, 1, 5],
        [0, 3, 5],
    ];
    build(radius, &points, faces.iter().map(|f| f.to_vec()))
}

/// Regular icosahedron built on three orthogonal golden rectangles.
pub fn icosahedron(radius: f64) -> ConvexityResult<PolyMesh> {
    let points = [
        [0.0, -1.0, -PHI],
        [0.0, -1.0, PHI],
        [0.0, 1.0, -PHI],
        [0.0, 1.0, PHI],
        [-1.0, -PHI, 0.0],
        [-1.0, PHI, 0.0],
        [1.0, -PHI, 0.0],
        [1.0, PHI, 0.0],
        [-PHI, 0.0, -1.0],
        [PHI, 0.0, -1.0],
        [-PHI, 0.0, 1.0],
        [PHI, 0.0, 1.0],
    ];
    let faces = [
        [2, 0, 8],
        [9, 0, 2],
        [4, 0, 6],
        [8, 0, 4],
        [6, 0, 9],
        [10, 1, 3],
        [3, 1, 11],
        [6, 1, 4],
        [4, 1, 10],
        [11, 1, 6],
        [7, 2, 5],
        [5, 2, 8],
        [9, 2, 7],
        [5, 3, 7],
        [10, 3, 5],
        [7, 3, 11],
        [8, 4, 10],
        [10, 5, 8],
        [11, 6, 9],
        [9, 7, 11],
    ];
    build(radius, &points, faces.iter().map(|f| f.to_vec()))
}

/// Regular dodecahedron with twelve pentagonal faces.
pub fn dodecahedron(radius: f64) -> ConvexityResult<PolyMesh> {
    let points = [
        [-1.0, -1.0, -1.0],
        [-1.0, -1.0, 1.0],
        [-1.0, 1.0, -1.0],
        [-1.0, 1.0, 1.0],
        [1.0, -1.0, -1.0],
        [1.0, -1.0, 1.0],
        [1.0, 1.0, -1.0],
        [1.0, 1.0, 1.0],
        [0.0, -INV_PHI, -PHI],
        [0.0, -INV_PHI, PHI],
        [0.0, INV_PHI, -PHI],
        [0.0, INV_PHI, PHI],
        [-INV_PHI, -PHI, 0.0],
        [-INV_PHI, PHI, 0.0],
        [INV_PHI, -PHI, 0.0],
        [INV_PHI, PHI, 0.0],
        [-PHI, 0.0, -INV_PHI],
        [PHI, 0.0, -INV_PHI],
        [-PHI, 0.0, INV_PHI],
        [PHI, 0.0, INV_PHI],
    ];
    let faces = [
        [18, 16, 0, 12, 1],
        [10, 8, 0, 16, 2],
        [14, 12, 0, 8, 4],
        [3, 18, 1, 9, 11],
        [5, 9, 1, 12, 14],
        [3, 13, 2, 16, 18],
        [6, 10, 2, 13, 15],
        [15, 13, 3, 11, 7],
        [5, 14, 4, 17, 19],
        [6, 17, 4, 8, 10],
        [11, 9, 5, 19, 7],
        [19, 17, 6, 15, 7],
    ];
    build(radius, &points, faces.iter().map(|f| f.to_vec()))
}

/// Projects `points` onto the sphere of `radius` and assembles the mesh.
fn build<I>(radius: f64, points: &[[f64; 3]], faces: I) -> ConvexityResult<PolyMesh>
where
    I: Iterator<Item = Vec<usize>>,
{
    require_positive("radius", radius)?;
    let positions = points
        .iter()
        .map(|&p| scale(normalize(Vec3::from_array(p)), radius))
        .collect();
    PolyMesh::new(positions, faces.collect())
}
