//! Cube primitives.
//!
//! Faces are kept as quads so the cube edges are the only folds; the
//! capped variant replaces the top quad with a four-triangle pyramid.

use super::require_positive;
use crate::core::vec3::Vec3;
use crate::error::{ConvexityError, ConvexityResult};
use crate::mesh::PolyMesh;

// Vertex ordering:
// 0: (0, 0, 0) - bottom-front-left
// 1: (x, 0, 0) - bottom-front-right
// 2: (x, y, 0) - bottom-back-right
// 3: (0, y, 0) - bottom-back-left
// 4: (0, 0, z) - top-front-left
// 5: (x, 0, z) - top-front-right
// 6: (x, y, z) - top-back-right
// 7: (0, y, z) - top-back-left
const BOTTOM: [usize; 4] = [0, 3, 2, 1];
const TOP: [usize; 4] = [4, 5, 6, 7];
const SIDES: [[usize; 4]; 4] = [
    [0, 1, 5, 4], // front (y = 0)
    [2, 3, 7, 6], // back (y = size.y)
    [3, 0, 4, 7], // left (x = 0)
    [1, 2, 6, 5], // right (x = size.x)
];

/// Creates a box with six quad faces.
///
/// # Arguments
/// * `size` - The dimensions of the box (width, depth, height)
/// * `center` - If true, center the box at the origin. If false, place one corner at the origin.
///
/// # Examples
/// ```
/// use convexity::{cube, is_convex_hull, MeshSource, Vec3};
///
/// let c = cube(Vec3::new(2.0, 2.0, 2.0), true).unwrap();
/// assert_eq!(c.vertex_count(), 8);
/// assert!(is_convex_hull(&c, 1.0e-4));
/// ```
pub fn cube(size: Vec3, center: bool) -> ConvexityResult<PolyMesh> {
    let positions = corners(size, center)?;
    let faces = std::iter::once(BOTTOM)
        .chain(std::iter::once(TOP))
        .chain(SIDES)
        .map(|quad| quad.to_vec())
        .collect();
    PolyMesh::new(positions, faces)
}

/// Creates an axis-aligned cube whose top face is a four-sided pyramid.
///
/// The apex sits above the top face's center by `apex_height`. A positive
/// height gives a convex roof, a negative one a dent, zero a flat top split
/// into four coplanar triangles.
///
/// # Examples
/// ```
/// use convexity::{is_convex_hull, pyramid_capped_cube};
///
/// assert!(is_convex_hull(&pyramid_capped_cube(1.0, 0.25).unwrap(), 1.0e-4));
/// assert!(!is_convex_hull(&pyramid_capped_cube(1.0, -0.25).unwrap(), 1.0e-4));
/// ```
pub fn pyramid_capped_cube(size: f64, apex_height: f64) -> ConvexityResult<PolyMesh> {
    require_positive("size", size)?;
    if !apex_height.is_finite() || apex_height <= -size {
        return Err(ConvexityError::InvalidDimensions(format!(
            "apex height must be finite and above the bottom face, got {apex_height}"
        )));
    }

    let mut positions = corners(Vec3::splat(size), false)?;
    let apex = positions.len();
    positions.push(Vec3::new(size / 2.0, size / 2.0, size + apex_height));

    let mut faces: Vec<Vec<usize>> = vec![BOTTOM.to_vec()];
    faces.extend(SIDES.iter().map(|quad| quad.to_vec()));
    for (i, &a) in TOP.iter().enumerate() {
        faces.push(vec![a, TOP[(i + 1) % TOP.len()], apex]);
    }
    PolyMesh::new(positions, faces)
}

fn corners(size: Vec3, center: bool) -> ConvexityResult<Vec<Vec3>> {
    require_positive("width", size.x)?;
    require_positive("depth", size.y)?;
    require_positive("height", size.z)?;

    let offset = if center { -size / 2.0 } else { Vec3::ZERO };
    Ok(vec![
        Vec3::new(0.0, 0.0, 0.0) + offset,
        Vec3::new(size.x, 0.0, 0.0) + offset,
        Vec3::new(size.x, size.y, 0.0) + offset,
        Vec3::new(0.0, size.y, 0.0) + offset,
        Vec3::new(0.0, 0.0, size.z) + offset,
        Vec3::new(size.x, 0.0, size.z) + offset,
        Vec3::new(size.x, size.y, size.z) + offset,
        Vec3::new(0.0, size.y, size.z) + offset,
    ])
}

#[cfg(test)]
mod tests;
