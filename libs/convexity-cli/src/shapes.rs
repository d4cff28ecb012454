//! Built-in shape catalogue.

use clap::ValueEnum;
use convexity::{
    cube, dodecahedron, icosahedron, octahedron, pyramid_capped_cube, reverse_winding,
    tetrahedron, ConvexityResult, PolyMesh, Vec3,
};

/// Shapes the CLI can build and check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shape {
    /// Regular tetrahedron
    Tetrahedron,
    /// Unit cube with quad faces
    Cube,
    /// Regular octahedron
    Octahedron,
    /// Regular icosahedron
    Icosahedron,
    /// Regular dodecahedron
    Dodecahedron,
    /// Cube with a pyramid roof
    CappedCube,
    /// Cube with a pyramid pushed into its top
    DentedCube,
    /// Cube missing its bottom face
    OpenCube,
    /// Octahedron with every face reversed
    InsideOutOctahedron,
}

impl Shape {
    /// Name used for the scene entry, matching the command-line spelling.
    pub fn name(self) -> String {
        self.to_possible_value()
            .map(|value| value.get_name().to_string())
            .unwrap_or_else(|| format!("{self:?}"))
    }

    /// Builds the mesh.
    pub fn build(self) -> ConvexityResult<PolyMesh> {
        match self {
            Shape::Tetrahedron => tetrahedron(1.0),
            Shape::Cube => cube(Vec3::ONE, false),
            Shape::Octahedron => octahedron(1.0),
            Shape::Icosahedron => icosahedron(1.0),
            Shape::Dodecahedron => dodecahedron(1.0),
            Shape::CappedCube => pyramid_capped_cube(1.0, 0.3),
            Shape::DentedCube => pyramid_capped_cube(1.0, -0.3),
            Shape::OpenCube => {
                let closed = cube(Vec3::ONE, false)?;
                PolyMesh::new(closed.positions().to_vec(), closed.faces()[1..].to_vec())
            }
            Shape::InsideOutOctahedron => reverse_winding(&octahedron(1.0)?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::constants::CONVEXITY_EPSILON;
    use convexity::is_convex_hull;

    #[test]
    fn test_catalogue_verdicts() {
        for shape in Shape::value_variants() {
            let mesh = shape.build().unwrap();
            let expected = !matches!(
                shape,
                Shape::DentedCube | Shape::OpenCube | Shape::InsideOutOctahedron
            );
            assert_eq!(is_convex_hull(&mesh, CONVEXITY_EPSILON), expected, "{shape:?}");
        }
    }

    #[test]
    fn test_names_are_kebab_case() {
        assert_eq!(Shape::DentedCube.name(), "dented-cube");
        assert_eq!(Shape::InsideOutOctahedron.name(), "inside-out-octahedron");
    }
}
