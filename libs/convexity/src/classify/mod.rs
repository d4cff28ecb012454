//! # Convexity classifier
//!
//! Decides whether a closed polygon mesh is a convex hull by looking at the
//! fold between the two faces of every edge.
//!
//! ## Per-edge test
//!
//! With `n1`, `n2` the normalised face normals and `d = n1 · n2`:
//!
//! ```text
//!   d < -ε   Acute   cross(n1, n2) · cross(ĉ1, ĉ2) > 0   → reflex
//!   d >  ε   Obtuse  normalize(n1 + n2) · ĉ1 > ε        → reflex
//!   |d| ≤ ε  Planar  skipped
//! ```
//!
//! where `ĉi = normalize(centroid_i - edge_midpoint)`. Only the first face's
//! centroid is tested on obtuse folds.
//!
//! An edge that does not border exactly two faces fails the whole mesh.

use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, warn};

use config::constants::MANIFOLD_EDGE_FACES;

use crate::core::vec3::{mean, normalize, Vec3};
use crate::mesh::source::MeshSource;

// =============================================================================
// TYPES
// =============================================================================

/// How the two faces of an edge fold relative to each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeFold {
    /// Normals point away from each other (`d < -ε`): a sharp edge.
    Acute,
    /// Normals within `ε` of perpendicular; no test is run.
    Planar,
    /// Normals lean the same way (`d > ε`): a shallow edge.
    Obtuse,
}

/// Why an edge disqualifies a mesh from being a convex hull.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FailureReason {
    /// The edge borders `face_count` faces instead of two.
    NotManifold {
        /// Faces reported for the edge.
        face_count: usize,
    },
    /// Acute fold whose normal and centroid cross products agree.
    ReflexAcute {
        /// `cross(n1, n2) · cross(ĉ1, ĉ2)`, positive on failure.
        alignment: f64,
    },
    /// Obtuse fold whose first centroid lies outside the averaged normal plane.
    ReflexObtuse {
        /// `normalize(n1 + n2) · ĉ1`, above `ε` on failure.
        offset: f64,
    },
    /// The provider referenced a face or vertex outside its bulk arrays.
    DanglingReference,
}

/// First failing edge of a mesh.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EdgeFailure {
    /// Edge index.
    pub edge: usize,
    /// Why the edge failed.
    pub reason: FailureReason,
}

impl std::fmt::Display for EdgeFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.reason {
            FailureReason::NotManifold { face_count } => {
                write!(f, "edge {} borders {} faces", self.edge, face_count)
            }
            FailureReason::ReflexAcute { alignment } => {
                write!(f, "edge {} folds inward (acute, alignment {alignment:.6})", self.edge)
            }
            FailureReason::ReflexObtuse { offset } => {
                write!(f, "edge {} folds inward (obtuse, offset {offset:.6})", self.edge)
            }
            FailureReason::DanglingReference => {
                write!(f, "edge {} references missing mesh data", self.edge)
            }
        }
    }
}

// =============================================================================
// PUBLIC API
// =============================================================================

/// Classifies the fold between two unit face normals.
///
/// # Examples
/// ```
/// use convexity::{classify_fold, EdgeFold, Vec3};
///
/// assert_eq!(classify_fold(Vec3::X, Vec3::Y, 1.0e-4), EdgeFold::Planar);
/// assert_eq!(classify_fold(Vec3::Z, Vec3::Z, 1.0e-4), EdgeFold::Obtuse);
/// assert_eq!(classify_fold(Vec3::Z, -Vec3::Z, 1.0e-4), EdgeFold::Acute);
/// ```
pub fn classify_fold(n1: Vec3, n2: Vec3, epsilon: f64) -> EdgeFold {
    let d = n1.dot(n2);
    if d < -epsilon {
        EdgeFold::Acute
    } else if d > epsilon {
        EdgeFold::Obtuse
    } else {
        EdgeFold::Planar
    }
}

/// Returns true when no edge of `mesh` folds inward.
///
/// # Examples
/// ```
/// use convexity::{is_convex_hull, octahedron};
///
/// let mesh = octahedron(1.0).unwrap();
/// assert!(is_convex_hull(&mesh, 1.0e-4));
/// ```
pub fn is_convex_hull<M: MeshSource + ?Sized>(mesh: &M, epsilon: f64) -> bool {
    find_concave_edge(mesh, epsilon).is_none()
}

/// Parallel edge scan; same answer as [`is_convex_hull`].
pub fn is_convex_hull_par<M: MeshSource + Sync + ?Sized>(mesh: &M, epsilon: f64) -> bool {
    let positions = mesh.vertex_positions();
    let normals = mesh.face_normals();
    !(0..mesh.edge_count())
        .into_par_iter()
        .any(|edge| check_edge(mesh, positions, normals, edge, epsilon).is_some())
}

/// Finds the first edge, in index order, that disqualifies `mesh`.
///
/// # Examples
/// ```
/// use convexity::{cube, find_concave_edge, FailureReason, PolyMesh, Vec3};
///
/// let closed = cube(Vec3::ONE, false).unwrap();
/// assert!(find_concave_edge(&closed, 1.0e-4).is_none());
///
/// // Drop the first face to open a hole.
/// let open = PolyMesh::new(closed.positions().to_vec(), closed.faces()[1..].to_vec()).unwrap();
/// let failure = find_concave_edge(&open, 1.0e-4).unwrap();
/// assert_eq!(failure.reason, FailureReason::NotManifold { face_count: 1 });
/// ```
pub fn find_concave_edge<M: MeshSource + ?Sized>(mesh: &M, epsilon: f64) -> Option<EdgeFailure> {
    let positions = mesh.vertex_positions();
    let normals = mesh.face_normals();
    (0..mesh.edge_count()).find_map(|edge| check_edge(mesh, positions, normals, edge, epsilon))
}

// =============================================================================
// EDGE TEST
// =============================================================================

fn check_edge<M: MeshSource + ?Sized>(
    mesh: &M,
    positions: &[Vec3],
    normals: &[Vec3],
    edge: usize,
    epsilon: f64,
) -> Option<EdgeFailure> {
    let fail = |reason: FailureReason| {
        debug!(edge, ?reason, "edge disqualifies convex hull");
        Some(EdgeFailure { edge, reason })
    };

    let faces = mesh.faces_of_edge(edge);
    if faces.len() != MANIFOLD_EDGE_FACES {
        return fail(FailureReason::NotManifold {
            face_count: faces.len(),
        });
    }
    let (f1, f2) = (faces[0], faces[1]);

    let (Some(&raw1), Some(&raw2)) = (normals.get(f1), normals.get(f2)) else {
        warn!(edge, f1, f2, face_count = normals.len(), "edge references a missing face");
        return fail(FailureReason::DanglingReference);
    };
    let n1 = normalize(raw1);
    let n2 = normalize(raw2);

    let fold = classify_fold(n1, n2, epsilon);
    if fold == EdgeFold::Planar {
        return None;
    }

    let Some(frame) = FoldFrame::gather(mesh, positions, edge, f1, f2) else {
        warn!(edge, vertex_count = positions.len(), "edge references a missing vertex");
        return fail(FailureReason::DanglingReference);
    };
    let to_c1 = normalize(frame.c1 - frame.midpoint);

    match fold {
        EdgeFold::Acute => {
            let to_c2 = normalize(frame.c2 - frame.midpoint);
            let alignment = n1.cross(n2).dot(to_c1.cross(to_c2));
            if alignment > 0.0 {
                return fail(FailureReason::ReflexAcute { alignment });
            }
        }
        EdgeFold::Obtuse => {
            let averaged = normalize(n1 + n2);
            let offset = averaged.dot(to_c1);
            if offset > epsilon {
                return fail(FailureReason::ReflexObtuse { offset });
            }
        }
        EdgeFold::Planar => {}
    }
    None
}

/// Face centroids and edge midpoint around one edge.
struct FoldFrame {
    c1: Vec3,
    c2: Vec3,
    midpoint: Vec3,
}

impl FoldFrame {
    fn gather<M: MeshSource + ?Sized>(
        mesh: &M,
        positions: &[Vec3],
        edge: usize,
        f1: usize,
        f2: usize,
    ) -> Option<Self> {
        let c1 = centroid(positions, mesh.verts_of_face(f1))?;
        let c2 = centroid(positions, mesh.verts_of_face(f2))?;
        let [a, b] = mesh.verts_of_edge(edge);
        let midpoint = mean([*positions.get(a)?, *positions.get(b)?]);
        Some(Self { c1, c2, midpoint })
    }
}

fn centroid(positions: &[Vec3], verts: &[usize]) -> Option<Vec3> {
    let points = verts
        .iter()
        .map(|&v| positions.get(v).copied())
        .collect::<Option<Vec<_>>>()?;
    Some(mean(points))
}
