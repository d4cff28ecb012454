//! Tests for scene bookkeeping and selection checks.

use super::*;
use crate::core::vec3::Vec3;
use crate::primitives::cube::{cube, pyramid_capped_cube};
use crate::primitives::platonic::{icosahedron, tetrahedron};

fn sample_scene() -> (Scene, Vec<MeshHandle>) {
    let mut scene = Scene::new();
    let handles = vec![
        scene.add("pCube1", cube(Vec3::ONE, false).unwrap()),
        scene.add("pDent1", pyramid_capped_cube(1.0, -0.25).unwrap()),
        scene.add("pTetra1", tetrahedron(1.0).unwrap()),
        scene.add("pIco1", icosahedron(3.0).unwrap()),
    ];
    (scene, handles)
}

#[test]
fn test_verdicts_follow_selection_order() {
    let (scene, handles) = sample_scene();
    let selection = [handles[3], handles[1], handles[0]];
    let verdicts = check_selection(&scene, &selection, &CheckConfig::default()).unwrap();
    let names: Vec<&str> = verdicts.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(names, ["pIco1", "pDent1", "pCube1"]);
    assert_eq!(
        verdicts.iter().map(|v| v.convex).collect::<Vec<_>>(),
        [true, false, true]
    );
}

#[test]
fn test_parallel_edges_give_same_verdicts() {
    let (scene, handles) = sample_scene();
    let seq = check_selection(&scene, &handles, &CheckConfig::default()).unwrap();
    let par_cfg = CheckConfig::default().with_parallel_edges(true);
    let par = check_selection(&scene, &handles, &par_cfg).unwrap();
    assert_eq!(seq, par);
}

#[test]
fn test_empty_selection_is_an_error() {
    let (scene, _) = sample_scene();
    let err = check_selection(&scene, &[], &CheckConfig::default()).unwrap_err();
    assert_eq!(err, ConvexityError::EmptyInput);
}

#[test]
fn test_unknown_handle_is_an_error() {
    let (scene, handles) = sample_scene();
    let bogus = MeshHandle::new(42);
    let err = check_selection(&scene, &[handles[0], bogus], &CheckConfig::default()).unwrap_err();
    assert_eq!(err, ConvexityError::InvalidHandle(bogus));
}

#[test]
fn test_verdict_display() {
    let yes = Verdict {
        name: "pSphere1".to_string(),
        convex: true,
    };
    let no = Verdict {
        name: "pTorus1".to_string(),
        convex: false,
    };
    assert_eq!(yes.to_string(), "pSphere1 is Convex Hull");
    assert_eq!(no.to_string(), "pTorus1 is not Convex Hull");
}

#[test]
fn test_scene_lookup() {
    let (scene, handles) = sample_scene();
    assert_eq!(scene.len(), 4);
    assert!(!scene.is_empty());
    assert_eq!(scene.find("pTetra1"), Some(handles[2]));
    assert_eq!(scene.find("missing"), None);
    assert_eq!(scene.handles().collect::<Vec<_>>(), handles);
    let (name, mesh) = scene.get(handles[0]).unwrap();
    assert_eq!(name, "pCube1");
    assert_eq!(mesh.faces().len(), 6);
    assert!(scene.get(MeshHandle::new(99)).is_none());
}
