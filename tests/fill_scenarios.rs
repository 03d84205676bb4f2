use snake_fill::algs::fill::{fill, fill_selection};
use snake_fill::algs::loop_order::order_loop;
use snake_fill::algs::options::{AlgorithmMode, FillOptions, WalkScope};
use snake_fill::algs::strip::build_strip;
use snake_fill::algs::Diagnostic;
use snake_fill::mesh_error::MeshError;
use snake_fill::topology::{EditMesh, MeshGraph, VertexId};
use snake_fill::DebugInvariants;

fn v(i: u32) -> VertexId {
    VertexId::new(i)
}

fn vs(ids: &[u32]) -> Vec<VertexId> {
    ids.iter().copied().map(v).collect()
}

fn all(mesh: &EditMesh) -> Vec<VertexId> {
    mesh.vertex_ids().collect()
}

#[test]
fn eight_chain_snake() {
    let mesh = EditMesh::chain(8);
    let ordered = order_loop(&mesh, all(&mesh), Some(v(0)));
    assert_eq!(ordered.as_slice(), vs(&[0, 1, 2, 3, 4, 5, 6, 7]));

    let plan = build_strip(&mesh, ordered.as_slice(), AlgorithmMode::Snake);
    assert_eq!(
        plan.faces,
        vec![
            [v(0), v(1), v(2), v(3)],
            [v(2), v(3), v(4), v(5)],
            [v(4), v(5), v(6), v(7)],
        ]
    );
    assert!(plan.edges_to_remove.is_empty());
}

#[test]
fn eight_chain_saw() {
    let mesh = EditMesh::chain(8);
    let ordered = order_loop(&mesh, all(&mesh), Some(v(0)));
    let plan = build_strip(&mesh, ordered.as_slice(), AlgorithmMode::Saw);
    assert_eq!(
        plan.faces,
        vec![
            [v(0), v(2), v(3), v(1)],
            [v(2), v(4), v(5), v(3)],
            [v(4), v(6), v(7), v(5)],
        ]
    );
    let removed: Vec<[VertexId; 2]> = plan
        .edges_to_remove
        .iter()
        .map(|&e| mesh.edge_vertices(e).unwrap())
        .collect();
    assert_eq!(removed, vec![[v(1), v(2)], [v(3), v(4)], [v(5), v(6)]]);
}

#[test]
fn saw_fill_commits_faces_and_removals() {
    let mut mesh = EditMesh::chain(8);
    let opts = FillOptions::with_mode(AlgorithmMode::Saw);
    let vertices = all(&mesh);
    let report = fill(&mut mesh, vertices, Some(v(0)), &opts).unwrap();

    assert_eq!(report.faces.len(), 3);
    assert_eq!(report.removed_edges.len(), 3);
    assert!(report.diagnostics.is_empty());
    assert_eq!(mesh.num_faces(), 3);
    for (a, b) in [(1, 2), (3, 4), (5, 6)] {
        assert!(mesh.edge_between(v(a), v(b)).is_none(), "{a}-{b} still present");
    }
    for face in report.faces {
        assert_eq!(mesh.face_vertices(face).unwrap().len(), 4);
    }
    mesh.validate_invariants().unwrap();
}

#[test]
fn snake_fill_orients_strip_consistently() {
    let mut mesh = EditMesh::chain(8);
    let opts = FillOptions::with_mode(AlgorithmMode::Snake);
    let vertices = all(&mesh);
    let report = fill(&mut mesh, vertices, Some(v(0)), &opts).unwrap();
    assert_eq!(report.faces.len(), 3);

    // Neighbouring faces walk their shared side in opposite directions.
    let sides = |f| {
        let verts = mesh.face_vertices(f).unwrap();
        (0..verts.len())
            .map(|i| (verts[i], verts[(i + 1) % verts.len()]))
            .collect::<Vec<_>>()
    };
    for pair in report.faces.windows(2) {
        let (a, b) = (sides(pair[0]), sides(pair[1]));
        let shared: Vec<_> = a.iter().filter(|&&(x, y)| b.contains(&(y, x))).collect();
        assert_eq!(shared.len(), 1);
        assert!(a.iter().all(|s| !b.contains(s)));
    }
}

#[test]
fn three_chain_fills_nothing() {
    for mode in [AlgorithmMode::Snake, AlgorithmMode::Saw] {
        let mut mesh = EditMesh::chain(3);
        let vertices = all(&mesh);
        let report = fill(&mut mesh, vertices, Some(v(0)), &FillOptions::with_mode(mode)).unwrap();
        assert!(report.is_noop());
        assert_eq!(report.ordered.len(), 3);
        assert_eq!(
            report.diagnostics,
            vec![Diagnostic::IncompleteTrailingWindow { remaining: 3 }]
        );
        assert_eq!(mesh.num_edges(), 2);
    }
}

#[test]
fn empty_set_or_absent_start_changes_nothing() {
    let mut mesh = EditMesh::chain(8);
    let opts = FillOptions::default();

    let report = fill(&mut mesh, Vec::new(), Some(v(0)), &opts).unwrap();
    assert!(report.is_noop());
    assert_eq!(report.diagnostics, vec![Diagnostic::EmptyInput]);

    let vertices = all(&mesh);
    let report = fill(&mut mesh, vertices, None, &opts).unwrap();
    assert!(report.is_noop());
    assert!(report.ordered.is_empty());
    assert!(
        !report
            .diagnostics
            .iter()
            .any(|d| matches!(d, Diagnostic::TraversalOverrun { .. }))
    );
    assert_eq!((mesh.num_edges(), mesh.num_faces()), (7, 0));
}

#[test]
fn overrun_still_fills_partial_loop() {
    let mut mesh = EditMesh::chain(12);
    let opts = FillOptions::with_mode(AlgorithmMode::Snake);
    let report = fill(&mut mesh, vs(&[0, 1, 2]), Some(v(0)), &opts).unwrap();

    assert_eq!(report.ordered.as_slice(), vs(&[0, 1, 2, 3, 4]));
    assert_eq!(
        report.diagnostics[0],
        Diagnostic::TraversalOverrun {
            visited: 5,
            vertex_count: 3
        }
    );
    assert_eq!(report.faces.len(), 1);
}

#[test]
fn chain_joining_existing_faces_stops_there() {
    // A saw strip already covers 5..=11; extend it with the free chain 0..=5.
    let mut mesh = EditMesh::chain(12);
    let tail: Vec<_> = (5..12).map(v).collect();
    let opts = FillOptions {
        scope: WalkScope::Selection,
        ..FillOptions::default()
    };
    fill(&mut mesh, tail, Some(v(5)), &opts).unwrap();
    assert_eq!(mesh.num_faces(), 2);

    mesh.deselect_all();
    for i in 0..=5 {
        mesh.select(v(i)).unwrap();
    }
    // 5 has picked up extra edges, so 0 is the only free end.
    let report = fill_selection(&mut mesh, &FillOptions::with_mode(AlgorithmMode::Snake)).unwrap();
    assert_eq!(report.ordered.as_slice(), vs(&[0, 1, 2, 3, 4, 5]));
    assert_eq!(report.faces.len(), 2);
    assert_eq!(mesh.num_faces(), 4);
    mesh.validate_invariants().unwrap();
}

#[test]
fn saw_skips_removal_when_inner_edge_is_gone() {
    // 0-1-2-3 and 4-5 with no 3-4 edge.
    let mut mesh = EditMesh::from_edges(6, [(0, 1), (1, 2), (2, 3), (4, 5)]).unwrap();
    let plan = build_strip(&mesh, &vs(&[0, 1, 2, 3, 4, 5]), AlgorithmMode::Saw);
    assert_eq!(plan.faces.len(), 2);
    assert_eq!(plan.edges_to_remove.len(), 1);
    assert_eq!(
        plan.diagnostics,
        vec![Diagnostic::MissingInnerEdge {
            window: 1,
            inner: [v(3), v(4)]
        }]
    );
    snake_fill::algs::fill::commit(&mut mesh, &plan, true).unwrap();
    assert_eq!(mesh.num_faces(), 2);
}

#[test]
fn saw_refuses_to_remove_a_side_of_an_existing_face() {
    // Chain 0..=8 with a triangle 1-2-8 already built on the inner edge 1-2.
    let mut mesh = EditMesh::chain(9);
    let triangle = mesh.create_face(&vs(&[1, 2, 8])).unwrap();
    let edges_before = mesh.num_edges();
    let opts = FillOptions {
        stop_at_faced: false,
        ..FillOptions::with_mode(AlgorithmMode::Saw)
    };

    let err = fill(&mut mesh, vs(&[0, 1, 2, 3, 4, 5, 6, 7]), Some(v(0)), &opts).unwrap_err();

    let inner = mesh.edge_between(v(1), v(2)).unwrap();
    assert_eq!(
        err,
        MeshError::EdgeInUse {
            edge: inner,
            faces: vec![triangle]
        }
    );
    assert_eq!(mesh.face_vertices(triangle), Some(&vs(&[1, 2, 8])[..]));
    assert_eq!((mesh.num_faces(), mesh.num_edges()), (1, edges_before));
    mesh.validate_invariants().unwrap();
}

#[test]
fn snake_over_faced_interior_keeps_existing_faces() {
    // Faces touching interior chain vertices without sitting on an inner edge.
    let mut mesh = EditMesh::chain(10);
    let existing = mesh.create_face(&vs(&[2, 3, 9])).unwrap();
    let opts = FillOptions {
        stop_at_faced: false,
        ..FillOptions::with_mode(AlgorithmMode::Snake)
    };

    let report = fill(&mut mesh, vs(&[0, 1, 2, 3, 4, 5, 6, 7]), Some(v(0)), &opts).unwrap();

    assert!(report.ordered.len() >= 8);
    assert_eq!(report.faces.len(), (report.ordered.len() - 4) / 2 + 1);
    assert!(mesh.face_vertices(existing).is_some());
    assert_eq!(mesh.num_faces(), report.faces.len() + 1);
    mesh.validate_invariants().unwrap();
}
