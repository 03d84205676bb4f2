//! Top-level fill invocation: order the chain, plan the strip, commit it.
//!
//! One invocation runs `Idle → Ordering → Building → Committing → Idle`
//! to completion. Ordering finishes before building starts, and the full
//! plan is built and validated before the graph is touched. Committing
//! removes the planned edges first, then creates the faces, then asks the
//! host once to recompute face orientation.
//!
//! Every condition the algorithm can absorb (empty input, traversal overrun,
//! missing inner edge, short tail) ends up in [`FillReport::diagnostics`];
//! only host-side failures are returned as errors.

use itertools::Itertools;

use crate::algs::diagnostics::Diagnostic;
use crate::algs::loop_order::{LoopOrderOpts, OrderedLoop, order_loop_with};
use crate::algs::options::FillOptions;
use crate::algs::start::resolve_start;
use crate::algs::strip::{StripPlan, build_strip};
use crate::mesh_error::MeshError;
use crate::topology::edit_mesh::EditMesh;
use crate::topology::graph::MeshGraph;
use crate::topology::point::{EdgeId, FaceId, VertexId};

/// Stage of a fill invocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FillStage {
    Idle,
    Ordering,
    Building,
    Committing,
}

fn enter(stage: FillStage) {
    log::trace!("fill: entering {stage:?}");
}

/// What one invocation did.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FillReport {
    pub ordered: OrderedLoop,
    pub faces: Vec<FaceId>,
    pub removed_edges: Vec<EdgeId>,
    pub diagnostics: Vec<Diagnostic>,
}

impl FillReport {
    /// True when the mesh was left unchanged.
    pub fn is_noop(&self) -> bool {
        self.faces.is_empty() && self.removed_edges.is_empty()
    }
}

/// Check that `plan` can be committed against `graph` as a whole.
pub fn validate_plan<G: MeshGraph>(graph: &G, plan: &StripPlan) -> Result<(), MeshError> {
    for face in &plan.faces {
        if let Some(&v) = face.iter().find(|&&v| !graph.contains_vertex(v)) {
            return Err(MeshError::UnknownVertex(v));
        }
        if let Some(&v) = face.iter().duplicates().next() {
            return Err(MeshError::DuplicateFaceVertex { vertex: v });
        }
        if graph.has_face(face) {
            return Err(MeshError::FaceExists {
                vertices: face.to_vec(),
            });
        }
    }
    for &e in &plan.edges_to_remove {
        if graph.edge_vertices(e).is_none() {
            return Err(MeshError::UnknownEdge(e));
        }
        let faces = graph.edge_faces(e);
        if !faces.is_empty() {
            return Err(MeshError::EdgeInUse { edge: e, faces });
        }
    }
    if let Some(&e) = plan.edges_to_remove.iter().duplicates().next() {
        return Err(MeshError::InvariantViolation(format!(
            "edge {e} scheduled for removal twice"
        )));
    }
    Ok(())
}

/// Apply a validated plan: removals, then faces, then one orientation pass.
///
/// Returns the created face ids in plan order.
pub fn commit<G: MeshGraph>(
    graph: &mut G,
    plan: &StripPlan,
    recalc_normals: bool,
) -> Result<Vec<FaceId>, MeshError> {
    for &e in &plan.edges_to_remove {
        graph.remove_edge(e)?;
    }
    let faces = plan
        .faces
        .iter()
        .map(|face| graph.create_face(face))
        .collect::<Result<Vec<_>, _>>()?;
    if recalc_normals {
        graph.recalc_normals();
    }
    log::debug!(
        "fill: created {} face(s), removed {} edge(s)",
        faces.len(),
        plan.edges_to_remove.len()
    );
    Ok(faces)
}

/// Fill the chain through `vertices`, starting at `start`.
///
/// # Example
/// ```rust
/// use snake_fill::algs::fill::fill;
/// use snake_fill::algs::options::{AlgorithmMode, FillOptions};
/// use snake_fill::topology::{EditMesh, VertexId};
/// let mut mesh = EditMesh::chain(8);
/// let all: Vec<VertexId> = mesh.vertex_ids().collect();
/// let opts = FillOptions::with_mode(AlgorithmMode::Snake);
/// let report = fill(&mut mesh, all, Some(VertexId::new(0)), &opts).unwrap();
/// assert_eq!(report.faces.len(), 3);
/// assert_eq!(mesh.num_faces(), 3);
/// ```
pub fn fill<G, I>(
    graph: &mut G,
    vertices: I,
    start: Option<VertexId>,
    opts: &FillOptions,
) -> Result<FillReport, MeshError>
where
    G: MeshGraph,
    I: IntoIterator<Item = VertexId>,
{
    enter(FillStage::Ordering);
    let walk = order_loop_with(&*graph, vertices, start, LoopOrderOpts::from(opts));
    let mut diagnostics = Vec::new();
    if let Some(d) = walk.diagnostic() {
        d.log();
        diagnostics.push(d);
    }
    crate::debug_invariants!(walk.ordered.validate(&*graph), "fill: ordered loop");

    enter(FillStage::Building);
    let plan = build_strip(&*graph, walk.ordered.as_slice(), opts.mode);
    diagnostics.extend(plan.diagnostics.iter().cloned());

    let mut report = FillReport {
        ordered: walk.ordered,
        diagnostics,
        ..FillReport::default()
    };
    if !plan.is_empty() {
        validate_plan(&*graph, &plan)?;
        enter(FillStage::Committing);
        report.faces = commit(graph, &plan, opts.recalc_normals)?;
        report.removed_edges = plan.edges_to_remove;
    }
    enter(FillStage::Idle);
    Ok(report)
}

/// Fill the chain selected in `mesh`, starting from its active vertex or
/// the selection's free end.
///
/// With [`WalkScope::Unbounded`](crate::algs::WalkScope::Unbounded) the walk
/// may continue past the selection, and the strip then covers unselected
/// vertices too. Set `opts.scope` to `WalkScope::Selection` to prevent that.
pub fn fill_selection(mesh: &mut EditMesh, opts: &FillOptions) -> Result<FillReport, MeshError> {
    let selected = mesh.selected();
    let start = resolve_start(&*mesh, &selected, mesh.active());
    fill(mesh, selected, start, opts)
}
