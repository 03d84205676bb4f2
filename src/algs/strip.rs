//! Quad strip construction over an ordered chain.
//!
//! The ordered loop is cut into overlapping windows of four vertices with a
//! stride of two, `loop[2k..2k + 4]`, so consecutive windows share two
//! vertices. Every complete window yields one quad:
//!
//! - [`AlgorithmMode::Snake`] keeps the window order `[w0, w1, w2, w3]`.
//! - [`AlgorithmMode::Saw`] emits `[w0, w2, w3, w1]` and schedules the
//!   `w1`–`w2` edge for removal, since the rewired quad no longer uses it.
//!
//! Building only plans the edit; nothing is applied to the graph here.

use crate::algs::diagnostics::Diagnostic;
use crate::algs::options::AlgorithmMode;
use crate::topology::graph::MeshGraph;
use crate::topology::point::{EdgeId, VertexId};

/// Vertex order of one planned quad.
pub type FaceSpec = [VertexId; 4];

/// Faces to create and edges to remove, in commit order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StripPlan {
    pub faces: Vec<FaceSpec>,
    pub edges_to_remove: Vec<EdgeId>,
    pub diagnostics: Vec<Diagnostic>,
}

impl StripPlan {
    /// True when committing this plan would change nothing.
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty() && self.edges_to_remove.is_empty()
    }
}

/// The complete 4-windows of `ordered`, at stride 2.
pub fn windows(ordered: &[VertexId]) -> impl Iterator<Item = FaceSpec> + '_ {
    ordered
        .windows(4)
        .step_by(2)
        .map(|w| [w[0], w[1], w[2], w[3]])
}

/// Number of complete windows for a loop of `len` vertices.
pub fn window_count(len: usize) -> usize {
    if len < 4 { 0 } else { (len - 4) / 2 + 1 }
}

/// Plan the strip of quads over `ordered` under `mode`.
///
/// # Example
/// ```rust
/// use snake_fill::algs::options::AlgorithmMode;
/// use snake_fill::algs::strip::build_strip;
/// use snake_fill::topology::{EditMesh, VertexId};
/// let mesh = EditMesh::chain(4);
/// let ordered: Vec<VertexId> = mesh.vertex_ids().collect();
/// let plan = build_strip(&mesh, &ordered, AlgorithmMode::Saw);
/// assert_eq!(plan.faces.len(), 1);
/// assert_eq!(plan.edges_to_remove.len(), 1);
/// ```
pub fn build_strip<G: MeshGraph>(graph: &G, ordered: &[VertexId], mode: AlgorithmMode) -> StripPlan {
    let mut plan = StripPlan::default();

    for (k, [w0, w1, w2, w3]) in windows(ordered).enumerate() {
        match mode {
            AlgorithmMode::Snake => plan.faces.push([w0, w1, w2, w3]),
            AlgorithmMode::Saw => {
                match graph.edge_between(w1, w2) {
                    Some(e) => plan.edges_to_remove.push(e),
                    None => {
                        let d = Diagnostic::MissingInnerEdge {
                            window: k,
                            inner: [w1, w2],
                        };
                        d.log();
                        plan.diagnostics.push(d);
                    }
                }
                plan.faces.push([w0, w2, w3, w1]);
            }
        }
    }

    let covered = match plan.faces.len() {
        0 => 0,
        n => 2 * n + 2,
    };
    let remaining = ordered.len() - covered;
    if remaining > 0 {
        let d = Diagnostic::IncompleteTrailingWindow { remaining };
        d.log();
        plan.diagnostics.push(d);
    }
    plan
}
