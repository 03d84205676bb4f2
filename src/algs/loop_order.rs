//! Chain ordering: recover the vertex order of a snake-like chain.
//!
//! Starting from a known end vertex, the walk repeatedly steps over the
//! first incident edge (in the graph's incident-edge order) whose far end
//! has not been visited yet. It stops at a dead end, optionally on reaching
//! a vertex that already carries a face, or when it exceeds its iteration
//! bound of `|vertices| + 1` steps.
//!
//! The bound is a safety net against runaway traversal of topology the walk
//! does not support (branching or self-intersecting chains). It is not a
//! correctness guarantee for such inputs.

use hashbrown::HashSet;
use itertools::Itertools;

use crate::algs::diagnostics::Diagnostic;
use crate::algs::options::{FillOptions, WalkScope};
use crate::mesh_error::MeshError;
use crate::topology::graph::MeshGraph;
use crate::topology::point::VertexId;

/// A simple path of vertices: no repeats, consecutive entries share an edge.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OrderedLoop {
    vertices: Vec<VertexId>,
}

impl OrderedLoop {
    pub fn as_slice(&self) -> &[VertexId] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn into_vec(self) -> Vec<VertexId> {
        self.vertices
    }

    /// Check the path invariants against `graph`.
    pub fn validate<G: MeshGraph>(&self, graph: &G) -> Result<(), MeshError> {
        if !self.vertices.iter().all_unique() {
            return Err(MeshError::InvariantViolation(
                "ordered loop visits a vertex twice".into(),
            ));
        }
        for (&a, &b) in self.vertices.iter().tuple_windows() {
            if graph.edge_between(a, b).is_none() {
                return Err(MeshError::InvariantViolation(format!(
                    "ordered loop steps from {a} to {b} without an edge"
                )));
            }
        }
        Ok(())
    }
}

impl AsRef<[VertexId]> for OrderedLoop {
    fn as_ref(&self) -> &[VertexId] {
        &self.vertices
    }
}

/// Why the walk stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WalkEnd {
    /// No vertices or no usable start vertex.
    Empty,
    /// The last vertex has no unvisited neighbour.
    DeadEnd,
    /// The last vertex already belongs to a face.
    ReachedFaced,
    /// The iteration bound was exceeded.
    Overrun,
}

/// Walk options. The default is the plain walk: any neighbour, no face stop.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoopOrderOpts {
    pub stop_at_faced: bool,
    pub scope: WalkScope,
}

impl From<&FillOptions> for LoopOrderOpts {
    fn from(opts: &FillOptions) -> Self {
        Self {
            stop_at_faced: opts.stop_at_faced,
            scope: opts.scope,
        }
    }
}

/// Result of a chain walk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoopWalk {
    pub ordered: OrderedLoop,
    pub end: WalkEnd,
    /// Size of the deduplicated input vertex set.
    pub vertex_count: usize,
}

impl LoopWalk {
    /// The diagnostic this walk raises, if any.
    pub fn diagnostic(&self) -> Option<Diagnostic> {
        match self.end {
            WalkEnd::Empty => Some(Diagnostic::EmptyInput),
            WalkEnd::Overrun => Some(Diagnostic::TraversalOverrun {
                visited: self.ordered.len(),
                vertex_count: self.vertex_count,
            }),
            WalkEnd::DeadEnd | WalkEnd::ReachedFaced => None,
        }
    }
}

/// Order the chain through `vertices` starting at `start`.
///
/// Returns an empty loop when `vertices` is empty or `start` is `None` or
/// unknown to `graph`. An overrun is logged and the partial loop returned.
///
/// The plain walk follows any incident edge, so it can step past the end of
/// `vertices` onto vertices outside the set, up to the `|vertices| + 1` step
/// bound. The result may then be longer than the input set. Use
/// [`order_loop_with`] and [`WalkScope::Selection`] to keep the walk inside
/// the set.
///
/// # Example
/// ```rust
/// use snake_fill::algs::loop_order::order_loop;
/// use snake_fill::topology::{EditMesh, VertexId};
/// let mesh = EditMesh::from_edges(3, [(1, 2), (0, 1)]).unwrap();
/// let all: Vec<VertexId> = mesh.vertex_ids().collect();
/// let ordered = order_loop(&mesh, all, Some(VertexId::new(0)));
/// assert_eq!(ordered.as_slice(), &[VertexId::new(0), VertexId::new(1), VertexId::new(2)]);
/// ```
pub fn order_loop<G, I>(graph: &G, vertices: I, start: Option<VertexId>) -> OrderedLoop
where
    G: MeshGraph,
    I: IntoIterator<Item = VertexId>,
{
    let walk = order_loop_with(graph, vertices, start, LoopOrderOpts::default());
    if let Some(d) = walk.diagnostic() {
        d.log();
    }
    walk.ordered
}

/// [`order_loop`] with explicit options, reporting how the walk ended.
pub fn order_loop_with<G, I>(
    graph: &G,
    vertices: I,
    start: Option<VertexId>,
    opts: LoopOrderOpts,
) -> LoopWalk
where
    G: MeshGraph,
    I: IntoIterator<Item = VertexId>,
{
    let members: HashSet<VertexId> = vertices.into_iter().collect();
    let vertex_count = members.len();
    let finish = |ordered: Vec<VertexId>, end: WalkEnd| LoopWalk {
        ordered: OrderedLoop { vertices: ordered },
        end,
        vertex_count,
    };

    let Some(start) = start.filter(|&s| graph.contains_vertex(s)) else {
        return finish(Vec::new(), WalkEnd::Empty);
    };
    if members.is_empty() {
        return finish(Vec::new(), WalkEnd::Empty);
    }

    let mut visited: HashSet<VertexId> = HashSet::with_capacity(vertex_count + 1);
    visited.insert(start);
    let mut ordered = vec![start];
    let mut current = start;

    for _ in 0..=vertex_count {
        let next = graph
            .incident_edges(current)
            .filter_map(|e| graph.other_endpoint(e, current))
            .find(|n| {
                !visited.contains(n)
                    && (opts.scope == WalkScope::Unbounded || members.contains(n))
            });
        let Some(next) = next else {
            return finish(ordered, WalkEnd::DeadEnd);
        };
        visited.insert(next);
        ordered.push(next);
        current = next;
        if opts.stop_at_faced && graph.is_faced(next) {
            return finish(ordered, WalkEnd::ReachedFaced);
        }
    }
    finish(ordered, WalkEnd::Overrun)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::edit_mesh::EditMesh;

    fn v(i: u32) -> VertexId {
        VertexId::new(i)
    }

    fn vs(ids: &[u32]) -> Vec<VertexId> {
        ids.iter().copied().map(v).collect()
    }

    #[test]
    fn walks_chain_from_endpoint() {
        let mesh = EditMesh::chain(8);
        let all: Vec<_> = mesh.vertex_ids().collect();
        let walk = order_loop_with(&mesh, all, Some(v(0)), LoopOrderOpts::default());
        assert_eq!(walk.ordered.as_slice(), vs(&[0, 1, 2, 3, 4, 5, 6, 7]));
        assert_eq!(walk.end, WalkEnd::DeadEnd);
        assert_eq!(walk.diagnostic(), None);
        walk.ordered.validate(&mesh).unwrap();
    }

    #[test]
    fn follows_edges_not_ids() {
        // 0 - 3 - 1 - 4 - 2, edges inserted out of order
        let mesh = EditMesh::from_edges(5, [(1, 4), (0, 3), (4, 2), (3, 1)]).unwrap();
        let all: Vec<_> = mesh.vertex_ids().collect();
        let ordered = order_loop(&mesh, all, Some(v(2)));
        assert_eq!(ordered.as_slice(), vs(&[2, 4, 1, 3, 0]));
    }

    #[test]
    fn empty_set_or_missing_start_yields_empty() {
        let mesh = EditMesh::chain(4);
        let all: Vec<_> = mesh.vertex_ids().collect();

        let walk = order_loop_with(&mesh, Vec::new(), Some(v(0)), LoopOrderOpts::default());
        assert!(walk.ordered.is_empty());
        assert_eq!(walk.diagnostic(), Some(Diagnostic::EmptyInput));

        assert!(order_loop(&mesh, all.clone(), None).is_empty());
        assert!(order_loop(&mesh, all, Some(v(99))).is_empty());
    }

    #[test]
    fn start_need_not_be_in_set() {
        let mesh = EditMesh::chain(4);
        let ordered = order_loop(&mesh, vs(&[1, 2, 3]), Some(v(0)));
        assert_eq!(ordered.as_slice(), vs(&[0, 1, 2, 3]));
    }

    #[test]
    fn overrun_returns_partial_loop() {
        let mesh = EditMesh::chain(10);
        let walk = order_loop_with(&mesh, vs(&[0, 1]), Some(v(0)), LoopOrderOpts::default());
        // Bound is |{0, 1}| + 1 = 3 steps.
        assert_eq!(walk.ordered.as_slice(), vs(&[0, 1, 2, 3]));
        assert_eq!(walk.end, WalkEnd::Overrun);
        assert_eq!(
            walk.diagnostic(),
            Some(Diagnostic::TraversalOverrun {
                visited: 4,
                vertex_count: 2
            })
        );
    }

    #[test]
    fn selection_scope_stays_inside_set() {
        let mesh = EditMesh::chain(10);
        let opts = LoopOrderOpts {
            scope: WalkScope::Selection,
            ..LoopOrderOpts::default()
        };
        let walk = order_loop_with(&mesh, vs(&[0, 1, 2]), Some(v(0)), opts);
        assert_eq!(walk.ordered.as_slice(), vs(&[0, 1, 2]));
        assert_eq!(walk.end, WalkEnd::DeadEnd);
    }

    #[test]
    fn stops_on_faced_vertex_when_asked() {
        let mut mesh = EditMesh::chain(8);
        mesh.create_face(&vs(&[4, 5, 6, 7])).unwrap();
        let all: Vec<_> = mesh.vertex_ids().collect();

        let opts = LoopOrderOpts {
            stop_at_faced: true,
            ..LoopOrderOpts::default()
        };
        let walk = order_loop_with(&mesh, all.clone(), Some(v(0)), opts);
        assert_eq!(walk.ordered.as_slice(), vs(&[0, 1, 2, 3, 4]));
        assert_eq!(walk.end, WalkEnd::ReachedFaced);

        let plain = order_loop(&mesh, all, Some(v(0)));
        assert_eq!(plain.len(), 8);
    }

    #[test]
    fn branch_takes_first_incident_edge() {
        // 0 - 1 - 2 with a spur 1 - 3 added last
        let mesh = EditMesh::from_edges(4, [(0, 1), (1, 2), (1, 3)]).unwrap();
        let all: Vec<_> = mesh.vertex_ids().collect();
        let ordered = order_loop(&mesh, all, Some(v(0)));
        assert_eq!(ordered.as_slice(), vs(&[0, 1, 2]));
    }

    #[test]
    fn repeated_walks_agree() {
        let mesh = EditMesh::from_edges(6, [(5, 0), (0, 2), (2, 4), (4, 1), (1, 3)]).unwrap();
        let all: Vec<_> = mesh.vertex_ids().collect();
        let a = order_loop(&mesh, all.clone(), Some(v(5)));
        let b = order_loop(&mesh, all, Some(v(5)));
        assert_eq!(a, b);
        assert_eq!(a.len(), 6);
    }

    #[test]
    fn validate_rejects_disconnected_steps() {
        let mesh = EditMesh::chain(3);
        let bad = OrderedLoop {
            vertices: vs(&[0, 2]),
        };
        assert!(matches!(
            bad.validate(&mesh),
            Err(MeshError::InvariantViolation(_))
        ));
    }
}
