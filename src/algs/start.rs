//! Start vertex resolution for a selected chain.

use crate::topology::graph::MeshGraph;
use crate::topology::point::VertexId;

/// Pick the vertex the chain walk starts from.
///
/// The active vertex wins if it is part of the selection. Otherwise the
/// start is the only selected vertex with exactly one incident edge, i.e.
/// the free end of the chain. With zero or several such ends there is no
/// start and `None` is returned.
pub fn resolve_start<G: MeshGraph>(
    graph: &G,
    selected: &[VertexId],
    active: Option<VertexId>,
) -> Option<VertexId> {
    if let Some(a) = active.filter(|a| selected.contains(a) && graph.contains_vertex(*a)) {
        return Some(a);
    }
    let mut ends = selected
        .iter()
        .copied()
        .filter(|&v| graph.contains_vertex(v) && graph.degree(v) == 1);
    match (ends.next(), ends.next()) {
        (Some(v), None) => Some(v),
        _ => None,
    }
}
