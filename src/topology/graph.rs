//! Capability trait for the editable mesh topology the fill algorithm runs on.
//!
//! This module defines [`MeshGraph`], the only surface the ordering and
//! strip-building algorithms touch. A host mesh (an editor's working copy,
//! a test fixture, [`EditMesh`](crate::topology::edit_mesh::EditMesh))
//! implements it; the algorithms are written purely against it.

use crate::mesh_error::MeshError;
use crate::topology::point::{EdgeId, FaceId, VertexId};

/// Vertex/edge/face incidence queries plus the few mutations the fill
/// algorithm requests from its host.
///
/// # Associated Types
/// - `EdgeIter`: incident edges of a vertex, in the host's stable order.
/// - `FaceIter`: incident faces of a vertex.
///
/// # Provided Methods
/// - `other_endpoint`, `edge_between`, `degree`
/// - `is_faced`, `has_face`
/// - `recalc_normals` (no-op unless the host overrides it)
pub trait MeshGraph {
    type EdgeIter<'a>: Iterator<Item = EdgeId>
    where
        Self: 'a;
    type FaceIter<'a>: Iterator<Item = FaceId>
    where
        Self: 'a;

    /// Whether `v` names a live vertex.
    fn contains_vertex(&self, v: VertexId) -> bool;

    /// Edges incident to `v`. Empty for unknown vertices.
    ///
    /// The order must be deterministic: the loop walk picks the first
    /// qualifying edge in this order.
    fn incident_edges<'a>(&'a self, v: VertexId) -> Self::EdgeIter<'a>;

    /// Faces incident to `v`. Empty for unknown vertices.
    fn incident_faces<'a>(&'a self, v: VertexId) -> Self::FaceIter<'a>;

    /// Both endpoints of a live edge.
    fn edge_vertices(&self, e: EdgeId) -> Option<[VertexId; 2]>;

    /// Boundary of a live face, in winding order.
    fn face_vertices(&self, f: FaceId) -> Option<&[VertexId]>;

    /// Create a face over `vertices` in winding order.
    fn create_face(&mut self, vertices: &[VertexId]) -> Result<FaceId, MeshError>;

    /// Remove a live edge.
    fn remove_edge(&mut self, e: EdgeId) -> Result<(), MeshError>;

    /// Recompute face orientation after a batch of edits.
    fn recalc_normals(&mut self) {}

    /// The endpoint of `e` that is not `v`, or `None` if `v` is not on `e`.
    fn other_endpoint(&self, e: EdgeId, v: VertexId) -> Option<VertexId> {
        match self.edge_vertices(e)? {
            [a, b] if a == v => Some(b),
            [a, b] if b == v => Some(a),
            _ => None,
        }
    }

    /// The edge connecting `a` and `b`, found by intersecting their
    /// incident edge sets.
    fn edge_between(&self, a: VertexId, b: VertexId) -> Option<EdgeId> {
        if a == b {
            return None;
        }
        let from_b: Vec<EdgeId> = self.incident_edges(b).collect();
        self.incident_edges(a).find(|e| from_b.contains(e))
    }

    /// Faces that use `e` as one of their sides. Empty for unknown edges.
    fn edge_faces(&self, e: EdgeId) -> Vec<FaceId> {
        let Some([a, b]) = self.edge_vertices(e) else {
            return Vec::new();
        };
        self.incident_faces(a)
            .filter(|&f| {
                self.face_vertices(f).is_some_and(|fv| {
                    (0..fv.len()).any(|i| {
                        let (x, y) = (fv[i], fv[(i + 1) % fv.len()]);
                        (x, y) == (a, b) || (x, y) == (b, a)
                    })
                })
            })
            .collect()
    }

    /// Number of incident edges.
    fn degree(&self, v: VertexId) -> usize {
        self.incident_edges(v).count()
    }

    /// Whether `v` already belongs to some face.
    fn is_faced(&self, v: VertexId) -> bool {
        self.incident_faces(v).next().is_some()
    }

    /// Whether a face over exactly this vertex set (any winding) exists.
    fn has_face(&self, vertices: &[VertexId]) -> bool {
        let Some(&first) = vertices.first() else {
            return false;
        };
        self.incident_faces(first).any(|f| {
            self.face_vertices(f).is_some_and(|fv| {
                fv.len() == vertices.len() && vertices.iter().all(|v| fv.contains(v))
            })
        })
    }
}
