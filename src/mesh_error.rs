//! MeshError: unified error type for snake-fill public APIs
//!
//! Only host-side failures end up here. Conditions the fill algorithm
//! absorbs on its own (empty input, traversal overrun, a missing inner edge,
//! a short trailing window) are reported as
//! [`Diagnostic`](crate::algs::diagnostics::Diagnostic)s instead.

use crate::topology::point::{EdgeId, FaceId, VertexId};
use thiserror::Error;

/// Unified error type for snake-fill operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MeshError {
    /// A vertex id does not name a live vertex of the mesh.
    #[error("Topology error: unknown vertex `{0}`")]
    UnknownVertex(VertexId),
    /// An edge id does not name a live edge (never existed or already removed).
    #[error("Topology error: unknown edge `{0}`")]
    UnknownEdge(EdgeId),
    /// A face id does not name a live face.
    #[error("Topology error: unknown face `{0}`")]
    UnknownFace(FaceId),
    /// Faces need at least three vertices.
    #[error("Face error: a face needs at least 3 vertices, got {len}")]
    FaceTooSmall { len: usize },
    /// The same vertex appears twice in one face.
    #[error("Face error: vertex `{vertex}` appears more than once")]
    DuplicateFaceVertex { vertex: VertexId },
    /// A face over exactly this vertex set already exists.
    #[error("Face error: a face over {vertices:?} already exists")]
    FaceExists { vertices: Vec<VertexId> },
    /// An edge may not connect a vertex to itself.
    #[error("Edge error: self-loop at vertex `{0}`")]
    SelfLoop(VertexId),
    /// The two vertices are already connected.
    #[error("Edge error: `{a}` and `{b}` are already connected")]
    EdgeExists { a: VertexId, b: VertexId },
    /// A planned removal would take existing faces down with the edge.
    #[error("Edge error: edge `{edge}` is a side of faces {faces:?}")]
    EdgeInUse { edge: EdgeId, faces: Vec<FaceId> },
    /// An algorithm mode name could not be parsed.
    #[error("Config error: unknown algorithm mode `{0}` (expected `snake` or `saw`)")]
    InvalidMode(String),
    /// A structural invariant check failed.
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
}
