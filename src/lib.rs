//! # snake-fill
//!
//! snake-fill turns an open, snake-shaped chain of mesh vertices into a strip
//! of quads. The chain is walked in vertex order from one end and cut into
//! overlapping windows of four vertices (stride two); each window becomes a
//! quad under one of two policies:
//!
//! - **snake**: keep the window's natural order `[w0, w1, w2, w3]`;
//! - **saw**: rewire to `[w0, w2, w3, w1]` and remove the `w1`–`w2` edge.
//!
//! ## Layout
//! - [`topology`]: typed handles, the [`MeshGraph`](topology::MeshGraph)
//!   capability trait, and [`EditMesh`](topology::EditMesh), an in-memory
//!   editable topology implementing it
//! - [`algs`]: chain ordering, strip building, and the fill invocation
//!
//! ## Usage
//! ```rust
//! use snake_fill::prelude::*;
//!
//! let mut mesh = EditMesh::chain(8);
//! mesh.select_all();
//! mesh.set_active(Some(VertexId::new(0))).unwrap();
//!
//! let report = fill_selection(&mut mesh, &FillOptions::with_mode(AlgorithmMode::Saw)).unwrap();
//! assert_eq!(report.faces.len(), 3);
//! assert_eq!(report.removed_edges.len(), 3);
//! ```
//!
//! ## Diagnostics
//! Nothing the algorithm meets on its own is fatal. Empty input, a walk that
//! hits its iteration bound, a missing inner edge in saw mode and a short
//! trailing window are logged through the `log` facade and returned in
//! [`FillReport::diagnostics`](algs::FillReport). Only host-side failures
//! surface as [`MeshError`](mesh_error::MeshError).

pub mod algs;
pub mod debug_invariants;
pub mod mesh_error;
pub mod topology;

pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::algs::{
        AlgorithmMode, Diagnostic, FillOptions, FillReport, OrderedLoop, StripPlan, WalkScope,
        build_strip, fill, fill_selection, order_loop, resolve_start,
    };
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::mesh_error::MeshError;
    pub use crate::topology::{EdgeId, EditMesh, FaceId, MeshGraph, VertexId};
}
