//! Top-level module for mesh topology abstractions.
//!
//! This module provides:
//! - Typed vertex, edge and face handles
//! - The [`MeshGraph`] capability trait the fill algorithms are written against
//! - [`EditMesh`], an in-memory editable topology implementing it

pub mod edit_mesh;
pub mod graph;
pub mod point;

pub use edit_mesh::EditMesh;
pub use graph::MeshGraph;
pub use point::{EdgeId, FaceId, VertexId};
