//! Non-fatal conditions raised while filling a chain.
//!
//! None of these abort an invocation. Each one is logged when raised and
//! collected into the report handed back to the host.

use std::fmt;

use crate::topology::point::VertexId;

/// A recoverable condition met during ordering or strip building.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Diagnostic {
    /// No vertices, or no usable start vertex. Nothing is changed.
    EmptyInput,
    /// The walk hit its iteration bound; the partial loop is used as-is.
    TraversalOverrun {
        /// Length of the partial loop when the walk stopped.
        visited: usize,
        /// Size of the input vertex set.
        vertex_count: usize,
    },
    /// Saw mode found no edge between a window's inner vertices.
    MissingInnerEdge {
        /// Window index `k` (the window starts at loop position `2k`).
        window: usize,
        inner: [VertexId; 2],
    },
    /// The loop ended with 1–3 vertices that do not form a window.
    IncompleteTrailingWindow {
        /// Number of vertices past the last complete window.
        remaining: usize,
    },
}

impl Diagnostic {
    /// Emit this diagnostic through the `log` facade.
    pub(crate) fn log(&self) {
        match self {
            Diagnostic::TraversalOverrun { .. } | Diagnostic::MissingInnerEdge { .. } => {
                log::warn!("{self}")
            }
            Diagnostic::EmptyInput | Diagnostic::IncompleteTrailingWindow { .. } => {
                log::debug!("{self}")
            }
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::EmptyInput => write!(f, "nothing to fill: no vertices or no start vertex"),
            Diagnostic::TraversalOverrun {
                visited,
                vertex_count,
            } => write!(
                f,
                "loop walk stopped at its bound after {visited} vertices \
                 (vertex set has {vertex_count}); branching or cyclic chain?"
            ),
            Diagnostic::MissingInnerEdge { window, inner } => write!(
                f,
                "window {window}: no edge between {} and {}, face created without removal",
                inner[0], inner[1]
            ),
            Diagnostic::IncompleteTrailingWindow { remaining } => {
                write!(f, "dropped {remaining} trailing vertices (incomplete window)")
            }
        }
    }
}
