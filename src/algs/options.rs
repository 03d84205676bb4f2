//! Per-invocation configuration for the fill operation.
//!
//! Options are passed explicitly to every call. A host that wants to remember
//! the last chosen mode can persist [`FillOptions`] through serde.

use std::fmt;
use std::str::FromStr;

use crate::mesh_error::MeshError;

/// Face-construction policy for each 4-vertex window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlgorithmMode {
    /// Keep the window's natural order `[w0, w1, w2, w3]`.
    Snake,
    /// Rewire to `[w0, w2, w3, w1]` and drop the `w1`–`w2` edge.
    #[default]
    Saw,
}

impl fmt::Display for AlgorithmMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AlgorithmMode::Snake => "snake",
            AlgorithmMode::Saw => "saw",
        })
    }
}

impl FromStr for AlgorithmMode {
    type Err = MeshError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "snake" => Ok(AlgorithmMode::Snake),
            "saw" => Ok(AlgorithmMode::Saw),
            _ => Err(MeshError::InvalidMode(s.to_string())),
        }
    }
}

/// Which neighbours the loop walk may step onto.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WalkScope {
    /// Any vertex reachable over an incident edge.
    #[default]
    Unbounded,
    /// Only vertices in the input vertex set.
    Selection,
}

/// Options for one fill invocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FillOptions {
    pub mode: AlgorithmMode,
    /// Stop the walk on reaching a vertex that already belongs to a face.
    pub stop_at_faced: bool,
    pub scope: WalkScope,
    /// Ask the host to recompute face orientation after committing.
    pub recalc_normals: bool,
}

impl Default for FillOptions {
    fn default() -> Self {
        Self {
            mode: AlgorithmMode::Saw,
            stop_at_faced: true,
            scope: WalkScope::Unbounded,
            recalc_normals: true,
        }
    }
}

impl FillOptions {
    pub fn with_mode(mode: AlgorithmMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }
}
