//! Structural self-checks for the editable topology and ordered chains.
//!
//! [`EditMesh`](crate::topology::EditMesh) implements [`DebugInvariants`] to
//! check vertex/edge/face incidence mirrors after every edit, and the fill
//! invocation runs [`OrderedLoop::validate`](crate::algs::OrderedLoop::validate)
//! through [`debug_invariants!`](crate::debug_invariants) between ordering and
//! building. Checks compile away in release builds unless the
//! `check-invariants` feature is enabled.

use crate::mesh_error::MeshError;

/// A structure whose incidence invariants can be checked on demand.
pub trait DebugInvariants {
    /// Panic on a broken invariant when checks are compiled in.
    fn debug_assert_invariants(&self);
    /// Return the first broken invariant as [`MeshError::InvariantViolation`].
    fn validate_invariants(&self) -> Result<(), MeshError>;
}

/// Run a fallible check and panic with `ctx` if it fails, in debug builds
/// or with `check-invariants`.
#[macro_export]
macro_rules! debug_invariants {
    ($check:expr, $($ctx:tt)*) => {
        #[cfg(any(debug_assertions, feature = "check-invariants"))]
        if let Err(err) = $check {
            panic!(concat!("[invariants] ", $($ctx)*, ": {}"), err);
        }
    };
}
