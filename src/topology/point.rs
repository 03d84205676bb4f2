//! Strong, zero-cost handles for mesh entities.
//!
//! Vertices, edges and faces of an editable mesh are addressed by opaque
//! index handles. Each handle wraps a `u32` slot index and is
//! `repr(transparent)`, so it has the layout of a bare `u32`.
//!
//! The handles carry no reference to the mesh that issued them: a handle is
//! only meaningful against the mesh it came from, and a mesh reports
//! [`MeshError::UnknownVertex`](crate::mesh_error::MeshError::UnknownVertex)
//! (and friends) for handles it does not recognise.

use std::fmt;

macro_rules! define_handle {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
        )]
        #[serde(transparent)]
        #[repr(transparent)]
        pub struct $name(u32);

        impl $name {
            /// Creates a handle from a raw slot index.
            #[inline]
            pub const fn new(raw: u32) -> Self {
                $name(raw)
            }

            /// Returns the raw slot index.
            #[inline]
            pub const fn get(self) -> u32 {
                self.0
            }

            /// Returns the slot index as `usize`, for indexing storage.
            #[inline]
            pub const fn index(self) -> usize {
                self.0 as usize
            }

            #[inline]
            pub(crate) fn from_index(index: usize) -> Self {
                debug_assert!(index <= u32::MAX as usize, "mesh slot index overflow");
                $name(index as u32)
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_tuple(stringify!($name)).field(&self.0).finish()
            }
        }

        /// Prints only the raw index.
        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u32> for $name {
            fn from(raw: u32) -> Self {
                $name(raw)
            }
        }
    };
}

define_handle!(
    /// Identifies a vertex.
    VertexId
);
define_handle!(
    /// Identifies an undirected edge.
    EdgeId
);
define_handle!(
    /// Identifies a polygonal face.
    FaceId
);
