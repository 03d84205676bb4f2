//! Re-export public algorithms.

pub mod diagnostics;
pub mod fill;
pub mod loop_order;
pub mod options;
pub mod start;
pub mod strip;

pub use diagnostics::Diagnostic;
pub use fill::{FillReport, fill, fill_selection};
pub use loop_order::{OrderedLoop, order_loop};
pub use options::{AlgorithmMode, FillOptions, WalkScope};
pub use start::resolve_start;
pub use strip::{FaceSpec, StripPlan, build_strip};
