//! Umbrella crate for the `numart` workspace.
//!
//! Re-exports the grid primitives, the labeling and cluster passes, the digit
//! producer and the renderer.

pub use numart_cluster::*;
pub use numart_core::*;
pub use numart_digits::*;
pub use numart_label::*;
pub use numart_render::*;
