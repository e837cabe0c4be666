//! Connected-component labeling over binary masks.
//!
//! Connectivity is fixed to 8 neighbors: a cell touches every cell whose row
//! and column each differ by at most one.
//!
//! Label ids are assigned in row-major scan order of each component's first
//! cell, so a given mask always produces the same ids. Label `0` marks
//! background.
//!
//! [`filter_isolated_cells`] is the noise pre-pass: it labels the raw mask and
//! clears every component made of a single cell. Its output is a mask, not a
//! labeling; the authoritative ids come from labeling the filtered mask.

mod filter;
mod label;

pub use filter::{filter_isolated_cells, filter_small_components};
pub use label::{ComponentLabeler, Labeling, label8};
