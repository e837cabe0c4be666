//! Digit clusters: per-digit connected components and their adjacency edges.
//!
//! For one digit, [`extract_digit_components`] masks the grid, drops isolated
//! cells, labels what is left with 8-connectivity and lists each component's
//! cells in row-major order. [`extract_all_digits`] repeats that for `0..=9`;
//! every pass is independent, and with the `parallel` feature the passes run
//! on the rayon pool.
//!
//! [`build_edges`] connects the cells of one component that are orthogonal or
//! diagonal neighbors. Renderers draw these as strokes.

mod edges;
mod extract;

pub use edges::{build_edges, build_edges_pairwise};
pub use extract::{DigitComponents, digit_mask, extract_all_digits, extract_digit_components};
