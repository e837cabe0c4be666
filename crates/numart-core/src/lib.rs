//! Foundational primitives for digit-cluster analysis.
//!
//! ## Grids
//! All 2D data is stored in a row-major [`Grid`] indexed by `(row, col)`.
//! Grids built from external input are never empty and always rectangular;
//! a ragged or empty source is rejected when the grid is constructed.
//!
//! - [`DigitGrid`]: base-10 digits in `[0, 9]`.
//! - [`BinaryMask`]: one boolean per cell, derived from a digit grid.
//! - [`LabelGrid`]: component ids, `0` for background.
//!
//! ## Coordinates
//! [`Coord`] is always `(row, col)`. Mapping rows and columns onto screen axes
//! is left to the renderer.

mod coord;
pub mod dat;
mod digit;
mod error;
mod grid;

pub use coord::{Coord, Edge};
pub use digit::Digit;
pub use error::Error;
pub use grid::Grid;

pub type DigitGrid = Grid<u8>;
pub type BinaryMask = Grid<bool>;
pub type LabelGrid = Grid<u32>;
