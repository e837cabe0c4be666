//! Dot-and-stroke rendering of digit grids.
//!
//! Every cell becomes a dot in its digit's palette color. Cluster edges are
//! drawn underneath as strokes in the same color, so clusters read as
//! connected shapes.
//!
//! All presentation choices live in [`RenderConfig`]. The analysis crates
//! hand over `(row, col)` coordinates; [`AxisMapping`] decides which of them
//! runs along the image x axis.

mod palette;
mod png;
mod raster;

pub use palette::Palette;
pub use png::save_png;
pub use raster::{AxisMapping, RenderConfig, render};
