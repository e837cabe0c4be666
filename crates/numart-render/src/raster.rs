use anyhow::{Context, Result, bail};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_line_segment_mut};
use numart_cluster::DigitComponents;
use numart_core::{Coord, DigitGrid};

use crate::Palette;

/// Which grid index runs along the image x axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AxisMapping {
    /// Columns left to right, rows top to bottom.
    #[default]
    ColX,
    /// Rows left to right, columns top to bottom.
    RowX,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Side length of one grid cell in pixels.
    pub cell_px: u32,
    pub dot_radius: u32,
    pub margin_px: u32,
    pub background: Rgb<u8>,
    pub palette: Palette,
    pub axis: AxisMapping,
    /// Puts image row 0 at the bottom, like a plot with its origin at the
    /// lower left.
    pub flip_vertical: bool,
    pub draw_edges: bool,
    pub edge_thickness: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            cell_px: 8,
            dot_radius: 1,
            margin_px: 8,
            background: Rgb([0, 0, 0]),
            palette: Palette::default(),
            axis: AxisMapping::ColX,
            flip_vertical: false,
            draw_edges: true,
            edge_thickness: 1,
        }
    }
}

impl RenderConfig {
    /// Output size in pixels for a `rows x cols` grid, or `None` when a side
    /// would exceed `i32::MAX` pixels.
    pub fn image_size(&self, rows: usize, cols: usize) -> Option<(u32, u32)> {
        let (nx, ny) = match self.axis {
            AxisMapping::ColX => (cols, rows),
            AxisMapping::RowX => (rows, cols),
        };
        let cell = self.cell_px.max(1);
        let side = |n: usize| -> Option<u32> {
            let px = u32::try_from(n)
                .ok()?
                .checked_mul(cell)?
                .checked_add(self.margin_px.checked_mul(2)?)?;
            (px <= i32::MAX as u32).then_some(px)
        };
        Some((side(nx)?, side(ny)?))
    }

    /// Pixel center of cell `c` in an image of `height` pixels.
    pub fn cell_center(&self, c: Coord, height: u32) -> (i64, i64) {
        let (ix, iy) = match self.axis {
            AxisMapping::ColX => (c.col, c.row),
            AxisMapping::RowX => (c.row, c.col),
        };
        let cell = i64::from(self.cell_px.max(1));
        let half = cell / 2;
        let m = i64::from(self.margin_px);
        let x = m + ix as i64 * cell + half;
        let y = m + iy as i64 * cell + half;
        if self.flip_vertical {
            (x, i64::from(height) - 1 - y)
        } else {
            (x, y)
        }
    }
}

/// Draws `grid` as dots and, when enabled, the edges of `clusters`.
///
/// `clusters` normally holds the ten per-digit results of the same grid; an
/// empty slice renders dots only. Fails when the image would not fit the
/// pixel coordinate range.
pub fn render(grid: &DigitGrid, clusters: &[DigitComponents], cfg: &RenderConfig) -> Result<RgbImage> {
    let Some((w, h)) = cfg.image_size(grid.rows(), grid.cols()) else {
        bail!(
            "a {}x{} grid at {} px per cell with a {} px margin does not fit in an image",
            grid.rows(),
            grid.cols(),
            cfg.cell_px,
            cfg.margin_px
        );
    };
    let radius = i32::try_from(cfg.dot_radius)
        .with_context(|| format!("dot radius {} is too large", cfg.dot_radius))?;
    let mut img = RgbImage::from_pixel(w, h, cfg.background);

    if cfg.draw_edges {
        for digit in clusters {
            let color = cfg.palette.color(digit.digit.value());
            for edges in digit.edges() {
                for e in edges {
                    let p = cfg.cell_center(e.a, h);
                    let q = cfg.cell_center(e.b, h);
                    draw_stroke(&mut img, p, q, cfg.edge_thickness, color);
                }
            }
        }
    }

    for (c, &v) in grid.iter() {
        let (x, y) = cfg.cell_center(c, h);
        // Centers lie inside the image, whose sides fit in i32.
        draw_filled_circle_mut(&mut img, (x as i32, y as i32), radius, cfg.palette.color(v));
    }

    Ok(img)
}

/// A `thickness` wide stroke made of unit segments offset along x and y.
fn draw_stroke(img: &mut RgbImage, p: (i64, i64), q: (i64, i64), thickness: u32, color: Rgb<u8>) {
    let (px, py) = (p.0 as f32, p.1 as f32);
    let (qx, qy) = (q.0 as f32, q.1 as f32);
    let n = i64::from(thickness.max(1));
    let lo = -(n - 1) / 2;

    for t in lo..lo + n {
        let o = t as f32;
        draw_line_segment_mut(img, (px + o, py), (qx + o, qy), color);
        if t != 0 {
            draw_line_segment_mut(img, (px, py + o), (qx, qy + o), color);
        }
    }
}
