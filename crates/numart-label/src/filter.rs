use numart_core::BinaryMask;

use crate::label::label8;

/// Clears every true cell that has no 8-connected true neighbor.
///
/// The input is left untouched; cells of components with two or more cells
/// are copied as-is.
pub fn filter_isolated_cells(mask: &BinaryMask) -> BinaryMask {
    filter_small_components(mask, 2)
}

/// Clears every 8-connected component with fewer than `min_size` cells.
///
/// `min_size <= 1` keeps everything.
pub fn filter_small_components(mask: &BinaryMask, min_size: usize) -> BinaryMask {
    let mut out = mask.clone();
    if min_size <= 1 {
        return out;
    }

    let raw = label8(mask);
    let sizes = raw.component_sizes();
    for (cell, &l) in out.data_mut().iter_mut().zip(raw.labels.data()) {
        if l != 0 && sizes[l as usize - 1] < min_size {
            *cell = false;
        }
    }

    out
}
