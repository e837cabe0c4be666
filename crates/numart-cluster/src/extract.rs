use log::debug;
use numart_core::{BinaryMask, Coord, Digit, DigitGrid, Edge, Error, LabelGrid};
use numart_label::{ComponentLabeler, filter_isolated_cells};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::edges::build_edges;

/// Clusters of one digit class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitComponents {
    pub digit: Digit,
    /// Ids are scoped to this digit's pass; `0` is background.
    pub labels: LabelGrid,
    pub count: usize,
    /// `components[k - 1]` holds the cells of label `k` in row-major order.
    pub components: Vec<Vec<Coord>>,
}

impl DigitComponents {
    pub fn component(&self, label: u32) -> Option<&[Coord]> {
        let idx = (label as usize).checked_sub(1)?;
        self.components.get(idx).map(Vec::as_slice)
    }

    /// `(label, cells)` pairs in ascending label order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &[Coord])> + '_ {
        self.components
            .iter()
            .enumerate()
            .map(|(i, c)| (i as u32 + 1, c.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Cells kept across all components.
    pub fn num_cells(&self) -> usize {
        self.components.iter().map(Vec::len).sum()
    }

    /// Adjacency edges of every component, in label order.
    pub fn edges(&self) -> Vec<Vec<Edge>> {
        self.components.iter().map(|c| build_edges(c)).collect()
    }
}

pub fn digit_mask(grid: &DigitGrid, digit: Digit) -> BinaryMask {
    let d = digit.value();
    grid.map(|&v| v == d)
}

/// Masks `grid` on `digit`, drops isolated cells and labels the rest.
///
/// Cells outside `0..=9` never equal a valid digit, so they are treated as
/// background by every pass; use [`numart_core::Grid::validate_digits`] to
/// reject such grids up front.
pub fn extract_digit_components(grid: &DigitGrid, digit: u8) -> Result<DigitComponents, Error> {
    let digit = Digit::new(digit)?;
    Ok(extract_with(&mut ComponentLabeler::new(), grid, digit))
}

/// Runs the extraction for every digit `0..=9`, returned in digit order.
pub fn extract_all_digits(grid: &DigitGrid) -> Vec<DigitComponents> {
    #[cfg(feature = "parallel")]
    {
        let digits: Vec<Digit> = Digit::all().collect();
        digits
            .par_iter()
            .map(|&d| extract_with(&mut ComponentLabeler::new(), grid, d))
            .collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        let mut labeler = ComponentLabeler::new();
        Digit::all()
            .map(|d| extract_with(&mut labeler, grid, d))
            .collect()
    }
}

fn extract_with(
    labeler: &mut ComponentLabeler,
    grid: &DigitGrid,
    digit: Digit,
) -> DigitComponents {
    let mask = digit_mask(grid, digit);
    let filtered = filter_isolated_cells(&mask);
    assert_eq!(
        filtered.shape(),
        grid.shape(),
        "filtered mask dimensions differ from the digit grid"
    );

    let labeling = labeler.label(&filtered);
    let components = labeling.coords_by_label();

    debug!(
        "digit {}: {} cells, {} isolated removed, {} components",
        digit,
        mask.count_true(),
        mask.count_true() - filtered.count_true(),
        labeling.count
    );

    DigitComponents {
        digit,
        labels: labeling.labels,
        count: labeling.count,
        components,
    }
}

#[cfg(test)]
mod tests {
    use numart_core::{Coord, Digit, DigitGrid, Error, Grid};

    use super::{digit_mask, extract_all_digits, extract_digit_components};
    use crate::edges::build_edges;

    fn grid(rows: &[&[u8]]) -> DigitGrid {
        Grid::from_rows(rows.iter().map(|r| r.to_vec()).collect()).expect("valid grid")
    }

    #[test]
    fn three_cell_cluster_and_isolated_corner() {
        let g = grid(&[&[1, 1, 0], &[0, 1, 0], &[0, 0, 2]]);

        let ones = extract_digit_components(&g, 1).expect("valid digit");
        assert_eq!(ones.count, 1);
        assert_eq!(
            ones.component(1),
            Some(&[Coord::new(0, 0), Coord::new(0, 1), Coord::new(1, 1)][..])
        );
        assert_eq!(ones.labels.data(), &[1, 1, 0, 0, 1, 0, 0, 0, 0]);

        let twos = extract_digit_components(&g, 2).expect("valid digit");
        assert_eq!(twos.count, 0);
        assert!(twos.is_empty());
        assert!(twos.components.is_empty());
        assert!(twos.labels.data().iter().all(|&v| v == 0));
    }

    #[test]
    fn lone_seven_in_5x5_is_filtered_out() {
        let g = grid(&[
            &[1, 2, 3, 4, 5],
            &[6, 8, 9, 0, 1],
            &[2, 3, 7, 4, 5],
            &[6, 8, 9, 0, 1],
            &[2, 3, 4, 5, 6],
        ]);

        let sevens = extract_digit_components(&g, 7).expect("valid digit");
        assert_eq!(sevens.count, 0);
        assert!(sevens.labels.data().iter().all(|&v| v == 0));
        assert_eq!(digit_mask(&g, Digit::new(7).expect("digit")).count_true(), 1);
    }

    #[test]
    fn missing_digit_yields_no_components() {
        let g = grid(&[&[1, 1], &[1, 1]]);
        let out = extract_digit_components(&g, 4).expect("valid digit");

        assert_eq!(out.count, 0);
        assert_eq!(out.num_cells(), 0);
    }

    #[test]
    fn out_of_range_digit_is_rejected() {
        let g = grid(&[&[1, 1], &[1, 1]]);
        assert_eq!(
            extract_digit_components(&g, 10),
            Err(Error::InvalidDigit { value: 10 })
        );
    }

    #[test]
    fn input_grid_is_not_modified() {
        let g = grid(&[&[5, 5, 3], &[3, 5, 3]]);
        let before = g.clone();
        let _ = extract_digit_components(&g, 5).expect("valid digit");
        assert_eq!(g, before);
    }

    #[test]
    fn labels_follow_scan_order_across_components() {
        let g = grid(&[
            &[4, 4, 0, 0, 4],
            &[0, 0, 0, 0, 4],
            &[4, 0, 0, 0, 0],
            &[4, 0, 4, 0, 0],
        ]);
        let out = extract_digit_components(&g, 4).expect("valid digit");

        assert_eq!(out.count, 3);
        assert_eq!(out.component(1), Some(&[Coord::new(0, 0), Coord::new(0, 1)][..]));
        assert_eq!(out.component(2), Some(&[Coord::new(0, 4), Coord::new(1, 4)][..]));
        assert_eq!(out.component(3), Some(&[Coord::new(2, 0), Coord::new(3, 0)][..]));
        assert_eq!(out.component(0), None);
        assert_eq!(out.component(4), None);
        assert_eq!(out.labels.get(3, 2), Some(&0));
    }

    #[test]
    fn all_digits_match_single_passes() {
        let g = grid(&[
            &[3, 1, 4, 1, 5, 9],
            &[2, 6, 5, 3, 5, 8],
            &[9, 7, 9, 3, 2, 3],
            &[8, 4, 6, 2, 6, 4],
        ]);

        let all = extract_all_digits(&g);
        assert_eq!(all.len(), 10);
        for (d, out) in all.iter().enumerate() {
            assert_eq!(out.digit.index(), d);
            let single = extract_digit_components(&g, d as u8).expect("valid digit");
            assert_eq!(out, &single);
        }

        let kept: usize = all.iter().map(|d| d.num_cells()).sum();
        assert!(kept <= g.len());
    }

    #[test]
    fn iter_pairs_labels_with_cells() {
        let g = grid(&[&[8, 8, 1], &[1, 1, 8], &[8, 1, 8]]);
        let out = extract_digit_components(&g, 8).expect("valid digit");

        let labels: Vec<u32> = out.iter().map(|(l, _)| l).collect();
        assert_eq!(labels, (1..=out.count as u32).collect::<Vec<_>>());
        for (l, cells) in out.iter() {
            for c in cells {
                assert_eq!(out.labels.at(*c), Some(&l));
            }
        }
    }

    #[test]
    fn diagonal_pair_is_one_component_with_one_edge() {
        let g = grid(&[&[7, 0, 0], &[0, 7, 0], &[0, 0, 1]]);
        let sevens = extract_digit_components(&g, 7).expect("valid digit");

        assert_eq!(sevens.count, 1);
        let cells = sevens.component(1).expect("label 1");
        assert_eq!(cells.len(), 2);
        assert_eq!(build_edges(cells).len(), 1);
    }

    #[test]
    fn straight_run_of_four_has_three_edges() {
        let g = grid(&[&[3, 3, 3, 3], &[0, 1, 0, 1]]);
        let threes = extract_digit_components(&g, 3).expect("valid digit");

        assert_eq!(threes.count, 1);
        let cells = threes.component(1).expect("label 1");
        assert_eq!(cells.len(), 4);
        assert_eq!(build_edges(cells).len(), 3);
        assert_eq!(threes.edges(), vec![build_edges(cells)]);
    }

    #[test]
    fn out_of_range_cells_are_background() {
        let g = grid(&[&[12, 12, 2], &[2, 12, 2]]);
        assert!(g.validate_digits().is_err());

        for out in extract_all_digits(&g) {
            for (c, &v) in g.iter() {
                if v > 9 {
                    assert_eq!(out.labels.at(c), Some(&0));
                }
            }
        }
        let twos = extract_digit_components(&g, 2).expect("valid digit");
        assert_eq!(twos.count, 1);
        assert_eq!(twos.num_cells(), 2);
    }
}
