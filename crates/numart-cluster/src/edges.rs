use std::collections::HashSet;

use numart_core::{Coord, Edge};

/// Edges between cells of one component that are orthogonal or diagonal
/// neighbors.
///
/// A pair `(v, item)` is kept when `item` is one of the 8 positions around
/// `v` and their squared distance is 1 or 2. Duplicate coordinates never pair
/// with themselves. The result is undirected, unique and sorted.
///
/// Looks neighbors up in a hash set; returns the same edges as
/// [`build_edges_pairwise`].
pub fn build_edges(component: &[Coord]) -> Vec<Edge> {
    let members: HashSet<(isize, isize)> = component.iter().map(|c| c.as_signed()).collect();

    let mut edges = Vec::new();
    for &v in component {
        for (r, c) in v.nominal_neighbors() {
            if r < 0 || c < 0 || !members.contains(&(r, c)) {
                continue;
            }

            let item = Coord::new(r as usize, c as usize);
            if is_edge(v, item) {
                edges.push(Edge::new(v, item));
            }
        }
    }

    edges.sort_unstable();
    edges.dedup();
    edges
}

/// Direct O(n²) comparison of every pair of cells.
pub fn build_edges_pairwise(component: &[Coord]) -> Vec<Edge> {
    let mut edges = Vec::new();
    for &v in component {
        let nn = v.nominal_neighbors();
        for &item in component {
            if nn.contains(&item.as_signed()) && is_edge(v, item) {
                edges.push(Edge::new(v, item));
            }
        }
    }

    edges.sort_unstable();
    edges.dedup();
    edges
}

fn is_edge(v: Coord, item: Coord) -> bool {
    let d = item.dist2(v);
    d == 1 || d == 2
}

#[cfg(test)]
mod tests {
    use numart_core::{Coord, Edge};
    use proptest::prelude::*;

    use super::{build_edges, build_edges_pairwise};

    #[test]
    fn diagonal_pair_gives_one_edge() {
        let comp = [Coord::new(3, 3), Coord::new(4, 4)];

        let edges = build_edges(&comp);
        assert_eq!(edges, vec![Edge::new(Coord::new(4, 4), Coord::new(3, 3))]);
        assert_eq!(edges[0].dist2(), 2);
    }

    #[test]
    fn horizontal_line_is_a_path() {
        let comp: Vec<Coord> = (0..4).map(|c| Coord::new(2, c)).collect();

        let edges = build_edges(&comp);
        assert_eq!(
            edges,
            vec![
                Edge::new(Coord::new(2, 0), Coord::new(2, 1)),
                Edge::new(Coord::new(2, 1), Coord::new(2, 2)),
                Edge::new(Coord::new(2, 2), Coord::new(2, 3)),
            ]
        );
        assert!(!edges.contains(&Edge::new(Coord::new(2, 0), Coord::new(2, 3))));
    }

    #[test]
    fn full_3x3_block() {
        let comp: Vec<Coord> = (0..3)
            .flat_map(|r| (0..3).map(move |c| Coord::new(r, c)))
            .collect();

        // 12 orthogonal + 8 diagonal
        assert_eq!(build_edges(&comp).len(), 20);
    }

    #[test]
    fn duplicates_and_origin_cells() {
        let comp = [
            Coord::new(0, 0),
            Coord::new(0, 0),
            Coord::new(0, 1),
            Coord::new(1, 0),
        ];

        let edges = build_edges(&comp);
        assert_eq!(edges.len(), 3);
        assert!(edges.iter().all(|e| e.a != e.b));
        assert_eq!(edges, build_edges_pairwise(&comp));
    }

    #[test]
    fn empty_and_single_cell_components() {
        assert!(build_edges(&[]).is_empty());
        assert!(build_edges(&[Coord::new(5, 5)]).is_empty());
    }

    fn arb_component() -> impl Strategy<Value = Vec<Coord>> {
        proptest::collection::vec((0usize..8, 0usize..8), 0..40)
            .prop_map(|cells| cells.into_iter().map(Coord::from).collect())
    }

    proptest! {
        #[test]
        fn hashed_and_pairwise_builders_agree(comp in arb_component()) {
            prop_assert_eq!(build_edges(&comp), build_edges_pairwise(&comp));
        }

        #[test]
        fn edges_are_short_unique_and_bounded(comp in arb_component()) {
            let edges = build_edges(&comp);
            let mut distinct = comp.clone();
            distinct.sort();
            distinct.dedup();
            let n = distinct.len();

            prop_assert!(edges.len() <= n * n.saturating_sub(1) / 2);
            for w in edges.windows(2) {
                prop_assert!(w[0] < w[1]);
            }
            for e in &edges {
                prop_assert!(e.a != e.b);
                prop_assert!(e.a < e.b);
                prop_assert!(e.dist2() == 1 || e.dist2() == 2);
                prop_assert!(distinct.contains(&e.a) && distinct.contains(&e.b));
            }
        }
    }
}
