/// Grid position in `(row, col)` order.
///
/// Ordering is row-major, so sorting coordinates reproduces scan order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The 8 positions around `self` as signed `(row, col)` pairs, in
    /// row-major order. Positions outside any grid (negative) are included.
    pub fn nominal_neighbors(self) -> [(isize, isize); 8] {
        let (r, c) = (self.row as isize, self.col as isize);
        [
            (r - 1, c - 1),
            (r - 1, c),
            (r - 1, c + 1),
            (r, c - 1),
            (r, c + 1),
            (r + 1, c - 1),
            (r + 1, c),
            (r + 1, c + 1),
        ]
    }

    /// Squared euclidean distance.
    pub fn dist2(self, other: Coord) -> usize {
        let dr = self.row.abs_diff(other.row);
        let dc = self.col.abs_diff(other.col);
        dr * dr + dc * dc
    }

    /// True when the two cells touch under 8-connectivity.
    pub fn is_8_adjacent(self, other: Coord) -> bool {
        self != other && self.row.abs_diff(other.row) <= 1 && self.col.abs_diff(other.col) <= 1
    }

    pub fn as_signed(self) -> (isize, isize) {
        (self.row as isize, self.col as isize)
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

/// Undirected connection between two cells of one component.
///
/// Stored normalized with `a < b`, so `Edge::new(p, q) == Edge::new(q, p)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    pub a: Coord,
    pub b: Coord,
}

impl Edge {
    pub fn new(p: Coord, q: Coord) -> Self {
        if p <= q {
            Self { a: p, b: q }
        } else {
            Self { a: q, b: p }
        }
    }

    pub fn dist2(&self) -> usize {
        self.a.dist2(self.b)
    }
}
