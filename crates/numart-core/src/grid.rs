use crate::{Coord, Error};

/// Row-major 2D array indexed by `(row, col)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T> Grid<T> {
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self, Error> {
        if rows == 0 || cols == 0 {
            return Err(Error::EmptyGrid);
        }

        let expected = rows.checked_mul(cols).ok_or(Error::SizeMismatch {
            expected: usize::MAX,
            actual: data.len(),
        })?;

        if data.len() != expected {
            return Err(Error::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self { rows, cols, data })
    }

    /// Builds a grid from nested rows, rejecting empty and ragged input.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, Error> {
        let cols = rows.first().map(Vec::len).ok_or(Error::EmptyGrid)?;
        if cols == 0 {
            return Err(Error::EmptyGrid);
        }

        let n_rows = rows.len();
        let mut data = Vec::with_capacity(n_rows.saturating_mul(cols));
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != cols {
                return Err(Error::RaggedRows {
                    row,
                    expected: cols,
                    actual: values.len(),
                });
            }
            data.extend(values);
        }

        Self::from_vec(n_rows, cols, data)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    pub fn row(&self, row: usize) -> &[T] {
        assert!(row < self.rows, "row index out of bounds");
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.data.get(row * self.cols + col)
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.data.get_mut(row * self.cols + col)
    }

    pub fn at(&self, c: Coord) -> Option<&T> {
        self.get(c.row, c.col)
    }

    /// Linear index of `c`, or `None` when out of bounds.
    pub fn index_of(&self, c: Coord) -> Option<usize> {
        if c.row >= self.rows || c.col >= self.cols {
            return None;
        }
        Some(c.row * self.cols + c.col)
    }

    pub fn coord_of(&self, idx: usize) -> Coord {
        Coord::new(idx / self.cols, idx % self.cols)
    }

    pub fn same_shape<U>(&self, other: &Grid<U>) -> bool {
        self.shape() == other.shape()
    }

    /// Cells in row-major scan order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, &T)> + '_ {
        let cols = self.cols;
        self.data
            .iter()
            .enumerate()
            .map(move |(i, v)| (Coord::new(i / cols, i % cols), v))
    }

    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(f).collect(),
        }
    }
}

impl<T: Clone> Grid<T> {
    /// Grid of `rows x cols` copies of `value`. Zero dimensions yield an empty
    /// grid; only internal scratch buffers should rely on that.
    pub fn new_fill(rows: usize, cols: usize, value: T) -> Self {
        let len = rows.checked_mul(cols).expect("grid size overflow");
        Self {
            rows,
            cols,
            data: vec![value; len],
        }
    }
}

impl Grid<u8> {
    /// Checks that every cell holds a base-10 digit.
    pub fn validate_digits(&self) -> Result<(), Error> {
        match self.iter().find(|(_, v)| **v > 9) {
            Some((c, &v)) => Err(Error::InvalidCell {
                row: c.row,
                col: c.col,
                value: u32::from(v),
            }),
            None => Ok(()),
        }
    }
}

impl Grid<bool> {
    pub fn count_true(&self) -> usize {
        self.data.iter().filter(|&&v| v).count()
    }
}
