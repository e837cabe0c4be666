use core::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    EmptyGrid,
    RaggedRows {
        row: usize,
        expected: usize,
        actual: usize,
    },
    SizeMismatch {
        expected: usize,
        actual: usize,
    },
    InvalidDigit {
        value: u32,
    },
    InvalidCell {
        row: usize,
        col: usize,
        value: u32,
    },
    Parse {
        line: usize,
        column: usize,
        token: String,
    },
}

impl Error {
    /// True for every variant describing a non-rectangular or empty grid.
    pub fn is_invalid_grid_shape(&self) -> bool {
        matches!(
            self,
            Self::EmptyGrid | Self::RaggedRows { .. } | Self::SizeMismatch { .. }
        )
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid has no cells"),
            Self::RaggedRows {
                row,
                expected,
                actual,
            } => write!(
                f,
                "ragged grid: row {row} has {actual} columns, expected {expected}"
            ),
            Self::SizeMismatch { expected, actual } => {
                write!(f, "size mismatch: expected {expected}, got {actual}")
            }
            Self::InvalidDigit { value } => write!(f, "digit {value} is outside 0..=9"),
            Self::InvalidCell { row, col, value } => {
                write!(f, "cell ({row}, {col}) holds {value}, not a digit")
            }
            Self::Parse {
                line,
                column,
                token,
            } => write!(f, "line {line}, column {column}: cannot parse '{token}'"),
        }
    }
}

impl std::error::Error for Error {}
