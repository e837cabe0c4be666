//! `.dat` digit grid text format.
//!
//! One grid row per line, cells separated by commas, no header:
//!
//! ```text
//! 3,1,4,1
//! 5,9,2,6
//! ```
//!
//! Trailing blank lines are ignored. Every row must have the same number of
//! cells.

use std::io::{self, Write};

use crate::{DigitGrid, Error, Grid};

pub fn parse_digit_grid(text: &str) -> Result<DigitGrid, Error> {
    let lines: Vec<&str> = text.lines().collect();
    let end = lines
        .iter()
        .rposition(|l| !l.trim().is_empty())
        .map_or(0, |i| i + 1);

    let mut rows = Vec::with_capacity(end);
    for (row, line) in lines[..end].iter().enumerate() {
        let mut cells = Vec::new();
        for (col, token) in line.split(',').enumerate() {
            let token = token.trim();
            let value: u32 = token.parse().map_err(|_| Error::Parse {
                line: row + 1,
                column: col + 1,
                token: token.to_string(),
            })?;
            if value > 9 {
                return Err(Error::InvalidCell { row, col, value });
            }
            cells.push(value as u8);
        }
        rows.push(cells);
    }

    Grid::from_rows(rows)
}

pub fn write_digit_grid<W: Write>(grid: &DigitGrid, mut out: W) -> io::Result<()> {
    for r in 0..grid.rows() {
        let mut first = true;
        for &v in grid.row(r) {
            if !first {
                out.write_all(b",")?;
            }
            write!(out, "{v}")?;
            first = false;
        }
        out.write_all(b"\n")?;
    }
    Ok(())
}

pub fn format_digit_grid(grid: &DigitGrid) -> String {
    let mut buf = Vec::with_capacity(grid.len() * 2);
    write_digit_grid(grid, &mut buf).expect("writing to a Vec cannot fail");
    String::from_utf8(buf).expect("digit grid text is ascii")
}

#[cfg(test)]
mod tests {
    use super::{format_digit_grid, parse_digit_grid};
    use crate::Error;

    #[test]
    fn parses_rows_and_ignores_trailing_blank_lines() {
        let g = parse_digit_grid("3,1,4\n1,5,9\n\n").expect("valid dat");

        assert_eq!(g.shape(), (2, 3));
        assert_eq!(g.data(), &[3, 1, 4, 1, 5, 9]);
    }

    #[test]
    fn accepts_crlf_and_padding() {
        let g = parse_digit_grid("2, 7\r\n1 ,8\r\n").expect("valid dat");
        assert_eq!(g.data(), &[2, 7, 1, 8]);
    }

    #[test]
    fn ragged_file_is_a_shape_error() {
        let err = parse_digit_grid("1,2,3\n4,5\n").expect_err("ragged");
        assert!(err.is_invalid_grid_shape());
    }

    #[test]
    fn empty_file_is_a_shape_error() {
        assert_eq!(parse_digit_grid("\n\n"), Err(Error::EmptyGrid));
    }

    #[test]
    fn bad_tokens_are_located() {
        assert_eq!(
            parse_digit_grid("1,2\n3,x\n"),
            Err(Error::Parse {
                line: 2,
                column: 2,
                token: "x".to_string()
            })
        );
        assert_eq!(
            parse_digit_grid("1,12\n"),
            Err(Error::InvalidCell {
                row: 0,
                col: 1,
                value: 12
            })
        );
    }

    #[test]
    fn format_matches_parse() {
        let text = "1,6,1,8\n0,3,3,9\n";
        let g = parse_digit_grid(text).expect("valid dat");
        assert_eq!(format_digit_grid(&g), text);
    }
}
