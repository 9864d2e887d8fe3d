//! The textual grid file format: one row per line, cells separated by runs
//! of whitespace, `#` starts a comment that runs to the end of the line,
//! and blank lines are ignored. This is the only contact point between a
//! textual grid file and the core: it builds a [`Grid`] purely by calling
//! [`Grid::alloc`] and [`Grid::set_cell`].

use crate::color_table;
use crate::error::ParseError;
use crate::grid::{Grid, is_valid_size};

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(i) => &line[..i],
        None => line,
    }
}

/// Parses `text` into a [`Grid`]. The grid's side length is inferred from
/// the first non-blank, non-comment line.
pub fn parse_grid(text: &str) -> Result<Grid, ParseError> {
    let rows: Vec<Vec<char>> = text
        .lines()
        .map(strip_comment)
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            line.split_whitespace()
                .map(|token| token.chars().next().unwrap_or(color_table::UNKNOWN))
                .collect()
        })
        .collect();

    let Some(first) = rows.first() else {
        return Err(ParseError::EmptyInput);
    };
    let size = first.len();
    if !is_valid_size(size) {
        return Err(ParseError::UnsupportedSize { size });
    }
    for (row, cells) in rows.iter().enumerate() {
        if cells.len() != size {
            return Err(ParseError::RowLengthMismatch {
                row,
                expected: size,
                found: cells.len(),
            });
        }
    }
    if rows.len() != size {
        return Err(ParseError::RowCountMismatch {
            expected: size,
            found: rows.len(),
        });
    }

    // `size` was just validated above, so allocation cannot fail here.
    let mut grid = Grid::alloc(size).expect("size validated above");
    for (row, cells) in rows.iter().enumerate() {
        for (col, &ch) in cells.iter().enumerate() {
            if !color_table::is_valid_char(size, ch) {
                return Err(ParseError::InvalidCharacter { row, col, ch });
            }
            grid.set_cell(row, col, ch);
        }
    }
    Ok(grid)
}
