//! Error kinds the core crate produces. Every failure is a typed value --
//! nothing here unwinds.

use derive_more::{Display, Error};

/// Why [`crate::Grid::alloc`] refused a size.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("unsupported grid size {size} (must be one of 1, 4, 9, 16, 25, 36, 49, 64)")]
pub struct GridError {
    pub size: usize,
}

/// Why [`crate::parser::parse_grid`] refused an input.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input contained no non-blank, non-comment lines.
    #[display("input contains no grid rows")]
    EmptyInput,

    /// The first row's cell count isn't a supported grid size.
    #[display("row has {size} cells, which is not a supported grid size")]
    UnsupportedSize { size: usize },

    /// A row after the first didn't have the same cell count as the first.
    #[display("row {row} has {found} cells, expected {expected}")]
    RowLengthMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// The total number of rows didn't equal the inferred grid size.
    #[display("grid has {found} rows, expected {expected}")]
    RowCountMismatch { expected: usize, found: usize },

    /// A cell held a character outside this grid's alphabet.
    #[display("row {row}, column {col}: '{ch}' is not a valid color for this grid size")]
    InvalidCharacter { row: usize, col: usize, ch: char },
}
