//! A generalized N x N sudoku solver, for square sizes N in
//! `{1, 4, 9, 16, 25, 36, 49, 64}`.
//!
//! A [`Grid`] holds one [`ColorSet`] of remaining candidates per cell.
//! [`Grid::heuristics`] prunes candidates to a fixed point using three
//! deductive rules, and [`solve_first`]/[`solve_all`] fall back to
//! snapshot-and-branch search for puzzles the rules alone can't finish.
//! [`parse_grid`] reads the textual grid format, and [`generator`] builds
//! random solved grids and unique-solution puzzles from them.

mod choice;
mod color_set;
mod color_table;
mod consistency;
mod error;
pub mod generator;
mod grid;
mod heuristics;
mod parser;
mod solver;

pub use choice::{Choice, choose};
pub use color_set::ColorSet;
pub use color_table::{UNKNOWN, char_to_index, index_to_char, is_valid_char, valid_chars};
pub use consistency::unit_is_consistent;
pub use error::{GridError, ParseError};
pub use generator::generate;
pub use grid::{Grid, Status, UnitView, is_valid_size};
pub use heuristics::apply_heuristics;
pub use parser::parse_grid;
pub use solver::{Mode, solve_all, solve_first};
