//! A trial assignment used to branch the search.

use crate::color_set::ColorSet;
use crate::grid::Grid;

/// A `(row, column, color)` triple the search tries against a cell. Empty
/// when `color` is [`ColorSet::empty`] -- the sentinel returned by
/// [`choose`] when the grid has no undecided cell left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    pub row: usize,
    pub col: usize,
    pub color: ColorSet,
}

impl Choice {
    pub const NONE: Self = Self {
        row: 0,
        col: 0,
        color: ColorSet::EMPTY,
    };

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.color == ColorSet::empty()
    }

    pub fn apply(self, grid: &mut Grid) {
        grid.set(self.row, self.col, self.color);
    }

    /// Removes `color` from the targeted cell's candidates, leaving every
    /// other candidate untouched.
    pub fn discard(self, grid: &mut Grid) {
        if let Some(cell) = grid.get(self.row, self.col) {
            grid.set(self.row, self.col, cell.subtract(self.color));
        }
    }
}

/// Finds the non-singleton cell with the minimum candidate count,
/// first-found wins on ties (row-major scan). Shared by [`choose`] and
/// [`crate::generator`]'s randomized branching policy, which differ only in
/// how they pick a color out of the winning cell's candidates.
#[must_use]
pub(crate) fn pick_cell(grid: &Grid) -> Option<(usize, usize, ColorSet)> {
    let mut best: Option<(usize, usize, ColorSet)> = None;
    for row in 0..grid.size() {
        for col in 0..grid.size() {
            let cell = grid.get(row, col).unwrap();
            let count = cell.count();
            if count < 2 {
                continue;
            }
            let better = match best {
                None => true,
                Some((_, _, current)) => count < current.count(),
            };
            if better {
                best = Some((row, col, cell));
            }
        }
    }
    best
}

/// Picks the branching cell via [`pick_cell`], branching on the rightmost
/// candidate. Returns [`Choice::NONE`] if every cell is already a
/// singleton.
#[must_use]
pub fn choose(grid: &Grid) -> Choice {
    match pick_cell(grid) {
        None => Choice::NONE,
        Some((row, col, cell)) => Choice {
            row,
            col,
            color: cell.rightmost(),
        },
    }
}
