//! The N x N grid of candidate cells, and the propagation pass that ties
//! the heuristics together.

use crate::color_set::ColorSet;
use crate::color_table;
use crate::consistency::unit_is_consistent;
use crate::error::GridError;
use crate::heuristics::apply_heuristics;

/// A row, column, or block: an ordered list of `(row, col)` coordinates into
/// the owning [`Grid`]. A unit never stores cell values itself -- it is a
/// cheap, stateless descriptor, re-derived from `Grid::units` whenever
/// needed. Capacity is bounded by the largest supported grid side (64).
pub type UnitView = tinyvec::ArrayVec<[(u8, u8); 64]>;

/// Result of running [`Grid::heuristics`] (or, equivalently, of the search
/// reaching a leaf).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Solved,
    Unsolved,
    Inconsistent,
}

/// Valid grid sizes: N must be a perfect square in `[1, 64]`.
#[must_use]
pub fn is_valid_size(size: usize) -> bool {
    matches!(size, 1 | 4 | 9 | 16 | 25 | 36 | 49 | 64)
}

/// The N x N array of candidate cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<ColorSet>,
}

impl Grid {
    /// Allocates a grid of side `size`, every cell initialized to
    /// `full(size)`. `size` must be one of `{1,4,9,16,25,36,49,64}`.
    pub fn alloc(size: usize) -> Result<Self, GridError> {
        if !is_valid_size(size) {
            return Err(GridError { size });
        }
        Ok(Self {
            size,
            cells: vec![ColorSet::full(size); size * size],
        })
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn block_side(&self) -> usize {
        self.size.isqrt()
    }

    fn linear_index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.size && col < self.size).then(|| row * self.size + col)
    }

    // out-of-range reads are a no-cell, not a panic
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<ColorSet> {
        self.linear_index(row, col).map(|i| self.cells[i])
    }

    // out-of-range writes are a no-op, not a panic
    pub fn set(&mut self, row: usize, col: usize, value: ColorSet) {
        if let Some(i) = self.linear_index(row, col) {
            self.cells[i] = value;
        }
    }

    /// Sets the cell at `(row, col)` from its textual representation: a
    /// table character fixes the cell to that color, and any other
    /// character (canonically [`color_table::UNKNOWN`]) resets the cell to
    /// `full(size)`. A no-op if either index is out of range.
    pub fn set_cell(&mut self, row: usize, col: usize, c: char) {
        let value = match color_table::char_to_index(c) {
            Some(color) if (color as usize) < self.size => ColorSet::singleton(color),
            _ => ColorSet::full(self.size),
        };
        self.set(row, col, value);
    }

    /// Renders the cell at `(row, col)`: a singleton renders as its table
    /// character, `full(size)` renders as [`color_table::UNKNOWN`], and any
    /// other candidate set renders as the concatenation of its members'
    /// characters (diagnostic only -- not every such rendering round-trips
    /// through the textual grid format). `None` if out of range.
    #[must_use]
    pub fn get_cell(&self, row: usize, col: usize) -> Option<String> {
        let cell = self.get(row, col)?;
        Some(render_cell(cell, self.size))
    }

    /// All 3N units of the grid: the N rows, then the N columns, then the N
    /// blocks, each enumerated row-major within the unit.
    #[must_use]
    pub fn units(&self) -> Vec<UnitView> {
        let n = self.size;
        let b = self.block_side();
        let mut units = Vec::with_capacity(3 * n);

        for row in 0..n {
            let mut unit = UnitView::new();
            for col in 0..n {
                unit.push((row as u8, col as u8));
            }
            units.push(unit);
        }
        for col in 0..n {
            let mut unit = UnitView::new();
            for row in 0..n {
                unit.push((row as u8, col as u8));
            }
            units.push(unit);
        }
        for block in 0..n {
            let block_row = block / b;
            let block_col = block % b;
            let mut unit = UnitView::new();
            for r in 0..b {
                for c in 0..b {
                    unit.push(((block_row * b + r) as u8, (block_col * b + c) as u8));
                }
            }
            units.push(unit);
        }
        units
    }

    /// Whether every cell is a singleton and every unit holds all N colors.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.cells.iter().all(|c| c.is_singleton()) && self.is_consistent()
    }

    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.units().iter().all(|unit| unit_is_consistent(self, unit))
    }

    /// Runs H1/H2/H3 over every unit repeatedly until a fixed point, then
    /// classifies the result. Every change strictly shrinks some cell's
    /// candidate set, so this always terminates.
    pub fn heuristics(&mut self) -> Status {
        let units = self.units();
        loop {
            let mut changed = false;
            for unit in &units {
                if apply_heuristics(self, unit) {
                    changed = true;
                }
            }
            if !changed {
                break;
            }
        }

        if !self.is_consistent() {
            Status::Inconsistent
        } else if self.cells.iter().all(|c| c.is_singleton()) {
            Status::Solved
        } else {
            Status::Unsolved
        }
    }
}

fn render_cell(cell: ColorSet, size: usize) -> String {
    if cell == ColorSet::full(size) {
        color_table::UNKNOWN.to_string()
    } else {
        cell.filter_map(color_table::index_to_char).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alloc_rejects_unsupported_sizes() {
        assert!(Grid::alloc(2).is_err());
        assert!(Grid::alloc(81).is_err());
        for &size in &[1, 4, 9, 16, 25, 36, 49, 64] {
            assert!(Grid::alloc(size).is_ok());
        }
    }

    #[test]
    fn out_of_range_access_is_a_no_op() {
        let mut g = Grid::alloc(4).unwrap();
        assert_eq!(g.get(4, 0), None);
        assert_eq!(g.get(0, 4), None);
        g.set_cell(4, 4, '1'); // must not panic
        assert_eq!(g.get_cell(4, 4), None);
    }

    #[test]
    fn set_get_roundtrip_and_unknown_placeholder() {
        let mut g = Grid::alloc(9).unwrap();
        g.set_cell(0, 0, '7');
        assert_eq!(g.get_cell(0, 0).as_deref(), Some("7"));
        g.set_cell(0, 1, 'x'); // not a valid character for any size
        assert_eq!(g.get_cell(0, 1).as_deref(), Some("_"));
        assert_eq!(g.get(0, 1), Some(ColorSet::full(9)));
    }

    #[test]
    fn units_cover_every_cell_exactly_thrice() {
        let g = Grid::alloc(9).unwrap();
        let units = g.units();
        assert_eq!(units.len(), 27);
        let mut hits = vec![0u8; 81];
        for unit in &units {
            assert_eq!(unit.len(), 9);
            for &(r, c) in unit {
                hits[r as usize * 9 + c as usize] += 1;
            }
        }
        assert!(hits.iter().all(|&h| h == 3));
    }

    #[test]
    fn one_by_one_is_immediately_solved() {
        let mut g = Grid::alloc(1).unwrap();
        assert_eq!(g.heuristics(), Status::Unsolved);
        g.set_cell(0, 0, '1');
        assert_eq!(g.heuristics(), Status::Solved);
        assert!(g.is_solved());
    }

    #[test]
    fn duplicate_singletons_in_a_row_are_inconsistent() {
        let mut g = Grid::alloc(4).unwrap();
        g.set_cell(0, 0, '1');
        g.set_cell(0, 1, '1');
        assert!(!g.is_consistent());
        assert_eq!(g.heuristics(), Status::Inconsistent);
    }
}
