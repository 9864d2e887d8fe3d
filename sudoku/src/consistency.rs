//! The consistency predicate, applied per unit.

use crate::color_set::ColorSet;
use crate::grid::{Grid, UnitView};

/// A unit is consistent when no cell is empty, no two cells are singletons
/// over the same color, and the union of all candidates in the unit still
/// covers every color the grid uses.
#[must_use]
pub fn unit_is_consistent(grid: &Grid, unit: &UnitView) -> bool {
    let mut union = ColorSet::empty();
    let mut seen_singletons = ColorSet::empty();

    for &(row, col) in unit {
        let Some(cell) = grid.get(row as usize, col as usize) else {
            continue;
        };
        if cell == ColorSet::empty() {
            return false;
        }
        if let Some(color) = cell.as_singleton() {
            let singleton = ColorSet::singleton(color);
            if seen_singletons.and(singleton) != ColorSet::empty() {
                return false;
            }
            seen_singletons = seen_singletons.or(singleton);
        }
        union = union.or(cell);
    }

    union.count() as usize >= grid.size()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;

    #[test]
    fn freshly_allocated_grid_is_consistent() {
        let g = Grid::alloc(9).unwrap();
        assert!(g.is_consistent());
    }

    #[test]
    fn empty_cell_is_inconsistent() {
        let mut g = Grid::alloc(4).unwrap();
        g.set(0, 0, ColorSet::empty());
        assert!(!g.is_consistent());
    }

    #[test]
    fn duplicate_singleton_in_unit_is_inconsistent() {
        let mut g = Grid::alloc(4).unwrap();
        g.set_cell(0, 0, '1');
        g.set_cell(1, 0, '1'); // same column
        assert!(!g.is_consistent());
    }

    #[test]
    fn unreachable_color_is_inconsistent() {
        let mut g = Grid::alloc(4).unwrap();
        // every cell in row 0 loses color '4' (index 3): no cell in the
        // unit can supply it any more, so the union can't cover 4 colors.
        for col in 0..4 {
            let reduced = g.get(0, col).unwrap().discard(3);
            g.set(0, col, reduced);
        }
        assert!(!g.is_consistent());
    }
}
