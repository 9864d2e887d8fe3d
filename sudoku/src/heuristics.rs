//! The three deductive rules (cross-hatching, lone number, naked subset),
//! plus the per-unit driver that applies them in order.
//!
//! Each rule is sound: it only ever removes a candidate that cannot appear
//! in any solution extending the current grid.

use crate::color_set::ColorSet;
use crate::grid::{Grid, UnitView};

/// Runs H1, then H2, then H3 over `unit`, short-circuiting as soon as one of
/// them changes a cell (the outer fixed-point loop in [`Grid::heuristics`]
/// will revisit the unit on the next pass, so there is no need to keep
/// applying rules once a change has been made).
///
/// [`Grid::heuristics`]: crate::grid::Grid::heuristics
pub fn apply_heuristics(grid: &mut Grid, unit: &UnitView) -> bool {
    cross_hatching(grid, unit) || lone_number(grid, unit) || naked_subset(grid, unit)
}

/// H1: every candidate taken by a singleton cell is removed from every
/// other cell in the unit.
pub fn cross_hatching(grid: &mut Grid, unit: &UnitView) -> bool {
    let mut singletons = ColorSet::empty();
    for &(row, col) in unit {
        if let Some(cell) = grid.get(row as usize, col as usize) {
            if cell.is_singleton() {
                singletons = singletons.or(cell);
            }
        }
    }
    if singletons == ColorSet::empty() {
        return false;
    }

    let mut changed = false;
    for &(row, col) in unit {
        let (row, col) = (row as usize, col as usize);
        let Some(cell) = grid.get(row, col) else {
            continue;
        };
        if cell.is_singleton() {
            continue;
        }
        let reduced = cell.subtract(singletons);
        if reduced != cell {
            grid.set(row, col, reduced);
            changed = true;
        }
    }
    changed
}

/// H2: a color with exactly one candidate cell in the unit must go there.
pub fn lone_number(grid: &mut Grid, unit: &UnitView) -> bool {
    let mut changed = false;
    for color in 0..grid.size() as u32 {
        let mut holder = None;
        let mut count = 0;
        for &(row, col) in unit {
            let (row, col) = (row as usize, col as usize);
            if grid.get(row, col).is_some_and(|c| c.contains(color)) {
                count += 1;
                holder = Some((row, col));
            }
        }
        if count == 1 {
            let (row, col) = holder.unwrap();
            let cell = grid.get(row, col).unwrap();
            if !cell.is_singleton() {
                grid.set(row, col, ColorSet::singleton(color));
                changed = true;
            }
        }
    }
    changed
}

/// H3: if `n` cells in the unit share an identical candidate set of
/// cardinality `n`, those cells collectively own all `n` of those colors,
/// so every other cell in the unit loses them. `n == 1` subsumes H1; the
/// empty set and `full(N)` never produce a useful effect and are skipped.
pub fn naked_subset(grid: &mut Grid, unit: &UnitView) -> bool {
    let mut changed = false;
    for &(row, col) in unit {
        let Some(set) = grid.get(row as usize, col as usize) else {
            continue;
        };
        let n = set.count() as usize;
        if n == 0 || set == ColorSet::full(grid.size()) {
            continue;
        }

        let members: Vec<(u8, u8)> = unit
            .iter()
            .copied()
            .filter(|&(r, c)| grid.get(r as usize, c as usize) == Some(set))
            .collect();
        if members.len() != n {
            continue;
        }

        for &(r, c) in unit {
            if members.contains(&(r, c)) {
                continue;
            }
            let (r, c) = (r as usize, c as usize);
            let Some(cell) = grid.get(r, c) else { continue };
            let reduced = cell.subtract(set);
            if reduced != cell {
                grid.set(r, c, reduced);
                changed = true;
            }
        }
    }
    changed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;

    fn row0(grid: &Grid) -> UnitView {
        grid.units().into_iter().next().unwrap()
    }

    #[test]
    fn cross_hatching_removes_fixed_colors_from_peers() {
        let mut g = Grid::alloc(4).unwrap();
        g.set_cell(0, 0, '1');
        let unit = row0(&g);
        assert!(cross_hatching(&mut g, &unit));
        assert!(!g.get(0, 1).unwrap().contains(0));
        assert!(g.get(0, 0).unwrap().is_singleton());
    }

    #[test]
    fn lone_number_fixes_the_only_holder() {
        let mut g = Grid::alloc(4).unwrap();
        // remove color 0 from every cell in row 0 but the last
        for col in 0..3 {
            let reduced = g.get(0, col).unwrap().discard(0);
            g.set(0, col, reduced);
        }
        let unit = row0(&g);
        assert!(lone_number(&mut g, &unit));
        assert_eq!(g.get(0, 3).unwrap(), ColorSet::singleton(0));
    }

    #[test]
    fn naked_pair_clears_the_pair_from_other_cells() {
        let mut g = Grid::alloc(4).unwrap();
        let pair = ColorSet::singleton(0).add(1);
        g.set(0, 0, pair);
        g.set(0, 1, pair);
        let unit = row0(&g);
        assert!(naked_subset(&mut g, &unit));
        assert!(!g.get(0, 2).unwrap().contains(0));
        assert!(!g.get(0, 2).unwrap().contains(1));
        assert!(!g.get(0, 3).unwrap().contains(0));
    }

    #[test]
    fn fixed_point_solves_a_trivially_determined_row() {
        let mut g = Grid::alloc(4).unwrap();
        g.set_cell(0, 0, '1');
        g.set_cell(0, 1, '2');
        g.set_cell(0, 2, '3');
        let unit = row0(&g);
        while apply_heuristics(&mut g, &unit) {}
        assert_eq!(g.get_cell(0, 3).as_deref(), Some("4"));
    }
}
