//! The recursive constraint-propagation/backtracking search.
//!
//! `solve_first`/`solve_all` are the two public entry points and never
//! touch randomness: same grid, same mode, same result, every time.
//! [`crate::generator`] reuses the same recursive engine with a randomized
//! branching policy, which is why the engine itself is generic over the
//! choice function rather than hardwiring [`choose`].

use log::trace;

use crate::choice::{Choice, choose};
use crate::grid::{Grid, Status};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    First,
    All,
}

#[must_use]
pub fn solve_first(mut grid: Grid) -> Option<Grid> {
    let mut count = 0;
    search(
        &mut grid,
        Mode::First,
        &mut |g| choose(g),
        &mut |_| {},
        &mut count,
        None,
    )
}

/// Runs the search in [`Mode::All`], calling `on_solution` once per solved
/// grid reached. Returns the total number of solutions. `on_solution` is the
/// sole externally visible side effect of `All` mode; it never runs inside
/// `First` mode.
pub fn solve_all(mut grid: Grid, mut on_solution: impl FnMut(&Grid)) -> usize {
    let mut count = 0;
    search(
        &mut grid,
        Mode::All,
        &mut |g| choose(g),
        &mut on_solution,
        &mut count,
        None,
    );
    count
}

/// The shared recursive engine. `chooser` picks the branching cell/color;
/// `cap`, when set, stops the search early once `count` reaches it (used by
/// [`crate::generator`] to test "does this puzzle have more than one
/// solution" without enumerating them all).
pub(crate) fn search(
    grid: &mut Grid,
    mode: Mode,
    chooser: &mut dyn FnMut(&Grid) -> Choice,
    on_solution: &mut dyn FnMut(&Grid),
    count: &mut usize,
    cap: Option<usize>,
) -> Option<Grid> {
    if cap.is_some_and(|cap| *count >= cap) {
        return None;
    }

    match grid.heuristics() {
        Status::Solved => {
            trace!("solved at depth with {} candidates fixed", grid.size() * grid.size());
            match mode {
                Mode::All => {
                    on_solution(grid);
                    *count += 1;
                    None
                }
                Mode::First => Some(grid.clone()),
            }
        }
        Status::Inconsistent => None,
        Status::Unsolved => {
            let ch = chooser(grid);
            if ch.is_empty() {
                // heuristics() already classified every-cell-singleton as
                // Solved above, so this is unreachable in practice.
                return None;
            }
            trace!("branching on ({}, {})", ch.row, ch.col);

            let mut snapshot = grid.clone();
            ch.apply(&mut snapshot);
            if let Some(solved) = search(&mut snapshot, mode, chooser, on_solution, count, cap) {
                if mode == Mode::First {
                    return Some(solved);
                }
            }
            drop(snapshot);

            if cap.is_some_and(|cap| *count >= cap) {
                return None;
            }

            ch.discard(grid);
            search(grid, mode, chooser, on_solution, count, cap)
        }
    }
}
