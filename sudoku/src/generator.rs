//! Random puzzle generation: a solved grid via a randomized branching
//! policy, and an optional "unique" pass that carves clues out of it while
//! the solution count stays at exactly one.
//!
//! Same recursive engine as [`crate::solver`], different branching policy:
//! the randomized policy here is just another `chooser` closure passed to
//! [`crate::solver::search`], rather than a distinct search implementation.

use log::debug;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

use crate::choice::Choice;
use crate::grid::Grid;
use crate::solver::{Mode, search};

/// Produces one uniformly-branched solved grid of side `size` using `rng`
/// to pick both the branching cell and its trial color. `None` only if
/// `size` itself is unsupported upstream -- an empty grid of a valid size
/// always has a solution.
#[must_use]
pub fn generate_solved(size: usize, rng: &mut SmallRng) -> Option<Grid> {
    let mut grid = Grid::alloc(size).ok()?;
    let mut count = 0;
    search(
        &mut grid,
        Mode::First,
        &mut |g| random_choice(g, rng),
        &mut |_| {},
        &mut count,
        None,
    )
}

/// Picks a branching choice the same way [`crate::choice::choose`] picks
/// the cell (minimum remaining candidates, row-major tiebreak) but draws
/// the trial color uniformly from the cell's candidates instead of always
/// taking the rightmost one.
fn random_choice(grid: &Grid, rng: &mut SmallRng) -> Choice {
    match crate::choice::pick_cell(grid) {
        None => Choice::NONE,
        Some((row, col, cell)) => Choice {
            row,
            col,
            color: cell.random(rng),
        },
    }
}

/// Counts solutions to `grid`, stopping as soon as `cap` is reached. Used
/// to test "does this puzzle still have exactly one solution" without
/// paying for full enumeration on a puzzle that turns out to have many.
fn solution_count_capped(grid: &Grid, cap: usize) -> usize {
    let mut count = 0;
    let mut working = grid.clone();
    search(
        &mut working,
        Mode::All,
        &mut |g| crate::choice::choose(g),
        &mut |_| {},
        &mut count,
        Some(cap),
    );
    count
}

/// Carves a unique-solution puzzle out of `solved` (which must already be a
/// solved grid): repeatedly picks a still-fixed cell at random, blanks it,
/// and keeps the blank only if the puzzle still has exactly one solution.
/// Gives up on a given cell after `retry` failed attempts total and returns
/// whatever has been carved so far -- this never fails outright, it only
/// carves fewer clues than it might have with more attempts.
#[must_use]
pub fn carve_unique(solved: &Grid, rng: &mut SmallRng, retry: usize) -> Grid {
    let size = solved.size();
    let mut puzzle = solved.clone();
    let mut order: Vec<(usize, usize)> = (0..size).flat_map(|r| (0..size).map(move |c| (r, c))).collect();
    order.shuffle(rng);

    let mut attempts = 0;
    for (row, col) in order {
        if attempts >= retry {
            break;
        }
        let saved = puzzle.get(row, col).unwrap();
        puzzle.set(row, col, crate::color_set::ColorSet::full(size));
        if solution_count_capped(&puzzle, 2) == 1 {
            debug!("blanked ({row}, {col}), puzzle still unique");
        } else {
            puzzle.set(row, col, saved);
            attempts += 1;
        }
    }
    puzzle
}

/// Generates a grid per [`generate_solved`], and, when `unique` is set,
/// narrows it to a unique-solution puzzle via [`carve_unique`] bounded by
/// `retry`. Draws its own `rng` from `seed` so a given `(size, seed,
/// unique, retry)` tuple always produces the same output.
#[must_use]
pub fn generate(size: usize, seed: u64, unique: bool, retry: usize) -> Option<Grid> {
    use rand::SeedableRng;
    let mut rng = SmallRng::seed_from_u64(seed);
    let solved = generate_solved(size, &mut rng)?;
    if unique {
        Some(carve_unique(&solved, &mut rng, retry))
    } else {
        Some(solved)
    }
}
