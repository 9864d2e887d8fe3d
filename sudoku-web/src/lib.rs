#![allow(static_mut_refs)]

//! wasm front-end: generates a random solved grid and exposes it as a flat
//! byte buffer JS can read directly, one byte per cell (the cell's color
//! index, or 255 for a cell that somehow isn't a singleton).

use rand::SeedableRng;
use rand::rngs::SmallRng;
use sudoku::{ColorSet, generator};

const MAX_CELLS: usize = 64 * 64;

static mut GRID: [u8; MAX_CELLS] = [0u8; MAX_CELLS];

#[unsafe(no_mangle)]
pub extern "C" fn sudoku_ptr() -> *const u8 {
    unsafe { GRID.as_ptr() }
}

/// Generates a solved grid of side `size` and writes it into the shared
/// buffer. Returns 1 on success, 0 if `size` isn't a supported grid size.
#[unsafe(no_mangle)]
pub extern "C" fn sudoku_gen(size: u32, seed: u32) -> u32 {
    let mut rng = SmallRng::seed_from_u64(seed as u64);
    match generator::generate_solved(size as usize, &mut rng) {
        Some(solved) => {
            encode_grid(&solved, unsafe { &mut GRID });
            1
        }
        None => 0,
    }
}

#[unsafe(no_mangle)]
pub extern "C" fn value_to_char(value: u32) -> u32 {
    sudoku::index_to_char(value).unwrap_or(' ') as u32
}

fn encode_grid(grid: &sudoku::Grid, dst: &mut [u8]) {
    let size = grid.size();
    for row in 0..size {
        for col in 0..size {
            let index = row * size + col;
            dst[index] = grid
                .get(row, col)
                .and_then(ColorSet::as_singleton)
                .map_or(255, |color| color as u8);
        }
    }
}
