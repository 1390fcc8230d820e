//! Four ways of mapping a cell of a 9x9 sudoku grid to the 3x3 block that
//! contains it, and a small harness that times each of them.
//!
//! Cells are numbered row-major (`cell = 9 * row + col`), blocks likewise
//! (`0..=8`, left to right, top to bottom).

pub mod bench;
pub mod strategy;
pub mod util;
