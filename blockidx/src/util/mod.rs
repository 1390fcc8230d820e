/// cells per grid row / column
pub const GRID_SIZE: usize = 9;

/// cells per block row / column
pub const BLOCK_SIZE: usize = 3;

pub const NUM_CELLS: usize = GRID_SIZE * GRID_SIZE;

/// timed repetitions of the 81 cell sweep
pub const NUM_ITERATIONS: u64 = 10_000_000;

pub const WARMUP_PASSES: usize = 20;

/// Sum of the block index over every cell of the grid.
/// each block index appears 9 times: 9 * (0 + 1 + ... + 8)
pub const fn block_index_sum() -> u64 {
    let mut sum = 0_u64;
    let mut block = 0_u64;
    while block < GRID_SIZE as u64 {
        sum += block * (BLOCK_SIZE * BLOCK_SIZE) as u64;
        block += 1;
    }
    sum
}
