use std::{hint::black_box, io::Write, time::Instant};

use anyhow::Context;

use crate::{
    strategy::Strategy,
    util::{GRID_SIZE, NUM_CELLS, NUM_ITERATIONS, WARMUP_PASSES},
};

pub mod report;

pub use report::BenchmarkResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchConfig {
    /// repetitions of the 81 cell sweep inside the timed pass
    pub iterations: u64,
    /// untimed passes run before the timed one, each of `iterations` sweeps
    pub warmup_passes: usize,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            iterations: NUM_ITERATIONS,
            warmup_passes: WARMUP_PASSES,
        }
    }
}

/// Sum `indexer(cell)` over all 81 cells, `iterations` times.
///
/// The cell index goes through `black_box` so the sweep can't be folded into a
/// constant and hoisted out of the outer loop.
#[inline]
pub fn summation<F>(indexer: F, iterations: u64) -> u64
where
    F: Fn(usize) -> usize,
{
    let mut sum = 0_u64;
    for _ in 0..iterations {
        for cell in 0..NUM_CELLS {
            sum += indexer(black_box(cell)) as u64;
        }
    }
    sum
}

/// row `i`, column `j` holds the block index of cell `9 * i + j`
pub fn grid(strategy: Strategy) -> [[usize; GRID_SIZE]; GRID_SIZE] {
    let mut grid = [[0; GRID_SIZE]; GRID_SIZE];
    grid.iter_mut().enumerate().for_each(|(i, row)| {
        row.iter_mut().enumerate().for_each(|(j, v)| {
            *v = strategy.block_index(GRID_SIZE * i + j);
        });
    });
    grid
}

/// Dump the grid, warm up, then time a single pass of `config.iterations` sweeps.
pub fn run(strategy: Strategy, config: &BenchConfig) -> BenchmarkResult {
    let grid = grid(strategy);

    if config.warmup_passes > 0 {
        let mut warmup = 0_u64;
        (0..config.warmup_passes).for_each(|_| {
            warmup = warmup.wrapping_add(strategy.summation(black_box(config.iterations)));
        });
        let warmup = black_box(warmup);
        log::debug!(
            "{strategy}: warmup passes:{}, summation:{warmup}",
            config.warmup_passes
        );
    }

    let instant = Instant::now();
    let sum = strategy.summation(black_box(config.iterations));
    let elapsed = instant.elapsed();
    black_box(sum);

    log::info!(
        "{strategy}: iterations:{}, elapsed:{:.3}s",
        config.iterations,
        elapsed.as_secs_f64()
    );

    BenchmarkResult {
        name: strategy.name(),
        grid,
        sum,
        elapsed,
        iterations: config.iterations,
    }
}

/// Benchmark every strategy in [`Strategy::ALL`] order, writing each report to
/// `out` as soon as it is ready. Reports are separated by a blank line.
pub fn run_all<W>(config: &BenchConfig, out: &mut W) -> anyhow::Result<Vec<BenchmarkResult>>
where
    W: Write,
{
    let mut results = Vec::with_capacity(Strategy::ALL.len());
    for (idx, strategy) in Strategy::ALL.into_iter().enumerate() {
        if idx > 0 {
            writeln!(out).context("write separator")?;
        }
        log::debug!("benchmarking {strategy}");
        let result = run(strategy, config);
        result
            .write_report(out)
            .with_context(|| format!("write report of {strategy}"))?;
        out.flush().context("flush report")?;
        results.push(result);
    }
    Ok(results)
}
