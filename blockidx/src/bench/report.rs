use std::{
    fmt,
    io::{self, Write},
    time::Duration,
};

use crate::util::GRID_SIZE;

/// Outcome of benchmarking one strategy. Rendered once, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkResult {
    pub name: &'static str,
    pub grid: [[usize; GRID_SIZE]; GRID_SIZE],
    pub sum: u64,
    /// wall clock time of the timed pass only
    pub elapsed: Duration,
    pub iterations: u64,
}

impl BenchmarkResult {
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    pub fn write_report<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{}", self)
    }
}

impl fmt::Display for BenchmarkResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        for row in &self.grid {
            let line = row
                .iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "{}", line)?;
        }
        writeln!(f, "Summation:\t\t\t\t{}", self.sum)?;
        writeln!(
            f,
            "{} iterations:\t{:.3}s",
            self.iterations,
            self.elapsed_secs()
        )
    }
}
