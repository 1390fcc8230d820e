// Time four ways of finding the 3x3 block of a sudoku cell.
//
// ./target/release/block-index-benchmark
// RUST_LOG=debug ./target/release/block-index-benchmark   # warmup totals on stderr

use std::{
    ffi::OsString,
    io::{self, BufWriter},
};

use anyhow::Context;
use blockidx::{
    bench::{self, BenchConfig},
    strategy,
};
use clap::{Parser, error::ErrorKind};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Invocation {
    Run,
    /// help or version was printed
    Exit,
}

/// Nothing on the command line is configurable; unexpected arguments are
/// logged and ignored so the benchmark always runs.
fn invocation<I, T>(args: I) -> anyhow::Result<Invocation>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(_) => Ok(Invocation::Run),
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                err.print().context("print usage")?;
                Ok(Invocation::Exit)
            }
            _ => {
                log::warn!("ignoring command line: {}", err.render());
                Ok(Invocation::Run)
            }
        },
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    if invocation(std::env::args_os())? == Invocation::Exit {
        return Ok(());
    }

    strategy::check_equivalence().context("block index strategies disagree")?;

    let config = BenchConfig::default();
    log::info!(
        "iterations:{}, warmup_passes:{}",
        config.iterations,
        config.warmup_passes
    );

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    bench::run_all(&config, &mut out)?;
    Ok(())
}
