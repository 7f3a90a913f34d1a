//! u-lottery: simulate lottery scheduling over a process list file.
//!
//! # Usage
//!
//! ```bash
//! u-lottery processes.txt
//! RUST_LOG=debug u-lottery processes.txt
//! ```

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use u_lottery::input::read_processes;
use u_lottery::logger;
use u_lottery::report::Report;
use u_lottery::scheduler::LotteryScheduler;

/// Simulate lottery CPU scheduling and print per-process timings.
#[derive(Parser, Debug)]
#[command(name = "u-lottery", version)]
struct Cli {
    /// Input file: one "arrival burst" pair per line.
    input: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logger::init();

    let records = read_processes(&cli.input)
        .with_context(|| format!("failed to load processes from '{}'", cli.input.display()))?;

    let outcome = LotteryScheduler::new()
        .simulate(records)
        .context("simulation input rejected")?;

    print!("{}", Report::new(&outcome));
    Ok(())
}
