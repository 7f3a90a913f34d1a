//! gen_workload: write random process list files for the simulator.
//!
//! # Usage
//!
//! ```bash
//! gen_workload --first 9 --last 30 --out-dir cases --seed 7
//! ```
//!
//! Writes `testcase<N>.txt` for every N in `first..=last`.

use std::fs;
use std::path::PathBuf;

use anyhow::{ensure, Context};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use u_lottery::logger;
use u_lottery::workload::{render_input, WorkloadProfile};

/// Generate random "arrival burst" input files.
#[derive(Parser, Debug)]
#[command(name = "gen_workload")]
struct Cli {
    /// Number of the first file.
    #[arg(long, default_value_t = 1)]
    first: u32,

    /// Number of the last file (inclusive).
    #[arg(long, default_value_t = 10)]
    last: u32,

    /// Output directory.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// RNG seed (random if not set).
    #[arg(long)]
    seed: Option<u64>,

    /// Maximum processes per file.
    #[arg(long, default_value_t = 50)]
    max_processes: usize,

    /// Latest arrival time.
    #[arg(long, default_value_t = 50)]
    max_arrival: u64,

    /// Longest burst time.
    #[arg(long, default_value_t = 50)]
    max_burst: u64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logger::init();

    ensure!(cli.first <= cli.last, "--first must not exceed --last");
    let profile = WorkloadProfile {
        max_processes: cli.max_processes,
        max_arrival: cli.max_arrival,
        max_burst: cli.max_burst,
        ..Default::default()
    };
    profile.check().map_err(u_lottery::Error::from)?;

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    fs::create_dir_all(&cli.out_dir)
        .with_context(|| format!("failed to create '{}'", cli.out_dir.display()))?;

    for n in cli.first..=cli.last {
        let records = profile.generate(&mut rng);
        let path = cli.out_dir.join(format!("testcase{n}.txt"));
        fs::write(&path, render_input(&records))
            .with_context(|| format!("failed to write '{}'", path.display()))?;
        log::info!("wrote {} processes to '{}'", records.len(), path.display());
    }

    Ok(())
}
