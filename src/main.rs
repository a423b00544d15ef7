use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;

use percolation::StatsConfig;

/// percolation-stats - Monte Carlo estimate of the percolation threshold
///
/// Runs TRIALS independent experiments on an N-by-N grid, opening random sites
/// until the system percolates, and prints the mean, standard deviation and
/// 95% confidence interval of the fraction of open sites.
#[derive(Parser, Debug)]
#[clap(name = "percolation-stats", author, version, about, long_about = None)]
struct Args {
    /// Grid side length, must be >= 1
    #[clap(value_name = "N")]
    size: usize,

    /// Number of independent trials, must be >= 1
    #[clap(value_name = "TRIALS")]
    trials: usize,

    /// Seed for the random site order (fresh entropy if not specified)
    #[clap(long = "seed")]
    seed: Option<u64>,

    /// Quiet mode (warnings and errors only)
    #[clap(short = 'q', long = "quiet", conflicts_with = "verbose")]
    quiet: bool,

    /// Log every trial
    #[clap(short = 'v', long = "verbose")]
    verbose: bool,
}

fn init_logger(quiet: bool, verbose: bool) {
    let level = match (quiet, verbose) {
        (true, _) => LevelFilter::Warn,
        (_, true) => LevelFilter::Debug,
        _ => LevelFilter::Info,
    };
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(level.as_str()),
    )
    .format_timestamp(None)
    .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.quiet, args.verbose);

    let mut config = StatsConfig::new(args.size, args.trials)?;
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let stats = config.run().with_context(|| {
        format!(
            "Failed to run {} trials on a {}x{} grid",
            args.trials, args.size, args.size
        )
    })?;

    println!("{stats}");
    Ok(())
}
