/// percolation-check - Open the sites listed in a file and report the grid
///
/// The input holds the grid size followed by `row col` pairs (1-based). The
/// sites are opened in file order and the resulting open count and
/// percolation state are printed, optionally with a text rendering of the grid.
use anyhow::{Context, Result};
use clap::Parser;
use log::{info, LevelFilter};

use percolation::read_sites;

#[derive(Parser)]
#[clap(
    name = "percolation-check",
    about = "Open the sites listed in a file and report whether the grid percolates"
)]
struct Args {
    /// Site file: grid size, then one `row col` pair per site
    file: String,

    /// Print the grid ('#' blocked, '.' open, '~' full)
    #[clap(short = 'r', long)]
    render: bool,

    /// Quiet mode (warnings and errors only)
    #[clap(short = 'q', long = "quiet", conflicts_with = "verbose")]
    quiet: bool,

    /// Trace flood fills and the percolation latch
    #[clap(short = 'v', long = "verbose")]
    verbose: bool,
}

fn init_logger(quiet: bool, verbose: bool) {
    let level = match (quiet, verbose) {
        (true, _) => LevelFilter::Warn,
        (_, true) => LevelFilter::Trace,
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

    let list = read_sites(&args.file)
        .with_context(|| format!("Failed to read site file: {}", args.file))?;
    info!(
        "Opening {} sites on a {}x{} grid",
        list.sites.len(),
        list.size,
        list.size
    );

    let grid = list
        .build()
        .with_context(|| format!("Invalid site list in {}", args.file))?;

    println!("{:<10} = {}", "size", grid.size());
    println!("{:<10} = {}", "open sites", grid.number_of_open_sites());
    println!("{:<10} = {}", "percolates", grid.percolates());
    if args.render {
        print!("{grid}");
    }

    Ok(())
}
