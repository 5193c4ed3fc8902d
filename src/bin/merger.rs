//! Sort and k-way merge a set of shard `Strat` files into one policy file.

use anyhow::{Context, Result};
use clap::Parser;
use pitch_cfr::strategy::{kway_merge, sort_file_in_place};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "merge CFR shard files into one strategy file")]
struct Args {
    #[arg(long)]
    output: PathBuf,

    /// reserved for future visit-count pruning; currently ignored.
    #[arg(long, default_value_t = 0)]
    min_visits: u64,

    #[arg(required = true)]
    inputs: Vec<PathBuf>,
}

fn main() {
    pitch_cfr::init();
    if let Err(err) = run() {
        log::error!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();
    if args.min_visits > 0 {
        log::warn!("--min-visits is reserved for future pruning and is currently ignored");
    }

    for path in &args.inputs {
        log::info!("sorting {}", path.display());
        sort_file_in_place(path).with_context(|| format!("sorting {}", path.display()))?;
    }

    log::info!("merging {} files into {}", args.inputs.len(), args.output.display());
    kway_merge(&args.inputs, &args.output).context("k-way merge")?;
    log::info!("wrote {}", args.output.display());
    Ok(())
}
