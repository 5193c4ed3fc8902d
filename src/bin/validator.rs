//! Check a strategy file's structural integrity: record alignment,
//! per-record action counts, and strategy normalization.

use anyhow::{Context, Result};
use clap::Parser;
use pitch_cfr::strategy::validate::{is_fatal, print_record, Finding};
use pitch_cfr::strategy::{load_strategy, validate};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "validate a merged CFR strategy file")]
struct Args {
    #[arg(long)]
    strategy: PathBuf,

    #[arg(long, default_value_t = false)]
    print_nodes: bool,
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
    let findings = validate(&args.strategy).with_context(|| format!("reading {}", args.strategy.display()))?;

    for finding in &findings {
        match finding {
            Finding::SizeMisaligned { size } => {
                log::error!("{} is not a whole number of records ({size} bytes)", args.strategy.display());
            }
            Finding::ActionCountOutOfRange { index, action_count } => {
                log::warn!("record {index}: action_count {action_count} exceeds MAX_ACTIONS");
            }
            Finding::StrategyNotNormalized { index, sum } => {
                log::warn!("record {index}: strategy sums to {sum:.4}, outside [0.99, 1.01]");
            }
        }
    }

    if is_fatal(&findings) {
        std::process::exit(1);
    }

    if args.print_nodes {
        let records = load_strategy(&args.strategy)?;
        for record in &records {
            print_record(record);
        }
    }

    log::info!("{} passed validation ({} findings)", args.strategy.display(), findings.len());
    Ok(())
}
