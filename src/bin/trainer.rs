//! Train a CFR shard set and write one binary `Strat` file per shard.

use anyhow::{Context, Result};
use clap::Parser;
use pitch_cfr::cfr::{train, TrainingStats};
use pitch_cfr::strategy::dump_shard;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "train CFR shards for the bid-and-play card game")]
struct Args {
    /// number of shards (and OS threads); defaults to the available cores.
    #[arg(long, default_value_t = num_cpus::get())]
    threads: usize,

    /// dealt hands per shard.
    #[arg(long, default_value_t = 100_000)]
    iterations: usize,

    /// output path; shard `s` is written to `<output>.<s>`.
    #[arg(long)]
    output: PathBuf,

    #[arg(long, default_value_t = 1)]
    seed: u32,

    /// hash-table buckets per shard.
    #[arg(long, default_value_t = pitch_cfr::NODE_QTY)]
    buckets: usize,
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
    log::info!(
        "training: threads={} iterations={} buckets/shard={} seed={}",
        args.threads,
        args.iterations,
        args.buckets,
        args.seed
    );

    let (table, stats) = train(args.threads, args.iterations, args.buckets, args.seed);
    log::info!("{}", stats.summary());

    for (shard, buckets) in table.chunks(args.buckets).enumerate() {
        let path = args.output.with_extension(shard.to_string());
        dump_shard(buckets, &path).with_context(|| format!("writing shard file {}", path.display()))?;
        log::info!("wrote shard {shard} to {}", path.display());
    }

    Ok(())
}
