use super::node::{walk_buckets, Node};
use super::recurse::recurse;
use super::stats::{Stats, TrainingStats};
use crate::gameplay::State;
use crate::SEED_STRIDE;
use std::time::Duration;

const PROGRESS_INTERVAL: Duration = Duration::from_secs(5);

/// train `shards` independent CFR shards in parallel, each holding
/// `bucket_count` hash-table buckets, for `iterations` dealt hands apiece.
/// One OS thread per shard, each exclusively owning its slice of the
/// backing array. No locks, no shared mutable state beyond the slice
/// boundary itself.
pub fn train(shards: usize, iterations: usize, bucket_count: usize, base_seed: u32) -> (Vec<Option<Box<Node>>>, Stats) {
    let mut table: Vec<Option<Box<Node>>> = (0..shards * bucket_count).map(|_| None).collect();
    let stats = Stats::new();

    std::thread::scope(|scope| {
        for (shard, buckets) in table.chunks_mut(bucket_count).enumerate() {
            let stats = &stats;
            scope.spawn(move || run_shard(buckets, shard as u32, iterations, base_seed, stats));
        }
    });

    (table, stats)
}

fn run_shard(buckets: &mut [Option<Box<Node>>], shard: u32, iterations: usize, base_seed: u32, stats: &Stats) {
    let shard_seed = base_seed.wrapping_add(shard * SEED_STRIDE);
    let mut infos_this_shard = 0usize;

    for i in 0..iterations {
        let seed = shard_seed.wrapping_add(i as u32);
        let dealer = ((seed >> 3) & 1) as u8;
        let state = State::deal(seed, dealer);

        recurse(state.clone(), 0, buckets);
        recurse(state, 1, buckets);

        infos_this_shard += 1;
        if let Some(line) = stats.checkpoint(PROGRESS_INTERVAL) {
            log::info!("shard {shard}: {line}");
        }
    }

    stats.add_epoch(iterations);
    stats.add_infos(infos_this_shard);
    stats.add_nodes(walk_buckets(buckets).count());
}
