use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// shared accessors for reporting training progress, independent of how a
/// particular trainer accumulates the numbers underneath.
pub trait TrainingStats {
    fn epoch(&self) -> usize;
    fn nodes(&self) -> usize;
    fn infos(&self) -> usize;
    fn elapsed(&self) -> Duration;
    fn format(&self) -> String {
        let rate = self.infos() as f64 / self.elapsed().as_secs_f64().max(1.0);
        format!(
            "epoch {:<10} nodes {:<10} infos {:<10} infos/sec {:.1}",
            self.epoch(),
            self.nodes(),
            self.infos(),
            rate
        )
    }
    fn summary(&self) -> String {
        format!("training stopped\n{}", self.format())
    }
}

/// cross-shard training counters. Shards only ever call `add_*` from their
/// own thread at shard-completion (no hot-path contention); `checkpoint`
/// lets the trainer binary log progress at a bounded rate.
pub struct Stats {
    epoch: AtomicUsize,
    nodes: AtomicUsize,
    infos: AtomicUsize,
    start: Instant,
    checked: Mutex<Instant>,
}

impl Stats {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            epoch: AtomicUsize::new(0),
            nodes: AtomicUsize::new(0),
            infos: AtomicUsize::new(0),
            start: now,
            checked: Mutex::new(now),
        }
    }

    pub fn add_epoch(&self, n: usize) {
        self.epoch.fetch_add(n, Ordering::Relaxed);
    }
    pub fn add_nodes(&self, n: usize) {
        self.nodes.fetch_add(n, Ordering::Relaxed);
    }
    pub fn add_infos(&self, n: usize) {
        self.infos.fetch_add(n, Ordering::Relaxed);
    }

    /// returns a progress line at most once per `interval`.
    pub fn checkpoint(&self, interval: Duration) -> Option<String> {
        let mut last = self.checked.lock().expect("stats checkpoint mutex poisoned");
        if last.elapsed() >= interval {
            *last = Instant::now();
            Some(self.format())
        } else {
            None
        }
    }
}

impl Default for Stats {
    fn default() -> Self {
        Self::new()
    }
}

impl TrainingStats for Stats {
    fn epoch(&self) -> usize {
        self.epoch.load(Ordering::Relaxed)
    }
    fn nodes(&self) -> usize {
        self.nodes.load(Ordering::Relaxed)
    }
    fn infos(&self) -> usize {
        self.infos.load(Ordering::Relaxed)
    }
    fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}
