use crate::gameplay::RankBucket;

/// the finer 5-bucket rank classification used only by the key builder's
/// history and in-hand counters (§6). Distinct from `gameplay::RankBucket`,
/// the 4-bucket classification legal *actions* are grouped by; the two are
/// never interchangeable, and mixing them up would corrupt the key layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryBucket {
    High,
    Jack,
    Ten,
    Medium,
    Low,
}

pub fn history_bucket(rank: u8) -> HistoryBucket {
    match rank {
        12..=14 => HistoryBucket::High,
        11 => HistoryBucket::Jack,
        10 => HistoryBucket::Ten,
        5..=9 => HistoryBucket::Medium,
        2..=4 => HistoryBucket::Low,
        r => panic!("rank out of range: {r}"),
    }
}

/// the 4-bucket classification `gameplay::legal_plays` groups cards by,
/// re-exported here under the abstraction module's naming so call sites
/// that only care about "which bucket scheme does the key use" read
/// unambiguously against `history_bucket` above.
pub fn action_bucket(rank: u8) -> RankBucket {
    RankBucket::of(rank)
}
