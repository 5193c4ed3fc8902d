//! Collapses a full game state into the 15-byte information-set key used to
//! index the CFR hash table.

pub mod bucket;
pub mod key;

pub use bucket::{action_bucket, history_bucket, HistoryBucket};
pub use key::{build_key, fnv1a, Key};
