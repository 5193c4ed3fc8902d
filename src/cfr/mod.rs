//! The CFR+ trainer: sharded chained hash table of information-set nodes,
//! vanilla-CFR recursion over the fully explored game tree, and the
//! thread-per-shard training loop.

pub mod node;
pub mod recurse;
pub mod stats;
pub mod trainer;

pub use node::{bucket_index, get_or_create, walk_buckets, Node};
pub use recurse::{recurse, update_strategy};
pub use stats::{Stats, TrainingStats};
pub use trainer::train;
