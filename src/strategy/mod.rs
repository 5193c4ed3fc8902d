//! The on-disk `Strat` format, external-memory sort + k-way merge, and the
//! binary-search query path used at play/evaluation time.

pub mod merge;
pub mod query;
pub mod record;
pub mod sort;
pub mod validate;
pub mod writer;

pub use merge::kway_merge;
pub use query::{get_best_action, load_strategy, MISS};
pub use record::{Strat, RECORD_SIZE};
pub use sort::sort_file_in_place;
pub use validate::validate;
pub use writer::dump_shard;
