use super::record::Strat;
use crate::cfr::{walk_buckets, Node};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// serialize every node in a trained shard table to one binary file: each
/// bucket's chain walked in prepend order, one fixed-size `Strat` record
/// per node, no delimiter and no header.
pub fn dump_shard(buckets: &[Option<Box<Node>>], path: &Path) -> std::io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for node in walk_buckets(buckets) {
        Strat::from_node(node).write_to(&mut writer)?;
    }
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cfr::get_or_create;
    use crate::strategy::sort::load_records;
    use crate::KEY_BYTES;

    #[test]
    fn dump_shard_writes_one_record_per_node() {
        let mut buckets: Vec<Option<Box<Node>>> = (0..64).map(|_| None).collect();
        {
            let node = get_or_create(&mut buckets, [1u8; KEY_BYTES], &[0x88, 0x21]);
            node.strategy_sum[0] = 3.0;
            node.strategy_sum[1] = 1.0;
        }
        {
            let node = get_or_create(&mut buckets, [2u8; KEY_BYTES], &[0x41]);
            // never visited: strategy_sum stays zero, falls back to uniform.
            let _ = node;
        }

        let dir = std::env::temp_dir().join(format!("pitch-cfr-writer-test-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("shard.bin");
        dump_shard(&buckets, &path).unwrap();

        let records = load_records(&path).unwrap();
        assert_eq!(records.len(), 2);
        let visited = records.iter().find(|r| r.key[0] == 1).unwrap();
        assert!((visited.strategy[0] - 0.75).abs() < 1e-6);
        assert!((visited.strategy[1] - 0.25).abs() < 1e-6);
        let unvisited = records.iter().find(|r| r.key[0] == 2).unwrap();
        assert!((unvisited.strategy[0] - 1.0).abs() < 1e-6);
    }
}
