use super::record::{Strat, RECORD_SIZE};
use crate::abstraction::{build_key, Key};
use crate::gameplay::{legal_actions, State};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// the reserved action byte a miss is reported with: it can never collide
/// with a real bid (`0..=3`) or play class (`>=0x21`).
pub const MISS: u8 = 0xff;

/// load a merged strategy file in one read, assuming it fits in memory
/// (the reference tool's own assumption).
pub fn load_strategy(path: &Path) -> std::io::Result<Vec<Strat>> {
    let file = File::open(path)?;
    let size = file.metadata()?.len() as usize;
    assert_eq!(size % RECORD_SIZE, 0, "strategy file size not a multiple of record size");
    let count = size / RECORD_SIZE;
    let mut reader = BufReader::new(file);
    let mut buf = vec![0u8; size];
    reader.read_exact(&mut buf)?;
    let mut cursor = std::io::Cursor::new(buf);
    let mut records = Vec::with_capacity(count);
    for _ in 0..count {
        records.push(Strat::read_from(&mut cursor)?);
    }
    Ok(records)
}

/// every record sharing `key`, found via a binary search over the file's
/// key-sorted order then widened to the surrounding run of equal keys
/// (abstraction collisions can legitimately stack distinct action-sets
/// under one key).
fn find_nodes<'a>(buf: &'a [Strat], key: &Key) -> &'a [Strat] {
    let Ok(found) = buf.binary_search_by(|record| record.key.cmp(key)) else {
        return &[];
    };
    let mut lo = found;
    while lo > 0 && &buf[lo - 1].key == key {
        lo -= 1;
    }
    let mut hi = found + 1;
    while hi < buf.len() && &buf[hi].key == key {
        hi += 1;
    }
    &buf[lo..hi]
}

/// build the key for `state`, look it up, and return the legal action with
/// the highest strategy weight, re-checking legality against the current
/// state since the abstraction may advertise actions the live hand can't
/// back. Returns `MISS` if the key isn't present at all.
pub fn get_best_action(buf: &[Strat], state: &State) -> u8 {
    let key = build_key(state);
    let legal: Vec<u8> = legal_actions(state).iter().map(|a| a.to_byte()).collect();

    let mut best: Option<(u8, f32)> = None;
    for node in find_nodes(buf, &key) {
        for i in 0..node.action_count as usize {
            let action = node.action[i];
            if !legal.contains(&action) {
                continue;
            }
            let weight = node.strategy[i];
            if best.map_or(true, |(_, best_weight)| weight > best_weight) {
                best = Some((action, weight));
            }
        }
    }

    best.map(|(action, _)| action).unwrap_or(MISS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::sort::{sort_file_in_place, write_records};
    use crate::{KEY_BYTES, MAX_ACTIONS};

    #[test]
    fn lookup_miss_returns_the_sentinel() {
        let dir = std::env::temp_dir().join(format!("pitch-cfr-query-miss-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("strategy.bin");
        write_records(&path, &[]).unwrap();
        let buf = load_strategy(&path).unwrap();
        let state = State::deal(1, 0);
        assert_eq!(get_best_action(&buf, &state), MISS);
    }

    #[test]
    fn find_nodes_widens_across_a_run_of_equal_keys() {
        let dir = std::env::temp_dir().join(format!("pitch-cfr-query-run-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("strategy.bin");
        let mut action_a = [0u8; MAX_ACTIONS];
        action_a[0] = 0x88;
        let mut action_b = [0u8; MAX_ACTIONS];
        action_b[0] = 0x21;
        let records = vec![
            Strat {
                key: [4u8; KEY_BYTES],
                action_count: 1,
                action: action_a,
                strategy: [1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            },
            Strat {
                key: [4u8; KEY_BYTES],
                action_count: 1,
                action: action_b,
                strategy: [1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            },
        ];
        write_records(&path, &records).unwrap();
        sort_file_in_place(&path).unwrap();
        let buf = load_strategy(&path).unwrap();
        assert_eq!(find_nodes(&buf, &[4u8; KEY_BYTES]).len(), 2);
    }
}
