use super::record::{Strat, RECORD_SIZE};
use rayon::prelude::*;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// load an entire shard file into memory as `Strat` records.
pub fn load_records(path: &Path) -> std::io::Result<Vec<Strat>> {
    let file = File::open(path)?;
    let size = file.metadata()?.len() as usize;
    assert_eq!(size % RECORD_SIZE, 0, "shard file size not a multiple of record size");
    let count = size / RECORD_SIZE;

    let mut reader = BufReader::new(file);
    let mut records = Vec::with_capacity(count);
    let mut buf = vec![0u8; size];
    reader.read_exact(&mut buf)?;
    let mut cursor = std::io::Cursor::new(buf);
    for _ in 0..count {
        records.push(Strat::read_from(&mut cursor)?);
    }
    Ok(records)
}

pub fn write_records(path: &Path, records: &[Strat]) -> std::io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for record in records {
        record.write_to(&mut writer)?;
    }
    writer.flush()
}

/// phase 1 of the merge: load one shard file fully into memory, sort it
/// under the records' total order, and write it back in place. Exactly one
/// file resident at a time; files too large for RAM are out of scope.
/// The sort itself parallelizes across cores via `rayon`; the "one file at
/// a time" resource discipline is about I/O, not CPU.
pub fn sort_file_in_place(path: &Path) -> std::io::Result<()> {
    let mut records = load_records(path)?;
    records.par_sort_unstable_by(|a, b| a.order(b));
    write_records(path, &records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{KEY_BYTES, MAX_ACTIONS};

    fn strat(key_byte: u8) -> Strat {
        Strat {
            key: [key_byte; KEY_BYTES],
            action_count: 1,
            action: [0x88, 0, 0, 0, 0, 0, 0, 0],
            strategy: [1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        }
    }

    #[test]
    fn sort_file_in_place_orders_by_key() {
        let dir = std::env::temp_dir().join(format!("pitch-cfr-sort-test-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("shard.bin");
        write_records(&path, &[strat(9), strat(3), strat(7)]).unwrap();

        sort_file_in_place(&path).unwrap();

        let sorted = load_records(&path).unwrap();
        let keys: Vec<u8> = sorted.iter().map(|s| s.key[0]).collect();
        assert_eq!(keys, vec![3, 7, 9]);
        let _ = MAX_ACTIONS;
    }
}
