use super::record::Strat;
use crate::MAX_ACTIONS;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

struct Stream {
    reader: BufReader<File>,
    head: Option<Strat>,
}

impl Stream {
    fn open(path: &Path) -> std::io::Result<Self> {
        let mut reader = BufReader::new(File::open(path)?);
        let head = Strat::read_from(&mut reader).ok();
        Ok(Self { reader, head })
    }

    fn advance(&mut self) {
        self.head = Strat::read_from(&mut self.reader).ok();
    }
}

fn same_group(a: &Strat, b: &Strat) -> bool {
    a.key == b.key && a.action_count == b.action_count && a.action == b.action
}

struct Group {
    representative: Strat,
    accumulator: [f32; MAX_ACTIONS],
    count: u32,
}

impl Group {
    fn start(record: Strat) -> Self {
        let mut accumulator = [0.0f32; MAX_ACTIONS];
        let count = record.action_count as usize;
        accumulator[..count].copy_from_slice(&record.strategy[..count]);
        Group {
            representative: record,
            accumulator,
            count: 1,
        }
    }

    fn absorb(&mut self, record: &Strat) {
        let count = record.action_count as usize;
        for i in 0..count {
            self.accumulator[i] += record.strategy[i];
        }
        self.count += 1;
    }

    fn flush<W: Write>(self, w: &mut W) -> std::io::Result<()> {
        let mut record = self.representative;
        let count = record.action_count as usize;
        let n = self.count as f32;
        for i in 0..count {
            record.strategy[i] = self.accumulator[i] / n;
        }
        record.write_to(w)
    }
}

/// phase 2 of the merge: open every sorted shard file as a stream with one
/// record pre-buffered, repeatedly advance the stream whose head is
/// lex-least, and fold matching `(key, action_count, action[])` groups into
/// a single record whose strategy is the elementwise arithmetic mean of the
/// group's occurrences (not visit-weighted; `Strat` doesn't persist
/// visits, a deliberate information loss noted in DESIGN.md).
pub fn kway_merge(inputs: &[std::path::PathBuf], output: &Path) -> std::io::Result<()> {
    let mut streams: Vec<Stream> = inputs.iter().map(|p| Stream::open(p)).collect::<Result<_, _>>()?;
    let mut writer = BufWriter::new(File::create(output)?);
    let mut group: Option<Group> = None;

    loop {
        let min_idx = streams
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.head.map(|h| (i, h)))
            .min_by(|(_, a), (_, b)| a.order(b))
            .map(|(i, _)| i);

        let Some(idx) = min_idx else { break };
        let record = streams[idx].head.expect("stream head checked above");

        match &mut group {
            Some(g) if same_group(&g.representative, &record) => g.absorb(&record),
            _ => {
                if let Some(finished) = group.take() {
                    finished.flush(&mut writer)?;
                }
                group = Some(Group::start(record));
            }
        }

        streams[idx].advance();
    }

    if let Some(finished) = group.take() {
        finished.flush(&mut writer)?;
    }
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::sort::write_records;
    use crate::KEY_BYTES;

    fn strat(key_byte: u8, strategy: [f32; 2]) -> Strat {
        let mut full = [0.0f32; MAX_ACTIONS];
        full[..2].copy_from_slice(&strategy);
        Strat {
            key: [key_byte; KEY_BYTES],
            action_count: 2,
            action: [0x88, 0x21, 0, 0, 0, 0, 0, 0],
            strategy: full,
        }
    }

    #[test]
    fn duplicate_keys_average_arithmetically() {
        let dir = std::env::temp_dir().join(format!("pitch-cfr-merge-test-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let a = dir.join("a.bin");
        let b = dir.join("b.bin");
        let out = dir.join("merged.bin");

        write_records(&a, &[strat(5, [0.7, 0.3])]).unwrap();
        write_records(&b, &[strat(5, [0.5, 0.5])]).unwrap();

        kway_merge(&[a, b], &out).unwrap();

        let merged = crate::strategy::sort::load_records(&out).unwrap();
        assert_eq!(merged.len(), 1);
        assert!((merged[0].strategy[0] - 0.6).abs() < 1e-6);
        assert!((merged[0].strategy[1] - 0.4).abs() < 1e-6);
    }

    #[test]
    fn merge_output_is_sorted_and_collapses_identical_files() {
        let dir = std::env::temp_dir().join(format!("pitch-cfr-merge-idem-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let a = dir.join("a.bin");
        let b = dir.join("b.bin");
        let out = dir.join("merged.bin");
        let records = vec![strat(1, [1.0, 0.0]), strat(9, [0.2, 0.8])];
        write_records(&a, &records).unwrap();
        write_records(&b, &records).unwrap();

        kway_merge(&[a, b], &out).unwrap();

        let merged = crate::strategy::sort::load_records(&out).unwrap();
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].key[0], 1);
        assert_eq!(merged[1].key[0], 9);
        assert!((merged[0].strategy[0] - 1.0).abs() < 1e-6);
    }
}
