use super::record::{Strat, RECORD_SIZE};
use crate::MAX_ACTIONS;
use std::path::Path;

/// one validator finding: a fatal misalignment aborts the tool, everything
/// else is a warning the caller logs and continues past.
#[derive(Debug)]
pub enum Finding {
    SizeMisaligned { size: u64 },
    ActionCountOutOfRange { index: usize, action_count: u8 },
    StrategyNotNormalized { index: usize, sum: f32 },
}

/// `file_size mod sizeof(Strat) == 0` is checked up front and is the only
/// fatal condition; per-record `action_count`/normalization problems are
/// collected and reported but don't stop validation.
pub fn validate(path: &Path) -> std::io::Result<Vec<Finding>> {
    let size = std::fs::metadata(path)?.len();
    if size % RECORD_SIZE as u64 != 0 {
        return Ok(vec![Finding::SizeMisaligned { size }]);
    }

    let records = super::sort::load_records(path)?;
    let mut findings = Vec::new();
    for (index, record) in records.iter().enumerate() {
        if record.action_count as usize > MAX_ACTIONS {
            findings.push(Finding::ActionCountOutOfRange {
                index,
                action_count: record.action_count,
            });
            continue;
        }
        let sum = record.strategy_sum();
        if !(0.99..=1.01).contains(&sum) {
            findings.push(Finding::StrategyNotNormalized { index, sum });
        }
    }
    Ok(findings)
}

pub fn is_fatal(findings: &[Finding]) -> bool {
    findings.iter().any(|f| matches!(f, Finding::SizeMisaligned { .. }))
}

pub fn print_record(record: &Strat) {
    let count = record.action_count as usize;
    println!(
        "key={:02x?} actions={:?} strategy={:?}",
        record.key,
        &record.action[..count],
        &record.strategy[..count]
    );
}
