use crate::abstraction::Key;
use crate::cfr::Node;
use crate::{KEY_BYTES, MAX_ACTIONS};
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::cmp::Ordering;
use std::io::{self, Read, Write};

/// on-disk size of one `Strat` record: 15-byte key, 1-byte action count,
/// `MAX_ACTIONS` action bytes, `MAX_ACTIONS` little-endian f32 strategy
/// weights. Fixed, unpadded, and independent of the host's native
/// alignment. This is the one place endianness is pinned explicitly
/// (little-endian), unlike the rest of this crate's binary I/O idiom.
pub const RECORD_SIZE: usize = KEY_BYTES + 1 + MAX_ACTIONS + MAX_ACTIONS * 4;

/// the trainer's serialized average strategy for one information set: not
/// regrets, the time-averaged mixed policy CFR converges to.
#[derive(Debug, Clone, Copy)]
pub struct Strat {
    pub key: Key,
    pub action_count: u8,
    pub action: [u8; MAX_ACTIONS],
    pub strategy: [f32; MAX_ACTIONS],
}

impl Strat {
    /// collapse a trained node's `strategy_sum` into the averaged policy
    /// this record stores. Falls back to uniform if the node was created
    /// but never actually visited (`strategy_sum` all zero).
    pub fn from_node(node: &Node) -> Self {
        let count = node.action_count as usize;
        let total: f32 = node.strategy_sum[..count].iter().sum();
        let mut strategy = [0.0f32; MAX_ACTIONS];
        if total > 0.0 {
            for i in 0..count {
                strategy[i] = node.strategy_sum[i] / total;
            }
        } else {
            let uniform = 1.0 / count as f32;
            strategy[..count].fill(uniform);
        }
        Strat {
            key: node.key,
            action_count: node.action_count,
            action: node.action,
            strategy,
        }
    }

    /// total order records are sorted under: key bytes lex, then
    /// action_count, then the action array lex.
    pub fn order(&self, other: &Self) -> Ordering {
        self.key
            .cmp(&other.key)
            .then(self.action_count.cmp(&other.action_count))
            .then(self.action.cmp(&other.action))
    }

    pub fn write_to<W: Write>(&self, w: &mut W) -> io::Result<()> {
        w.write_all(&self.key)?;
        w.write_u8(self.action_count)?;
        w.write_all(&self.action)?;
        for value in self.strategy {
            w.write_f32::<LittleEndian>(value)?;
        }
        Ok(())
    }

    pub fn read_from<R: Read>(r: &mut R) -> io::Result<Self> {
        let mut key = [0u8; KEY_BYTES];
        r.read_exact(&mut key)?;
        let action_count = r.read_u8()?;
        let mut action = [0u8; MAX_ACTIONS];
        r.read_exact(&mut action)?;
        let mut strategy = [0.0f32; MAX_ACTIONS];
        for slot in strategy.iter_mut() {
            *slot = r.read_f32::<LittleEndian>()?;
        }
        Ok(Strat {
            key,
            action_count,
            action,
            strategy,
        })
    }

    pub fn strategy_sum(&self) -> f32 {
        self.strategy[..self.action_count as usize].iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_round_trips_through_its_byte_layout() {
        let strat = Strat {
            key: [7u8; KEY_BYTES],
            action_count: 2,
            action: [0x88, 0x21, 0, 0, 0, 0, 0, 0],
            strategy: [0.7, 0.3, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        };
        let mut buf = Vec::new();
        strat.write_to(&mut buf).unwrap();
        assert_eq!(buf.len(), RECORD_SIZE);

        let mut cursor = std::io::Cursor::new(buf);
        let read_back = Strat::read_from(&mut cursor).unwrap();
        assert_eq!(read_back.key, strat.key);
        assert_eq!(read_back.action_count, strat.action_count);
        assert_eq!(read_back.action, strat.action);
        assert_eq!(read_back.strategy, strat.strategy);
    }

    #[test]
    fn strategy_floats_are_little_endian_on_disk() {
        let strat = Strat {
            key: [0u8; KEY_BYTES],
            action_count: 1,
            action: [0x88, 0, 0, 0, 0, 0, 0, 0],
            strategy: [1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        };
        let mut buf = Vec::new();
        strat.write_to(&mut buf).unwrap();
        let float_offset = KEY_BYTES + 1 + MAX_ACTIONS;
        let bytes = &buf[float_offset..float_offset + 4];
        assert_eq!(bytes, &1.0f32.to_le_bytes());
    }
}
