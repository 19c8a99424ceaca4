use alloy_primitives::{B256, U256};
use defi_types::{Result, TickRange};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

const TICK_MASK: u64 = 0xFF_FFFF;
const TICK_SIGN_BIT: i32 = 0x80_0000;
const TICK_MODULUS: i32 = 0x100_0000;

/// Bit packing of the position info word returned by `getPoolAndPositionInfo`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Display, EnumString, Deserialize, Serialize)]
#[strum(ascii_case_insensitive, serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum PositionInfoLayout {
    /// flag at bit 0, tickLower at bits [1, 25), tickUpper at [25, 49), truncated pool id above
    #[default]
    Packed,
    /// flag in the low byte, tickLower at bits [8, 32), tickUpper at [32, 56), 25 byte pool id above
    ByteAligned,
}

impl PositionInfoLayout {
    fn flag_mask(&self) -> u64 {
        match self {
            PositionInfoLayout::Packed => 0x1,
            PositionInfoLayout::ByteAligned => 0xff,
        }
    }

    fn tick_lower_offset(&self) -> usize {
        match self {
            PositionInfoLayout::Packed => 1,
            PositionInfoLayout::ByteAligned => 8,
        }
    }

    fn tick_upper_offset(&self) -> usize {
        self.tick_lower_offset() + 24
    }

    fn pool_id_offset(&self) -> usize {
        self.tick_upper_offset() + 24
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PositionInfo {
    pub tick_lower: i32,
    pub tick_upper: i32,
    pub has_subscriber: bool,
    /// High bits of the word, the leading bits of the pool id.
    pub truncated_pool_id: U256,
    pub layout: PositionInfoLayout,
}

impl PositionInfo {
    pub fn range(&self) -> Result<TickRange> {
        TickRange::new(self.tick_lower, self.tick_upper)
    }

    pub fn matches_pool(&self, pool_id: B256) -> bool {
        U256::from_be_bytes(pool_id.0) >> self.layout.pool_id_offset() == self.truncated_pool_id
    }
}

fn extract_tick(word: U256, offset: usize) -> i32 {
    let raw = ((word >> offset) & U256::from(TICK_MASK)).to::<u32>() as i32;
    if raw >= TICK_SIGN_BIT {
        raw - TICK_MODULUS
    } else {
        raw
    }
}

fn pack_tick(tick: i32, offset: usize) -> U256 {
    U256::from(tick as u32 as u64 & TICK_MASK) << offset
}

pub fn decode_position_info(word: U256) -> PositionInfo {
    decode_position_info_with(word, PositionInfoLayout::Packed)
}

pub fn decode_position_info_with(word: U256, layout: PositionInfoLayout) -> PositionInfo {
    PositionInfo {
        tick_lower: extract_tick(word, layout.tick_lower_offset()),
        tick_upper: extract_tick(word, layout.tick_upper_offset()),
        has_subscriber: !(word & U256::from(layout.flag_mask())).is_zero(),
        truncated_pool_id: word >> layout.pool_id_offset(),
        layout,
    }
}

pub fn encode_position_info(range: &TickRange, has_subscriber: bool, pool_id: B256, layout: PositionInfoLayout) -> U256 {
    let offset = layout.pool_id_offset();
    let pool_bits = (U256::from_be_bytes(pool_id.0) >> offset) << offset;

    pool_bits
        | pack_tick(range.tick_upper(), layout.tick_upper_offset())
        | pack_tick(range.tick_lower(), layout.tick_lower_offset())
        | U256::from(has_subscriber as u8)
}

#[cfg(test)]
mod test {
    use std::str::FromStr;

    use alloy_primitives::b256;

    use super::*;

    const POOL_ID: B256 = b256!("62492df605751195b7311496381fb124b72547241f54e258ff95ce2d6a2add0f");

    #[test]
    fn test_decode_negative_lower_tick() {
        let word = U256::from(1u64 | (0xFF_FF38u64 << 1) | (800u64 << 25));
        let info = decode_position_info(word);
        assert_eq!((info.tick_lower, info.tick_upper, info.has_subscriber), (-200, 800, true));

        let range = TickRange::new(-200, 800).unwrap();
        assert_eq!(encode_position_info(&range, true, B256::ZERO, PositionInfoLayout::Packed), word);
    }

    #[test]
    fn test_round_trip_both_layouts() {
        for layout in [PositionInfoLayout::Packed, PositionInfoLayout::ByteAligned] {
            for (lower, upper, flag) in [(-200, 800, true), (-887272, 887272, false), (-60, -1, true), (0, 200, false)] {
                let range = TickRange::new(lower, upper).unwrap();
                let info = decode_position_info_with(encode_position_info(&range, flag, POOL_ID, layout), layout);
                assert_eq!((info.tick_lower, info.tick_upper, info.has_subscriber), (lower, upper, flag));
                assert_eq!(info.range().unwrap(), range);
                assert!(info.matches_pool(POOL_ID));
                assert!(!info.matches_pool(B256::repeat_byte(0x01)));
            }
        }
    }

    #[test]
    fn test_byte_aligned_layout() {
        let word = U256::from(1u64 | (0xFF_FF38u64 << 8) | (800u64 << 32));
        let info = decode_position_info_with(word, PositionInfoLayout::ByteAligned);
        assert_eq!((info.tick_lower, info.tick_upper, info.has_subscriber), (-200, 800, true));
        assert!(info.truncated_pool_id.is_zero());
    }

    #[test]
    fn test_high_bits_ignored() {
        let word = U256::from(0xFF_FF38u64 << 1) | (U256::from(0xabcdefu64) << 200);
        let info = decode_position_info(word);
        assert_eq!((info.tick_lower, info.tick_upper, info.has_subscriber), (-200, 0, false));
        assert_eq!(info.truncated_pool_id, U256::from(0xabcdefu64) << 151);
    }

    #[test]
    fn test_layout_names() {
        assert_eq!(PositionInfoLayout::from_str("byte_aligned").unwrap(), PositionInfoLayout::ByteAligned);
        assert_eq!(serde_json::from_str::<PositionInfoLayout>("\"packed\"").unwrap(), PositionInfoLayout::Packed);
    }
}
