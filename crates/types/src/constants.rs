/// The minimum tick a position may reference, `log_1.0001(2^-128)` rounded toward zero.
pub const MIN_TICK: i32 = -887272;
/// The maximum tick a position may reference.
pub const MAX_TICK: i32 = -MIN_TICK;

pub const MIN_TICK_SPACING: i32 = 1;
/// Pools are limited to type(int16).max tick spacing.
pub const MAX_TICK_SPACING: i32 = i16::MAX as i32;

/// Static LP fees are capped at 100% expressed in hundredths of a bip.
pub const MAX_LP_FEE: u32 = 1_000_000;
/// A fee with only this bit set marks a pool whose hook sets the fee.
pub const DYNAMIC_FEE_FLAG: u32 = 0x800000;
