use std::fmt::{Display, Formatter};

use crate::constants::{MAX_TICK, MIN_TICK};
use crate::{Result, UniswapV4Error};

/// Half-open price range `[tick_lower, tick_upper)` of a position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TickRange {
    tick_lower: i32,
    tick_upper: i32,
}

impl TickRange {
    pub fn new(tick_lower: i32, tick_upper: i32) -> Result<Self> {
        if tick_lower < MIN_TICK || tick_upper > MAX_TICK {
            return Err(UniswapV4Error::invalid_configuration(format!(
                "tick range [{tick_lower}, {tick_upper}] outside [{MIN_TICK}, {MAX_TICK}]"
            )));
        }
        if tick_lower >= tick_upper {
            return Err(UniswapV4Error::DegenerateRange { tick_lower, tick_upper });
        }
        Ok(TickRange { tick_lower, tick_upper })
    }

    /// Same as [`TickRange::new`], additionally requiring both bounds to be usable for `tick_spacing`.
    pub fn new_usable(tick_lower: i32, tick_upper: i32, tick_spacing: i32) -> Result<Self> {
        if tick_spacing <= 0 {
            return Err(UniswapV4Error::invalid_configuration(format!("tick spacing {tick_spacing} must be positive")));
        }
        let range = Self::new(tick_lower, tick_upper)?;
        if tick_lower % tick_spacing != 0 || tick_upper % tick_spacing != 0 {
            return Err(UniswapV4Error::invalid_configuration(format!(
                "ticks {tick_lower}, {tick_upper} are not multiples of spacing {tick_spacing}"
            )));
        }
        Ok(range)
    }

    #[inline]
    pub fn tick_lower(&self) -> i32 {
        self.tick_lower
    }

    #[inline]
    pub fn tick_upper(&self) -> i32 {
        self.tick_upper
    }

    pub fn width(&self) -> i32 {
        self.tick_upper - self.tick_lower
    }

    pub fn contains(&self, tick: i32) -> bool {
        tick >= self.tick_lower && tick < self.tick_upper
    }
}

impl Display for TickRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.tick_lower, self.tick_upper)
    }
}
