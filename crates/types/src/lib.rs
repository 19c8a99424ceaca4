pub use constants::{DYNAMIC_FEE_FLAG, MAX_LP_FEE, MAX_TICK, MAX_TICK_SPACING, MIN_TICK, MIN_TICK_SPACING};
pub use error::UniswapV4Error;
pub use pool_key::PoolKey;
pub use range_preset::RangePreset;
pub use slot0::Slot0;
pub use tick_range::TickRange;

mod constants;
mod error;
mod pool_key;
mod range_preset;
mod slot0;
mod tick_range;

pub type Result<T, E = UniswapV4Error> = std::result::Result<T, E>;
