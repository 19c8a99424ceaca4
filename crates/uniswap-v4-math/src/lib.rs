pub use full_math::mul_div;
pub use liquidity_math::{
    amounts_from_liquidity, get_amount0_for_liquidity, get_amount1_for_liquidity, get_amounts_for_liquidity, get_liquidity_for_amount0,
    get_liquidity_for_amount1, get_liquidity_for_amounts, liquidity_from_amounts,
};
pub use range::{resolve_range, CUSTOM_DEFAULT_HALF_WIDTH};
pub use tick_math::{
    get_sqrt_ratio_at_tick, max_usable_tick, min_usable_tick, nearest_usable_tick, price_to_tick, sqrt_price_x96_to_price, tick_to_price,
    tick_to_sqrt_price_x96, MAX_SQRT_RATIO, MIN_SQRT_RATIO, Q96,
};

pub mod full_math;
pub mod liquidity_math;
pub mod range;
pub mod tick_math;
