use alloy_primitives::{uint, U256};
use defi_types::{Result, UniswapV4Error, MAX_TICK, MIN_TICK};

pub const Q96: U256 = U256::from_limbs([0, 1 << 32, 0, 0]);

/// `get_sqrt_ratio_at_tick(MIN_TICK)`
pub const MIN_SQRT_RATIO: U256 = U256::from_limbs([4295128739, 0, 0, 0]);
/// `get_sqrt_ratio_at_tick(MAX_TICK)`
pub const MAX_SQRT_RATIO: U256 = uint!(1461446703485210103287273052203988822378723970342_U256);

const TICK_BASE: f64 = 1.0001;
const Q96_F64: f64 = 79228162514264337593543950336.0;
const TWO_POW_64: f64 = 18446744073709551616.0;

pub fn tick_to_price(tick: i32) -> f64 {
    TICK_BASE.powf(tick as f64)
}

/// Inverse of [`tick_to_price`], rounded to the nearest tick. Accurate to one tick.
pub fn price_to_tick(price: f64) -> Result<i32> {
    if !price.is_finite() || price <= 0.0 {
        return Err(UniswapV4Error::invalid_configuration(format!("price {price} must be finite and positive")));
    }
    let tick = (price.ln() / TICK_BASE.ln()).round();
    if tick < MIN_TICK as f64 || tick > MAX_TICK as f64 {
        return Err(UniswapV4Error::invalid_configuration(format!("price {price} maps to tick {tick} outside [{MIN_TICK}, {MAX_TICK}]")));
    }
    Ok(tick as i32)
}

/// `floor(sqrt(1.0001^tick) * 2^96)` evaluated in f64.
pub fn tick_to_sqrt_price_x96(tick: i32) -> U256 {
    f64_to_u256(tick_to_price(tick).sqrt() * Q96_F64)
}

/// Human-scaled price of token1 in terms of token0, adjusted by the tokens' decimals.
pub fn sqrt_price_x96_to_price(sqrt_price_x96: U256, decimals0: u8, decimals1: u8) -> f64 {
    let ratio = u256_to_f64(sqrt_price_x96) / Q96_F64;
    ratio * ratio * 10f64.powi(decimals0 as i32 - decimals1 as i32)
}

/// Nearest multiple of `tick_spacing`, halves rounded toward positive infinity.
pub fn nearest_usable_tick(tick: i32, tick_spacing: i32) -> Result<i32> {
    if tick_spacing <= 0 {
        return Err(UniswapV4Error::invalid_configuration(format!("tick spacing {tick_spacing} must be positive")));
    }
    let (tick, spacing) = (tick as i64, tick_spacing as i64);
    let mut quotient = tick.div_euclid(spacing);
    if 2 * tick.rem_euclid(spacing) >= spacing {
        quotient += 1;
    }
    i32::try_from(quotient * spacing).map_err(|_| UniswapV4Error::MathOverflow("nearest_usable_tick"))
}

pub fn min_usable_tick(tick_spacing: i32) -> i32 {
    (MIN_TICK / tick_spacing) * tick_spacing
}

pub fn max_usable_tick(tick_spacing: i32) -> i32 {
    (MAX_TICK / tick_spacing) * tick_spacing
}

/// Integer sqrt ratio exactly as the pool contract computes it.
pub fn get_sqrt_ratio_at_tick(tick: i32) -> Result<U256> {
    let abs_tick = tick.unsigned_abs();
    if abs_tick > MAX_TICK as u32 {
        return Err(UniswapV4Error::invalid_configuration(format!("tick {tick} outside [{MIN_TICK}, {MAX_TICK}]")));
    }

    let mut ratio =
        if abs_tick & 0x1 != 0 { uint!(0xfffcb933bd6fad37aa2d162d1a594001_U256) } else { U256::from_limbs([0, 0, 1, 0]) };

    for &(bit, factor) in RATIO_FACTORS.iter() {
        if abs_tick & bit != 0 {
            ratio = (ratio * factor) >> 128;
        }
    }

    if tick > 0 {
        ratio = U256::MAX / ratio;
    }

    Ok((ratio + uint!(0xffffffff_U256)) >> 32)
}

// 2^128 / sqrt(1.0001)^bit for bits 1..=19
const RATIO_FACTORS: [(u32, U256); 19] = [
    (0x2, uint!(0xfff97272373d413259a46990580e213a_U256)),
    (0x4, uint!(0xfff2e50f5f656932ef12357cf3c7fdcc_U256)),
    (0x8, uint!(0xffe5caca7e10e4e61c3624eaa0941cd0_U256)),
    (0x10, uint!(0xffcb9843d60f6159c9db58835c926644_U256)),
    (0x20, uint!(0xff973b41fa98c081472e6896dfb254c0_U256)),
    (0x40, uint!(0xff2ea16466c96a3843ec78b326b52861_U256)),
    (0x80, uint!(0xfe5dee046a99a2a811c461f1969c3053_U256)),
    (0x100, uint!(0xfcbe86c7900a88aedcffc83b479aa3a4_U256)),
    (0x200, uint!(0xf987a7253ac413176f2b074cf7815e54_U256)),
    (0x400, uint!(0xf3392b0822b70005940c7a398e4b70f3_U256)),
    (0x800, uint!(0xe7159475a2c29b7443b29c7fa6e889d9_U256)),
    (0x1000, uint!(0xd097f3bdfd2022b8845ad8f792aa5825_U256)),
    (0x2000, uint!(0xa9f746462d870fdf8a65dc1f90e061e5_U256)),
    (0x4000, uint!(0x70d869a156d2a1b890bb3df62baf32f7_U256)),
    (0x8000, uint!(0x31be135f97d08fd981231505542fcfa6_U256)),
    (0x10000, uint!(0x9aa508b5b7a84e1c677de54f3e99bc9_U256)),
    (0x20000, uint!(0x5d6af8dedb81196699c329225ee604_U256)),
    (0x40000, uint!(0x2216e584f5fa1ea926041bedfe98_U256)),
    (0x80000, uint!(0x48a170391f7dc42444e8fa2_U256)),
];

/// Truncating conversion of a non-negative f64, exact for every representable value.
fn f64_to_u256(value: f64) -> U256 {
    if !value.is_finite() || value < 1.0 {
        return U256::ZERO;
    }
    let bits = value.to_bits();
    let exponent = ((bits >> 52) & 0x7ff) as i32;
    let mantissa = (bits & ((1u64 << 52) - 1)) | (1u64 << 52);
    let shift = exponent - 1075;

    if shift >= 0 {
        if shift > 256 - 53 {
            return U256::MAX;
        }
        U256::from(mantissa) << shift as usize
    } else {
        U256::from(mantissa >> (-shift).min(63) as u32)
    }
}

fn u256_to_f64(value: U256) -> f64 {
    value.as_limbs().iter().rev().fold(0.0, |acc, limb| acc * TWO_POW_64 + *limb as f64)
}
