use alloy_primitives::U256;
use defi_types::{Result, UniswapV4Error};

use crate::full_math::mul_div;
use crate::tick_math::{tick_to_sqrt_price_x96, Q96};

fn sort_ratios(sqrt_ratio_a_x_96: U256, sqrt_ratio_b_x_96: U256) -> (U256, U256) {
    if sqrt_ratio_a_x_96 > sqrt_ratio_b_x_96 {
        (sqrt_ratio_b_x_96, sqrt_ratio_a_x_96)
    } else {
        (sqrt_ratio_a_x_96, sqrt_ratio_b_x_96)
    }
}

fn to_liquidity(value: U256, context: &'static str) -> Result<u128> {
    if value > U256::from(u128::MAX) {
        Err(UniswapV4Error::MathOverflow(context))
    } else {
        Ok(value.to())
    }
}

pub fn get_liquidity_for_amount0(sqrt_ratio_a_x_96: U256, sqrt_ratio_b_x_96: U256, amount0: U256) -> Result<u128> {
    let (sqrt_ratio_a_x_96, sqrt_ratio_b_x_96) = sort_ratios(sqrt_ratio_a_x_96, sqrt_ratio_b_x_96);

    let intermediate = mul_div(sqrt_ratio_a_x_96, sqrt_ratio_b_x_96, Q96)?;
    let ret = mul_div(amount0, intermediate, sqrt_ratio_b_x_96 - sqrt_ratio_a_x_96)?;
    to_liquidity(ret, "get_liquidity_for_amount0")
}

pub fn get_liquidity_for_amount1(sqrt_ratio_a_x_96: U256, sqrt_ratio_b_x_96: U256, amount1: U256) -> Result<u128> {
    let (sqrt_ratio_a_x_96, sqrt_ratio_b_x_96) = sort_ratios(sqrt_ratio_a_x_96, sqrt_ratio_b_x_96);

    let ret = mul_div(amount1, Q96, sqrt_ratio_b_x_96 - sqrt_ratio_a_x_96)?;
    to_liquidity(ret, "get_liquidity_for_amount1")
}

/// Largest liquidity both amounts can fund at the current price. Zero means the amounts are insufficient.
pub fn get_liquidity_for_amounts(
    sqrt_ratio_x_96: U256,
    sqrt_ratio_a_x_96: U256,
    sqrt_ratio_b_x_96: U256,
    amount0: U256,
    amount1: U256,
) -> Result<u128> {
    let (sqrt_ratio_a_x_96, sqrt_ratio_b_x_96) = sort_ratios(sqrt_ratio_a_x_96, sqrt_ratio_b_x_96);

    let liquidity = if sqrt_ratio_x_96 <= sqrt_ratio_a_x_96 {
        get_liquidity_for_amount0(sqrt_ratio_a_x_96, sqrt_ratio_b_x_96, amount0)?
    } else if sqrt_ratio_x_96 < sqrt_ratio_b_x_96 {
        let liquidity0 = get_liquidity_for_amount0(sqrt_ratio_x_96, sqrt_ratio_b_x_96, amount0)?;
        let liquidity1 = get_liquidity_for_amount1(sqrt_ratio_a_x_96, sqrt_ratio_x_96, amount1)?;
        liquidity0.min(liquidity1)
    } else {
        get_liquidity_for_amount1(sqrt_ratio_a_x_96, sqrt_ratio_b_x_96, amount1)?
    };
    Ok(liquidity)
}

pub fn get_amount0_for_liquidity(sqrt_ratio_a_x_96: U256, sqrt_ratio_b_x_96: U256, liquidity: u128) -> Result<U256> {
    let (sqrt_ratio_a_x_96, sqrt_ratio_b_x_96) = sort_ratios(sqrt_ratio_a_x_96, sqrt_ratio_b_x_96);
    if sqrt_ratio_a_x_96.is_zero() {
        return Err(UniswapV4Error::DivisionByZero);
    }

    let numerator = mul_div(U256::from(liquidity) << 96, sqrt_ratio_b_x_96 - sqrt_ratio_a_x_96, sqrt_ratio_b_x_96)?;
    Ok(numerator / sqrt_ratio_a_x_96)
}

pub fn get_amount1_for_liquidity(sqrt_ratio_a_x_96: U256, sqrt_ratio_b_x_96: U256, liquidity: u128) -> Result<U256> {
    let (sqrt_ratio_a_x_96, sqrt_ratio_b_x_96) = sort_ratios(sqrt_ratio_a_x_96, sqrt_ratio_b_x_96);

    mul_div(U256::from(liquidity), sqrt_ratio_b_x_96 - sqrt_ratio_a_x_96, Q96)
}

pub fn get_amounts_for_liquidity(
    sqrt_ratio_x_96: U256,
    sqrt_ratio_a_x_96: U256,
    sqrt_ratio_b_x_96: U256,
    liquidity: u128,
) -> Result<(U256, U256)> {
    let (sqrt_ratio_a_x_96, sqrt_ratio_b_x_96) = sort_ratios(sqrt_ratio_a_x_96, sqrt_ratio_b_x_96);

    if sqrt_ratio_x_96 <= sqrt_ratio_a_x_96 {
        Ok((get_amount0_for_liquidity(sqrt_ratio_a_x_96, sqrt_ratio_b_x_96, liquidity)?, U256::ZERO))
    } else if sqrt_ratio_x_96 < sqrt_ratio_b_x_96 {
        Ok((
            get_amount0_for_liquidity(sqrt_ratio_x_96, sqrt_ratio_b_x_96, liquidity)?,
            get_amount1_for_liquidity(sqrt_ratio_a_x_96, sqrt_ratio_x_96, liquidity)?,
        ))
    } else {
        Ok((U256::ZERO, get_amount1_for_liquidity(sqrt_ratio_a_x_96, sqrt_ratio_b_x_96, liquidity)?))
    }
}

/// Liquidity for a tick range at the current sqrt price.
pub fn liquidity_from_amounts(sqrt_price_x96: U256, tick_lower: i32, tick_upper: i32, amount0: U256, amount1: U256) -> Result<u128> {
    get_liquidity_for_amounts(sqrt_price_x96, tick_to_sqrt_price_x96(tick_lower), tick_to_sqrt_price_x96(tick_upper), amount0, amount1)
}

/// Token amounts backing `liquidity` in a tick range at the current sqrt price, rounded down.
pub fn amounts_from_liquidity(sqrt_price_x96: U256, tick_lower: i32, tick_upper: i32, liquidity: u128) -> Result<(U256, U256)> {
    get_amounts_for_liquidity(sqrt_price_x96, tick_to_sqrt_price_x96(tick_lower), tick_to_sqrt_price_x96(tick_upper), liquidity)
}
