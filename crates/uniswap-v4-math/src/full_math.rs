use alloy_primitives::ruint::UintTryFrom;
use alloy_primitives::{U256, U512};
use defi_types::{Result, UniswapV4Error};

/// `floor(a * b / denominator)` with a 512-bit intermediate product.
pub fn mul_div(a: U256, b: U256, denominator: U256) -> Result<U256> {
    if denominator.is_zero() {
        return Err(UniswapV4Error::DivisionByZero);
    }

    let product = U512::from(a) * U512::from(b);
    let quotient = product / U512::from(denominator);

    U256::uint_try_from(quotient).map_err(|_| UniswapV4Error::MathOverflow("mul_div"))
}
