use alloy_primitives::U256;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum UniswapV4Error {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("Degenerate tick range lower={tick_lower} upper={tick_upper}")]
    DegenerateRange { tick_lower: i32, tick_upper: i32 },
    #[error("Protocol encoding error: {0}")]
    ProtocolEncoding(String),
    #[error("Unknown action tag 0x{0:02x}")]
    UnknownActionTag(u8),
    #[error("Insufficient liquidity for amount0={amount0} amount1={amount1}")]
    InsufficientLiquidity { amount0: U256, amount1: U256 },
    #[error("Math overflow in {0}")]
    MathOverflow(&'static str),
    #[error("Division by zero")]
    DivisionByZero,
}

impl UniswapV4Error {
    pub fn invalid_configuration(msg: impl Into<String>) -> Self {
        UniswapV4Error::InvalidConfiguration(msg.into())
    }

    pub fn protocol_encoding(msg: impl Into<String>) -> Self {
        UniswapV4Error::ProtocolEncoding(msg.into())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(UniswapV4Error::UnknownActionTag(0x0e).to_string(), "Unknown action tag 0x0e");
        assert_eq!(
            UniswapV4Error::DegenerateRange { tick_lower: 0, tick_upper: 0 }.to_string(),
            "Degenerate tick range lower=0 upper=0"
        );
        assert_eq!(UniswapV4Error::MathOverflow("mul_div").to_string(), "Math overflow in mul_div");
    }
}
