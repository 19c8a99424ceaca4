use alloy_primitives::aliases::I24;
use alloy_primitives::{Address, Bytes, U256};
use alloy_sol_types::SolValue;
use defi_abi::uniswap4::{
    BurnPositionParams, ClearOrTakeParams, CloseCurrencyParams, DecreaseLiquidityParams, IncreaseLiquidityParams, MintPositionParams,
    SettlePairParams, SweepParams, TakePairParams,
};
use defi_types::{PoolKey, Result, TickRange, UniswapV4Error};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// One byte per action in the `actions` segment of the unlock data.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum ActionTag {
    MintPosition = 0x00,
    IncreaseLiquidity = 0x01,
    DecreaseLiquidity = 0x02,
    BurnPosition = 0x03,
    SettlePair = 0x10,
    TakePair = 0x11,
    CloseCurrency = 0x13,
    ClearOrTake = 0x14,
    Sweep = 0x15,
}

impl From<ActionTag> for u8 {
    fn from(value: ActionTag) -> Self {
        value as u8
    }
}

impl TryFrom<u8> for ActionTag {
    type Error = UniswapV4Error;

    fn try_from(value: u8) -> Result<Self> {
        ActionTag::iter().find(|tag| *tag as u8 == value).ok_or(UniswapV4Error::UnknownActionTag(value))
    }
}

/// A position manager action together with its parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    MintPosition(MintPositionParams),
    IncreaseLiquidity(IncreaseLiquidityParams),
    DecreaseLiquidity(DecreaseLiquidityParams),
    BurnPosition(BurnPositionParams),
    SettlePair(SettlePairParams),
    TakePair(TakePairParams),
    CloseCurrency(CloseCurrencyParams),
    ClearOrTake(ClearOrTakeParams),
    Sweep(SweepParams),
}

impl Action {
    pub fn mint_position(
        pool_key: &PoolKey,
        range: &TickRange,
        liquidity: u128,
        amount0_max: u128,
        amount1_max: u128,
        owner: Address,
    ) -> Self {
        Action::MintPosition(MintPositionParams {
            poolKey: pool_key.into(),
            tickLower: I24::unchecked_from(range.tick_lower()),
            tickUpper: I24::unchecked_from(range.tick_upper()),
            liquidity: U256::from(liquidity),
            amount0Max: amount0_max,
            amount1Max: amount1_max,
            owner,
            hookData: Bytes::new(),
        })
    }

    pub fn increase_liquidity(token_id: U256, liquidity: u128, amount0_max: u128, amount1_max: u128) -> Self {
        Action::IncreaseLiquidity(IncreaseLiquidityParams {
            tokenId: token_id,
            liquidity: U256::from(liquidity),
            amount0Max: amount0_max,
            amount1Max: amount1_max,
            hookData: Bytes::new(),
        })
    }

    pub fn decrease_liquidity(token_id: U256, liquidity: u128, amount0_min: u128, amount1_min: u128) -> Self {
        Action::DecreaseLiquidity(DecreaseLiquidityParams {
            tokenId: token_id,
            liquidity: U256::from(liquidity),
            amount0Min: amount0_min,
            amount1Min: amount1_min,
            hookData: Bytes::new(),
        })
    }

    pub fn burn_position(token_id: U256, amount0_min: u128, amount1_min: u128) -> Self {
        Action::BurnPosition(BurnPositionParams { tokenId: token_id, amount0Min: amount0_min, amount1Min: amount1_min, hookData: Bytes::new() })
    }

    pub fn settle_pair(pool_key: &PoolKey) -> Self {
        Action::SettlePair(SettlePairParams { currency0: pool_key.currency0(), currency1: pool_key.currency1() })
    }

    pub fn take_pair(pool_key: &PoolKey, recipient: Address) -> Self {
        Action::TakePair(TakePairParams { currency0: pool_key.currency0(), currency1: pool_key.currency1(), recipient })
    }

    pub fn close_currency(currency: Address) -> Self {
        Action::CloseCurrency(CloseCurrencyParams { currency })
    }

    pub fn clear_or_take(currency: Address, amount_max: U256) -> Self {
        Action::ClearOrTake(ClearOrTakeParams { currency, amountMax: amount_max })
    }

    pub fn sweep(currency: Address, recipient: Address) -> Self {
        Action::Sweep(SweepParams { currency, recipient })
    }

    pub fn tag(&self) -> ActionTag {
        match self {
            Action::MintPosition(_) => ActionTag::MintPosition,
            Action::IncreaseLiquidity(_) => ActionTag::IncreaseLiquidity,
            Action::DecreaseLiquidity(_) => ActionTag::DecreaseLiquidity,
            Action::BurnPosition(_) => ActionTag::BurnPosition,
            Action::SettlePair(_) => ActionTag::SettlePair,
            Action::TakePair(_) => ActionTag::TakePair,
            Action::CloseCurrency(_) => ActionTag::CloseCurrency,
            Action::ClearOrTake(_) => ActionTag::ClearOrTake,
            Action::Sweep(_) => ActionTag::Sweep,
        }
    }

    /// `abi.encode(field...)` of the parameters, without an outer tuple offset.
    pub fn encode_params(&self) -> Bytes {
        let encoded = match self {
            Action::MintPosition(params) => params.abi_encode_params(),
            Action::IncreaseLiquidity(params) => params.abi_encode_params(),
            Action::DecreaseLiquidity(params) => params.abi_encode_params(),
            Action::BurnPosition(params) => params.abi_encode_params(),
            Action::SettlePair(params) => params.abi_encode_params(),
            Action::TakePair(params) => params.abi_encode_params(),
            Action::CloseCurrency(params) => params.abi_encode_params(),
            Action::ClearOrTake(params) => params.abi_encode_params(),
            Action::Sweep(params) => params.abi_encode_params(),
        };
        Bytes::from(encoded)
    }

    pub fn decode(tag: ActionTag, params: &[u8]) -> Result<Self> {
        let action = match tag {
            ActionTag::MintPosition => MintPositionParams::abi_decode_params(params, true).map(Action::MintPosition),
            ActionTag::IncreaseLiquidity => IncreaseLiquidityParams::abi_decode_params(params, true).map(Action::IncreaseLiquidity),
            ActionTag::DecreaseLiquidity => DecreaseLiquidityParams::abi_decode_params(params, true).map(Action::DecreaseLiquidity),
            ActionTag::BurnPosition => BurnPositionParams::abi_decode_params(params, true).map(Action::BurnPosition),
            ActionTag::SettlePair => SettlePairParams::abi_decode_params(params, true).map(Action::SettlePair),
            ActionTag::TakePair => TakePairParams::abi_decode_params(params, true).map(Action::TakePair),
            ActionTag::CloseCurrency => CloseCurrencyParams::abi_decode_params(params, true).map(Action::CloseCurrency),
            ActionTag::ClearOrTake => ClearOrTakeParams::abi_decode_params(params, true).map(Action::ClearOrTake),
            ActionTag::Sweep => SweepParams::abi_decode_params(params, true).map(Action::Sweep),
        };
        action.map_err(|e| UniswapV4Error::protocol_encoding(format!("{tag} params of {} bytes: {e}", params.len())))
    }
}

#[cfg(test)]
mod test {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_tag_values() {
        let bytes: Vec<u8> = ActionTag::iter().map(u8::from).collect();
        assert_eq!(bytes, vec![0x00, 0x01, 0x02, 0x03, 0x10, 0x11, 0x13, 0x14, 0x15]);

        for tag in ActionTag::iter() {
            assert_eq!(ActionTag::try_from(u8::from(tag)).unwrap(), tag);
        }
    }

    #[test]
    fn test_unknown_tags() {
        for byte in [0x04u8, 0x0e, 0x12, 0x16, 0xff] {
            assert_eq!(ActionTag::try_from(byte), Err(UniswapV4Error::UnknownActionTag(byte)));
        }
    }

    #[test]
    fn test_tag_names() {
        assert_eq!(ActionTag::TakePair.to_string(), "TAKE_PAIR");
        assert_eq!(ActionTag::from_str("CLOSE_CURRENCY").unwrap(), ActionTag::CloseCurrency);
    }

    #[test]
    fn test_decode_inverts_encode() {
        let action = Action::decrease_liquidity(U256::from(42), 1_000_000, 10, 20);
        let params = action.encode_params();
        assert_eq!(params.len(), 6 * 32);
        assert_eq!(Action::decode(ActionTag::DecreaseLiquidity, &params).unwrap(), action);

        let action = Action::close_currency(Address::repeat_byte(0x11));
        assert_eq!(action.encode_params().len(), 32);
        assert!(matches!(Action::decode(ActionTag::TakePair, &action.encode_params()), Err(UniswapV4Error::ProtocolEncoding(_))));
    }
}
