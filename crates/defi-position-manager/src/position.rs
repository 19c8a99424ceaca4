use alloy_primitives::U256;
use defi_abi::IPositionManager::getPoolAndPositionInfoReturn;
use defi_types::{PoolKey, Result, Slot0, TickRange};
use tracing::warn;
use uniswap_v4_math::amounts_from_liquidity;

use crate::position_info::{decode_position_info_with, PositionInfoLayout};

/// Read-only view of a position NFT, derived from chain reads on every query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pub token_id: U256,
    pub pool_key: PoolKey,
    pub range: TickRange,
    pub liquidity: u128,
    pub has_subscriber: bool,
    pub amount0: U256,
    pub amount1: U256,
}

impl Position {
    /// Builds a position from its packed info word, liquidity and the pool's current sqrt price.
    /// Amounts stay zero while the sqrt price is unknown.
    pub fn from_reads(
        token_id: U256,
        pool_key: PoolKey,
        info: U256,
        liquidity: u128,
        sqrt_price_x96: U256,
        layout: PositionInfoLayout,
    ) -> Result<Self> {
        let info = decode_position_info_with(info, layout);
        if !info.matches_pool(pool_key.pool_id()) {
            warn!(%token_id, pool_id = %pool_key.pool_id(), "Position info does not match pool key");
        }
        let range = info.range()?;

        let (amount0, amount1) = if sqrt_price_x96.is_zero() {
            (U256::ZERO, U256::ZERO)
        } else {
            amounts_from_liquidity(sqrt_price_x96, range.tick_lower(), range.tick_upper(), liquidity)?
        };

        Ok(Position { token_id, pool_key, range, liquidity, has_subscriber: info.has_subscriber, amount0, amount1 })
    }

    pub fn from_position_manager(
        token_id: U256,
        pool_and_info: getPoolAndPositionInfoReturn,
        liquidity: u128,
        slot0: &Slot0,
        layout: PositionInfoLayout,
    ) -> Result<Self> {
        let pool_key = PoolKey::try_from(pool_and_info.poolKey)?;
        Self::from_reads(token_id, pool_key, pool_and_info.info, liquidity, slot0.sqrt_price_x96, layout)
    }

    pub fn is_in_range(&self, current_tick: i32) -> bool {
        self.range.contains(current_tick)
    }

    pub fn is_empty(&self) -> bool {
        self.liquidity == 0
    }
}
