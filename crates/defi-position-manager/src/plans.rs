use alloy_primitives::{Address, Bytes, U256};
use defi_types::{PoolKey, Result, TickRange, UniswapV4Error};
use tracing::debug;
use uniswap_v4_math::liquidity_from_amounts;

use crate::actions::Action;
use crate::builder::ActionStreamBuilder;

/// 5%
pub const DEFAULT_SLIPPAGE_BPS: u32 = 500;

const BPS_DENOMINATOR: u32 = 10_000;

/// Upper bound the position manager may pull for `amount`. Unbounded when nothing was requested.
fn amount_max(amount: U256, slippage_bps: u32) -> u128 {
    if amount.is_zero() {
        return u128::MAX;
    }
    let buffered = amount.saturating_add(amount.saturating_mul(U256::from(slippage_bps)) / U256::from(BPS_DENOMINATOR));
    if buffered > U256::from(u128::MAX) {
        u128::MAX
    } else {
        buffered.to()
    }
}

fn liquidity_for(pool_key: &PoolKey, range: &TickRange, sqrt_price_x96: U256, amount0: U256, amount1: U256) -> Result<u128> {
    TickRange::new_usable(range.tick_lower(), range.tick_upper(), pool_key.tick_spacing())?;
    let liquidity = liquidity_from_amounts(sqrt_price_x96, range.tick_lower(), range.tick_upper(), amount0, amount1)?;
    if liquidity == 0 {
        return Err(UniswapV4Error::InsufficientLiquidity { amount0, amount1 });
    }
    Ok(liquidity)
}

/// Opens a new position and returns any unused tokens to the owner.
#[derive(Clone, Debug)]
pub struct MintPlan {
    pub pool_key: PoolKey,
    pub range: TickRange,
    pub sqrt_price_x96: U256,
    pub amount0_desired: U256,
    pub amount1_desired: U256,
    pub owner: Address,
    pub slippage_bps: u32,
}

impl MintPlan {
    pub fn liquidity(&self) -> Result<u128> {
        liquidity_for(&self.pool_key, &self.range, self.sqrt_price_x96, self.amount0_desired, self.amount1_desired)
    }

    pub fn actions(&self) -> Result<Vec<Action>> {
        let liquidity = self.liquidity()?;
        let amount0_max = amount_max(self.amount0_desired, self.slippage_bps);
        let amount1_max = amount_max(self.amount1_desired, self.slippage_bps);
        debug!(pool = %self.pool_key, range = %self.range, liquidity, amount0_max, amount1_max, "Mint plan");

        let (currency0, currency1) = (self.pool_key.currency0(), self.pool_key.currency1());
        Ok(vec![
            Action::mint_position(&self.pool_key, &self.range, liquidity, amount0_max, amount1_max, self.owner),
            Action::close_currency(currency0),
            Action::close_currency(currency1),
            Action::sweep(currency0, self.owner),
            Action::sweep(currency1, self.owner),
        ])
    }

    /// Unlock data for `modifyLiquidities`.
    pub fn build(&self) -> Result<Bytes> {
        ActionStreamBuilder::from(self.actions()?).build()
    }
}

/// Adds liquidity to an existing position.
#[derive(Clone, Debug)]
pub struct IncreasePlan {
    pub token_id: U256,
    pub pool_key: PoolKey,
    pub range: TickRange,
    pub sqrt_price_x96: U256,
    pub amount0_desired: U256,
    pub amount1_desired: U256,
    pub slippage_bps: u32,
}

impl IncreasePlan {
    pub fn actions(&self) -> Result<Vec<Action>> {
        let liquidity = liquidity_for(&self.pool_key, &self.range, self.sqrt_price_x96, self.amount0_desired, self.amount1_desired)?;
        let amount0_max = amount_max(self.amount0_desired, self.slippage_bps);
        let amount1_max = amount_max(self.amount1_desired, self.slippage_bps);
        debug!(token_id = %self.token_id, liquidity, amount0_max, amount1_max, "Increase plan");

        Ok(vec![Action::increase_liquidity(self.token_id, liquidity, amount0_max, amount1_max), Action::settle_pair(&self.pool_key)])
    }

    pub fn build(&self) -> Result<Bytes> {
        ActionStreamBuilder::from(self.actions()?).build()
    }
}

/// Withdraws a percentage of a position's liquidity, burning the NFT when everything is removed.
#[derive(Clone, Debug)]
pub struct RemovePlan {
    pub token_id: U256,
    pub pool_key: PoolKey,
    pub liquidity: u128,
    pub percent: u8,
    pub recipient: Address,
    pub amount0_min: u128,
    pub amount1_min: u128,
}

impl RemovePlan {
    pub fn liquidity_to_remove(&self) -> Result<u128> {
        if self.percent == 0 || self.percent > 100 {
            return Err(UniswapV4Error::invalid_configuration(format!("remove percent {} outside 1..=100", self.percent)));
        }
        let liquidity = (U256::from(self.liquidity) * U256::from(self.percent) / U256::from(100u8)).to::<u128>();
        if liquidity == 0 {
            return Err(UniswapV4Error::InsufficientLiquidity { amount0: U256::ZERO, amount1: U256::ZERO });
        }
        Ok(liquidity)
    }

    pub fn actions(&self) -> Result<Vec<Action>> {
        let liquidity = self.liquidity_to_remove()?;
        debug!(token_id = %self.token_id, liquidity, percent = self.percent, "Remove plan");

        let mut actions = vec![
            Action::decrease_liquidity(self.token_id, liquidity, self.amount0_min, self.amount1_min),
            Action::take_pair(&self.pool_key, self.recipient),
        ];
        if self.percent == 100 {
            actions.push(Action::burn_position(self.token_id, self.amount0_min, self.amount1_min));
        }
        Ok(actions)
    }

    pub fn build(&self) -> Result<Bytes> {
        ActionStreamBuilder::from(self.actions()?).build()
    }
}
