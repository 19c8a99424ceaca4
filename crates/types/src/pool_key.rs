use std::fmt::{Display, Formatter};

use alloy_primitives::aliases::{I24, U24};
use alloy_primitives::{keccak256, Address, B256};
use alloy_sol_types::SolValue;
use defi_abi::PoolKey as AbiPoolKey;

use crate::constants::{DYNAMIC_FEE_FLAG, MAX_LP_FEE, MAX_TICK_SPACING, MIN_TICK_SPACING};
use crate::{Result, UniswapV4Error};

/// Identity of a V4 pool. Two keys describe the same pool iff all five fields match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PoolKey {
    currency0: Address,
    currency1: Address,
    fee: u32,
    tick_spacing: i32,
    hooks: Address,
}

impl PoolKey {
    pub fn new(currency0: Address, currency1: Address, fee: u32, tick_spacing: i32, hooks: Address) -> Result<Self> {
        if currency0 >= currency1 {
            return Err(UniswapV4Error::invalid_configuration(format!(
                "currency0 {currency0} must sort strictly below currency1 {currency1}"
            )));
        }
        if fee > MAX_LP_FEE && fee != DYNAMIC_FEE_FLAG {
            return Err(UniswapV4Error::invalid_configuration(format!("fee {fee} exceeds {MAX_LP_FEE}")));
        }
        if !(MIN_TICK_SPACING..=MAX_TICK_SPACING).contains(&tick_spacing) {
            return Err(UniswapV4Error::invalid_configuration(format!(
                "tick spacing {tick_spacing} outside [{MIN_TICK_SPACING}, {MAX_TICK_SPACING}]"
            )));
        }
        Ok(PoolKey { currency0, currency1, fee, tick_spacing, hooks })
    }

    /// Builds a key from two currencies in any order.
    pub fn sorted(token_a: Address, token_b: Address, fee: u32, tick_spacing: i32, hooks: Address) -> Result<Self> {
        if token_a < token_b {
            Self::new(token_a, token_b, fee, tick_spacing, hooks)
        } else {
            Self::new(token_b, token_a, fee, tick_spacing, hooks)
        }
    }

    #[inline]
    pub fn currency0(&self) -> Address {
        self.currency0
    }

    #[inline]
    pub fn currency1(&self) -> Address {
        self.currency1
    }

    #[inline]
    pub fn fee(&self) -> u32 {
        self.fee
    }

    #[inline]
    pub fn tick_spacing(&self) -> i32 {
        self.tick_spacing
    }

    #[inline]
    pub fn hooks(&self) -> Address {
        self.hooks
    }

    pub fn is_dynamic_fee(&self) -> bool {
        self.fee == DYNAMIC_FEE_FLAG
    }

    pub fn contains_currency(&self, currency: Address) -> bool {
        self.currency0 == currency || self.currency1 == currency
    }

    /// `keccak256(abi.encode(poolKey))`, the id the pool manager and state view index pools by.
    pub fn pool_id(&self) -> B256 {
        keccak256(AbiPoolKey::from(self).abi_encode())
    }
}

impl Display for PoolKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{} fee={} spacing={} hooks={}", self.currency0, self.currency1, self.fee, self.tick_spacing, self.hooks)
    }
}

impl From<&PoolKey> for AbiPoolKey {
    fn from(value: &PoolKey) -> Self {
        AbiPoolKey {
            currency0: value.currency0,
            currency1: value.currency1,
            fee: U24::from(value.fee),
            tickSpacing: I24::unchecked_from(value.tick_spacing),
            hooks: value.hooks,
        }
    }
}

impl From<PoolKey> for AbiPoolKey {
    fn from(value: PoolKey) -> Self {
        AbiPoolKey::from(&value)
    }
}

impl TryFrom<AbiPoolKey> for PoolKey {
    type Error = UniswapV4Error;

    fn try_from(value: AbiPoolKey) -> Result<Self> {
        PoolKey::new(value.currency0, value.currency1, value.fee.to(), value.tickSpacing.as_i32(), value.hooks)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use alloy_primitives::{address, b256};

    const WETH: Address = address!("4200000000000000000000000000000000000006");
    const CLAWD: Address = address!("9f86dB9fc6f7c9408e8Fda3Ff8ce4e78ac7a6b07");

    #[test]
    fn test_sorted_orders_currencies() {
        let key = PoolKey::sorted(CLAWD, WETH, 10000, 200, Address::ZERO).unwrap();
        assert_eq!(key.currency0(), WETH);
        assert_eq!(key.currency1(), CLAWD);
        assert_eq!(key, PoolKey::new(WETH, CLAWD, 10000, 200, Address::ZERO).unwrap());
    }

    #[test]
    fn test_rejects_bad_configuration() {
        assert!(matches!(PoolKey::new(CLAWD, WETH, 10000, 200, Address::ZERO), Err(UniswapV4Error::InvalidConfiguration(_))));
        assert!(matches!(PoolKey::new(WETH, WETH, 10000, 200, Address::ZERO), Err(UniswapV4Error::InvalidConfiguration(_))));
        assert!(matches!(PoolKey::new(WETH, CLAWD, 10000, 0, Address::ZERO), Err(UniswapV4Error::InvalidConfiguration(_))));
        assert!(matches!(PoolKey::new(WETH, CLAWD, 10000, -60, Address::ZERO), Err(UniswapV4Error::InvalidConfiguration(_))));
        assert!(matches!(PoolKey::new(WETH, CLAWD, 10000, 40000, Address::ZERO), Err(UniswapV4Error::InvalidConfiguration(_))));
        assert!(matches!(PoolKey::new(WETH, CLAWD, 1_000_001, 200, Address::ZERO), Err(UniswapV4Error::InvalidConfiguration(_))));

        let dynamic = PoolKey::new(WETH, CLAWD, DYNAMIC_FEE_FLAG, 60, Address::ZERO).unwrap();
        assert!(dynamic.is_dynamic_fee());
    }

    #[test]
    fn test_pool_id() {
        let key = PoolKey::new(WETH, CLAWD, 10000, 200, Address::ZERO).unwrap();
        assert_eq!(key.pool_id(), b256!("62492df605751195b7311496381fb124b72547241f54e258ff95ce2d6a2add0f"));

        let other = PoolKey::new(WETH, CLAWD, 3000, 60, Address::ZERO).unwrap();
        assert_ne!(key.pool_id(), other.pool_id());
    }

    #[test]
    fn test_abi_conversion() {
        let key = PoolKey::new(WETH, CLAWD, 500, 10, address!("0000000000000000000000000000000000000bee")).unwrap();
        let abi_key = AbiPoolKey::from(&key);
        assert_eq!(abi_key.fee, U24::from(500));
        assert_eq!(abi_key.tickSpacing.as_i32(), 10);
        assert_eq!(PoolKey::try_from(abi_key).unwrap(), key);
    }
}
