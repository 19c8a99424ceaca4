use alloy_primitives::U256;
use defi_abi::IStateView::getSlot0Return;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Slot0 {
    pub sqrt_price_x96: U256,
    pub tick: i32,
    pub protocol_fee: u32,
    pub lp_fee: u32,
}

impl Slot0 {
    /// A pool that has not been initialized reports a zero sqrt price.
    pub fn is_initialized(&self) -> bool {
        !self.sqrt_price_x96.is_zero()
    }
}

impl From<getSlot0Return> for Slot0 {
    fn from(value: getSlot0Return) -> Self {
        Self {
            sqrt_price_x96: U256::from(value.sqrtPriceX96),
            tick: value.tick.as_i32(),
            protocol_fee: value.protocolFee.to(),
            lp_fee: value.lpFee.to(),
        }
    }
}
