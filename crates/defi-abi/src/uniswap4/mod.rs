pub use position_manager::{
    ActionStream, BurnPositionParams, ClearOrTakeParams, CloseCurrencyParams, DecreaseLiquidityParams, IPositionManager,
    IncreaseLiquidityParams, MintPositionParams, PoolKey, SettlePairParams, SweepParams, TakePairParams,
};
pub use state_view::IStateView;

mod position_manager;
mod state_view;
