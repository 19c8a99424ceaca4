pub use uniswap4::{IPositionManager, IStateView, PoolKey};

pub mod uniswap4;
