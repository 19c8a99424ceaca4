use alloy_primitives::Address;
use defi_position_manager::{PositionInfoLayout, DEFAULT_SLIPPAGE_BPS};
use defi_types::{PoolKey, UniswapV4Error};
use serde::Deserialize;
use thiserror::Error;
use tokio::fs;

/// Seconds a planned transaction stays valid.
pub const DEFAULT_DEADLINE_SECS: i64 = 1800;

#[derive(Debug, Error)]
pub enum LoadConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    TomlError(#[from] toml::de::Error),
    #[error("Invalid pool: {0}")]
    PoolError(#[from] UniswapV4Error),
}

#[derive(Deserialize, Debug, Clone)]
pub struct PlannerConfig {
    pub pool: PoolConfig,
    #[serde(default)]
    pub settings: Settings,
}

#[derive(Deserialize, Debug, Clone)]
pub struct PoolConfig {
    pub currency0: Address,
    pub currency1: Address,
    pub fee: u32,
    pub tick_spacing: i32,
    pub hooks: Option<Address>,
    #[serde(default = "default_decimals")]
    pub decimals0: u8,
    #[serde(default = "default_decimals")]
    pub decimals1: u8,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Settings {
    pub owner: Option<Address>,
    #[serde(default = "default_slippage_bps")]
    pub slippage_bps: u32,
    #[serde(default = "default_deadline_secs")]
    pub deadline_secs: i64,
    #[serde(default)]
    pub position_info_layout: PositionInfoLayout,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            owner: None,
            slippage_bps: DEFAULT_SLIPPAGE_BPS,
            deadline_secs: DEFAULT_DEADLINE_SECS,
            position_info_layout: PositionInfoLayout::default(),
        }
    }
}

fn default_decimals() -> u8 {
    18
}

fn default_slippage_bps() -> u32 {
    DEFAULT_SLIPPAGE_BPS
}

fn default_deadline_secs() -> i64 {
    DEFAULT_DEADLINE_SECS
}

impl PlannerConfig {
    pub async fn load_from_file(file_name: String) -> Result<PlannerConfig, LoadConfigError> {
        let contents = fs::read_to_string(file_name).await?;
        let config: PlannerConfig = toml::from_str(&contents)?;
        config.pool_key()?;
        Ok(config)
    }

    /// Currencies may be listed in either order.
    pub fn pool_key(&self) -> Result<PoolKey, UniswapV4Error> {
        let pool = &self.pool;
        PoolKey::sorted(pool.currency0, pool.currency1, pool.fee, pool.tick_spacing, pool.hooks.unwrap_or_default())
    }

    /// Token decimals in pool order.
    pub fn decimals(&self) -> (u8, u8) {
        if self.pool.currency0 < self.pool.currency1 {
            (self.pool.decimals0, self.pool.decimals1)
        } else {
            (self.pool.decimals1, self.pool.decimals0)
        }
    }
}

#[cfg(test)]
mod test {
    use alloy_primitives::address;

    use super::*;

    #[test]
    fn test_deserialization() {
        let cfg = r#"
[pool]
currency0 = "0x9f86dB9fc6f7c9408e8Fda3Ff8ce4e78ac7a6b07"
currency1 = "0x4200000000000000000000000000000000000006"
fee = 10000
tick_spacing = 200
decimals0 = 6

[settings]
owner = "0x1dd35b4da6534230ff53048f7477f17f7f4e7a70"
slippage_bps = 100
position_info_layout = "byte_aligned"
        "#;
        let config: PlannerConfig = toml::from_str(cfg).unwrap();
        let pool_key = config.pool_key().unwrap();
        assert_eq!(pool_key.currency0(), address!("4200000000000000000000000000000000000006"));
        assert_eq!(pool_key.hooks(), Address::ZERO);
        assert_eq!(config.decimals(), (18, 6));
        assert_eq!(config.settings.slippage_bps, 100);
        assert_eq!(config.settings.deadline_secs, DEFAULT_DEADLINE_SECS);
        assert_eq!(config.settings.position_info_layout, PositionInfoLayout::ByteAligned);
    }

    #[test]
    fn test_default_settings() {
        let cfg = r#"
[pool]
currency0 = "0x4200000000000000000000000000000000000006"
currency1 = "0x9f86dB9fc6f7c9408e8Fda3Ff8ce4e78ac7a6b07"
fee = 3000
tick_spacing = 60
        "#;
        let config: PlannerConfig = toml::from_str(cfg).unwrap();
        assert_eq!(config.settings.slippage_bps, DEFAULT_SLIPPAGE_BPS);
        assert_eq!(config.settings.position_info_layout, PositionInfoLayout::Packed);
        assert!(config.settings.owner.is_none());
        assert_eq!(config.decimals(), (18, 18));
    }

    #[test]
    fn test_invalid_pool() {
        let cfg = r#"
[pool]
currency0 = "0x4200000000000000000000000000000000000006"
currency1 = "0x9f86dB9fc6f7c9408e8Fda3Ff8ce4e78ac7a6b07"
fee = 3000
tick_spacing = 0
        "#;
        let config: PlannerConfig = toml::from_str(cfg).unwrap();
        assert!(matches!(config.pool_key(), Err(UniswapV4Error::InvalidConfiguration(_))));
    }
}
