use alloy_primitives::{Address, U256};
use clap::{Parser, Subcommand};
use defi_position_manager::{decode_position_info_with, encode_modify_liquidities, IncreasePlan, MintPlan, PositionInfoLayout, RemovePlan};
use defi_types::{RangePreset, TickRange};
use eyre::{eyre, OptionExt, Result};
use tracing::{debug, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};
use uniswap_v4_math::{price_to_tick, resolve_range, sqrt_price_x96_to_price, tick_to_price, tick_to_sqrt_price_x96};

use crate::config::PlannerConfig;

mod config;

#[derive(Parser, Debug)]
#[command(name = "lp_planner", about = "Plans Uniswap V4 liquidity positions and encodes modifyLiquidities calldata")]
struct Commands {
    /// Pool configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Args, Debug)]
struct RangeArgs {
    #[arg(long, default_value_t = RangePreset::Wide)]
    preset: RangePreset,
    #[arg(long, allow_hyphen_values = true)]
    current_tick: i32,
    #[arg(long, allow_hyphen_values = true)]
    lower: Option<i32>,
    #[arg(long, allow_hyphen_values = true)]
    upper: Option<i32>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve a tick range around the current tick
    Range(RangeArgs),
    /// Mint a new position
    Mint {
        #[command(flatten)]
        range: RangeArgs,
        /// Current sqrt price, derived from the current tick when omitted
        #[arg(long)]
        sqrt_price_x96: Option<U256>,
        #[arg(long)]
        amount0: U256,
        #[arg(long)]
        amount1: U256,
        #[arg(long)]
        owner: Option<Address>,
    },
    /// Add liquidity to an existing position
    Increase {
        #[arg(long)]
        token_id: U256,
        #[arg(long, allow_hyphen_values = true)]
        tick_lower: i32,
        #[arg(long, allow_hyphen_values = true)]
        tick_upper: i32,
        #[arg(long, allow_hyphen_values = true)]
        current_tick: i32,
        /// Current sqrt price, derived from the current tick when omitted
        #[arg(long)]
        sqrt_price_x96: Option<U256>,
        #[arg(long)]
        amount0: U256,
        #[arg(long)]
        amount1: U256,
    },
    /// Remove a percentage of a position's liquidity
    Remove {
        #[arg(long)]
        token_id: U256,
        #[arg(long)]
        liquidity: u128,
        #[arg(long, default_value_t = 100)]
        percent: u8,
        #[arg(long)]
        recipient: Option<Address>,
    },
    /// Decode a packed position info word
    DecodeInfo {
        info: U256,
        #[arg(long)]
        layout: Option<PositionInfoLayout>,
    },
    /// Convert between ticks and prices
    Price {
        #[arg(long, allow_hyphen_values = true)]
        tick: Option<i32>,
        #[arg(long)]
        price: Option<f64>,
    },
}

fn deadline(config: &PlannerConfig) -> U256 {
    U256::from((chrono::Utc::now().timestamp() + config.settings.deadline_secs).max(0) as u64)
}

fn resolve(config: &PlannerConfig, args: &RangeArgs) -> Result<TickRange> {
    let pool_key = config.pool_key()?;
    Ok(resolve_range(args.preset, args.current_tick, pool_key.tick_spacing(), args.lower, args.upper)?)
}

fn print_range(config: &PlannerConfig, range: &TickRange) {
    let (decimals0, decimals1) = config.decimals();
    let scale = 10f64.powi(decimals0 as i32 - decimals1 as i32);
    println!("range {range} width {}", range.width());
    println!("price lower {:.12}", tick_to_price(range.tick_lower()) * scale);
    println!("price upper {:.12}", tick_to_price(range.tick_upper()) * scale);
}

fn run(config: &PlannerConfig, command: Command) -> Result<()> {
    let pool_key = config.pool_key()?;
    info!(pool = %pool_key, pool_id = %pool_key.pool_id(), "Loaded pool");

    match command {
        Command::Range(args) => {
            let range = resolve(config, &args)?;
            print_range(config, &range);
        }
        Command::Mint { range, sqrt_price_x96, amount0, amount1, owner } => {
            let tick_range = resolve(config, &range)?;
            let owner = owner.or(config.settings.owner).ok_or_eyre("owner is not set")?;
            let sqrt_price_x96 = sqrt_price_x96.unwrap_or_else(|| tick_to_sqrt_price_x96(range.current_tick));
            let plan = MintPlan {
                pool_key,
                range: tick_range,
                sqrt_price_x96,
                amount0_desired: amount0,
                amount1_desired: amount1,
                owner,
                slippage_bps: config.settings.slippage_bps,
            };
            print_range(config, &tick_range);
            println!("liquidity {}", plan.liquidity()?);
            println!("calldata {}", encode_modify_liquidities(plan.build()?, deadline(config)));
        }
        Command::Increase { token_id, tick_lower, tick_upper, current_tick, sqrt_price_x96, amount0, amount1 } => {
            let plan = IncreasePlan {
                token_id,
                pool_key,
                range: TickRange::new_usable(tick_lower, tick_upper, pool_key.tick_spacing())?,
                sqrt_price_x96: sqrt_price_x96.unwrap_or_else(|| tick_to_sqrt_price_x96(current_tick)),
                amount0_desired: amount0,
                amount1_desired: amount1,
                slippage_bps: config.settings.slippage_bps,
            };
            println!("calldata {}", encode_modify_liquidities(plan.build()?, deadline(config)));
        }
        Command::Remove { token_id, liquidity, percent, recipient } => {
            let recipient = recipient.or(config.settings.owner).ok_or_eyre("recipient is not set")?;
            let plan = RemovePlan { token_id, pool_key, liquidity, percent, recipient, amount0_min: 0, amount1_min: 0 };
            println!("liquidity {}", plan.liquidity_to_remove()?);
            println!("calldata {}", encode_modify_liquidities(plan.build()?, deadline(config)));
        }
        Command::DecodeInfo { info, layout } => {
            let info = decode_position_info_with(info, layout.unwrap_or(config.settings.position_info_layout));
            debug!(?info, "Decoded position info");
            println!("range [{}, {})", info.tick_lower, info.tick_upper);
            println!("has subscriber {}", info.has_subscriber);
            println!("pool matches {}", info.matches_pool(pool_key.pool_id()));
        }
        Command::Price { tick, price } => {
            let (decimals0, decimals1) = config.decimals();
            let tick = match (tick, price) {
                (Some(tick), None) => tick,
                (None, Some(price)) => price_to_tick(price)?,
                _ => return Err(eyre!("exactly one of --tick or --price is required")),
            };
            let sqrt_price_x96 = tick_to_sqrt_price_x96(tick);
            println!("tick {tick}");
            println!("sqrt price x96 {sqrt_price_x96}");
            println!("price {:.12}", sqrt_price_x96_to_price(sqrt_price_x96, decimals0, decimals1));
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());
    let fmt_layer = fmt::Layer::default().with_file(false).with_line_number(true).with_filter(env_filter);

    tracing_subscriber::registry().with(fmt_layer).init();

    let args = Commands::parse();
    let config = PlannerConfig::load_from_file(args.config).await?;

    run(&config, args.command)
}
