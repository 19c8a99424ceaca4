use alloy_primitives::U256;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use defi_types::RangePreset;
use uniswap_v4_math::{get_sqrt_ratio_at_tick, liquidity_from_amounts, resolve_range, tick_to_sqrt_price_x96};

fn plan_liquidity() -> eyre::Result<u128> {
    let range = resolve_range(RangePreset::Wide, 167890, 200, None, None)?;
    let sqrt_price = tick_to_sqrt_price_x96(167890);
    let amount0 = U256::from(10u128.pow(18));
    let amount1 = U256::from(10u128.pow(24));
    Ok(liquidity_from_amounts(sqrt_price, range.tick_lower(), range.tick_upper(), amount0, amount1)?)
}

fn benchmark_tick_math(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick_math");

    group.bench_function("tick_to_sqrt_price_x96", |b| b.iter(|| tick_to_sqrt_price_x96(black_box(-167890))));
    group.bench_function("get_sqrt_ratio_at_tick", |b| b.iter(|| get_sqrt_ratio_at_tick(black_box(-167890))));
    group.finish();
}

fn benchmark_liquidity(c: &mut Criterion) {
    let mut group = c.benchmark_group("liquidity");

    group.bench_function("plan_liquidity", |b| b.iter(plan_liquidity));
    group.finish();
}

criterion_group!(benches, benchmark_tick_math, benchmark_liquidity);
criterion_main!(benches);
