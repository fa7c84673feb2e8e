use criterion::{Criterion, criterion_group, criterion_main};
use option_pricer_rs::prelude::*;
use std::hint::black_box;

fn bench_pricing(c: &mut Criterion) {
    let inputs = PricingInputs::default();

    let mut group = c.benchmark_group("pricing");
    group.bench_function("price", |b| b.iter(|| price(black_box(&inputs))));
    group.bench_function("greeks", |b| b.iter(|| greeks(black_box(&inputs))));
    group.bench_function("norm_cdf", |b| {
        b.iter(|| BlackScholes::norm_cdf(black_box(0.35)))
    });
    group.finish();
}

fn bench_implied_volatility(c: &mut Criterion) {
    let mut group = c.benchmark_group("implied_volatility");

    for (label, strike) in [("atm", 100.0), ("otm", 130.0), ("itm", 70.0)] {
        let inputs = PricingInputs::call(100.0, strike, 0.05, 0.5, 0.35);
        let market_price = price(&inputs);
        group.bench_function(label, |b| {
            b.iter(|| implied_volatility(black_box(market_price), black_box(&inputs)))
        });
    }
    group.finish();
}

fn bench_grids(c: &mut Criterion) {
    let inputs = PricingInputs::default();

    let mut group = c.benchmark_group("grids");
    group.bench_function("sensitivity_table", |b| {
        b.iter(|| sensitivity_table(black_box(&inputs)))
    });
    group.bench_function("greeks_profile", |b| {
        b.iter(|| greeks_profile(black_box(&inputs)))
    });
    group.bench_function("full_report", |b| {
        let calculator = OptionCalculator::default();
        b.iter(|| calculator.calculate(black_box(&inputs), black_box(Some(12.0))))
    });
    group.finish();
}

criterion_group!(benches, bench_pricing, bench_implied_volatility, bench_grids);
criterion_main!(benches);
