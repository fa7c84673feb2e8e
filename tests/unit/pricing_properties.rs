use option_pricer_rs::prelude::*;

const TOLERANCE: f64 = 1e-6;

// The erf approximation can leave far out-of-the-money prices a hair below zero
const BOUND_TOLERANCE: f64 = 1e-4;

fn sample_inputs() -> Vec<(f64, f64, f64, f64, f64)> {
    let mut cases = Vec::new();
    for spot in [60.0, 90.0, 100.0, 115.0, 160.0] {
        for strike in [80.0, 100.0, 125.0] {
            for rate in [-0.01, 0.0, 0.05] {
                for time in [0.1, 1.0, 3.0] {
                    for vol in [0.1, 0.3, 0.8] {
                        cases.push((spot, strike, rate, time, vol));
                    }
                }
            }
        }
    }
    cases
}

#[test]
fn test_prices_finite_and_above_lower_bounds() {
    for (spot, strike, rate, time, vol) in sample_inputs() {
        let call = PricingInputs::call(spot, strike, rate, time, vol);
        let put = PricingInputs::put(spot, strike, rate, time, vol);
        let discounted_strike = strike * call.discount_factor();

        let call_price = price(&call);
        let put_price = price(&put);

        assert!(call_price.is_finite() && put_price.is_finite());
        assert!(call_price >= -BOUND_TOLERANCE, "negative call for {:?}", call);
        assert!(put_price >= -BOUND_TOLERANCE, "negative put for {:?}", put);
        assert!(call_price >= spot - discounted_strike - BOUND_TOLERANCE);
        assert!(put_price >= discounted_strike - spot - BOUND_TOLERANCE);
    }
}

#[test]
fn test_put_call_parity() {
    for (spot, strike, rate, time, vol) in sample_inputs() {
        let call = PricingInputs::call(spot, strike, rate, time, vol);
        let put = PricingInputs::put(spot, strike, rate, time, vol);
        let forward_gap = spot - strike * call.discount_factor();

        let gap = price(&call) - price(&put);
        assert!(
            (gap - forward_gap).abs() < TOLERANCE,
            "parity broken for {:?}: {} vs {}",
            call,
            gap,
            forward_gap
        );
    }
}

#[test]
fn test_delta_ranges_and_symmetric_greeks() {
    for (spot, strike, rate, time, vol) in sample_inputs() {
        let call = greeks(&PricingInputs::call(spot, strike, rate, time, vol));
        let put = greeks(&PricingInputs::put(spot, strike, rate, time, vol));

        assert!((0.0..=1.0).contains(&call.delta));
        assert!((-1.0..=0.0).contains(&put.delta));
        assert_eq!(call.gamma, put.gamma);
        assert_eq!(call.vega, put.vega);
    }
}

#[test]
fn test_delta_strictly_inside_for_moderate_inputs() {
    let call = greeks(&PricingInputs::call(100.0, 100.0, 0.05, 0.5, 0.25));
    let put = greeks(&PricingInputs::put(100.0, 100.0, 0.05, 0.5, 0.25));
    assert!(call.delta > 0.0 && call.delta < 1.0);
    assert!(put.delta > -1.0 && put.delta < 0.0);
}

#[test]
fn test_reference_scenario() {
    let inputs = PricingInputs::call(100.0, 100.0, 0.05, 1.0, 0.2);
    let sensitivities = greeks(&inputs);

    assert!((price(&inputs) - 10.4506).abs() < 1e-3);
    assert!((sensitivities.delta - 0.6368).abs() < 1e-3);
    assert!((sensitivities.gamma - 0.0188).abs() < 1e-3);
    assert!((sensitivities.vega - 37.52).abs() < 1e-2);
}

#[test]
fn test_greeks_agree_with_finite_differences() {
    let inputs = PricingInputs::put(95.0, 100.0, 0.03, 0.8, 0.3);
    let analytic = greeks(&inputs);
    let h = 1e-3;

    let up = price(&inputs.with_spot(inputs.spot + h));
    let down = price(&inputs.with_spot(inputs.spot - h));
    let mid = price(&inputs);
    assert!((analytic.delta - (up - down) / (2.0 * h)).abs() < 1e-4);
    assert!((analytic.gamma - (up - 2.0 * mid + down) / (h * h)).abs() < 1e-3);

    let vol_up = price(&inputs.with_volatility(inputs.volatility + h));
    let vol_down = price(&inputs.with_volatility(inputs.volatility - h));
    assert!((analytic.vega - (vol_up - vol_down) / (2.0 * h)).abs() < 1e-2);

    // Theta is the derivative with respect to calendar time, so shorter expiry
    let later = price(&inputs.with_time_to_expiry(inputs.time_to_expiry - h));
    let earlier = price(&inputs.with_time_to_expiry(inputs.time_to_expiry + h));
    assert!((analytic.theta - (later - earlier) / (2.0 * h)).abs() < 1e-2);
}

#[test]
fn test_standard_normal_cdf() {
    assert!((BlackScholes::norm_cdf(0.0) - 0.5).abs() < TOLERANCE);

    let mut x = -8.0;
    while x <= 8.0 {
        let sum = BlackScholes::norm_cdf(x) + BlackScholes::norm_cdf(-x);
        assert!((sum - 1.0).abs() < TOLERANCE, "asymmetric at {x}");
        x += 0.1;
    }
}

#[test]
fn test_sensitivity_grid_center() {
    for (spot, strike, rate, time, vol) in sample_inputs().into_iter().step_by(7) {
        let inputs = PricingInputs::put(spot, strike, rate, time, vol);
        assert_eq!(sensitivity_table(&inputs).center(), price(&inputs));
    }
}

#[test]
fn test_non_positive_inputs_do_not_panic() {
    let base = PricingInputs::default();
    let cases = [
        base.with_volatility(0.0),
        base.with_volatility(-0.2),
        base.with_time_to_expiry(0.0),
        base.with_time_to_expiry(-1.0),
        base.with_spot(0.0),
    ];

    for inputs in cases {
        let _ = price(&inputs);
        let _ = greeks(&inputs);
        let _ = sensitivity_table(&inputs);
        assert!(inputs.validate().is_err());
    }

    // Negative time puts a NaN square root into every term
    assert!(price(&base.with_time_to_expiry(-1.0)).is_nan());
}
