use option_pricer_rs::prelude::*;

#[test]
fn test_report_is_consistent_with_core_functions() {
    let inputs = PricingInputs::put(100.0, 95.0, 0.04, 0.5, 0.3);
    let report = OptionCalculator::default().calculate(&inputs, None);

    assert_eq!(report.price, price(&inputs));
    assert_eq!(report.greeks, greeks(&inputs));
    assert_eq!(report.sensitivity, sensitivity_table(&inputs));
    assert_eq!(report.profile, greeks_profile(&inputs));
}

#[test]
fn test_recalculation_is_fresh() {
    let calculator = OptionCalculator::default();
    let first = calculator.calculate(&PricingInputs::default(), None);
    let second = calculator.calculate(&PricingInputs::default().with_spot(120.0), None);
    let third = calculator.calculate(&PricingInputs::default(), None);

    assert_ne!(first.price, second.price);
    assert_eq!(first, third);
}

#[test]
fn test_custom_solver_config_is_used() {
    let config = SolverConfig::default().with_max_iterations(0);
    let calculator = OptionCalculator::new(config);
    assert_eq!(calculator.solver_config().max_iterations, 0);

    let inputs = PricingInputs::default();
    let target = price(&inputs.with_volatility(0.5));
    let report = calculator.calculate(&inputs, Some(target));

    // With no iterations allowed the initial guess comes back untouched
    assert_eq!(report.implied_volatility, Some(0.2));
}

#[test]
fn test_report_round_trips_through_json() {
    let report = OptionCalculator::default().calculate(&PricingInputs::default(), Some(12.0));
    let json = report.to_json().unwrap();
    let restored: CalculationReport = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.inputs, report.inputs);
    assert_eq!(
        restored.sensitivity.volatility_multipliers,
        [0.8, 0.9, 1.0, 1.1, 1.2]
    );
    assert!((restored.price - report.price).abs() < 1e-12);
    assert!(restored.implied_volatility.is_some());
}
