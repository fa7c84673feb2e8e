mod calculator_tests;
mod pricing_properties;
