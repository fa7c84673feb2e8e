//! # option-pricer-rs
//!
//! The numerical core of a Black-Scholes option calculator: closed-form
//! European option prices, analytic Greeks, a Newton-Raphson implied
//! volatility solver, a 5x5 volatility/time sensitivity grid and a spot
//! profile of price and Greeks for charting.
//!
//! Everything is a pure, synchronous function over `f64` values. There is
//! no I/O and no shared state; the crate only emits `tracing` events and
//! leaves installing a subscriber to the application.
//!
//! ## Quick start
//!
//! ```
//! use option_pricer_rs::prelude::*;
//!
//! let inputs = PricingInputs::default(); // S=100 K=100 r=5% T=1y σ=20% call
//!
//! let sensitivities = greeks(&inputs);
//! assert!(sensitivities.delta > 0.0 && sensitivities.delta < 1.0);
//!
//! let grid = sensitivity_table(&inputs);
//! assert_eq!(grid.center(), price(&inputs));
//!
//! let report = OptionCalculator::default().calculate(&inputs, Some(12.0));
//! assert!(report.implied_volatility.is_some());
//! ```
//!
//! ## Modules
//!
//! - [`pricing`]: the formula, Greeks, solver, grids and the calculator
//! - [`prelude`]: the commonly used types and functions in one import

pub mod pricing;

/// Commonly used types and functions.
pub mod prelude {
    pub use crate::pricing::{
        BlackScholes, CalculationReport, Greeks, GreeksProfile, IVSolution, OptionCalculator,
        OptionType, PricingError, PricingInputs, SensitivityGrid, SolverConfig, greeks,
        greeks_profile, implied_volatility, price, sensitivity_table, solve_iv, solve_iv_strict,
    };
}
