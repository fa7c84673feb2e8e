//! Black-Scholes-Merton pricing, Greeks and implied volatility.
//!
//! This module is the numerical core behind an option calculator. It takes
//! plain numbers and returns plain numbers: a theoretical price, the four
//! analytic Greeks, the volatility implied by an observed price and grids of
//! prices over perturbed inputs.
//!
//! # Pricing
//!
//! European calls and puts are priced with the closed-form formula
//!
//! - Call: `S·Φ(d1) − K·e^(−rT)·Φ(d2)`
//! - Put: `K·e^(−rT)·Φ(−d2) − S·Φ(−d1)`
//!
//! where Φ is built on the Abramowitz-Stegun error function approximation
//! (absolute error below 1.5e-7).
//!
//! # Invalid inputs
//!
//! The plain functions do not validate. Zero or negative volatility or time
//! to expiry divide by zero inside `d1` and the NaN or infinity propagates to
//! the result, which callers detect with `is_finite`. The `*_strict`
//! variants validate first and return [`PricingError`] instead.
//!
//! # Implied volatility
//!
//! Newton-Raphson on `price(σ) − market_price` with analytic vega, starting
//! at 20%, up to 100 iterations, tolerance 1e-6 on price. By default the
//! last estimate is returned even without convergence; [`solve_iv`] exposes
//! a convergence flag.
//!
//! # Example
//!
//! ```
//! use option_pricer_rs::pricing::{PricingInputs, implied_volatility, price};
//!
//! let inputs = PricingInputs::call(100.0, 100.0, 0.05, 1.0, 0.2);
//! let value = price(&inputs);
//! assert!((value - 10.4506).abs() < 1e-3);
//!
//! let iv = implied_volatility(value, &inputs);
//! assert!((iv - 0.2).abs() < 1e-4);
//! ```

mod black_scholes;
mod calculator;
mod error;
mod sensitivity;
mod solver;
mod types;

pub use black_scholes::{BlackScholes, greeks, price};
pub use calculator::{CalculationReport, OptionCalculator};
pub use error::PricingError;
pub use sensitivity::{
    GRID_CENTER, GRID_MULTIPLIERS, GreeksProfile, PROFILE_POINTS, PROFILE_START, PROFILE_STEP,
    ProfilePoint, SensitivityGrid, greeks_profile, sensitivity_table,
};
pub use solver::{IVSolution, SolverConfig, implied_volatility, solve_iv, solve_iv_strict};
pub use types::{Greeks, IntermediateTerms, OptionType, PricingInputs};
