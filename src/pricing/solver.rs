//! Newton-Raphson solver for implied volatility calculation.
//!
//! Finds the volatility at which the Black-Scholes price matches an observed
//! market price, using analytic vega as the derivative:
//!
//! σ_{n+1} = σ_n - (BS(σ_n) - market_price) / vega(σ_n)
//!
//! The default entry point, [`implied_volatility`], never fails. When the
//! iteration budget runs out it returns the last estimate, and a vanishing
//! vega is not special-cased, so the estimate may be far off or non-finite.
//! [`solve_iv`] reports whether the tolerance was met, and
//! [`solve_iv_strict`] turns every such case into a [`PricingError`].

use super::black_scholes::BlackScholes;
use super::error::PricingError;
use super::types::PricingInputs;
use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

/// Configuration for the Newton-Raphson solver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Starting volatility (default: 0.2 = 20%).
    pub initial_guess: f64,
    /// Maximum iterations before giving up (default: 100).
    pub max_iterations: u32,
    /// Convergence tolerance on the absolute price difference (default: 1e-6).
    pub tolerance: f64,
    /// Volatility substituted whenever a step lands at or below zero (default: 1e-4).
    pub volatility_floor: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            initial_guess: 0.2,
            max_iterations: 100,
            tolerance: 1e-6,
            volatility_floor: 1e-4,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum number of iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the convergence tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the initial IV guess.
    #[must_use]
    pub fn with_initial_guess(mut self, initial_guess: f64) -> Self {
        self.initial_guess = initial_guess;
        self
    }

    /// Sets the volatility floor used after a non-positive step.
    #[must_use]
    pub fn with_volatility_floor(mut self, volatility_floor: f64) -> Self {
        self.volatility_floor = volatility_floor;
        self
    }
}

/// Outcome of a solver run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IVSolution {
    /// Final volatility estimate. Meaningful as a solution only if `converged`.
    pub iv: f64,
    /// Number of pricing evaluations performed.
    pub iterations: u32,
    /// True if the price difference fell below the tolerance.
    pub converged: bool,
}

/// Runs the Newton-Raphson iteration and reports how it ended.
///
/// `inputs.volatility` is ignored; the search starts at
/// `config.initial_guess`.
///
/// # Arguments
/// - `market_price`: Observed option price to match
/// - `inputs`: Option parameters (spot, strike, rate, time, type)
/// - `config`: Solver configuration
///
/// # Returns
/// The last volatility estimate together with the iteration count and a
/// convergence flag. Never fails.
pub fn solve_iv(market_price: f64, inputs: &PricingInputs, config: &SolverConfig) -> IVSolution {
    let mut trial = inputs.with_volatility(config.initial_guess);

    for iteration in 0..config.max_iterations {
        let price = BlackScholes::price(&trial);
        let diff = price - market_price;

        if diff.abs() < config.tolerance {
            trace!(
                "implied volatility converged: iv={} after {} iterations",
                trial.volatility,
                iteration + 1
            );
            return IVSolution {
                iv: trial.volatility,
                iterations: iteration + 1,
                converged: true,
            };
        }

        let vega = BlackScholes::vega(&trial);
        let mut next = trial.volatility - diff / vega;
        trace!(
            "iteration {}: iv={} price={} diff={} vega={} next={}",
            iteration,
            trial.volatility,
            price,
            diff,
            vega,
            next
        );

        if next <= 0.0 {
            next = config.volatility_floor;
        }
        trial.volatility = next;
    }

    warn!(
        "implied volatility did not converge after {} iterations, returning iv={}",
        config.max_iterations, trial.volatility
    );
    IVSolution {
        iv: trial.volatility,
        iterations: config.max_iterations,
        converged: false,
    }
}

/// Recovers the volatility implied by `market_price` with default settings.
///
/// Starts at 20%, iterates at most 100 times and stops once the price is
/// within 1e-6 of the target. If that never happens the last estimate is
/// returned as is; check the result with [`solve_iv`] if convergence matters.
#[must_use]
pub fn implied_volatility(market_price: f64, inputs: &PricingInputs) -> f64 {
    solve_iv(market_price, inputs, &SolverConfig::default()).iv
}

/// Solves for implied volatility, rejecting anything short of convergence.
///
/// # Returns
/// - `Ok(iv)` if the tolerance was met with a finite, positive volatility
/// - `Err(PricingError::InvalidInput)` for out-of-domain option parameters
///   or a market price that is not finite and positive
/// - `Err(PricingError::ConvergenceFailure)` if the iteration budget ran out
///   or the estimate stopped being finite
pub fn solve_iv_strict(
    market_price: f64,
    inputs: &PricingInputs,
    config: &SolverConfig,
) -> Result<f64, PricingError> {
    // Volatility is the unknown here, so only validate the other fields
    inputs.with_volatility(config.initial_guess).validate()?;

    if !market_price.is_finite() || market_price <= 0.0 {
        return Err(PricingError::InvalidInput {
            field: "market_price",
            value: market_price,
            message: "market price must be finite and positive".to_string(),
        });
    }

    let solution = solve_iv(market_price, inputs, config);
    if !solution.converged || !solution.iv.is_finite() {
        return Err(PricingError::ConvergenceFailure {
            iterations: solution.iterations,
            last_iv: solution.iv,
        });
    }

    Ok(solution.iv)
}
