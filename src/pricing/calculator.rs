//! One user-triggered calculation, start to finish.
//!
//! [`OptionCalculator`] runs the pricing formula, the Greeks, the optional
//! implied volatility solve, the sensitivity grid and the spot profile for a
//! single set of inputs and bundles the results into a [`CalculationReport`].
//! Nothing is cached between calls.

use super::black_scholes::BlackScholes;
use super::error::PricingError;
use super::sensitivity::{GreeksProfile, SensitivityGrid, greeks_profile, sensitivity_table};
use super::solver::{SolverConfig, solve_iv, solve_iv_strict};
use super::types::{Greeks, PricingInputs};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Everything displayed for one calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationReport {
    /// Inputs the report was computed from.
    pub inputs: PricingInputs,
    /// Theoretical option price.
    pub price: f64,
    /// Analytic Greeks at the inputs.
    pub greeks: Greeks,
    /// Volatility implied by the market price, if one was given.
    pub implied_volatility: Option<f64>,
    /// 5x5 volatility/time price grid.
    pub sensitivity: SensitivityGrid,
    /// Price and Greeks across spot levels.
    pub profile: GreeksProfile,
}

impl CalculationReport {
    /// Returns true if the price and all Greeks are finite.
    ///
    /// A false result is how out-of-domain inputs show up on the permissive
    /// path; the presentation layer should display "no result".
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.price.is_finite() && self.greeks.is_finite()
    }

    /// Serializes the report to JSON.
    ///
    /// Non-finite numbers are written as `null`. Those fields cannot be read
    /// back into `f64`, so only a report for which [`is_finite`] holds and
    /// whose grid and profile are finite deserializes again.
    ///
    /// [`is_finite`]: CalculationReport::is_finite
    pub fn to_json(&self) -> Result<String, PricingError> {
        serde_json::to_string(self).map_err(|error| PricingError::Serialization {
            message: error.to_string(),
        })
    }

    /// Serializes the report to indented JSON.
    pub fn to_json_pretty(&self) -> Result<String, PricingError> {
        serde_json::to_string_pretty(self).map_err(|error| PricingError::Serialization {
            message: error.to_string(),
        })
    }
}

/// Runs complete calculations with a fixed solver configuration.
#[derive(Debug, Clone, Default)]
pub struct OptionCalculator {
    solver: SolverConfig,
}

impl OptionCalculator {
    /// Creates a calculator using `solver` for implied volatility.
    #[must_use]
    pub fn new(solver: SolverConfig) -> Self {
        Self { solver }
    }

    /// The solver configuration in use.
    #[must_use]
    pub fn solver_config(&self) -> &SolverConfig {
        &self.solver
    }

    /// Computes a report without validating anything.
    ///
    /// The implied volatility is solved only when `market_price` is present,
    /// non-zero and not NaN; it is the solver's last estimate whether or not it
    /// converged. Out-of-domain inputs yield non-finite numbers in the
    /// report rather than an error.
    #[must_use]
    pub fn calculate(
        &self,
        inputs: &PricingInputs,
        market_price: Option<f64>,
    ) -> CalculationReport {
        let implied_volatility = market_price
            .filter(|price| *price != 0.0 && !price.is_nan())
            .map(|price| solve_iv(price, inputs, &self.solver).iv);

        let report = Self::assemble(inputs, implied_volatility);
        debug!(
            "calculated {:?} price={} iv={:?}",
            inputs.option_type, report.price, report.implied_volatility
        );
        report
    }

    /// Computes a report after validating the inputs.
    ///
    /// # Returns
    /// - `Ok(report)` with finite price and Greeks
    /// - `Err(PricingError::InvalidInput)` if the inputs or market price are
    ///   out of domain
    /// - `Err(PricingError::ConvergenceFailure)` if a market price was given
    ///   and the solver did not converge
    pub fn calculate_strict(
        &self,
        inputs: &PricingInputs,
        market_price: Option<f64>,
    ) -> Result<CalculationReport, PricingError> {
        inputs.validate()?;

        let implied_volatility = match market_price {
            Some(price) => Some(solve_iv_strict(price, inputs, &self.solver)?),
            None => None,
        };

        let report = Self::assemble(inputs, implied_volatility);
        debug!(
            "calculated (strict) {:?} price={} iv={:?}",
            inputs.option_type, report.price, report.implied_volatility
        );
        Ok(report)
    }

    fn assemble(inputs: &PricingInputs, implied_volatility: Option<f64>) -> CalculationReport {
        CalculationReport {
            inputs: *inputs,
            price: BlackScholes::price(inputs),
            greeks: BlackScholes::greeks(inputs),
            implied_volatility,
            sensitivity: sensitivity_table(inputs),
            profile: greeks_profile(inputs),
        }
    }
}
