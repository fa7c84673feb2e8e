//! Value types shared by the pricing formula, the Greeks and the solver.

use serde::{Deserialize, Serialize};

use super::error::PricingError;

/// Option type priced by the closed-form formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OptionType {
    /// Call option (right to buy the underlying at strike price).
    Call,
    /// Put option (right to sell the underlying at strike price).
    Put,
}

/// Parameters of a single European option valuation.
///
/// The permissive pricing functions accept any values here. Non-positive
/// spot, strike, time or volatility produce non-finite results which the
/// caller is expected to detect; use [`PricingInputs::validate`] to reject
/// them up front instead.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingInputs {
    /// Underlying spot price (S).
    pub spot: f64,
    /// Option strike price (K).
    pub strike: f64,
    /// Risk-free interest rate, annualized (r). May be negative.
    pub risk_free_rate: f64,
    /// Time to expiration in years (T).
    pub time_to_expiry: f64,
    /// Annualized volatility (σ), e.g. 0.2 for 20%.
    pub volatility: f64,
    /// Call or Put.
    pub option_type: OptionType,
}

impl Default for PricingInputs {
    /// The calculator's reset state: an at-the-money one-year call.
    fn default() -> Self {
        Self {
            spot: 100.0,
            strike: 100.0,
            risk_free_rate: 0.05,
            time_to_expiry: 1.0,
            volatility: 0.2,
            option_type: OptionType::Call,
        }
    }
}

impl PricingInputs {
    /// Creates new pricing inputs.
    ///
    /// # Arguments
    /// - `spot`: Underlying spot price
    /// - `strike`: Option strike price
    /// - `risk_free_rate`: Risk-free interest rate (annualized)
    /// - `time_to_expiry`: Time to expiration in years
    /// - `volatility`: Annualized volatility
    /// - `option_type`: Call or Put
    #[must_use]
    pub fn new(
        spot: f64,
        strike: f64,
        risk_free_rate: f64,
        time_to_expiry: f64,
        volatility: f64,
        option_type: OptionType,
    ) -> Self {
        Self {
            spot,
            strike,
            risk_free_rate,
            time_to_expiry,
            volatility,
            option_type,
        }
    }

    /// Creates inputs for a call option.
    #[must_use]
    pub fn call(
        spot: f64,
        strike: f64,
        risk_free_rate: f64,
        time_to_expiry: f64,
        volatility: f64,
    ) -> Self {
        Self::new(
            spot,
            strike,
            risk_free_rate,
            time_to_expiry,
            volatility,
            OptionType::Call,
        )
    }

    /// Creates inputs for a put option.
    #[must_use]
    pub fn put(
        spot: f64,
        strike: f64,
        risk_free_rate: f64,
        time_to_expiry: f64,
        volatility: f64,
    ) -> Self {
        Self::new(
            spot,
            strike,
            risk_free_rate,
            time_to_expiry,
            volatility,
            OptionType::Put,
        )
    }

    /// Returns a copy with a different spot price.
    #[must_use]
    pub fn with_spot(mut self, spot: f64) -> Self {
        self.spot = spot;
        self
    }

    /// Returns a copy with a different volatility.
    #[must_use]
    pub fn with_volatility(mut self, volatility: f64) -> Self {
        self.volatility = volatility;
        self
    }

    /// Returns a copy with a different time to expiry.
    #[must_use]
    pub fn with_time_to_expiry(mut self, time_to_expiry: f64) -> Self {
        self.time_to_expiry = time_to_expiry;
        self
    }

    /// Returns a copy with a different option type.
    #[must_use]
    pub fn with_option_type(mut self, option_type: OptionType) -> Self {
        self.option_type = option_type;
        self
    }

    /// Discount factor e^(-rT).
    #[must_use]
    pub fn discount_factor(&self) -> f64 {
        (-self.risk_free_rate * self.time_to_expiry).exp()
    }

    /// Calculates the intrinsic value of the option.
    ///
    /// For calls: max(0, spot - strike)
    /// For puts: max(0, strike - spot)
    #[must_use]
    pub fn intrinsic_value(&self) -> f64 {
        match self.option_type {
            OptionType::Call => (self.spot - self.strike).max(0.0),
            OptionType::Put => (self.strike - self.spot).max(0.0),
        }
    }

    /// Checks that the inputs lie in the domain where the formula is finite.
    ///
    /// # Returns
    /// - `Ok(())` if spot, strike, time and volatility are finite and positive
    ///   and the rate is finite
    /// - `Err(PricingError::InvalidInput)` naming the first offending field
    pub fn validate(&self) -> Result<(), PricingError> {
        let positive = [
            ("spot", self.spot),
            ("strike", self.strike),
            ("time_to_expiry", self.time_to_expiry),
            ("volatility", self.volatility),
        ];

        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(PricingError::InvalidInput {
                    field,
                    value,
                    message: format!("{field} must be finite and positive"),
                });
            }
        }

        if !self.risk_free_rate.is_finite() {
            return Err(PricingError::InvalidInput {
                field: "risk_free_rate",
                value: self.risk_free_rate,
                message: "risk_free_rate must be finite".to_string(),
            });
        }

        Ok(())
    }
}

/// The `d1`/`d2` terms of the Black-Scholes formula.
///
/// Recomputed on every pricing or Greeks call, never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntermediateTerms {
    /// d1 = [ln(S/K) + (r + σ²/2)T] / (σ√T)
    pub d1: f64,
    /// d2 = d1 - σ√T
    pub d2: f64,
}

/// First and second order price sensitivities.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Greeks {
    /// ∂price/∂S
    pub delta: f64,
    /// ∂²price/∂S²
    pub gamma: f64,
    /// ∂price/∂t per year (not scaled to days).
    pub theta: f64,
    /// ∂price/∂σ per unit of volatility (not scaled to vol points).
    pub vega: f64,
}

impl Greeks {
    /// Returns true if every sensitivity is a finite number.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.delta.is_finite()
            && self.gamma.is_finite()
            && self.theta.is_finite()
            && self.vega.is_finite()
    }
}
