//! Black-Scholes pricing model and Greeks calculation.
//!
//! Every function here is a pure function of its arguments. No input is
//! guarded: a zero or negative volatility or time to expiry divides by zero
//! in `d1` and the resulting NaN or infinity flows through to the output.

use super::types::{Greeks, IntermediateTerms, OptionType, PricingInputs};
use std::f64::consts::{PI, SQRT_2};

/// Black-Scholes-Merton closed-form pricing for European options.
pub struct BlackScholes;

impl BlackScholes {
    /// Error function, Abramowitz & Stegun 7.1.26.
    ///
    /// Odd in `x`; absolute error stays below 1.5e-7 everywhere. The
    /// coefficients sum to 0.999999999, so `erf(0)` is about 1e-9 rather
    /// than exactly zero.
    #[must_use]
    pub fn erf(x: f64) -> f64 {
        const A1: f64 = 0.254829592;
        const A2: f64 = -0.284496736;
        const A3: f64 = 1.421413741;
        const A4: f64 = -1.453152027;
        const A5: f64 = 1.061405429;
        const P: f64 = 0.3275911;

        let sign = if x < 0.0 { -1.0 } else { 1.0 };
        let x = x.abs();

        let t = 1.0 / (1.0 + P * x);
        let poly = ((((A5 * t + A4) * t + A3) * t + A2) * t + A1) * t;

        sign * (1.0 - poly * (-x * x).exp())
    }

    /// Standard normal cumulative distribution function Φ(x).
    #[must_use]
    pub fn norm_cdf(x: f64) -> f64 {
        0.5 * (1.0 + Self::erf(x / SQRT_2))
    }

    /// Standard normal probability density function φ(x).
    #[must_use]
    pub fn norm_pdf(x: f64) -> f64 {
        (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
    }

    /// The standardized moneyness terms shared by price and Greeks.
    ///
    /// d1 = [ln(S/K) + (r + σ²/2)T] / (σ√T), d2 = d1 - σ√T
    ///
    /// Arguments are in the usual order S, K, r, T (years), σ.
    #[must_use]
    pub fn d1_d2(spot: f64, strike: f64, rate: f64, time: f64, vol: f64) -> IntermediateTerms {
        let vol_sqrt_time = vol * time.sqrt();
        let d1 = ((spot / strike).ln() + (rate + 0.5 * vol * vol) * time) / vol_sqrt_time;
        IntermediateTerms {
            d1,
            d2: d1 - vol_sqrt_time,
        }
    }

    fn terms(inputs: &PricingInputs) -> IntermediateTerms {
        Self::d1_d2(
            inputs.spot,
            inputs.strike,
            inputs.risk_free_rate,
            inputs.time_to_expiry,
            inputs.volatility,
        )
    }

    /// Calculates the theoretical option price.
    ///
    /// For calls: C = S·N(d1) - K·e^(-rT)·N(d2)
    /// For puts:  P = K·e^(-rT)·N(-d2) - S·N(-d1)
    #[must_use]
    pub fn price(inputs: &PricingInputs) -> f64 {
        let IntermediateTerms { d1, d2 } = Self::terms(inputs);
        let discounted_strike = inputs.strike * inputs.discount_factor();

        match inputs.option_type {
            OptionType::Call => {
                inputs.spot * Self::norm_cdf(d1) - discounted_strike * Self::norm_cdf(d2)
            }
            OptionType::Put => {
                discounted_strike * Self::norm_cdf(-d2) - inputs.spot * Self::norm_cdf(-d1)
            }
        }
    }

    /// Calculates delta (∂price/∂S).
    ///
    /// For calls: Δ = N(d1)
    /// For puts:  Δ = N(d1) - 1
    #[must_use]
    pub fn delta(inputs: &PricingInputs) -> f64 {
        Self::delta_from(inputs, Self::terms(inputs))
    }

    /// Calculates gamma (∂²price/∂S²), identical for calls and puts.
    ///
    /// Γ = N'(d1) / (S · σ · √T)
    #[must_use]
    pub fn gamma(inputs: &PricingInputs) -> f64 {
        Self::gamma_from(inputs, Self::terms(inputs))
    }

    /// Calculates annualized theta (∂price/∂t).
    ///
    /// For calls: -S·N'(d1)·σ/(2√T) - r·K·e^(-rT)·N(d2)
    /// For puts:  -S·N'(d1)·σ/(2√T) + r·K·e^(-rT)·N(-d2)
    #[must_use]
    pub fn theta(inputs: &PricingInputs) -> f64 {
        Self::theta_from(inputs, Self::terms(inputs))
    }

    /// Calculates vega (∂price/∂σ), identical for calls and puts.
    ///
    /// Vega = S · N'(d1) · √T
    #[must_use]
    pub fn vega(inputs: &PricingInputs) -> f64 {
        Self::vega_from(inputs, Self::terms(inputs))
    }

    /// Calculates all four Greeks from a single `d1`/`d2` evaluation.
    #[must_use]
    pub fn greeks(inputs: &PricingInputs) -> Greeks {
        let terms = Self::terms(inputs);
        Greeks {
            delta: Self::delta_from(inputs, terms),
            gamma: Self::gamma_from(inputs, terms),
            theta: Self::theta_from(inputs, terms),
            vega: Self::vega_from(inputs, terms),
        }
    }

    fn delta_from(inputs: &PricingInputs, terms: IntermediateTerms) -> f64 {
        match inputs.option_type {
            OptionType::Call => Self::norm_cdf(terms.d1),
            OptionType::Put => Self::norm_cdf(terms.d1) - 1.0,
        }
    }

    fn gamma_from(inputs: &PricingInputs, terms: IntermediateTerms) -> f64 {
        Self::norm_pdf(terms.d1)
            / (inputs.spot * inputs.volatility * inputs.time_to_expiry.sqrt())
    }

    fn theta_from(inputs: &PricingInputs, terms: IntermediateTerms) -> f64 {
        let decay = -(inputs.spot * Self::norm_pdf(terms.d1) * inputs.volatility)
            / (2.0 * inputs.time_to_expiry.sqrt());
        let carry = inputs.risk_free_rate * inputs.strike * inputs.discount_factor();

        match inputs.option_type {
            OptionType::Call => decay - carry * Self::norm_cdf(terms.d2),
            OptionType::Put => decay + carry * Self::norm_cdf(-terms.d2),
        }
    }

    fn vega_from(inputs: &PricingInputs, terms: IntermediateTerms) -> f64 {
        inputs.spot * Self::norm_pdf(terms.d1) * inputs.time_to_expiry.sqrt()
    }
}

/// Theoretical price of the option described by `inputs`.
#[must_use]
pub fn price(inputs: &PricingInputs) -> f64 {
    BlackScholes::price(inputs)
}

/// Delta, gamma, theta and vega of the option described by `inputs`.
#[must_use]
pub fn greeks(inputs: &PricingInputs) -> Greeks {
    BlackScholes::greeks(inputs)
}
