//! Price grids over perturbed inputs.
//!
//! [`sensitivity_table`] reprices the option on a fixed 5x5 grid of
//! volatility and time multipliers. [`greeks_profile`] sweeps the spot price
//! and records price and Greeks at each point, which is what a chart of the
//! option's behaviour around the current spot is drawn from.

use super::black_scholes::BlackScholes;
use super::types::{Greeks, PricingInputs};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Multipliers applied to volatility (rows) and time to expiry (columns).
pub const GRID_MULTIPLIERS: [f64; 5] = [0.8, 0.9, 1.0, 1.1, 1.2];

/// Index of the unperturbed row and column.
pub const GRID_CENTER: usize = 2;

/// Number of spot points in a [`GreeksProfile`].
pub const PROFILE_POINTS: usize = 100;

/// First spot point as a fraction of the current spot.
pub const PROFILE_START: f64 = 0.8;

/// Spacing between spot points as a fraction of the current spot.
pub const PROFILE_STEP: f64 = 0.04;

/// Option prices over perturbed volatility and time to expiry.
///
/// `prices[i][j]` is the price at volatility `σ · volatility_multipliers[i]`
/// and time `T · time_multipliers[j]`, all other inputs unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensitivityGrid {
    /// Row multipliers applied to volatility.
    pub volatility_multipliers: [f64; 5],
    /// Column multipliers applied to time to expiry.
    pub time_multipliers: [f64; 5],
    /// Prices, row-major by volatility.
    pub prices: [[f64; 5]; 5],
}

impl SensitivityGrid {
    /// Price at the unperturbed inputs.
    #[must_use]
    pub fn center(&self) -> f64 {
        self.prices[GRID_CENTER][GRID_CENTER]
    }

    /// Volatility used for row `row` given the base volatility.
    ///
    /// # Panics
    /// If `row` is 5 or more.
    #[must_use]
    pub fn volatility_at(&self, row: usize, base_volatility: f64) -> f64 {
        base_volatility * self.volatility_multipliers[row]
    }

    /// Time to expiry used for column `column` given the base time.
    ///
    /// # Panics
    /// If `column` is 5 or more.
    #[must_use]
    pub fn time_at(&self, column: usize, base_time: f64) -> f64 {
        base_time * self.time_multipliers[column]
    }

    /// Iterates over the rows in volatility order.
    pub fn rows(&self) -> impl Iterator<Item = &[f64; 5]> {
        self.prices.iter()
    }
}

/// Builds the 5x5 volatility/time sensitivity grid.
///
/// Rows follow [`GRID_MULTIPLIERS`] applied to volatility, columns the same
/// multipliers applied to time to expiry. The center cell is exactly the
/// price at `inputs`.
#[must_use]
pub fn sensitivity_table(inputs: &PricingInputs) -> SensitivityGrid {
    let mut prices = [[0.0; 5]; 5];

    for (i, vol_mult) in GRID_MULTIPLIERS.iter().enumerate() {
        for (j, time_mult) in GRID_MULTIPLIERS.iter().enumerate() {
            let bumped = inputs
                .with_volatility(inputs.volatility * vol_mult)
                .with_time_to_expiry(inputs.time_to_expiry * time_mult);
            prices[i][j] = BlackScholes::price(&bumped);
        }
    }

    trace!("sensitivity_table: {:?}", prices);
    SensitivityGrid {
        volatility_multipliers: GRID_MULTIPLIERS,
        time_multipliers: GRID_MULTIPLIERS,
        prices,
    }
}

/// Price and Greeks at one spot level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfilePoint {
    /// Spot price at this point.
    pub spot: f64,
    /// Option price at this spot.
    pub price: f64,
    /// Greeks at this spot.
    pub greeks: Greeks,
}

/// Price and Greeks across a range of spot prices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GreeksProfile {
    /// Points in increasing spot order.
    pub points: Vec<ProfilePoint>,
}

impl GreeksProfile {
    /// Spot prices, the chart's x axis.
    #[must_use]
    pub fn spots(&self) -> Vec<f64> {
        self.points.iter().map(|point| point.spot).collect()
    }

    /// Option prices in spot order.
    #[must_use]
    pub fn prices(&self) -> Vec<f64> {
        self.points.iter().map(|point| point.price).collect()
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the profile has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Sweeps spot from 80% of the current spot in steps of 4%.
///
/// Produces [`PROFILE_POINTS`] points at `S · (0.8 + 0.04 · i)`; every other
/// input is held fixed.
#[must_use]
pub fn greeks_profile(inputs: &PricingInputs) -> GreeksProfile {
    let points = (0..PROFILE_POINTS)
        .map(|i| {
            let spot = inputs.spot * (PROFILE_START + i as f64 * PROFILE_STEP);
            let bumped = inputs.with_spot(spot);
            ProfilePoint {
                spot: bumped.spot,
                price: BlackScholes::price(&bumped),
                greeks: BlackScholes::greeks(&bumped),
            }
        })
        .collect();

    GreeksProfile { points }
}
