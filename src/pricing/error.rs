//! Error types for the strict pricing path.
//!
//! The default functions never fail: out-of-domain inputs come back as
//! non-finite numbers. These errors are only produced by the validating
//! variants.

use std::fmt;

/// Errors reported by strict pricing and implied volatility calls.
#[derive(Debug, Clone, PartialEq)]
pub enum PricingError {
    /// An input lies outside the domain where the formula is finite.
    InvalidInput {
        /// Name of the offending field.
        field: &'static str,
        /// Value that was rejected.
        value: f64,
        /// Description of the constraint.
        message: String,
    },

    /// Newton-Raphson solver did not converge within max iterations.
    ConvergenceFailure {
        /// Number of iterations attempted.
        iterations: u32,
        /// Last IV estimate before giving up.
        last_iv: f64,
    },

    /// A calculation report could not be rendered.
    Serialization {
        /// Underlying serializer message.
        message: String,
    },
}

impl fmt::Display for PricingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PricingError::InvalidInput {
                field,
                value,
                message,
            } => {
                write!(f, "invalid input {field} = {value}: {message}")
            }
            PricingError::ConvergenceFailure {
                iterations,
                last_iv,
            } => {
                write!(
                    f,
                    "solver did not converge after {iterations} iterations, last IV: {last_iv:.4}"
                )
            }
            PricingError::Serialization { message } => {
                write!(f, "serialization error: {message}")
            }
        }
    }
}

impl std::error::Error for PricingError {}
