//! Command-line rendition of the option calculator.
//!
//! Prints the price, Greeks, implied volatility and sensitivity table for one
//! set of inputs, the same figures the calculator page shows.
//!
//! Usage:
//!
//! ```text
//! calculator [SPOT] [STRIKE] [RATE] [TIME] [VOL] [call|put] [MARKET_PRICE] [--json]
//! ```
//!
//! Missing values fall back to the default inputs
//! (S=100, K=100, r=0.05, T=1, σ=0.2, call).

use clap::{Parser, ValueEnum};
use option_pricer_rs::prelude::{
    CalculationReport, OptionCalculator, OptionType, PricingInputs, SolverConfig,
};
use std::error::Error;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Kind {
    #[value(alias = "c")]
    Call,
    #[value(alias = "p")]
    Put,
}

impl From<Kind> for OptionType {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Call => OptionType::Call,
            Kind::Put => OptionType::Put,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "calculator")]
#[command(about = "Black-Scholes price, Greeks, implied volatility and sensitivity table")]
#[command(allow_negative_numbers = true)]
struct Args {
    /// Underlying spot price (default: 100)
    spot: Option<f64>,

    /// Strike price (default: 100)
    strike: Option<f64>,

    /// Annualized risk-free rate (default: 0.05)
    rate: Option<f64>,

    /// Time to expiry in years (default: 1)
    time: Option<f64>,

    /// Annualized volatility (default: 0.2)
    volatility: Option<f64>,

    /// Option type (default: call)
    #[arg(value_enum)]
    option_type: Option<Kind>,

    /// Observed option price to solve implied volatility from
    market_price: Option<f64>,

    /// Print the full report as JSON instead of the table
    #[arg(long)]
    json: bool,
}

impl Args {
    /// Fills every missing value from the calculator's reset state.
    fn inputs(&self) -> PricingInputs {
        let defaults = PricingInputs::default();
        PricingInputs::new(
            self.spot.unwrap_or(defaults.spot),
            self.strike.unwrap_or(defaults.strike),
            self.rate.unwrap_or(defaults.risk_free_rate),
            self.time.unwrap_or(defaults.time_to_expiry),
            self.volatility.unwrap_or(defaults.volatility),
            self.option_type
                .map(OptionType::from)
                .unwrap_or(defaults.option_type),
        )
    }
}

fn format_value(value: f64) -> String {
    if value.is_finite() {
        format!("{value:.4}")
    } else {
        "n/a".to_string()
    }
}

fn print_report(report: &CalculationReport) {
    let inputs = &report.inputs;

    println!("Option price:       {}", format_value(report.price));
    println!("Delta:              {}", format_value(report.greeks.delta));
    println!("Gamma:              {}", format_value(report.greeks.gamma));
    println!("Theta:              {}", format_value(report.greeks.theta));
    println!("Vega:               {}", format_value(report.greeks.vega));
    if let Some(iv) = report.implied_volatility {
        println!("Implied volatility: {}", format_value(iv));
    }

    println!();
    print!("{:>10}", "σ \\ T");
    for column in 0..report.sensitivity.time_multipliers.len() {
        print!(
            "{:>10.2}",
            report.sensitivity.time_at(column, inputs.time_to_expiry)
        );
    }
    println!();

    for (row, prices) in report.sensitivity.rows().enumerate() {
        print!(
            "{:>10.2}",
            report.sensitivity.volatility_at(row, inputs.volatility)
        );
        for price in prices {
            print!("{:>10}", format_value(*price));
        }
        println!();
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args = Args::parse();
    let inputs = args.inputs();
    info!("Calculating {:?}", inputs);

    let calculator = OptionCalculator::new(SolverConfig::default());
    let report = calculator.calculate(&inputs, args.market_price);

    if !report.is_finite() {
        warn!("Inputs are outside the model's domain, results are not finite");
    }

    if args.json {
        println!("{}", report.to_json_pretty()?);
    } else {
        print_report(&report);
    }

    Ok(())
}
