//! Core traits, common domain types, and library-wide result/error structures.

use std::collections::HashMap;

use crate::market::Market;

pub mod serialization;
pub mod types;

pub use types::*;

/// Standardized Greeks container used by engine results.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Greeks {
    /// First derivative to spot.
    pub delta: f64,
    /// Second derivative to spot.
    pub gamma: f64,
    /// First derivative to volatility.
    pub vega: f64,
    /// First derivative to time.
    pub theta: f64,
    /// First derivative to rate.
    pub rho: f64,
}

/// Common trait implemented by every priceable instrument.
pub trait Instrument: std::fmt::Debug {
    /// Returns a short type identifier for diagnostics and bindings.
    fn instrument_type(&self) -> &str;
}

/// Pricing engine abstraction over an instrument type.
pub trait PricingEngine<I: Instrument> {
    /// Prices an instrument under the provided market state.
    fn price(&self, instrument: &I, market: &Market) -> Result<PricingResult, PricingError>;
}

/// Unified engine result payload.
#[derive(Debug, Clone)]
pub struct PricingResult {
    /// Present value.
    pub price: f64,
    /// Greeks when available from the engine.
    pub greeks: Option<Greeks>,
    /// Engine-specific scalar diagnostics.
    pub diagnostics: HashMap<String, f64>,
}

/// Engine and validation errors surfaced by the API.
///
/// Every variant is a local validation failure detected before arithmetic
/// proceeds; evaluation aborts atomically and nothing is retried or
/// substituted with a default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// Input validation error.
    InvalidInput(String),
    /// Observation schedule is empty.
    EmptySchedule,
    /// Observation dates are not strictly increasing.
    UnorderedSchedule,
    /// Required market datum is unavailable from a data source.
    MarketDataMissing(String),
}

impl std::fmt::Display for PricingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            Self::EmptySchedule => write!(f, "observation schedule is empty"),
            Self::UnorderedSchedule => {
                write!(f, "observation dates must be strictly increasing")
            }
            Self::MarketDataMissing(msg) => write!(f, "market data missing: {msg}"),
        }
    }
}

impl std::error::Error for PricingError {}
