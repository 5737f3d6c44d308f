//! External market-data collaborator interface.
//!
//! The pricing core only consumes already-resolved numbers; this trait is the
//! seam where embedders plug in a quote feed, a cache, or a test fixture.
//! Fetching, caching, and fallback-on-failure policy all live behind the
//! implementation, never inside the engines.

use std::collections::HashMap;

use crate::core::PricingError;

/// Resolves the market inputs a valuation needs.
///
/// Implementations return [`PricingError::MarketDataMissing`] for unknown
/// tickers or currencies instead of substituting defaults; the caller decides
/// what a sensible fallback is.
pub trait MarketDataSource {
    /// Current spot price for a ticker.
    fn spot(&self, ticker: &str) -> Result<f64, PricingError>;

    /// Annualized historical volatility for a ticker over a lookback window.
    fn historical_vol(&self, ticker: &str, lookback_days: u32) -> Result<f64, PricingError>;

    /// Flat risk-free rate for a currency.
    fn risk_free_rate(&self, currency: &str) -> Result<f64, PricingError>;
}

/// In-memory [`MarketDataSource`] for tests and embedders with pre-resolved
/// data.
#[derive(Debug, Clone, Default)]
pub struct StaticMarketData {
    spots: HashMap<String, f64>,
    vols: HashMap<String, f64>,
    rates: HashMap<String, f64>,
}

impl StaticMarketData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a spot quote.
    pub fn with_spot<S: Into<String>>(mut self, ticker: S, spot: f64) -> Self {
        self.spots.insert(ticker.into(), spot);
        self
    }

    /// Registers an annualized volatility.
    pub fn with_vol<S: Into<String>>(mut self, ticker: S, vol: f64) -> Self {
        self.vols.insert(ticker.into(), vol);
        self
    }

    /// Registers a risk-free rate for a currency.
    pub fn with_rate<S: Into<String>>(mut self, currency: S, rate: f64) -> Self {
        self.rates.insert(currency.into(), rate);
        self
    }
}

impl MarketDataSource for StaticMarketData {
    fn spot(&self, ticker: &str) -> Result<f64, PricingError> {
        self.spots
            .get(ticker)
            .copied()
            .ok_or_else(|| PricingError::MarketDataMissing(format!("spot for {ticker}")))
    }

    fn historical_vol(&self, ticker: &str, lookback_days: u32) -> Result<f64, PricingError> {
        if lookback_days == 0 {
            return Err(PricingError::InvalidInput(
                "volatility lookback window must be > 0 days".to_string(),
            ));
        }
        self.vols
            .get(ticker)
            .copied()
            .ok_or_else(|| PricingError::MarketDataMissing(format!("volatility for {ticker}")))
    }

    fn risk_free_rate(&self, currency: &str) -> Result<f64, PricingError> {
        self.rates
            .get(currency)
            .copied()
            .ok_or_else(|| PricingError::MarketDataMissing(format!("rate for {currency}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_source_resolves_registered_data() {
        let source = StaticMarketData::new()
            .with_spot("ACME", 101.5)
            .with_vol("ACME", 0.24)
            .with_rate("USD", 0.045);

        assert_eq!(source.spot("ACME").unwrap(), 101.5);
        assert_eq!(source.historical_vol("ACME", 252).unwrap(), 0.24);
        assert_eq!(source.risk_free_rate("USD").unwrap(), 0.045);
    }

    #[test]
    fn missing_data_is_an_explicit_error() {
        let source = StaticMarketData::new();
        assert!(matches!(
            source.spot("ACME"),
            Err(PricingError::MarketDataMissing(_))
        ));
        assert!(matches!(
            source.risk_free_rate("JPY"),
            Err(PricingError::MarketDataMissing(_))
        ));
    }

    #[test]
    fn zero_lookback_is_invalid() {
        let source = StaticMarketData::new().with_vol("ACME", 0.2);
        assert!(matches!(
            source.historical_vol("ACME", 0),
            Err(PricingError::InvalidInput(_))
        ));
    }
}
