//! Single-underlying market snapshot consumed by the analytic engines.
//!
//! A [`Market`] is an already-resolved, immutable bundle of spot, flat
//! risk-free rate, and flat volatility. How those numbers were fetched or
//! defaulted is the caller's concern (see [`crate::market::MarketDataSource`]);
//! pricing code only ever sees validated values.

use crate::core::PricingError;

/// Market snapshot used by the pricing engines.
///
/// `vol = 0.0` is a valid degenerate state: the engines fall back to the
/// deterministic forward limit rather than rejecting it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Market {
    /// Spot price.
    pub spot: f64,
    /// Continuously compounded risk-free rate.
    pub rate: f64,
    /// Flat annualized volatility.
    pub vol: f64,
}

impl Market {
    /// Starts a market builder.
    #[inline]
    pub fn builder() -> MarketBuilder {
        MarketBuilder::default()
    }
}

/// Builder for [`Market`].
///
/// # Examples
/// ```
/// use phoenixnote::market::Market;
///
/// let market = Market::builder().spot(100.0).rate(0.05).vol(0.2).build().unwrap();
/// assert_eq!(market.spot, 100.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MarketBuilder {
    spot: Option<f64>,
    rate: Option<f64>,
    vol: Option<f64>,
}

impl MarketBuilder {
    /// Sets the spot price.
    #[inline]
    pub fn spot(mut self, spot: f64) -> Self {
        self.spot = Some(spot);
        self
    }

    /// Sets the flat risk-free rate.
    #[inline]
    pub fn rate(mut self, rate: f64) -> Self {
        self.rate = Some(rate);
        self
    }

    /// Sets the flat volatility.
    #[inline]
    pub fn vol(mut self, vol: f64) -> Self {
        self.vol = Some(vol);
        self
    }

    /// Validates and builds a [`Market`].
    pub fn build(self) -> Result<Market, PricingError> {
        let spot = self
            .spot
            .ok_or_else(|| PricingError::InvalidInput("market spot is required".to_string()))?;
        if !spot.is_finite() || spot <= 0.0 {
            return Err(PricingError::InvalidInput(
                "market spot must be > 0".to_string(),
            ));
        }

        let rate = self.rate.unwrap_or(0.0);
        if !rate.is_finite() {
            return Err(PricingError::InvalidInput(
                "market rate must be finite".to_string(),
            ));
        }

        let vol = self
            .vol
            .ok_or_else(|| PricingError::InvalidInput("market vol is required".to_string()))?;
        if !vol.is_finite() || vol < 0.0 {
            return Err(PricingError::InvalidInput(
                "market vol must be >= 0".to_string(),
            ));
        }

        Ok(Market { spot, rate, vol })
    }
}
