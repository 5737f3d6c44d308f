//! Phoenix memory autocallable note and its per-underlying market inputs.
//!
//! [`PhoenixNote`] encodes the contract terms: notional, put strike,
//! autocall/coupon barriers, observation schedule, tenor, and the two
//! configuration flags (barrier aggregation mode, strike quoting basis).
//! [`Underlying`] carries the market side: initial spot, volatility, and one
//! observed fixing per observation date. References: common equity autocall
//! term-sheet design (for example Wystup, 2017).
//!
//! Validation enforces strictly increasing observation dates inside
//! `(0, tenor]`, positive barriers/notional, and positive finite fixings.
//! The payoff resolution itself lives in [`crate::pricing::phoenix`].

use crate::core::{BarrierMode, Instrument, PricingError, StrikeBasis};

/// One underlying of a multi-asset note: identifier, initial spot,
/// volatility, and the spot fixing observed at each observation date.
///
/// Supplied once per valuation and never retained by the engine.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Underlying {
    /// Ticker or any caller-chosen identifier; keys the per-underlying
    /// contribution map in the result.
    pub id: String,
    /// Spot at trade date; performance ratios are measured against it.
    pub initial_spot: f64,
    /// Flat annualized volatility.
    pub vol: f64,
    /// Observed spot per observation date, in schedule order.
    pub fixings: Vec<f64>,
}

impl Underlying {
    /// Validates market fields.
    pub fn validate(&self) -> Result<(), PricingError> {
        if self.id.is_empty() {
            return Err(PricingError::InvalidInput(
                "underlying id cannot be empty".to_string(),
            ));
        }
        if !self.initial_spot.is_finite() || self.initial_spot <= 0.0 {
            return Err(PricingError::InvalidInput(
                "underlying initial spot must be > 0".to_string(),
            ));
        }
        if !self.vol.is_finite() || self.vol < 0.0 {
            return Err(PricingError::InvalidInput(
                "underlying vol must be >= 0".to_string(),
            ));
        }
        if self.fixings.iter().any(|s| !s.is_finite() || *s <= 0.0) {
            return Err(PricingError::InvalidInput(
                "underlying fixings must be > 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Phoenix-style autocallable note with memory coupons.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PhoenixNote {
    /// Principal amount repaid (or reduced) at settlement.
    pub notional: f64,
    /// Downside strike for the terminal knock-in check and the put leg of
    /// the coupon value.
    pub put_strike: f64,
    /// Early-redemption trigger level; also strikes the call leg of the
    /// coupon value.
    pub autocall_barrier: f64,
    /// Coupon trigger level.
    pub coupon_barrier: f64,
    /// Observation dates in years from trade date, strictly increasing.
    pub observation_dates: Vec<f64>,
    /// Final maturity in years; the last observation must not exceed it.
    pub tenor: f64,
    /// Aggregation rule across underlyings.
    pub barrier_mode: BarrierMode,
    /// How `put_strike` and the barriers are quoted.
    pub strike_basis: StrikeBasis,
}

impl PhoenixNote {
    /// Validates contract fields.
    ///
    /// # Errors
    /// - [`PricingError::EmptySchedule`] when there are no observation dates.
    /// - [`PricingError::UnorderedSchedule`] when dates are not strictly
    ///   increasing.
    /// - [`PricingError::InvalidInput`] for non-positive notional, barriers,
    ///   put strike, or tenor, and for dates outside `(0, tenor]`.
    pub fn validate(&self) -> Result<(), PricingError> {
        if !self.notional.is_finite() || self.notional <= 0.0 {
            return Err(PricingError::InvalidInput(
                "phoenix notional must be > 0".to_string(),
            ));
        }
        if !self.tenor.is_finite() || self.tenor <= 0.0 {
            return Err(PricingError::InvalidInput(
                "phoenix tenor must be > 0".to_string(),
            ));
        }
        for (name, level) in [
            ("put_strike", self.put_strike),
            ("autocall_barrier", self.autocall_barrier),
            ("coupon_barrier", self.coupon_barrier),
        ] {
            if !level.is_finite() || level <= 0.0 {
                return Err(PricingError::InvalidInput(format!(
                    "phoenix {name} must be > 0"
                )));
            }
        }

        if self.observation_dates.is_empty() {
            return Err(PricingError::EmptySchedule);
        }
        if self.observation_dates.windows(2).any(|w| w[1] <= w[0]) {
            return Err(PricingError::UnorderedSchedule);
        }
        if self
            .observation_dates
            .iter()
            .any(|&t| !t.is_finite() || t <= 0.0 || t > self.tenor)
        {
            return Err(PricingError::InvalidInput(
                "phoenix observation dates must lie in (0, tenor]".to_string(),
            ));
        }

        Ok(())
    }
}

impl Instrument for PhoenixNote {
    fn instrument_type(&self) -> &str {
        "PhoenixNote"
    }
}
