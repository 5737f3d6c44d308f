//! Canonical European vanilla option contract definition.
//!
//! [`VanillaOption`] stores side, strike, and expiry; this is the default
//! input for the closed-form Black-Scholes engine. Validation accepts
//! `expiry == 0` (intrinsic-value edge case) and rejects non-positive
//! strikes and negative expiries.

use crate::core::{Instrument, OptionType, PricingError};

/// European vanilla option contract.
///
/// # Examples
/// ```
/// use phoenixnote::core::OptionType;
/// use phoenixnote::instruments::VanillaOption;
///
/// let option = VanillaOption::european_call(100.0, 1.0);
/// assert_eq!(option.option_type, OptionType::Call);
/// assert!(option.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VanillaOption {
    /// Call or put.
    pub option_type: OptionType,
    /// Strike level in spot units.
    pub strike: f64,
    /// Expiry in years.
    pub expiry: f64,
}

impl VanillaOption {
    /// Builds a European call option.
    pub fn european_call(strike: f64, expiry: f64) -> Self {
        Self {
            option_type: OptionType::Call,
            strike,
            expiry,
        }
    }

    /// Builds a European put option.
    pub fn european_put(strike: f64, expiry: f64) -> Self {
        Self {
            option_type: OptionType::Put,
            strike,
            expiry,
        }
    }

    /// Validates instrument fields.
    ///
    /// # Errors
    /// Returns [`PricingError::InvalidInput`] when `strike <= 0`, when
    /// `expiry < 0`, or when either field is non-finite. `expiry == 0` is
    /// accepted to support immediate-expiry intrinsic-value pricing.
    pub fn validate(&self) -> Result<(), PricingError> {
        if !self.strike.is_finite() || self.strike <= 0.0 {
            return Err(PricingError::InvalidInput(
                "vanilla strike must be > 0".to_string(),
            ));
        }
        if !self.expiry.is_finite() || self.expiry < 0.0 {
            return Err(PricingError::InvalidInput(
                "vanilla expiry must be >= 0".to_string(),
            ));
        }
        Ok(())
    }
}

impl Instrument for VanillaOption {
    fn instrument_type(&self) -> &str {
        "VanillaOption"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_expiry_validates() {
        assert!(VanillaOption::european_put(100.0, 0.0).validate().is_ok());
    }

    #[test]
    fn bad_fields_are_rejected() {
        assert!(VanillaOption::european_call(0.0, 1.0).validate().is_err());
        assert!(VanillaOption::european_call(-10.0, 1.0).validate().is_err());
        assert!(VanillaOption::european_call(100.0, -0.5).validate().is_err());
        assert!(VanillaOption::european_call(f64::NAN, 1.0)
            .validate()
            .is_err());
    }
}
