//! Checked convenience wrappers around the Black-Scholes kernel.
//!
//! These validate every input before any arithmetic runs and are the
//! library-boundary form of the option pricer: invalid parameters come back
//! as [`PricingError::InvalidInput`], never as a silently substituted
//! default or a NaN price.

use crate::core::{Greeks, OptionType, PricingError};
use crate::engines::analytic::black_scholes::{bs_price, bs_price_greeks};

fn validate_parameters(
    spot: f64,
    strike: f64,
    rate: f64,
    vol: f64,
    expiry: f64,
) -> Result<(), PricingError> {
    if !spot.is_finite() || spot <= 0.0 {
        return Err(PricingError::InvalidInput("spot must be > 0".to_string()));
    }
    if !strike.is_finite() || strike <= 0.0 {
        return Err(PricingError::InvalidInput("strike must be > 0".to_string()));
    }
    if !rate.is_finite() {
        return Err(PricingError::InvalidInput("rate must be finite".to_string()));
    }
    if !vol.is_finite() || vol < 0.0 {
        return Err(PricingError::InvalidInput("vol must be >= 0".to_string()));
    }
    if !expiry.is_finite() || expiry < 0.0 {
        return Err(PricingError::InvalidInput(
            "expiry must be >= 0".to_string(),
        ));
    }
    Ok(())
}

/// Black-Scholes price of a European option from five market parameters.
///
/// Degenerate inputs are well-defined: `expiry == 0` returns intrinsic
/// value and `vol == 0` returns the discounted deterministic-forward
/// intrinsic value.
///
/// # Errors
/// [`PricingError::InvalidInput`] for non-positive spot/strike, negative
/// vol/expiry, or non-finite inputs.
///
/// # Examples
/// ```
/// use phoenixnote::core::OptionType;
/// use phoenixnote::pricing::european;
///
/// let px = european::price(OptionType::Call, 100.0, 100.0, 0.05, 0.20, 1.0).unwrap();
/// assert!(px > 10.0 && px < 11.0);
/// ```
pub fn price(
    option_type: OptionType,
    spot: f64,
    strike: f64,
    rate: f64,
    vol: f64,
    expiry: f64,
) -> Result<f64, PricingError> {
    validate_parameters(spot, strike, rate, vol, expiry)?;
    Ok(bs_price(option_type, spot, strike, rate, vol, expiry))
}

/// Closed-form Greeks with the same validation as [`price`].
///
/// Degenerate domains (`expiry == 0` or `vol == 0`) report zero
/// sensitivities, matching the kernel conventions.
pub fn greeks(
    option_type: OptionType,
    spot: f64,
    strike: f64,
    rate: f64,
    vol: f64,
    expiry: f64,
) -> Result<Greeks, PricingError> {
    validate_parameters(spot, strike, rate, vol, expiry)?;
    Ok(bs_price_greeks(option_type, spot, strike, rate, vol, expiry).1)
}
