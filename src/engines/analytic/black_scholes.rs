//! Analytic Black-Scholes kernel and engine for European vanilla options.
//!
//! The free functions are the raw closed forms; they assume their inputs have
//! already been validated (spot/strike > 0, expiry/vol >= 0) and resolve the
//! two degenerate domains explicitly instead of dividing by `sigma * sqrt(t)`:
//!
//! - `expiry == 0`: intrinsic value, no CDF evaluation.
//! - `vol == 0, expiry > 0`: discounted deterministic-forward intrinsic,
//!   `max(S * e^{rT} - K, 0) * e^{-rT}` for a call and the mirror for a put.
//!
//! Checked entry points are [`BlackScholesEngine`] and
//! [`crate::pricing::european`].

use crate::core::{Greeks, OptionType, PricingEngine, PricingError, PricingResult};
use crate::instruments::VanillaOption;
use crate::market::Market;
use crate::math::{normal_cdf, normal_pdf};

#[inline]
fn intrinsic(option_type: OptionType, spot: f64, strike: f64) -> f64 {
    match option_type {
        OptionType::Call => (spot - strike).max(0.0),
        OptionType::Put => (strike - spot).max(0.0),
    }
}

#[inline]
fn d1_d2(spot: f64, strike: f64, rate: f64, vol: f64, expiry: f64) -> (f64, f64) {
    let sig_sqrt_t = vol * expiry.sqrt();
    let d1 = ((spot / strike).ln() + (rate + 0.5 * vol * vol) * expiry) / sig_sqrt_t;
    (d1, d1 - sig_sqrt_t)
}

/// Black-Scholes price of a European option.
///
/// Inputs are assumed validated; see the module docs for the degenerate-input
/// policy. Pure and deterministic: identical inputs always produce identical
/// output.
#[inline]
pub fn bs_price(
    option_type: OptionType,
    spot: f64,
    strike: f64,
    rate: f64,
    vol: f64,
    expiry: f64,
) -> f64 {
    if expiry <= 0.0 {
        return intrinsic(option_type, spot, strike);
    }
    let df = (-rate * expiry).exp();
    if vol <= 0.0 {
        return match option_type {
            OptionType::Call => (spot - strike * df).max(0.0),
            OptionType::Put => (strike * df - spot).max(0.0),
        };
    }

    let (d1, d2) = d1_d2(spot, strike, rate, vol, expiry);
    match option_type {
        OptionType::Call => spot * normal_cdf(d1) - strike * df * normal_cdf(d2),
        OptionType::Put => strike * df * normal_cdf(-d2) - spot * normal_cdf(-d1),
    }
}

#[inline]
pub fn bs_delta(
    option_type: OptionType,
    spot: f64,
    strike: f64,
    rate: f64,
    vol: f64,
    expiry: f64,
) -> f64 {
    if expiry <= 0.0 || vol <= 0.0 {
        return 0.0;
    }
    let (d1, _) = d1_d2(spot, strike, rate, vol, expiry);
    match option_type {
        OptionType::Call => normal_cdf(d1),
        OptionType::Put => normal_cdf(d1) - 1.0,
    }
}

#[inline]
pub fn bs_gamma(spot: f64, strike: f64, rate: f64, vol: f64, expiry: f64) -> f64 {
    if expiry <= 0.0 || vol <= 0.0 || spot <= 0.0 {
        return 0.0;
    }
    let (d1, _) = d1_d2(spot, strike, rate, vol, expiry);
    normal_pdf(d1) / (spot * vol * expiry.sqrt())
}

#[inline]
pub fn bs_vega(spot: f64, strike: f64, rate: f64, vol: f64, expiry: f64) -> f64 {
    if expiry <= 0.0 || vol <= 0.0 || spot <= 0.0 {
        return 0.0;
    }
    let (d1, _) = d1_d2(spot, strike, rate, vol, expiry);
    spot * normal_pdf(d1) * expiry.sqrt()
}

#[inline]
pub fn bs_theta(
    option_type: OptionType,
    spot: f64,
    strike: f64,
    rate: f64,
    vol: f64,
    expiry: f64,
) -> f64 {
    if expiry <= 0.0 || vol <= 0.0 || spot <= 0.0 {
        return 0.0;
    }
    let (d1, d2) = d1_d2(spot, strike, rate, vol, expiry);
    let df = (-rate * expiry).exp();
    let decay = -spot * normal_pdf(d1) * vol / (2.0 * expiry.sqrt());
    match option_type {
        OptionType::Call => decay - rate * strike * df * normal_cdf(d2),
        OptionType::Put => decay + rate * strike * df * normal_cdf(-d2),
    }
}

#[inline]
pub fn bs_rho(
    option_type: OptionType,
    spot: f64,
    strike: f64,
    rate: f64,
    vol: f64,
    expiry: f64,
) -> f64 {
    if expiry <= 0.0 || vol <= 0.0 || spot <= 0.0 {
        return 0.0;
    }
    let (_, d2) = d1_d2(spot, strike, rate, vol, expiry);
    let df = (-rate * expiry).exp();
    match option_type {
        OptionType::Call => strike * expiry * df * normal_cdf(d2),
        OptionType::Put => -strike * expiry * df * normal_cdf(-d2),
    }
}

/// Computes all first/second-order sensitivities alongside the price.
#[inline]
pub fn bs_price_greeks(
    option_type: OptionType,
    spot: f64,
    strike: f64,
    rate: f64,
    vol: f64,
    expiry: f64,
) -> (f64, Greeks) {
    let price = bs_price(option_type, spot, strike, rate, vol, expiry);
    let greeks = Greeks {
        delta: bs_delta(option_type, spot, strike, rate, vol, expiry),
        gamma: bs_gamma(spot, strike, rate, vol, expiry),
        vega: bs_vega(spot, strike, rate, vol, expiry),
        theta: bs_theta(option_type, spot, strike, rate, vol, expiry),
        rho: bs_rho(option_type, spot, strike, rate, vol, expiry),
    };
    (price, greeks)
}

/// Analytic Black-Scholes engine for European vanilla options.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlackScholesEngine;

impl BlackScholesEngine {
    /// Creates a Black-Scholes engine instance.
    pub fn new() -> Self {
        Self
    }
}

impl PricingEngine<VanillaOption> for BlackScholesEngine {
    fn price(
        &self,
        instrument: &VanillaOption,
        market: &Market,
    ) -> Result<PricingResult, PricingError> {
        instrument.validate()?;

        if !market.spot.is_finite() || market.spot <= 0.0 {
            return Err(PricingError::InvalidInput(
                "market spot must be > 0".to_string(),
            ));
        }
        if !market.vol.is_finite() || market.vol < 0.0 {
            return Err(PricingError::InvalidInput(
                "market vol must be >= 0".to_string(),
            ));
        }
        if !market.rate.is_finite() {
            return Err(PricingError::InvalidInput(
                "market rate must be finite".to_string(),
            ));
        }

        let (price, greeks) = bs_price_greeks(
            instrument.option_type,
            market.spot,
            instrument.strike,
            market.rate,
            market.vol,
            instrument.expiry,
        );

        let mut diagnostics = std::collections::HashMap::new();
        diagnostics.insert("vol".to_string(), market.vol);
        if instrument.expiry > 0.0 && market.vol > 0.0 {
            let (d1, d2) = d1_d2(
                market.spot,
                instrument.strike,
                market.rate,
                market.vol,
                instrument.expiry,
            );
            diagnostics.insert("d1".to_string(), d1);
            diagnostics.insert("d2".to_string(), d2);
        }

        Ok(PricingResult {
            price,
            greeks: Some(greeks),
            diagnostics,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn atm_reference_values() {
        let call = bs_price(OptionType::Call, 100.0, 100.0, 0.05, 0.2, 1.0);
        let put = bs_price(OptionType::Put, 100.0, 100.0, 0.05, 0.2, 1.0);
        assert_abs_diff_eq!(call, 10.4506, epsilon = 1e-3);
        assert_abs_diff_eq!(put, 5.5735, epsilon = 1e-3);
    }

    #[test]
    fn zero_expiry_is_intrinsic_exactly() {
        assert_eq!(bs_price(OptionType::Call, 105.0, 100.0, 0.05, 0.2, 0.0), 5.0);
        assert_eq!(bs_price(OptionType::Put, 105.0, 100.0, 0.05, 0.2, 0.0), 0.0);
        assert_eq!(bs_price(OptionType::Put, 90.0, 100.0, 0.05, 0.2, 0.0), 10.0);
    }

    #[test]
    fn zero_vol_is_discounted_forward_intrinsic() {
        let s = 100.0f64;
        let k = 95.0f64;
        let r = 0.05f64;
        let t = 2.0f64;
        let df = (-r * t).exp();
        let expected = (s * (r * t).exp() - k).max(0.0) * df;
        assert_relative_eq!(
            bs_price(OptionType::Call, s, k, r, 0.0, t),
            expected,
            epsilon = 1e-12
        );

        // Deep out-of-the-money deterministic put collapses to zero.
        assert_eq!(bs_price(OptionType::Put, s, k, r, 0.0, t), 0.0);
    }

    #[test]
    fn engine_reports_diagnostics_and_greeks() {
        let engine = BlackScholesEngine::new();
        let market = Market::builder().spot(100.0).rate(0.05).vol(0.2).build().unwrap();
        let result = engine
            .price(&VanillaOption::european_call(100.0, 1.0), &market)
            .unwrap();

        assert_abs_diff_eq!(result.price, 10.4506, epsilon = 1e-3);
        assert_abs_diff_eq!(*result.diagnostics.get("d1").unwrap(), 0.35, epsilon = 1e-12);
        assert_abs_diff_eq!(*result.diagnostics.get("d2").unwrap(), 0.15, epsilon = 1e-12);

        let greeks = result.greeks.unwrap();
        assert!(greeks.delta > 0.0 && greeks.delta < 1.0);
        assert!(greeks.gamma > 0.0);
        assert!(greeks.vega > 0.0);
    }

    #[test]
    fn engine_rejects_degenerate_market() {
        let engine = BlackScholesEngine::new();
        let option = VanillaOption::european_call(100.0, 1.0);
        let bad_spot = Market {
            spot: -1.0,
            rate: 0.05,
            vol: 0.2,
        };
        assert!(engine.price(&option, &bad_spot).is_err());

        let bad_vol = Market {
            spot: 100.0,
            rate: 0.05,
            vol: -0.2,
        };
        assert!(engine.price(&option, &bad_vol).is_err());
    }

    #[test]
    fn call_delta_bounds_and_put_call_delta_relation() {
        let delta_call = bs_delta(OptionType::Call, 100.0, 110.0, 0.03, 0.25, 0.75);
        let delta_put = bs_delta(OptionType::Put, 100.0, 110.0, 0.03, 0.25, 0.75);
        assert!(delta_call > 0.0 && delta_call < 1.0);
        assert_relative_eq!(delta_call - delta_put, 1.0, epsilon = 1e-12);
    }
}
