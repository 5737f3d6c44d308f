//! Phoenixnote values European options with the closed-form Black-Scholes
//! model and Phoenix-style memory autocallable notes with a chronological
//! barrier/memory resolution over an observation schedule.
//!
//! The crate splits into the analytic kernel (d1/d2 closed forms with
//! explicit degenerate-input limits), contract definitions, and checked
//! pricing entry points that validate everything before arithmetic runs.
//!
//! References used across modules include:
//! - Hull, *Options, Futures, and Other Derivatives* (11th ed.), Ch. 13 and
//!   15 for the Black-Scholes-Merton closed forms.
//! - Wystup (2017) for autocall and Phoenix term-sheet conventions.
//! - Abramowitz & Stegun 7.1.26 for the normal CDF approximation.
//!
//! Numerical considerations:
//! - `expiry == 0` and `vol == 0` are valid degenerate inputs resolved to
//!   intrinsic and deterministic-forward limits; the `sigma * sqrt(t)`
//!   division is never reached for them.
//! - All evaluation is deterministic: identical inputs give identical
//!   outputs, and independent valuations are safe to run concurrently.
//!
//! # Feature Flags
//! - `parallel`: enables the rayon-powered scenario-grid sweep.
//!
//! # Quick Start
//! Price a Black-Scholes call:
//! ```rust
//! use phoenixnote::core::OptionType;
//! use phoenixnote::pricing::european;
//!
//! let px = european::price(OptionType::Call, 100.0, 100.0, 0.05, 0.20, 1.0).unwrap();
//! assert!(px > 10.0 && px < 11.0);
//! ```
//!
//! Evaluate a Phoenix memory note:
//! ```rust
//! use phoenixnote::core::{BarrierMode, StrikeBasis};
//! use phoenixnote::instruments::{PhoenixNote, Underlying};
//! use phoenixnote::pricing::phoenix::{self, SettlementType};
//!
//! let note = PhoenixNote {
//!     notional: 1_000.0,
//!     put_strike: 0.7,
//!     autocall_barrier: 1.0,
//!     coupon_barrier: 0.8,
//!     observation_dates: vec![0.5, 1.0],
//!     tenor: 1.0,
//!     barrier_mode: BarrierMode::WorstOf,
//!     strike_basis: StrikeBasis::PercentOfInitial,
//! };
//! let acme = Underlying {
//!     id: "ACME".to_string(),
//!     initial_spot: 100.0,
//!     vol: 0.2,
//!     fixings: vec![92.0, 105.0],
//! };
//!
//! let result = phoenix::evaluate(&note, &[acme], 0.03).unwrap();
//! assert_eq!(result.settlement, SettlementType::AutocalledAt(1.0));
//! ```
//!
//! Build an observation schedule from calendar dates:
//! ```rust
//! use chrono::NaiveDate;
//! use phoenixnote::rates::{observation_times, DayCountConvention};
//!
//! let trade = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
//! let obs = [NaiveDate::from_ymd_opt(2027, 1, 15).unwrap()];
//! let times = observation_times(trade, &obs, DayCountConvention::Act365Fixed).unwrap();
//! assert!((times[0] - 1.0).abs() < 1.0e-8);
//! ```

pub mod core;
pub mod engines;
pub mod instruments;
pub mod market;
pub mod math;
pub mod pricing;
pub mod rates;

/// Common imports for ergonomic usage.
pub mod prelude {
    pub use crate::core::{
        BarrierMode, Greeks, Instrument, OptionType, PricingEngine, PricingError, PricingResult,
        StrikeBasis,
    };
    pub use crate::engines::analytic::BlackScholesEngine;
    pub use crate::instruments::{PhoenixNote, Underlying, VanillaOption};
    pub use crate::market::{Market, MarketDataSource, StaticMarketData};
    pub use crate::pricing::phoenix::{CouponResult, SettlementType};
}
