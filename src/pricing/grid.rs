//! Spot/volatility scenario grids for European options.
//!
//! A presentation layer rendering a price heatmap needs the same option
//! valued over a rectangle of spot and volatility scenarios. Each point is
//! an independent, deterministic valuation, so the sweep is embarrassingly
//! parallel; the `parallel` feature switches it to rayon with no behavioral
//! difference.

use crate::core::{OptionType, PricingError};
use crate::pricing::european;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Inclusive linear axis of scenario values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridAxis {
    /// First scenario value.
    pub start: f64,
    /// Last scenario value.
    pub stop: f64,
    /// Number of scenarios on the axis, at least 1.
    pub steps: usize,
}

impl GridAxis {
    /// Evenly spaced values from `start` to `stop` inclusive.
    fn values(&self) -> Vec<f64> {
        if self.steps == 1 {
            return vec![self.start];
        }
        let width = (self.stop - self.start) / (self.steps - 1) as f64;
        (0..self.steps).map(|i| self.start + width * i as f64).collect()
    }

    fn validate(&self, name: &str) -> Result<(), PricingError> {
        if self.steps == 0 {
            return Err(PricingError::InvalidInput(format!(
                "{name} axis needs at least one step"
            )));
        }
        if !self.start.is_finite() || !self.stop.is_finite() || self.stop < self.start {
            return Err(PricingError::InvalidInput(format!(
                "{name} axis bounds must be finite with stop >= start"
            )));
        }
        Ok(())
    }
}

/// One valued scenario.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridPoint {
    pub spot: f64,
    pub vol: f64,
    pub price: f64,
}

/// Values a European option across a spot/vol scenario rectangle.
///
/// Points are returned row-major: the spot axis is the outer loop. Any
/// invalid scenario (for example a non-positive spot on the axis) aborts the
/// whole sweep with the pricing error.
///
/// # Examples
/// ```
/// use phoenixnote::core::OptionType;
/// use phoenixnote::pricing::grid::{price_grid, GridAxis};
///
/// let spots = GridAxis { start: 80.0, stop: 120.0, steps: 5 };
/// let vols = GridAxis { start: 0.1, stop: 0.3, steps: 3 };
/// let points = price_grid(OptionType::Call, 100.0, 0.05, 1.0, spots, vols).unwrap();
/// assert_eq!(points.len(), 15);
/// ```
pub fn price_grid(
    option_type: OptionType,
    strike: f64,
    rate: f64,
    expiry: f64,
    spot_axis: GridAxis,
    vol_axis: GridAxis,
) -> Result<Vec<GridPoint>, PricingError> {
    spot_axis.validate("spot")?;
    vol_axis.validate("vol")?;

    let vols = vol_axis.values();
    let scenarios: Vec<(f64, f64)> = spot_axis
        .values()
        .into_iter()
        .flat_map(|s| vols.iter().map(move |&v| (s, v)))
        .collect();

    #[cfg(feature = "parallel")]
    let iter = scenarios.into_par_iter();
    #[cfg(not(feature = "parallel"))]
    let iter = scenarios.into_iter();

    iter.map(|(spot, vol)| {
        european::price(option_type, spot, strike, rate, vol, expiry)
            .map(|price| GridPoint { spot, vol, price })
    })
    .collect()
}
