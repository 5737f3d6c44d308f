//! Observation-schedule construction from calendar dates.

use chrono::NaiveDate;

use crate::core::PricingError;
use crate::rates::day_count::{year_fraction, DayCountConvention};

/// Converts calendar observation dates into the year-fraction schedule a
/// [`crate::instruments::PhoenixNote`] expects.
///
/// Dates must be strictly increasing and strictly after the trade date.
///
/// # Errors
/// - [`PricingError::EmptySchedule`] when no dates are given.
/// - [`PricingError::UnorderedSchedule`] when dates are not strictly
///   increasing.
/// - [`PricingError::InvalidInput`] when a date does not fall after the
///   trade date.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use phoenixnote::rates::{observation_times, DayCountConvention};
///
/// let trade = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
/// let dates = [
///     NaiveDate::from_ymd_opt(2026, 7, 15).unwrap(),
///     NaiveDate::from_ymd_opt(2027, 1, 15).unwrap(),
/// ];
/// let times = observation_times(trade, &dates, DayCountConvention::Act365Fixed).unwrap();
/// assert_eq!(times.len(), 2);
/// assert!(times[0] < times[1]);
/// ```
pub fn observation_times(
    trade_date: NaiveDate,
    observation_dates: &[NaiveDate],
    convention: DayCountConvention,
) -> Result<Vec<f64>, PricingError> {
    if observation_dates.is_empty() {
        return Err(PricingError::EmptySchedule);
    }
    if observation_dates.windows(2).any(|w| w[1] <= w[0]) {
        return Err(PricingError::UnorderedSchedule);
    }
    if observation_dates[0] <= trade_date {
        return Err(PricingError::InvalidInput(
            "observation dates must fall after the trade date".to_string(),
        ));
    }

    Ok(observation_dates
        .iter()
        .map(|&d| year_fraction(trade_date, d, convention))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn builds_increasing_year_fractions() {
        let times = observation_times(
            date(2026, 1, 1),
            &[date(2026, 7, 1), date(2027, 1, 1), date(2027, 7, 1)],
            DayCountConvention::Act365Fixed,
        )
        .unwrap();
        assert_eq!(times.len(), 3);
        assert!(times.windows(2).all(|w| w[1] > w[0]));
        assert!(times[1] > 0.99 && times[1] < 1.01);
    }

    #[test]
    fn schedule_errors() {
        assert_eq!(
            observation_times(date(2026, 1, 1), &[], DayCountConvention::Act360),
            Err(PricingError::EmptySchedule)
        );
        assert_eq!(
            observation_times(
                date(2026, 1, 1),
                &[date(2026, 7, 1), date(2026, 7, 1)],
                DayCountConvention::Act360
            ),
            Err(PricingError::UnorderedSchedule)
        );
        assert!(observation_times(
            date(2026, 1, 1),
            &[date(2026, 1, 1)],
            DayCountConvention::Act360
        )
        .is_err());
    }
}
