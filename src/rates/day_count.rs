//! Day-count conventions for converting calendar dates to year fractions.

use chrono::{Datelike, NaiveDate};

/// Supported day-count conventions.
///
/// Conventions follow standard market definitions used in accrual and
/// schedule construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayCountConvention {
    /// Actual day count over a 360-day year.
    Act360,
    /// Actual day count over a 365-day year.
    Act365Fixed,
    /// 30/360 US (bond basis).
    Thirty360,
}

/// Computes the year fraction between two dates under a convention.
///
/// Returns `0.0` when `start == end` and an antisymmetric negative value
/// when `start > end`.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use phoenixnote::rates::{year_fraction, DayCountConvention};
///
/// let s = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
/// let e = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
/// let yf = year_fraction(s, e, DayCountConvention::Act365Fixed);
/// assert!((yf - 1.0).abs() < 1.0e-8);
/// ```
pub fn year_fraction(start: NaiveDate, end: NaiveDate, convention: DayCountConvention) -> f64 {
    if start == end {
        return 0.0;
    }
    if start > end {
        return -year_fraction(end, start, convention);
    }

    match convention {
        DayCountConvention::Act360 => (end - start).num_days() as f64 / 360.0,
        DayCountConvention::Act365Fixed => (end - start).num_days() as f64 / 365.0,
        DayCountConvention::Thirty360 => year_fraction_thirty_360(start, end),
    }
}

fn year_fraction_thirty_360(start: NaiveDate, end: NaiveDate) -> f64 {
    let y1 = start.year();
    let m1 = start.month() as i32;
    let mut d1 = start.day() as i32;
    let y2 = end.year();
    let m2 = end.month() as i32;
    let mut d2 = end.day() as i32;

    if d1 == 31 {
        d1 = 30;
    }
    if d2 == 31 && d1 == 30 {
        d2 = 30;
    }

    let days = 360 * (y2 - y1) + 30 * (m2 - m1) + (d2 - d1);
    days as f64 / 360.0
}
