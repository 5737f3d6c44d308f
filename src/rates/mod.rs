//! Date arithmetic: day-count conventions and observation-schedule
//! construction.

pub mod day_count;
pub mod schedule;

pub use day_count::{year_fraction, DayCountConvention};
pub use schedule::observation_times;
