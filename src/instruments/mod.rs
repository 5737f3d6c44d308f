//! Instrument definitions.

pub mod phoenix;
pub mod vanilla;

pub use phoenix::{PhoenixNote, Underlying};
pub use vanilla::VanillaOption;
