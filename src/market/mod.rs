//! Market snapshots and the external market-data collaborator interface.

pub mod market;
pub mod source;

pub use market::{Market, MarketBuilder};
pub use source::{MarketDataSource, StaticMarketData};
