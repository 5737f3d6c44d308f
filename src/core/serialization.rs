//! Trade, market-snapshot, and valuation-record serialization.
//!
//! These types define stable serde payloads used to transport contracts and
//! valuation outputs between the engine and its embedders. The core itself
//! never persists anything; these are the shapes a caller would write.
//!
//! # Examples
//! ```
//! use phoenixnote::core::serialization::{
//!     from_json, to_json_pretty, Trade, TradeMetadata, TradeProduct,
//! };
//! use phoenixnote::instruments::VanillaOption;
//!
//! let trade = Trade {
//!     metadata: TradeMetadata {
//!         trade_id: "TRD-001".to_string(),
//!         version: 1,
//!         timestamp: "2026-08-06T09:00:00Z".to_string(),
//!     },
//!     product: TradeProduct::VanillaOption(VanillaOption::european_call(100.0, 1.0)),
//! };
//!
//! let json = to_json_pretty(&trade).expect("json serialization");
//! let decoded: Trade = from_json(&json).expect("json deserialization");
//! assert_eq!(decoded, trade);
//! ```

use serde::de::DeserializeOwned;

use crate::instruments::{PhoenixNote, Underlying, VanillaOption};
use crate::pricing::phoenix::CouponResult;

/// Identification fields attached to a serialized trade.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TradeMetadata {
    /// Caller-assigned trade identifier.
    pub trade_id: String,
    /// Monotonic version of the trade record.
    pub version: u32,
    /// ISO-8601 timestamp string.
    pub timestamp: String,
}

/// Product payload of a trade.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "product_type", content = "payload", rename_all = "snake_case")]
pub enum TradeProduct {
    VanillaOption(VanillaOption),
    PhoenixNote(PhoenixNote),
}

/// A trade: metadata plus product terms.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Trade {
    pub metadata: TradeMetadata,
    pub product: TradeProduct,
}

/// Market data resolved for one valuation run.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MarketSnapshot {
    /// ISO-8601 timestamp string.
    pub as_of: String,
    /// Per-underlying market inputs, fixings included.
    pub underlyings: Vec<Underlying>,
    /// Flat risk-free rate.
    pub risk_free_rate: f64,
}

/// Valuation output payload.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValuationPayload {
    /// A single European option price.
    European { price: f64 },
    /// A structured-note evaluation.
    Phoenix(CouponResult),
}

/// One valuation result tied back to its trade.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ValuationRecord {
    pub trade_id: String,
    /// ISO-8601 timestamp string.
    pub as_of: String,
    pub result: ValuationPayload,
}

/// Serializes any payload to pretty JSON.
pub fn to_json_pretty<T: serde::Serialize>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

/// Deserializes a payload from JSON.
pub fn from_json<T: DeserializeOwned>(json: &str) -> Result<T, serde_json::Error> {
    serde_json::from_str(json)
}
