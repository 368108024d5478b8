//! Quote, instrument, fundamentals, and ratings models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A live quote for a single security.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    /// Stock symbol.
    pub symbol: String,
    /// Instrument URL identifying the security.
    pub instrument: String,
    /// Current ask price.
    pub ask_price: Decimal,
    /// Current bid price.
    pub bid_price: Decimal,
    /// Remaining quote fields, unmodified.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Instrument metadata for a single security.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Instrument {
    /// Instrument ID.
    pub id: String,
    /// Canonical instrument URL.
    pub url: String,
    /// Stock symbol.
    pub symbol: String,
    /// Remaining instrument fields, unmodified.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Fundamental data for a single security.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fundamental {
    /// Most recent opening price, if reported.
    #[serde(default)]
    pub open: Option<Decimal>,
    /// Most recent high, if reported.
    #[serde(default)]
    pub high: Option<Decimal>,
    /// Most recent low, if reported.
    #[serde(default)]
    pub low: Option<Decimal>,
    /// Market capitalization, if reported.
    #[serde(default)]
    pub market_cap: Option<Decimal>,
    /// Remaining fundamental fields, unmodified.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Analyst buy/sell/hold ratings for a single security.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rating {
    /// Instrument ID the rating applies to.
    pub instrument_id: String,
    /// Rating summary counts, as sent by the server.
    #[serde(default)]
    pub summary: Value,
    /// Remaining rating fields, unmodified.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Historical OHLC quote data for a single security.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoricalQuotes {
    /// Stock symbol.
    pub symbol: String,
    /// One bar per interval in the requested span.
    pub historicals: Vec<HistoricalBar>,
    /// Remaining fields, unmodified.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A single OHLC bar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoricalBar {
    /// Start of the bar, RFC 3339.
    pub begins_at: String,
    /// Opening price.
    pub open_price: Decimal,
    /// Closing price.
    pub close_price: Decimal,
    /// High price.
    pub high_price: Decimal,
    /// Low price.
    pub low_price: Decimal,
    /// Remaining bar fields, unmodified.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
