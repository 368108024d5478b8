//! Account, portfolio, and position models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A Robinhood brokerage account.
///
/// The client consumes `url` and `account_number` after login to build
/// order and historical-portfolio requests; everything else the server
/// sends is kept in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Canonical resource URL for this account.
    pub url: String,
    /// Short account identifier.
    pub account_number: String,
    /// Remaining account fields, unmodified.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Portfolio characteristics of an account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Portfolio {
    /// Current equity value, if reported.
    #[serde(default)]
    pub equity: Option<Decimal>,
    /// Equity value outside regular trading hours, if reported.
    #[serde(default)]
    pub extended_hours_equity: Option<Decimal>,
    /// Amount available for withdrawal, if reported.
    #[serde(default)]
    pub withdrawable_amount: Option<Decimal>,
    /// Remaining portfolio fields, unmodified.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A single position held by the account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Position {
    /// Instrument URL identifying the security.
    pub instrument: String,
    /// Quantity of shares held, if reported.
    #[serde(default)]
    pub quantity: Option<Decimal>,
    /// Average buy price, if reported.
    #[serde(default)]
    pub average_buy_price: Option<Decimal>,
    /// Remaining position fields, unmodified.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A single watchlist entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchlistEntry {
    /// Instrument URL of the watched security.
    pub instrument: String,
    /// Remaining entry fields, unmodified.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn account_keeps_unknown_fields() {
        let account: Account = serde_json::from_value(json!({
            "url": "https://api.robinhood.com/accounts/A1B2C3D4/",
            "account_number": "A1B2C3D4",
            "buying_power": "1000.00",
        }))
        .unwrap();
        assert_eq!(account.account_number, "A1B2C3D4");
        assert_eq!(account.extra["buying_power"], "1000.00");
    }

    #[test]
    fn position_parses_string_decimals() {
        let position: Position = serde_json::from_value(json!({
            "instrument": "https://api.robinhood.com/instruments/abc/",
            "quantity": "10.000000",
            "average_buy_price": "123.4500",
        }))
        .unwrap();
        assert_eq!(position.quantity.unwrap().to_string(), "10.000000");
    }
}
