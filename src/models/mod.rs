//! Data models for the Robinhood API.
//!
//! Models are intentionally thin: fields the client itself consumes are
//! typed, everything else the server sends is preserved in a flattened
//! `extra` map so no response data is lost.
//!
//! - [`enums`] - Wire-format enumerations (challenge types, intervals, order fields)
//! - [`account`] - Account, portfolio, and position models
//! - [`market`] - Quote, instrument, fundamentals, and ratings models
//! - [`order`] - Order models

pub mod account;
pub mod enums;
pub mod market;
pub mod order;

pub use account::{Account, Portfolio, Position, WatchlistEntry};
pub use enums::{
    ChallengeType, HistoricalInterval, HistoricalSpan, OrderSide, OrderTrigger, OrderType,
    TimeInForce,
};
pub use market::{Fundamental, HistoricalQuotes, Instrument, Quote, Rating};
pub use order::Order;

use serde::{Deserialize, Serialize};

/// Server-initiated out-of-band verification step returned during login.
///
/// Transient and login-scoped; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Challenge {
    /// Identifier used to build the challenge-respond URL.
    pub id: String,
    /// Response attempts left before the challenge is exhausted.
    pub remaining_attempts: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn challenge_deserializes_from_login_error_body() {
        let challenge: Challenge = serde_json::from_value(json!({
            "id": "c1d2",
            "remaining_attempts": 3,
            "type": "sms",
        }))
        .unwrap();
        assert_eq!(challenge.id, "c1d2");
        assert_eq!(challenge.remaining_attempts, 3);
    }
}
