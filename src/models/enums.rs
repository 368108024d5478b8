//! Wire-format enumerations.
//!
//! Each enum serializes to the exact string the Robinhood API expects;
//! `as_str` is used wherever a value lands in a query string instead of a
//! JSON body.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Delivery method for the out-of-band login challenge (SFA accounts).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ChallengeType {
    /// Code delivered by text message.
    #[default]
    Sms,
    /// Code delivered by email.
    Email,
}

impl ChallengeType {
    /// The wire-format string for this challenge type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChallengeType::Sms => "sms",
            ChallengeType::Email => "email",
        }
    }
}

impl fmt::Display for ChallengeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Interval step size for historical queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HistoricalInterval {
    /// Five-minute bars.
    #[serde(rename = "5minute")]
    FiveMinute,
    /// Ten-minute bars.
    #[serde(rename = "10minute")]
    TenMinute,
    /// Hourly bars.
    #[serde(rename = "hour")]
    Hour,
    /// Daily bars.
    #[serde(rename = "day")]
    Day,
    /// Weekly bars.
    #[serde(rename = "week")]
    Week,
}

impl HistoricalInterval {
    /// The wire-format string for this interval.
    pub fn as_str(&self) -> &'static str {
        match self {
            HistoricalInterval::FiveMinute => "5minute",
            HistoricalInterval::TenMinute => "10minute",
            HistoricalInterval::Hour => "hour",
            HistoricalInterval::Day => "day",
            HistoricalInterval::Week => "week",
        }
    }
}

/// Window size for historical queries.
///
/// Certain combinations of interval and span are rejected by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HistoricalSpan {
    /// One day.
    #[serde(rename = "day")]
    Day,
    /// One week.
    #[serde(rename = "week")]
    Week,
    /// One month.
    #[serde(rename = "month")]
    Month,
    /// Three months.
    #[serde(rename = "3month")]
    ThreeMonth,
    /// One year.
    #[serde(rename = "year")]
    Year,
    /// Five years.
    #[serde(rename = "5year")]
    FiveYear,
}

impl HistoricalSpan {
    /// The wire-format string for this span.
    pub fn as_str(&self) -> &'static str {
        match self {
            HistoricalSpan::Day => "day",
            HistoricalSpan::Week => "week",
            HistoricalSpan::Month => "month",
            HistoricalSpan::ThreeMonth => "3month",
            HistoricalSpan::Year => "year",
            HistoricalSpan::FiveYear => "5year",
        }
    }
}

/// Buy or sell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    /// Buy to open or add.
    Buy,
    /// Sell to close or reduce.
    Sell,
}

/// Pricing model of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    /// Execute at a given price or better.
    Limit,
    /// Execute at the prevailing price.
    Market,
}

/// When an order becomes active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderTrigger {
    /// Active as soon as it is accepted.
    Immediate,
    /// Active once the stop price is reached.
    Stop,
}

/// How long an order remains active before it executes or expires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TimeInForce {
    /// Good for day.
    #[default]
    Gfd,
    /// Good 'til canceled.
    Gtc,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enums_serialize_to_wire_strings() {
        assert_eq!(serde_json::to_value(ChallengeType::Sms).unwrap(), "sms");
        assert_eq!(
            serde_json::to_value(HistoricalInterval::FiveMinute).unwrap(),
            "5minute"
        );
        assert_eq!(
            serde_json::to_value(HistoricalSpan::ThreeMonth).unwrap(),
            "3month"
        );
        assert_eq!(serde_json::to_value(OrderSide::Buy).unwrap(), "buy");
        assert_eq!(serde_json::to_value(TimeInForce::Gtc).unwrap(), "gtc");
    }

    #[test]
    fn as_str_matches_serde_rename() {
        for span in [
            HistoricalSpan::Day,
            HistoricalSpan::Week,
            HistoricalSpan::Month,
            HistoricalSpan::ThreeMonth,
            HistoricalSpan::Year,
            HistoricalSpan::FiveYear,
        ] {
            assert_eq!(serde_json::to_value(span).unwrap(), span.as_str());
        }
    }
}
