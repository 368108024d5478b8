//! Order models.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An order as returned by the orders endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Order ID.
    pub id: String,
    /// Order state, as sent by the server (e.g. `queued`, `filled`).
    #[serde(default)]
    pub state: Option<String>,
    /// Remaining order fields, unmodified.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn order_parses_with_unknown_fields() {
        let order: Order = serde_json::from_value(json!({
            "id": "o-123",
            "state": "queued",
            "price": "100.00",
        }))
        .unwrap();
        assert_eq!(order.id, "o-123");
        assert_eq!(order.state.as_deref(), Some("queued"));
        assert_eq!(order.extra["price"], "100.00");
    }
}
