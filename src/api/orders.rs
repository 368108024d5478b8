//! Order endpoints: history, cancellation, and the place-order family.
//!
//! The convenience helpers (`place_limit_buy_order` and friends) resolve
//! the symbol to an instrument URL or quote first, then delegate to
//! [`RobinhoodClient::place_order`], which attaches the account URL and a
//! fresh idempotency key.

use reqwest::{Method, StatusCode};
use rust_decimal::Decimal;
use serde_json::{json, Map, Value};
use uuid::Uuid;

use crate::client::RobinhoodClient;
use crate::models::{Order, OrderSide, OrderTrigger, OrderType, TimeInForce};
use crate::{Error, Result};

/// Sizes a market order either in dollars or in shares.
///
/// The server takes one or the other, never both, so the two forms are
/// separate variants rather than a pair of optional parameters.
#[derive(Debug, Clone, Copy)]
pub enum MarketAmount {
    /// A dollar amount; the share quantity is derived from the current
    /// market price.
    Dollars(Decimal),
    /// A quantity of shares.
    Shares(Decimal),
}

fn into_object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

impl RobinhoodClient {
    /// Fetch order history, either one order by ID or the whole listing.
    ///
    /// `pages` bounds the listing; it is ignored for a single-order fetch,
    /// which is a single exchange.
    pub async fn get_orders(
        &self,
        order_id: Option<&str>,
        pages: Option<usize>,
    ) -> Result<Vec<Order>> {
        self.ensure_tokens()?;
        match order_id {
            Some(id) => {
                let response = self.get_json(self.routes.order(id)?).await?;
                Ok(vec![serde_json::from_value(response)?])
            }
            None => self.collect_pages(self.routes.orders()?, pages).await,
        }
    }

    /// Cancel a pending order.
    pub async fn cancel_order(&self, order_id: &str) -> Result<()> {
        self.ensure_tokens()?;
        let url = self.routes.cancel_order(order_id)?;
        self.request(Method::POST, url, None, None, StatusCode::OK)
            .await?;
        Ok(())
    }

    /// Submit an order payload, returning the new order's ID.
    ///
    /// The account URL and a fresh `ref_id` idempotency key are attached
    /// here; everything else comes from the caller.
    pub async fn place_order(&self, mut payload: Map<String, Value>) -> Result<String> {
        self.ensure_tokens()?;
        let account = self.account_url.as_deref().ok_or(Error::Unauthenticated)?;
        payload.insert("account".into(), Value::String(account.to_string()));
        payload.insert("ref_id".into(), Value::String(Uuid::new_v4().to_string()));

        let response = self
            .post_json(self.routes.orders()?, Value::Object(payload), StatusCode::CREATED)
            .await?;
        let order: Order = serde_json::from_value(response)?;
        Ok(order.id)
    }

    /// Place a limit buy order.
    pub async fn place_limit_buy_order(
        &self,
        symbol: &str,
        price: Decimal,
        quantity: Decimal,
        time_in_force: TimeInForce,
        extended_hours: bool,
    ) -> Result<String> {
        self.limit_order(OrderSide::Buy, symbol, price, quantity, time_in_force, extended_hours)
            .await
    }

    /// Place a limit sell order.
    pub async fn place_limit_sell_order(
        &self,
        symbol: &str,
        price: Decimal,
        quantity: Decimal,
        time_in_force: TimeInForce,
        extended_hours: bool,
    ) -> Result<String> {
        self.limit_order(OrderSide::Sell, symbol, price, quantity, time_in_force, extended_hours)
            .await
    }

    /// Place a market buy order, sized in dollars or shares.
    pub async fn place_market_buy_order(
        &self,
        symbol: &str,
        amount: MarketAmount,
        time_in_force: TimeInForce,
        extended_hours: bool,
    ) -> Result<String> {
        self.market_order(OrderSide::Buy, symbol, amount, time_in_force, extended_hours)
            .await
    }

    /// Place a market sell order, sized in dollars or shares.
    pub async fn place_market_sell_order(
        &self,
        symbol: &str,
        amount: MarketAmount,
        time_in_force: TimeInForce,
        extended_hours: bool,
    ) -> Result<String> {
        self.market_order(OrderSide::Sell, symbol, amount, time_in_force, extended_hours)
            .await
    }

    /// Place a market buy order triggered at a stop price.
    pub async fn place_stop_buy_order(
        &self,
        symbol: &str,
        price: Decimal,
        quantity: Decimal,
        time_in_force: TimeInForce,
        extended_hours: bool,
    ) -> Result<String> {
        let instrument = self.instrument_url(symbol).await?;
        self.place_order(into_object(json!({
            "extended_hours": extended_hours,
            "instrument": instrument,
            "price": price,
            "quantity": quantity,
            "side": OrderSide::Buy,
            "stop_price": price,
            "symbol": symbol,
            "time_in_force": time_in_force,
            "trigger": OrderTrigger::Stop,
            "type": OrderType::Market,
        })))
        .await
    }

    /// Place a market sell order triggered at a stop price.
    pub async fn place_stop_sell_order(
        &self,
        symbol: &str,
        price: Decimal,
        quantity: Decimal,
        time_in_force: TimeInForce,
        extended_hours: bool,
    ) -> Result<String> {
        let instrument = self.instrument_url(symbol).await?;
        self.place_order(into_object(json!({
            "extended_hours": extended_hours,
            "instrument": instrument,
            "quantity": quantity,
            "side": OrderSide::Sell,
            "stop_price": price,
            "symbol": symbol,
            "time_in_force": time_in_force,
            "trigger": OrderTrigger::Stop,
            "type": OrderType::Market,
        })))
        .await
    }

    /// Place a limit buy order triggered at a stop price.
    pub async fn place_stop_limit_buy_order(
        &self,
        symbol: &str,
        price: Decimal,
        quantity: Decimal,
        stop_price: Decimal,
        time_in_force: TimeInForce,
        extended_hours: bool,
    ) -> Result<String> {
        self.stop_limit_order(
            OrderSide::Buy,
            symbol,
            price,
            quantity,
            stop_price,
            time_in_force,
            extended_hours,
        )
        .await
    }

    /// Place a limit sell order triggered at a stop price.
    pub async fn place_stop_limit_sell_order(
        &self,
        symbol: &str,
        price: Decimal,
        quantity: Decimal,
        stop_price: Decimal,
        time_in_force: TimeInForce,
        extended_hours: bool,
    ) -> Result<String> {
        self.stop_limit_order(
            OrderSide::Sell,
            symbol,
            price,
            quantity,
            stop_price,
            time_in_force,
            extended_hours,
        )
        .await
    }

    async fn limit_order(
        &self,
        side: OrderSide,
        symbol: &str,
        price: Decimal,
        quantity: Decimal,
        time_in_force: TimeInForce,
        extended_hours: bool,
    ) -> Result<String> {
        let instrument = self.instrument_url(symbol).await?;
        self.place_order(into_object(json!({
            "extended_hours": extended_hours,
            "instrument": instrument,
            "price": price,
            "quantity": quantity,
            "side": side,
            "symbol": symbol,
            "time_in_force": time_in_force,
            "trigger": OrderTrigger::Immediate,
            "type": OrderType::Limit,
        })))
        .await
    }

    async fn stop_limit_order(
        &self,
        side: OrderSide,
        symbol: &str,
        price: Decimal,
        quantity: Decimal,
        stop_price: Decimal,
        time_in_force: TimeInForce,
        extended_hours: bool,
    ) -> Result<String> {
        let instrument = self.instrument_url(symbol).await?;
        self.place_order(into_object(json!({
            "extended_hours": extended_hours,
            "instrument": instrument,
            "price": price,
            "quantity": quantity,
            "side": side,
            "stop_price": stop_price,
            "symbol": symbol,
            "time_in_force": time_in_force,
            "trigger": OrderTrigger::Stop,
            "type": OrderType::Limit,
        })))
        .await
    }

    async fn market_order(
        &self,
        side: OrderSide,
        symbol: &str,
        amount: MarketAmount,
        time_in_force: TimeInForce,
        extended_hours: bool,
    ) -> Result<String> {
        let quotes = self
            .get_quotes(&crate::api::SecurityList::Symbols(vec![symbol.to_string()]))
            .await?;
        let quote = quotes
            .first()
            .ok_or_else(|| Error::InvalidArgument(format!("no quote found for {symbol}")))?;

        // A market buy prices at the ask, a sell at the bid.
        let market_price = match side {
            OrderSide::Buy => quote.ask_price,
            OrderSide::Sell => quote.bid_price,
        };

        let mut payload = into_object(json!({
            "extended_hours": extended_hours,
            "instrument": quote.instrument,
            "price": market_price,
            "side": side,
            "symbol": symbol,
            "time_in_force": time_in_force,
            "trigger": OrderTrigger::Immediate,
            "type": OrderType::Market,
        }));
        match amount {
            MarketAmount::Dollars(dollars) => {
                if market_price.is_zero() {
                    return Err(Error::InvalidArgument(format!(
                        "{symbol} has no market price to size a dollar order against"
                    )));
                }
                payload.insert(
                    "dollar_based_amount".into(),
                    json!({
                        "amount": dollars.round_dp(2),
                        "currency_code": "USD",
                    }),
                );
                payload.insert("quantity".into(), json!((dollars / market_price).round_dp(6)));
            }
            MarketAmount::Shares(shares) => {
                payload.insert("quantity".into(), json!(shares.round_dp(6)));
            }
        }

        self.place_order(payload).await
    }

    async fn instrument_url(&self, symbol: &str) -> Result<String> {
        let instruments = self
            .get_instruments(
                &crate::api::InstrumentQuery::Symbol(symbol.to_string()),
                None,
            )
            .await?;
        instruments
            .into_iter()
            .next()
            .map(|instrument| instrument.url)
            .ok_or_else(|| Error::InvalidArgument(format!("no instrument found for {symbol}")))
    }
}
