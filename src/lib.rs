//! # robinhood-rs
//!
//! An asynchronous Rust client for the Robinhood brokerage API.
//!
//! This crate covers the full account lifecycle against Robinhood's
//! private REST API: device-token bootstrap, password-grant login with
//! challenge and MFA handling, session persistence, and the account,
//! watchlist, stock data, and order endpoints.
//!
//! ## Features
//!
//! - **Authentication**: password grant with SFA challenge and MFA flows,
//!   token refresh, and session dump/load through a pluggable store
//! - **Account Management**: account, portfolio, positions, and historical
//!   portfolio data
//! - **Market Data**: quotes, fundamentals, historicals, ratings, and tags
//! - **Order Management**: limit, market, stop, and stop-limit orders with
//!   idempotency keys
//! - **Uniform Errors**: every exchange classifies into the same
//!   [`Error`] taxonomy, so retry and re-auth policy lives in one place
//! - **Async-first**: built on Tokio and reqwest
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use robinhood_rs::auth::{FileStore, LoginOptions};
//! use robinhood_rs::{ClientConfig, RobinhoodClient, SecurityList};
//!
//! #[tokio::main]
//! async fn main() -> robinhood_rs::Result<()> {
//!     let store = FileStore::new("~/.robinhood/session.json");
//!     let mut client = RobinhoodClient::new(store, ClientConfig::default())?;
//!     client.open()?;
//!
//!     client.login("username", "password", LoginOptions::default()).await?;
//!
//!     let quotes = client
//!         .get_quotes(&SecurityList::Symbols(vec!["MSFT".into()]))
//!         .await?;
//!     for quote in quotes {
//!         println!("{}: ask={} bid={}", quote.symbol, quote.ask_price, quote.bid_price);
//!     }
//!
//!     client.logout().await?;
//!     client.close()?;
//!     Ok(())
//! }
//! ```
//!
//! ## Session Persistence
//!
//! A logged-in session can be written to its store and picked up by a
//! later process without re-entering credentials:
//!
//! ```rust,no_run
//! use robinhood_rs::auth::FileStore;
//! use robinhood_rs::{ClientConfig, RobinhoodClient};
//!
//! #[tokio::main]
//! async fn main() -> robinhood_rs::Result<()> {
//!     let store = FileStore::new("~/.robinhood/session.json");
//!     let mut client = RobinhoodClient::new(store, ClientConfig::default())?;
//!     client.open()?;
//!
//!     // Restores the token pair saved by a previous `dump`.
//!     client.load().await?;
//!
//!     let portfolio = client.get_portfolio().await?;
//!     println!("equity: {:?}", portfolio.equity);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod auth;
pub mod client;
pub mod error;
pub mod models;

mod urls;

// Re-export primary types at crate root for convenience
pub use api::{InstrumentQuery, MarketAmount, SecurityList};
pub use client::{ClientConfig, PageCursor, RobinhoodClient};
pub use error::{Error, Result};
pub use urls::DEFAULT_BASE_URL;

/// Prelude module for convenient imports.
///
/// ```rust
/// use robinhood_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{InstrumentQuery, MarketAmount, SecurityList};
    pub use crate::auth::{FileStore, LoginOptions, MemoryStore, SessionStore};
    pub use crate::client::{ClientConfig, PageCursor, RobinhoodClient};
    pub use crate::error::{Error, Result};
    pub use crate::models::{
        // Enums
        ChallengeType, HistoricalInterval, HistoricalSpan, OrderSide, OrderTrigger, OrderType,
        TimeInForce,
        // Account models
        Account, Portfolio, Position, WatchlistEntry,
        // Market data models
        Fundamental, HistoricalQuotes, Instrument, Quote, Rating,
        // Order models
        Order,
    };
}
