//! HTTP client and request pipeline for the Robinhood API.
//!
//! This module provides the main entry point [`RobinhoodClient`]. The
//! client owns the [`Session`](crate::auth::Session), a session store for
//! persisting it, and an optional transport that is explicitly acquired
//! with [`open`](RobinhoodClient::open) and released with
//! [`close`](RobinhoodClient::close).
//!
//! # Example
//!
//! ```no_run
//! use robinhood_rs::auth::{FileStore, LoginOptions};
//! use robinhood_rs::{ClientConfig, RobinhoodClient};
//!
//! # async fn example() -> robinhood_rs::Result<()> {
//! let store = FileStore::new(".robinhood-session.json");
//! let mut client = RobinhoodClient::new(store, ClientConfig::default())?;
//! client.open()?;
//!
//! client.login("username", "password", LoginOptions::default()).await?;
//! let portfolio = client.get_portfolio().await?;
//! println!("equity: {:?}", portfolio.equity);
//!
//! client.logout().await?;
//! client.close()?;
//! # Ok(())
//! # }
//! ```

mod config;
mod http;
mod paginated;

pub use config::{ClientConfig, DEFAULT_CLIENT_ID};
pub use paginated::{Page, PageCursor};

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::auth::{Prompt, Session, SessionStore, StdinPrompt};
use crate::urls::Routes;
use crate::{Error, Result};

/// An HTTP client for interacting with the Robinhood private REST API.
///
/// Construction bootstraps the device token from the session store,
/// generating and persisting a fresh one if the store is empty. The
/// transport is not opened until [`open`](Self::open) is called; any
/// operation that would touch the network before then fails with
/// [`Error::Uninitialized`].
///
/// A client holds exactly one logical session. Reads take `&self`;
/// operations that change the token state take `&mut self`.
pub struct RobinhoodClient {
    pub(crate) config: ClientConfig,
    pub(crate) routes: Routes,
    pub(crate) store: Box<dyn SessionStore>,
    pub(crate) prompt: Box<dyn Prompt>,
    pub(crate) session: Session,
    pub(crate) transport: Option<reqwest::Client>,
    pub(crate) in_flight: AtomicUsize,
    pub(crate) account_url: Option<String>,
    pub(crate) account_number: Option<String>,
}

impl RobinhoodClient {
    /// Create a new client backed by the given session store.
    ///
    /// Reads the store to recover the device token; if the store is empty,
    /// generates a new random token and writes it back. This is the only
    /// implicit store write; tokens are persisted only by an explicit
    /// [`dump`](Self::dump).
    pub fn new(store: impl SessionStore + 'static, config: ClientConfig) -> Result<Self> {
        let store: Box<dyn SessionStore> = Box::new(store);
        let session = Session::bootstrap(store.as_ref())?;
        let routes = Routes::new(config.base_url.clone());

        Ok(Self {
            config,
            routes,
            store,
            prompt: Box::new(StdinPrompt),
            session,
            transport: None,
            in_flight: AtomicUsize::new(0),
            account_url: None,
            account_number: None,
        })
    }

    /// Replace the prompt used to solicit challenge and MFA codes.
    ///
    /// The default prompt reads from standard input; swap it for a
    /// programmatic supplier in tests and automation.
    pub fn with_prompt(mut self, prompt: impl Prompt + 'static) -> Self {
        self.prompt = Box::new(prompt);
        self
    }

    /// Acquire the HTTP transport.
    ///
    /// Must be called before any network operation. Calling `open` on an
    /// already-open client is a no-op.
    pub fn open(&mut self) -> Result<()> {
        if self.transport.is_none() {
            let transport = reqwest::Client::builder()
                .timeout(self.config.timeout)
                .user_agent(&self.config.user_agent)
                .build()
                .map_err(|e| Error::Request {
                    method: reqwest::Method::GET,
                    url: self.config.base_url.clone(),
                    source: e,
                })?;
            self.transport = Some(transport);
        }
        Ok(())
    }

    /// Release the HTTP transport.
    ///
    /// Fails with [`Error::InFlight`] if any request is still outstanding,
    /// and with [`Error::Uninitialized`] if the client was never opened.
    pub fn close(&mut self) -> Result<()> {
        if self.transport.is_none() {
            return Err(Error::Uninitialized);
        }
        let pending = self.in_flight.load(Ordering::SeqCst);
        if pending > 0 {
            return Err(Error::InFlight(pending));
        }
        self.transport = None;
        Ok(())
    }

    /// Returns `true` if the transport is open.
    pub fn is_open(&self) -> bool {
        self.transport.is_some()
    }

    /// Returns `true` if the client holds a full access/refresh token pair.
    pub fn is_authenticated(&self) -> bool {
        self.session.has_tokens()
    }

    /// The device token presented on every login attempt.
    pub fn device_token(&self) -> &str {
        self.session.device_token()
    }

    /// The canonical account URL, available after login or load.
    pub fn account_url(&self) -> Option<&str> {
        self.account_url.as_deref()
    }

    /// The short account number, available after login or load.
    pub fn account_number(&self) -> Option<&str> {
        self.account_number.as_deref()
    }

    /// Fail fast if either session token is absent.
    pub(crate) fn ensure_tokens(&self) -> Result<()> {
        if self.session.has_tokens() {
            Ok(())
        } else {
            Err(Error::Unauthenticated)
        }
    }
}

impl std::fmt::Debug for RobinhoodClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RobinhoodClient")
            .field("config", &self.config)
            .field("session", &self.session)
            .field("open", &self.is_open())
            .field("account_number", &self.account_number)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::MemoryStore;

    fn client() -> RobinhoodClient {
        RobinhoodClient::new(MemoryStore::new(), ClientConfig::default()).unwrap()
    }

    #[test]
    fn new_client_is_closed_and_unauthenticated() {
        let client = client();
        assert!(!client.is_open());
        assert!(!client.is_authenticated());
        assert!(client.account_number().is_none());
    }

    #[test]
    fn bootstrap_generates_and_persists_device_token() {
        let store = MemoryStore::new();
        let first = RobinhoodClient::new(store.clone(), ClientConfig::default()).unwrap();
        let token = first.device_token().to_string();
        assert!(!token.is_empty());

        // A second client over the same store sees the same device token.
        let second = RobinhoodClient::new(store, ClientConfig::default()).unwrap();
        assert_eq!(second.device_token(), token);
    }

    #[test]
    fn open_and_close_toggle_transport() {
        let mut client = client();
        assert!(matches!(client.close(), Err(Error::Uninitialized)));

        client.open().unwrap();
        assert!(client.is_open());
        client.open().unwrap(); // idempotent

        client.close().unwrap();
        assert!(!client.is_open());
    }

    #[test]
    fn close_rejects_while_requests_outstanding() {
        let mut client = client();
        client.open().unwrap();
        client.in_flight.store(2, Ordering::SeqCst);
        assert!(matches!(client.close(), Err(Error::InFlight(2))));
        client.in_flight.store(0, Ordering::SeqCst);
        client.close().unwrap();
    }
}
