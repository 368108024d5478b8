//! Error types for the Robinhood API client.
//!
//! Every failure surfaced by this crate carries enough structured detail
//! (method, url, status, response body) to diagnose without re-running with
//! verbose logging.

use reqwest::Method;
use serde_json::Value;
use thiserror::Error;
use url::Url;

use crate::models::Challenge;

/// A specialized `Result` type for Robinhood operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for all Robinhood API operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The client was used before [`open`](crate::RobinhoodClient::open) was
    /// called, or after [`close`](crate::RobinhoodClient::close).
    #[error("the client transport is not open; call open() first")]
    Uninitialized,

    /// An authorization-requiring call was attempted without session tokens.
    #[error("the client is not authenticated; try logging in first")]
    Unauthenticated,

    /// A request was rejected before any I/O was attempted.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The HTTP exchange itself failed (timeout, connection, TLS).
    ///
    /// Safe to retry at the caller's discretion; this layer never retries.
    #[error("request error: {method} {url}")]
    Request {
        /// HTTP method of the failed exchange.
        method: Method,
        /// Target URL of the failed exchange.
        url: Url,
        /// The underlying transport fault.
        #[source]
        source: reqwest::Error,
    },

    /// The exchange completed but the server signaled a non-expected status.
    #[error("API error: {method} {url} responded with status {status}")]
    Api {
        /// HTTP method of the exchange.
        method: Method,
        /// Target URL of the exchange.
        url: Url,
        /// The HTTP status code returned.
        status: u16,
        /// The full parsed response body, for inspecting structured fields
        /// such as `challenge` or `mfa_required`.
        body: Value,
    },

    /// The login handshake failed in a way the server did not classify
    /// (malformed grant response, exhausted challenge loop, repeated MFA).
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// `close()` was called while requests were still outstanding.
    #[error("cannot close the client: {0} request(s) in flight")]
    InFlight(usize),

    /// Session store I/O failed.
    #[error("session store I/O error")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL construction failed.
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl Error {
    /// Returns `true` if this error was caused by the request timeout
    /// elapsing, as opposed to a server-signaled failure.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Request { source, .. } if source.is_timeout())
    }

    /// Returns `true` if this is an authentication-related error.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Error::Unauthenticated | Error::Authentication(_))
    }

    /// Extract the out-of-band [`Challenge`] from an [`Error::Api`] body,
    /// if the server requested one.
    pub fn challenge(&self) -> Option<Challenge> {
        match self {
            Error::Api { body, .. } => body
                .get("challenge")
                .and_then(|c| serde_json::from_value(c.clone()).ok()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn challenge_is_parsed_from_api_body() {
        let err = Error::Api {
            method: Method::POST,
            url: Url::parse("https://api.robinhood.com/oauth2/token/").unwrap(),
            status: 400,
            body: json!({"challenge": {"id": "abc", "remaining_attempts": 3}}),
        };

        let challenge = err.challenge().expect("challenge should parse");
        assert_eq!(challenge.id, "abc");
        assert_eq!(challenge.remaining_attempts, 3);
    }

    #[test]
    fn challenge_absent_for_other_bodies() {
        let err = Error::Api {
            method: Method::GET,
            url: Url::parse("https://api.robinhood.com/accounts/").unwrap(),
            status: 401,
            body: json!({"detail": "Invalid token."}),
        };
        assert!(err.challenge().is_none());
        assert!(!err.is_timeout());
    }

    #[test]
    fn auth_errors_are_classified() {
        assert!(Error::Unauthenticated.is_auth_error());
        assert!(Error::Authentication("nope".into()).is_auth_error());
        assert!(!Error::Uninitialized.is_auth_error());
    }
}
