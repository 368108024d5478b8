//! The request pipeline.
//!
//! Every call to the remote API passes through [`RobinhoodClient::request`]:
//! it enforces the origin constraint, attaches the authorization header,
//! issues exactly one HTTP exchange, and classifies the outcome. No retries
//! happen at this layer.

use std::sync::atomic::{AtomicUsize, Ordering};

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Method, StatusCode};
use secrecy::ExposeSecret;
use serde_json::Value;
use tracing::debug;
use url::Url;

use super::RobinhoodClient;
use crate::{Error, Result};

/// Decrements the in-flight counter when the exchange completes, including
/// on early returns.
struct InFlightGuard<'a>(&'a AtomicUsize);

impl<'a> InFlightGuard<'a> {
    fn acquire(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(counter)
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

impl RobinhoodClient {
    /// Issue one HTTP exchange and classify the outcome.
    ///
    /// - `url` outside the configured origin fails with
    ///   [`Error::InvalidArgument`] before any I/O.
    /// - A client that was never [`open`](Self::open)ed fails with
    ///   [`Error::Uninitialized`] before any I/O.
    /// - Status equal to `expected` yields the parsed JSON body.
    /// - Any other status yields [`Error::Api`] carrying the full body.
    /// - Transport faults (timeout, connect, TLS) yield [`Error::Request`].
    pub(crate) async fn request(
        &self,
        method: Method,
        url: Url,
        body: Option<Value>,
        headers: Option<HeaderMap>,
        expected: StatusCode,
    ) -> Result<Value> {
        self.routes.check_origin(&url)?;
        let transport = self.transport.as_ref().ok_or(Error::Uninitialized)?;

        let mut request = transport.request(method.clone(), url.clone());
        if let Some(headers) = headers {
            request = request.headers(headers);
        }
        if let Some(auth) = self.authorization_header()? {
            request = request.header(AUTHORIZATION, auth);
        }
        if let Some(body) = &body {
            request = request.json(body);
        }

        debug!(%method, %url, "issuing API request");
        let guard = InFlightGuard::acquire(&self.in_flight);
        let response = request.send().await.map_err(|source| Error::Request {
            method: method.clone(),
            url: url.clone(),
            source,
        })?;

        let status = response.status();
        debug!(%method, %url, status = status.as_u16(), "API response");

        let result = if status == expected {
            // 204 responses carry no body. Anything else must be JSON.
            let bytes = response.bytes().await.map_err(|source| Error::Request {
                method,
                url,
                source,
            })?;
            if bytes.is_empty() {
                Ok(Value::Null)
            } else {
                Ok(serde_json::from_slice(&bytes)?)
            }
        } else {
            // Best-effort body parse so callers can inspect structured
            // fields like `challenge` and `mfa_required`.
            let body = response.json::<Value>().await.unwrap_or_default();
            Err(Error::Api {
                method,
                url,
                status: status.as_u16(),
                body,
            })
        };
        drop(guard);
        result
    }

    /// GET a URL, expecting a 200 response.
    pub(crate) async fn get_json(&self, url: Url) -> Result<Value> {
        self.request(Method::GET, url, None, None, StatusCode::OK)
            .await
    }

    /// POST a JSON body, expecting the given status.
    pub(crate) async fn post_json(
        &self,
        url: Url,
        body: Value,
        expected: StatusCode,
    ) -> Result<Value> {
        self.request(Method::POST, url, Some(body), None, expected)
            .await
    }

    /// The `Authorization` header value, when a session token is held.
    fn authorization_header(&self) -> Result<Option<HeaderValue>> {
        match self.session.access_token() {
            Some(token) => {
                let value = HeaderValue::from_str(token.expose_secret()).map_err(|_| {
                    Error::InvalidArgument("access token is not a valid header value".into())
                })?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }
}
