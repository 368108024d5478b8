//! Session state and its persisted form.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::store::SessionStore;
use crate::Result;

/// The client's session state.
///
/// The device token is generated once and persisted forever; the
/// access/refresh token pair is absent until login succeeds, replaced
/// wholesale on refresh, and cleared on logout. The pair is always both
/// present or both absent.
///
/// The access token is held Bearer-prefixed, exactly as it is sent in the
/// `Authorization` header.
pub struct Session {
    device_token: String,
    access_token: Option<SecretString>,
    refresh_token: Option<SecretString>,
}

impl Session {
    /// Recover the device token from the store, generating and persisting a
    /// fresh one if the store is empty.
    ///
    /// Tokens are never loaded here; that is an explicit
    /// [`load`](crate::RobinhoodClient::load).
    pub(crate) fn bootstrap(store: &dyn SessionStore) -> Result<Self> {
        let device_token = match store.read()? {
            Some(data) => data.device_token,
            None => {
                let token = Uuid::new_v4().to_string();
                store.write(&SessionData {
                    device_token: token.clone(),
                    access_token: None,
                    refresh_token: None,
                })?;
                token
            }
        };

        Ok(Self {
            device_token,
            access_token: None,
            refresh_token: None,
        })
    }

    /// The persisted device identifier.
    pub fn device_token(&self) -> &str {
        &self.device_token
    }

    /// Whether the full token pair is held.
    pub fn has_tokens(&self) -> bool {
        self.access_token.is_some() && self.refresh_token.is_some()
    }

    pub(crate) fn access_token(&self) -> Option<&SecretString> {
        self.access_token.as_ref()
    }

    pub(crate) fn refresh_token_exposed(&self) -> Option<&str> {
        self.refresh_token.as_ref().map(|t| t.expose_secret())
    }

    /// Replace both tokens from a raw grant response.
    pub(crate) fn set_tokens(&mut self, access_token: &str, refresh_token: &str) {
        self.access_token = Some(SecretString::from(format!("Bearer {access_token}")));
        self.refresh_token = Some(SecretString::from(refresh_token.to_string()));
    }

    /// Clear both tokens (logout).
    pub(crate) fn clear_tokens(&mut self) {
        self.access_token = None;
        self.refresh_token = None;
    }

    /// Restore tokens from a persisted record.
    ///
    /// Returns `false` if the record does not hold the full pair; in that
    /// case the session is left untouched.
    pub(crate) fn restore_tokens(&mut self, data: &SessionData) -> bool {
        match (&data.access_token, &data.refresh_token) {
            (Some(access), Some(refresh)) => {
                self.access_token = Some(SecretString::from(access.clone()));
                self.refresh_token = Some(SecretString::from(refresh.clone()));
                true
            }
            _ => false,
        }
    }

    /// The persisted form of this session.
    pub(crate) fn to_data(&self) -> SessionData {
        SessionData {
            device_token: self.device_token.clone(),
            access_token: self
                .access_token
                .as_ref()
                .map(|t| t.expose_secret().to_string()),
            refresh_token: self
                .refresh_token
                .as_ref()
                .map(|t| t.expose_secret().to_string()),
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("device_token", &self.device_token)
            .field("access_token", &self.access_token.as_ref().map(|_| "[REDACTED]"))
            .field("refresh_token", &self.refresh_token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

/// The record persisted to a [`SessionStore`].
///
/// `device_token` is always present after first construction; the tokens
/// are present only when a logged-in session has been dumped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionData {
    /// Locally generated device identifier.
    pub device_token: String,
    /// Bearer-prefixed access token, if a session was dumped.
    #[serde(default)]
    pub access_token: Option<String>,
    /// Refresh token, if a session was dumped.
    #[serde(default)]
    pub refresh_token: Option<String>,
}
