//! The login/logout/refresh state machine.
//!
//! `LoggedOut -> Authenticating -> {ChallengePending, MFAPending} ->
//! LoggedIn`, with `refresh` replacing the token pair in place and
//! `logout` returning to `LoggedOut`. The request pipeline classifies the
//! server's answers; this module intercepts [`Error::Api`] only to branch
//! the challenge/MFA retry logic and re-raises everything else unchanged.

use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Method, StatusCode};
use serde_json::{json, Value};
use tracing::{info, warn};

use crate::client::RobinhoodClient;
use crate::models::{Challenge, ChallengeType};
use crate::{Error, Result};

/// Default session duration, in seconds (24 hours).
pub const DEFAULT_EXPIRES_IN: u64 = 86_400;

/// Hard cap on challenge respond attempts, independent of the server's
/// `remaining_attempts` countdown. A server that fails to decrement its
/// counter would otherwise loop forever.
const MAX_CHALLENGE_ATTEMPTS: u32 = 5;

/// Hard cap on grant re-issues triggered by passed challenges. Each respond
/// loop is bounded on its own, but a server that answers every passed
/// challenge with a fresh one would otherwise alternate forever.
const MAX_CHALLENGE_ROUNDS: u32 = 5;

const CHALLENGE_RESPONSE_HEADER: &str = "x-robinhood-challenge-response-id";

/// Options for [`RobinhoodClient::login`].
#[derive(Debug, Clone)]
pub struct LoginOptions {
    /// Requested session duration, in seconds.
    pub expires_in: u64,
    /// Delivery method for the out-of-band challenge (SFA accounts).
    pub challenge_type: ChallengeType,
}

impl Default for LoginOptions {
    fn default() -> Self {
        Self {
            expires_in: DEFAULT_EXPIRES_IN,
            challenge_type: ChallengeType::Sms,
        }
    }
}

impl RobinhoodClient {
    /// Authenticate the user (both SFA and MFA accounts).
    ///
    /// Issues a password grant with the persisted device token. If the
    /// server interrupts with an out-of-band challenge, the configured
    /// [`Prompt`](crate::auth::Prompt) is asked for codes until the
    /// challenge passes or its attempt budget runs out; if the server asks
    /// for an MFA code, the prompt is asked exactly once and the grant is
    /// re-issued with it.
    ///
    /// Login is complete only once a follow-up `get_account` call has
    /// populated the account URL and number; a failure of that call
    /// propagates unmodified.
    pub async fn login(
        &mut self,
        username: &str,
        password: &str,
        options: LoginOptions,
    ) -> Result<()> {
        let login_url = self.routes.login()?;
        let mut challenge_id = String::new();
        let mut challenge_rounds = 0u32;
        let mut mfa_code: Option<String> = None;
        let mut mfa_attempted = false;

        loop {
            let body = json!({
                "challenge_type": options.challenge_type.as_str(),
                "client_id": self.config.client_id,
                "device_token": self.session.device_token(),
                "expires_in": options.expires_in,
                "grant_type": "password",
                "mfa_code": mfa_code.as_deref().unwrap_or(""),
                "password": password,
                "scope": "internal",
                "username": username,
            });
            let mut headers = HeaderMap::new();
            headers.insert(
                CHALLENGE_RESPONSE_HEADER,
                HeaderValue::from_str(&challenge_id).map_err(|_| {
                    Error::Authentication("challenge id is not a valid header value".into())
                })?,
            );

            match self
                .request(
                    Method::POST,
                    login_url.clone(),
                    Some(body),
                    Some(headers),
                    StatusCode::OK,
                )
                .await
            {
                Ok(response) => {
                    if response
                        .get("mfa_required")
                        .and_then(Value::as_bool)
                        .unwrap_or(false)
                    {
                        if mfa_attempted {
                            return Err(Error::Authentication(
                                "server rejected the MFA code".into(),
                            ));
                        }
                        let mfa_type = response
                            .get("mfa_type")
                            .and_then(Value::as_str)
                            .unwrap_or("mfa");
                        let code = self.prompt.ask(&format!("Enter the {mfa_type} code")).await?;
                        mfa_code = Some(code);
                        mfa_attempted = true;
                        continue;
                    }

                    let access = response
                        .get("access_token")
                        .and_then(Value::as_str)
                        .ok_or_else(|| {
                            Error::Authentication("grant response missing access_token".into())
                        })?;
                    let refresh = response
                        .get("refresh_token")
                        .and_then(Value::as_str)
                        .ok_or_else(|| {
                            Error::Authentication("grant response missing refresh_token".into())
                        })?;
                    self.session.set_tokens(access, refresh);
                    info!("login succeeded");
                    break;
                }
                Err(err) => match err.challenge() {
                    Some(challenge) if challenge.remaining_attempts > 0 => {
                        challenge_rounds += 1;
                        if challenge_rounds > MAX_CHALLENGE_ROUNDS {
                            return Err(Error::Authentication(
                                "server kept issuing new challenges".into(),
                            ));
                        }
                        // Challenge passed: re-issue the grant presenting
                        // the respond id in the header.
                        challenge_id =
                            self.pass_challenge(challenge, options.challenge_type).await?;
                    }
                    _ => return Err(err),
                },
            }
        }

        // Account URL/number are needed by the order and historical
        // endpoints; login is not complete until they are known.
        self.refresh_account_info().await
    }

    /// Drive the challenge respond loop until the server accepts a code.
    ///
    /// Returns the respond id to present on the next password grant.
    /// Propagates the server's [`Error::Api`] once `remaining_attempts`
    /// reaches zero, and gives up early if the counter fails to decrease.
    async fn pass_challenge(
        &self,
        challenge: Challenge,
        challenge_type: ChallengeType,
    ) -> Result<String> {
        let mut last_remaining = challenge.remaining_attempts;
        let mut challenge = challenge;

        for _ in 0..MAX_CHALLENGE_ATTEMPTS {
            let code = self
                .prompt
                .ask(&format!("Enter the {challenge_type} code"))
                .await?;
            let url = self.routes.challenge_respond(&challenge.id)?;

            match self
                .post_json(url, json!({ "response": code }), StatusCode::OK)
                .await
            {
                Ok(response) => {
                    return response
                        .get("id")
                        .and_then(Value::as_str)
                        .map(str::to_string)
                        .ok_or_else(|| {
                            Error::Authentication("challenge response missing id".into())
                        });
                }
                Err(err) => match err.challenge() {
                    Some(next) if next.remaining_attempts > 0 => {
                        if next.remaining_attempts >= last_remaining {
                            return Err(Error::Authentication(
                                "challenge attempt counter is not decreasing".into(),
                            ));
                        }
                        warn!(
                            remaining = next.remaining_attempts,
                            "challenge code rejected"
                        );
                        last_remaining = next.remaining_attempts;
                        challenge = next;
                    }
                    // Exhausted (remaining_attempts == 0) or an unrelated
                    // failure: propagate unchanged.
                    _ => return Err(err),
                },
            }
        }

        Err(Error::Authentication(
            "challenge attempt cap exceeded".into(),
        ))
    }

    /// Invalidate the current session tokens.
    ///
    /// Requires a logged-in client. Tokens are cleared only when the server
    /// confirms the revocation; on failure they are left untouched.
    pub async fn logout(&mut self) -> Result<()> {
        self.ensure_tokens()?;
        let url = self.routes.logout()?;
        let body = json!({
            "client_id": self.config.client_id,
            "token": self.session.refresh_token_exposed(),
        });

        self.post_json(url, body, StatusCode::OK).await?;
        self.session.clear_tokens();
        info!("logged out");
        Ok(())
    }

    /// Fetch a fresh token pair, replacing both atomically.
    ///
    /// The account URL/number are not refreshed; they are assumed stable
    /// for the account's lifetime.
    pub async fn refresh(&mut self, expires_in: u64) -> Result<()> {
        self.ensure_tokens()?;
        let url = self.routes.login()?;
        let body = json!({
            "client_id": self.config.client_id,
            "expires_in": expires_in,
            "grant_type": "refresh_token",
            "refresh_token": self.session.refresh_token_exposed(),
            "scope": "internal",
        });

        let response = self.post_json(url, body, StatusCode::OK).await?;
        let access = response
            .get("access_token")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                Error::Authentication("refresh response missing access_token".into())
            })?;
        let refresh = response
            .get("refresh_token")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                Error::Authentication("refresh response missing refresh_token".into())
            })?;
        self.session.set_tokens(access, refresh);
        Ok(())
    }

    /// Write the session tokens to the session store.
    ///
    /// Requires a logged-in client; the device token is written alongside
    /// the pair so the record stays self-contained.
    pub fn dump(&self) -> Result<()> {
        self.ensure_tokens()?;
        self.store.write(&self.session.to_data())
    }

    /// Read the session tokens back from the session store.
    ///
    /// Fails with [`Error::Unauthenticated`] if the store holds no full
    /// token pair. On success, one `get_account` call repopulates the
    /// account URL/number, exactly as at the end of login.
    pub async fn load(&mut self) -> Result<()> {
        let data = self.store.read()?.ok_or(Error::Unauthenticated)?;
        if !self.session.restore_tokens(&data) {
            return Err(Error::Unauthenticated);
        }
        self.refresh_account_info().await
    }

    pub(crate) async fn refresh_account_info(&mut self) -> Result<()> {
        let account = self.get_account().await?;
        self.account_url = Some(account.url);
        self.account_number = Some(account.account_number);
        Ok(())
    }
}
