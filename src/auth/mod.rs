//! Authentication and session management.
//!
//! The login handshake is a small state machine: a password grant is issued
//! with the persisted device token, and the server may interrupt it with an
//! out-of-band challenge (SFA accounts) or an inline MFA code request.
//! Codes are solicited through a pluggable [`Prompt`], so tests and
//! automation can supply them programmatically.
//!
//! Session material is persisted through a [`SessionStore`]: the device
//! token is bootstrapped at construction, and the access/refresh token pair
//! is written only by an explicit [`dump`](crate::RobinhoodClient::dump).
//!
//! ```no_run
//! use robinhood_rs::auth::{FileStore, LoginOptions};
//! use robinhood_rs::{ClientConfig, RobinhoodClient};
//!
//! # async fn example() -> robinhood_rs::Result<()> {
//! let mut client = RobinhoodClient::new(
//!     FileStore::new(".robinhood-session.json"),
//!     ClientConfig::default(),
//! )?;
//! client.open()?;
//!
//! // Prompts on stdin if the server demands a challenge or MFA code.
//! client.login("username", "password", LoginOptions::default()).await?;
//!
//! // Persist the tokens, then restore them in a later process.
//! client.dump()?;
//! client.load().await?;
//! # Ok(())
//! # }
//! ```

mod login;
mod prompt;
mod session;
mod store;

pub use login::{LoginOptions, DEFAULT_EXPIRES_IN};
pub use prompt::{Prompt, QueuePrompt, StdinPrompt};
pub use session::{Session, SessionData};
pub use store::{FileStore, MemoryStore, SessionStore};
