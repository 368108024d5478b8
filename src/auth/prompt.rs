//! Out-of-band code solicitation.
//!
//! The login challenge/MFA loop blocks on external input mid-handshake.
//! Rather than hardwiring a console read, the client asks a [`Prompt`] for
//! each code, so automated tests and programmatic integrations can supply
//! codes without terminal I/O.

use std::collections::VecDeque;
use std::io::{BufRead, Write};
use std::sync::{Arc, Mutex};

use futures_util::future::BoxFuture;

use crate::{Error, Result};

/// An asynchronous "ask the human for a string" capability.
pub trait Prompt: Send + Sync {
    /// Present `message` and resolve to the entered code.
    fn ask<'a>(&'a self, message: &'a str) -> BoxFuture<'a, Result<String>>;
}

/// A [`Prompt`] that reads a line from standard input.
///
/// The blocking read happens on a dedicated blocking thread so the
/// surrounding task is suspended, not the runtime.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinPrompt;

impl Prompt for StdinPrompt {
    fn ask<'a>(&'a self, message: &'a str) -> BoxFuture<'a, Result<String>> {
        let message = message.to_string();
        Box::pin(async move {
            tokio::task::spawn_blocking(move || {
                let mut stdout = std::io::stdout();
                write!(stdout, "{message}: ")?;
                stdout.flush()?;

                let mut line = String::new();
                std::io::stdin().lock().read_line(&mut line)?;
                Ok(line.trim().to_string())
            })
            .await
            .map_err(|e| Error::Io(std::io::Error::other(e)))?
        })
    }
}

/// A [`Prompt`] that answers from a pre-seeded queue of codes.
///
/// Clones share the same queue. Asking with an empty queue fails with
/// [`Error::Authentication`], which surfaces as a login failure rather
/// than hanging the handshake.
#[derive(Debug, Clone, Default)]
pub struct QueuePrompt {
    codes: Arc<Mutex<VecDeque<String>>>,
}

impl QueuePrompt {
    /// Create a prompt pre-seeded with the given codes, answered in order.
    pub fn new(codes: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            codes: Arc::new(Mutex::new(codes.into_iter().map(Into::into).collect())),
        }
    }

    /// Append another code to the back of the queue.
    pub fn push(&self, code: impl Into<String>) {
        self.codes
            .lock()
            .expect("prompt lock poisoned")
            .push_back(code.into());
    }

    /// Number of codes left in the queue.
    pub fn remaining(&self) -> usize {
        self.codes.lock().expect("prompt lock poisoned").len()
    }
}

impl Prompt for QueuePrompt {
    fn ask<'a>(&'a self, message: &'a str) -> BoxFuture<'a, Result<String>> {
        Box::pin(async move {
            self.codes
                .lock()
                .expect("prompt lock poisoned")
                .pop_front()
                .ok_or_else(|| {
                    Error::Authentication(format!("no code available for prompt: {message}"))
                })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn queue_prompt_answers_in_order() {
        let prompt = QueuePrompt::new(["123456", "654321"]);
        assert_eq!(prompt.ask("sms code").await.unwrap(), "123456");
        assert_eq!(prompt.ask("sms code").await.unwrap(), "654321");
        assert_eq!(prompt.remaining(), 0);
    }

    #[tokio::test]
    async fn queue_prompt_fails_when_exhausted() {
        let prompt = QueuePrompt::new(Vec::<String>::new());
        let err = prompt.ask("sms code").await.unwrap_err();
        assert!(err.is_auth_error());
    }
}
