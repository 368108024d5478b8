//! Endpoint route table.
//!
//! All routes are joined onto a single base origin. The request pipeline
//! rejects any URL that does not share this origin, so the route table is
//! the only place paths are spelled out.

use url::Url;

use crate::{Error, Result};

/// Default Robinhood API origin.
pub const DEFAULT_BASE_URL: &str = "https://api.robinhood.com/";

/// Builds endpoint URLs relative to a configured base origin.
#[derive(Debug, Clone)]
pub(crate) struct Routes {
    base: Url,
}

impl Routes {
    pub(crate) fn new(base: Url) -> Self {
        Self { base }
    }

    fn join(&self, path: &str) -> Result<Url> {
        Ok(self.base.join(path)?)
    }

    // OAuth
    pub(crate) fn login(&self) -> Result<Url> {
        self.join("oauth2/token/")
    }

    pub(crate) fn logout(&self) -> Result<Url> {
        self.join("oauth2/revoke_token/")
    }

    pub(crate) fn challenge_respond(&self, challenge_id: &str) -> Result<Url> {
        self.join(&format!("challenge/{challenge_id}/respond/"))
    }

    // Profile
    pub(crate) fn accounts(&self) -> Result<Url> {
        self.join("accounts/")
    }

    pub(crate) fn portfolios(&self) -> Result<Url> {
        self.join("portfolios/")
    }

    pub(crate) fn historical_portfolio(&self, account_number: &str) -> Result<Url> {
        self.join(&format!("portfolios/historicals/{account_number}/"))
    }

    // Account
    pub(crate) fn positions(&self) -> Result<Url> {
        self.join("positions/")
    }

    pub(crate) fn watchlist(&self, name: &str) -> Result<Url> {
        self.join(&format!("watchlists/{name}/"))
    }

    pub(crate) fn watchlist_entry(&self, name: &str, instrument_id: &str) -> Result<Url> {
        self.join(&format!("watchlists/{name}/{instrument_id}/"))
    }

    // Stocks
    pub(crate) fn fundamentals(&self) -> Result<Url> {
        self.join("fundamentals/")
    }

    pub(crate) fn instruments(&self) -> Result<Url> {
        self.join("instruments/")
    }

    pub(crate) fn quotes(&self) -> Result<Url> {
        self.join("quotes/")
    }

    pub(crate) fn historical_quotes(&self) -> Result<Url> {
        self.join("quotes/historicals/")
    }

    pub(crate) fn ratings(&self) -> Result<Url> {
        self.join("midlands/ratings/")
    }

    pub(crate) fn instrument_tags(&self, instrument_id: &str) -> Result<Url> {
        self.join(&format!("midlands/tags/instrument/{instrument_id}/"))
    }

    pub(crate) fn tag_members(&self, tag: &str) -> Result<Url> {
        self.join(&format!("midlands/tags/tag/{tag}/"))
    }

    // Orders
    pub(crate) fn orders(&self) -> Result<Url> {
        self.join("orders/")
    }

    pub(crate) fn order(&self, order_id: &str) -> Result<Url> {
        self.join(&format!("orders/{order_id}/"))
    }

    pub(crate) fn cancel_order(&self, order_id: &str) -> Result<Url> {
        self.join(&format!("orders/{order_id}/cancel/"))
    }

    /// Check that `url` belongs to the configured API origin.
    pub(crate) fn check_origin(&self, url: &Url) -> Result<()> {
        if url.origin() == self.base.origin() {
            Ok(())
        } else {
            Err(Error::InvalidArgument(format!(
                "URL {url} does not belong to the API origin {}",
                self.base
            )))
        }
    }
}
