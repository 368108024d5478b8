//! Account, portfolio, and position endpoints.

use serde_json::Value;

use crate::client::RobinhoodClient;
use crate::models::{Account, HistoricalInterval, HistoricalSpan, Portfolio, Position};
use crate::{Error, Result};

impl RobinhoodClient {
    /// Fetch the account record.
    ///
    /// The endpoint is paginated but a session only ever sees its own
    /// account, so the first result is returned directly.
    pub async fn get_account(&self) -> Result<Account> {
        self.ensure_tokens()?;
        let response = self.get_json(self.routes.accounts()?).await?;
        Ok(serde_json::from_value(response["results"][0].clone())?)
    }

    /// Fetch the account's portfolio characteristics, including equity
    /// value and withdrawable amount.
    pub async fn get_portfolio(&self) -> Result<Portfolio> {
        self.ensure_tokens()?;
        let response = self.get_json(self.routes.portfolios()?).await?;
        Ok(serde_json::from_value(response["results"][0].clone())?)
    }

    /// Fetch the historical value of the account portfolio.
    ///
    /// Certain combinations of `interval` and `span` are rejected by the
    /// server; the rejection comes back as [`Error::Api`].
    pub async fn get_historical_portfolio(
        &self,
        interval: HistoricalInterval,
        span: HistoricalSpan,
        extended_hours: bool,
    ) -> Result<Value> {
        self.ensure_tokens()?;
        let account_number = self.account_number.as_deref().ok_or(Error::Unauthenticated)?;
        let mut url = self.routes.historical_portfolio(account_number)?;
        url.query_pairs_mut()
            .append_pair("bounds", if extended_hours { "extended" } else { "regular" })
            .append_pair("interval", interval.as_str())
            .append_pair("span", span.as_str());

        self.get_json(url).await
    }

    /// Fetch the positions held by the account.
    ///
    /// `nonzero` restricts the listing to open positions. `pages` bounds
    /// how many pages are fetched; `None` means all of them.
    pub async fn get_positions(
        &self,
        nonzero: bool,
        pages: Option<usize>,
    ) -> Result<Vec<Position>> {
        self.ensure_tokens()?;
        let mut url = self.routes.positions()?;
        url.query_pairs_mut()
            .append_pair("nonzero", if nonzero { "true" } else { "false" });

        self.collect_pages(url, pages).await
    }
}
