//! Watchlist endpoints.

use reqwest::StatusCode;
use serde_json::json;

use crate::client::RobinhoodClient;
use crate::models::WatchlistEntry;
use crate::Result;

impl RobinhoodClient {
    /// Fetch the instrument URLs in a watchlist.
    pub async fn get_watchlist(
        &self,
        watchlist: &str,
        pages: Option<usize>,
    ) -> Result<Vec<String>> {
        self.ensure_tokens()?;
        let url = self.routes.watchlist(watchlist)?;
        let entries: Vec<WatchlistEntry> = self.collect_pages(url, pages).await?;
        Ok(entries.into_iter().map(|entry| entry.instrument).collect())
    }

    /// Add a security to a watchlist by its instrument URL.
    pub async fn add_to_watchlist(&self, instrument: &str, watchlist: &str) -> Result<()> {
        self.ensure_tokens()?;
        let url = self.routes.watchlist(watchlist)?;
        self.post_json(url, json!({ "instrument": instrument }), StatusCode::CREATED)
            .await?;
        Ok(())
    }

    /// Remove a security from a watchlist by its instrument ID.
    pub async fn remove_from_watchlist(&self, instrument_id: &str, watchlist: &str) -> Result<()> {
        self.ensure_tokens()?;
        let url = self.routes.watchlist_entry(watchlist, instrument_id)?;
        self.request(
            reqwest::Method::DELETE,
            url,
            None,
            None,
            StatusCode::NO_CONTENT,
        )
        .await?;
        Ok(())
    }
}
