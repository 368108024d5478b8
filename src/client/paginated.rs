//! Cursor-based pagination over list endpoints.
//!
//! List endpoints return `{results: [...], next: <url-or-null>}`. The
//! cursor repeatedly GETs through the request pipeline, yielding each page
//! of `results` in response order and following the `next` link until it is
//! null or the page budget is exhausted.

use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use url::Url;

use super::RobinhoodClient;
use crate::Result;

/// One page of a list response.
#[derive(Debug, Deserialize)]
pub struct Page<T> {
    /// Page results, in server order.
    pub results: Vec<T>,
    /// Link to the next page, absent on the last page.
    #[serde(default = "Option::default")]
    pub next: Option<Url>,
}

/// A traversal over a paginated list endpoint.
///
/// Pagination is trusted to be index-stable with no overlap: pages are
/// concatenated first-page-first with no de-duplication. A page budget of
/// `Some(0)` never issues a request.
pub struct PageCursor<'a, T> {
    client: &'a RobinhoodClient,
    next: Option<Url>,
    remaining: Option<usize>,
    _marker: PhantomData<fn() -> T>,
}

impl<'a, T: DeserializeOwned> PageCursor<'a, T> {
    pub(crate) fn new(client: &'a RobinhoodClient, seed: Url, max_pages: Option<usize>) -> Self {
        Self {
            client,
            next: Some(seed),
            remaining: max_pages,
            _marker: PhantomData,
        }
    }

    /// Fetch the next page, or `None` once the `next` link is exhausted or
    /// the page budget is spent.
    ///
    /// Each fetched page decrements the remaining budget by exactly one.
    pub async fn next_page(&mut self) -> Result<Option<Vec<T>>> {
        if self.remaining == Some(0) {
            return Ok(None);
        }
        let url = match self.next.take() {
            Some(url) => url,
            None => return Ok(None),
        };

        let value = self.client.get_json(url).await?;
        let page: Page<T> = serde_json::from_value(value)?;

        self.next = page.next;
        if let Some(remaining) = self.remaining.as_mut() {
            *remaining -= 1;
        }
        Ok(Some(page.results))
    }

    /// Drain the cursor, concatenating all pages in first-page-first order.
    pub async fn collect(mut self) -> Result<Vec<T>> {
        let mut results = Vec::new();
        while let Some(mut page) = self.next_page().await? {
            results.append(&mut page);
        }
        Ok(results)
    }
}

impl RobinhoodClient {
    /// Start a page cursor at `seed`, bounded by an optional page ceiling.
    pub fn pages<T: DeserializeOwned>(
        &self,
        seed: Url,
        max_pages: Option<usize>,
    ) -> PageCursor<'_, T> {
        PageCursor::new(self, seed, max_pages)
    }

    /// Fetch and concatenate every page starting at `seed`.
    pub(crate) async fn collect_pages<T: DeserializeOwned>(
        &self,
        seed: Url,
        max_pages: Option<usize>,
    ) -> Result<Vec<T>> {
        self.pages(seed, max_pages).collect().await
    }
}
