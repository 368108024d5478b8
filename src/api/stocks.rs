//! Stock data endpoints: fundamentals, instruments, quotes, historicals,
//! ratings, and tags.

use url::Url;

use crate::client::RobinhoodClient;
use crate::models::{
    Fundamental, HistoricalInterval, HistoricalQuotes, HistoricalSpan, Instrument, Quote, Rating,
};
use crate::{Error, Result};

/// Identifies a batch of securities for quote-style lookups.
///
/// The server accepts either stock symbols or instrument URLs, never both
/// in one request, so the two forms are separate variants rather than a
/// pair of optional parameters.
#[derive(Debug, Clone)]
pub enum SecurityList {
    /// Stock symbols, e.g. `"MSFT"`.
    Symbols(Vec<String>),
    /// Instrument URLs.
    Instruments(Vec<String>),
}

impl SecurityList {
    fn query_pair(&self) -> Result<(&'static str, String)> {
        let (key, items) = match self {
            Self::Symbols(symbols) => ("symbols", symbols),
            Self::Instruments(instruments) => ("instruments", instruments),
        };
        if items.is_empty() {
            return Err(Error::InvalidArgument(format!("{key} must not be empty")));
        }
        Ok((key, items.join(",")))
    }

    fn apply(&self, url: &mut Url) -> Result<()> {
        let (key, value) = self.query_pair()?;
        url.query_pairs_mut().append_pair(key, &value);
        Ok(())
    }
}

/// Identifies securities for the instrument listing endpoint, which takes
/// a single symbol or a batch of instrument IDs.
#[derive(Debug, Clone)]
pub enum InstrumentQuery {
    /// A single stock symbol.
    Symbol(String),
    /// Instrument IDs.
    Ids(Vec<String>),
}

impl InstrumentQuery {
    fn apply(&self, url: &mut Url) -> Result<()> {
        match self {
            Self::Symbol(symbol) => {
                if symbol.is_empty() {
                    return Err(Error::InvalidArgument("symbol must not be empty".into()));
                }
                url.query_pairs_mut().append_pair("symbol", symbol);
            }
            Self::Ids(ids) => {
                if ids.is_empty() {
                    return Err(Error::InvalidArgument("ids must not be empty".into()));
                }
                url.query_pairs_mut().append_pair("ids", &ids.join(","));
            }
        }
        Ok(())
    }
}

impl RobinhoodClient {
    /// Fetch fundamental data for a batch of securities, including the
    /// most recent OHLC prices and market capitalization.
    pub async fn get_fundamentals(&self, securities: &SecurityList) -> Result<Vec<Fundamental>> {
        self.ensure_tokens()?;
        let mut url = self.routes.fundamentals()?;
        securities.apply(&mut url)?;

        let response = self.get_json(url).await?;
        Ok(serde_json::from_value(response["results"].clone())?)
    }

    /// Fetch instrument records, which carry the ID and URLs the order and
    /// watchlist endpoints key on.
    pub async fn get_instruments(
        &self,
        query: &InstrumentQuery,
        pages: Option<usize>,
    ) -> Result<Vec<Instrument>> {
        self.ensure_tokens()?;
        let mut url = self.routes.instruments()?;
        query.apply(&mut url)?;

        self.collect_pages(url, pages).await
    }

    /// Fetch current quotes for a batch of securities.
    pub async fn get_quotes(&self, securities: &SecurityList) -> Result<Vec<Quote>> {
        self.ensure_tokens()?;
        let mut url = self.routes.quotes()?;
        securities.apply(&mut url)?;

        let response = self.get_json(url).await?;
        Ok(serde_json::from_value(response["results"].clone())?)
    }

    /// Fetch historical quotes for a batch of securities.
    ///
    /// Certain combinations of `interval` and `span` are rejected by the
    /// server; the rejection comes back as [`Error::Api`].
    pub async fn get_historical_quotes(
        &self,
        interval: HistoricalInterval,
        span: HistoricalSpan,
        extended_hours: bool,
        securities: &SecurityList,
    ) -> Result<Vec<HistoricalQuotes>> {
        self.ensure_tokens()?;
        let mut url = self.routes.historical_quotes()?;
        url.query_pairs_mut()
            .append_pair("bounds", if extended_hours { "extended" } else { "regular" })
            .append_pair("interval", interval.as_str())
            .append_pair("span", span.as_str());
        securities.apply(&mut url)?;

        let response = self.get_json(url).await?;
        Ok(serde_json::from_value(response["results"].clone())?)
    }

    /// Fetch analyst buy/sell/hold ratings for a batch of instrument IDs.
    pub async fn get_ratings(&self, ids: &[String], pages: Option<usize>) -> Result<Vec<Rating>> {
        self.ensure_tokens()?;
        if ids.is_empty() {
            return Err(Error::InvalidArgument("ids must not be empty".into()));
        }
        let mut url = self.routes.ratings()?;
        url.query_pairs_mut().append_pair("ids", &ids.join(","));

        self.collect_pages(url, pages).await
    }

    /// Fetch the tag slugs attached to a security.
    pub async fn get_tags(&self, instrument_id: &str) -> Result<Vec<String>> {
        #[derive(serde::Deserialize)]
        struct Tag {
            slug: String,
        }

        self.ensure_tokens()?;
        let url = self.routes.instrument_tags(instrument_id)?;
        let response = self.get_json(url).await?;

        let tags: Vec<Tag> = serde_json::from_value(response["tags"].clone())?;
        Ok(tags.into_iter().map(|tag| tag.slug).collect())
    }

    /// Fetch the instrument URLs belonging to a tag.
    pub async fn get_tag_members(&self, tag: &str) -> Result<Vec<String>> {
        self.ensure_tokens()?;
        let url = self.routes.tag_members(tag)?;
        let response = self.get_json(url).await?;
        Ok(serde_json::from_value(response["instruments"].clone())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn security_list_joins_symbols() {
        let list = SecurityList::Symbols(vec!["MSFT".into(), "AAPL".into()]);
        let (key, value) = list.query_pair().unwrap();
        assert_eq!(key, "symbols");
        assert_eq!(value, "MSFT,AAPL");
    }

    #[test]
    fn empty_security_list_is_invalid() {
        let err = SecurityList::Instruments(vec![]).query_pair().unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn empty_instrument_ids_are_invalid() {
        let mut url = Url::parse("https://api.robinhood.com/instruments/").unwrap();
        let err = InstrumentQuery::Ids(vec![]).apply(&mut url).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }
}
