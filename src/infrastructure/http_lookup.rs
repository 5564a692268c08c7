use crate::domain::lookup::{LookupError, SymbolLookup};
use crate::domain::models::{Market, SymbolMatch, SymbolRecord};
use async_trait::async_trait;
use reqwest::{Client, Url};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api/v1";

impl From<reqwest::Error> for LookupError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            LookupError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            LookupError::Status(status.as_u16())
        } else {
            LookupError::Transport(err.to_string())
        }
    }
}

/// Lookup binding backed by the platform's REST API.
///
/// Domestic queries go to `{base}/market/search/{query}`, international ones
/// to `{base}/us/search/{query}`.
#[derive(Debug, Clone)]
pub struct HttpSymbolLookup {
    client: Client,
    base_url: Url,
}

impl HttpSymbolLookup {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, LookupError> {
        let base_url = Url::parse(base_url).map_err(|e| LookupError::InvalidUrl(e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(LookupError::InvalidUrl(base_url.to_string()));
        }
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }

    /// The query always lands in a single, percent-encoded path segment.
    pub fn search_url(&self, query: &str, market: Market) -> Result<Url, LookupError> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|()| LookupError::InvalidUrl(self.base_url.to_string()))?;
            segments
                .pop_if_empty()
                .push(market.route())
                .push("search")
                .push(query);
        }
        Ok(url)
    }
}

pub fn parse_matches(body: &str, market: Market) -> Result<Vec<SymbolMatch>, LookupError> {
    let records: Vec<SymbolRecord> =
        serde_json::from_str(body).map_err(|e| LookupError::Decode(e.to_string()))?;
    Ok(records
        .into_iter()
        .map(|record| record.into_match(market))
        .collect())
}

#[async_trait]
impl SymbolLookup for HttpSymbolLookup {
    async fn search(&self, query: &str, market: Market) -> Result<Vec<SymbolMatch>, LookupError> {
        let url = self.search_url(query, market)?;
        tracing::debug!(target: "lookup", %url, "symbol lookup");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let matches = parse_matches(&body, market)?;
        tracing::debug!(target: "lookup", query, count = matches.len(), "lookup finished");
        Ok(matches)
    }
}
