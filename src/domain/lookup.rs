use crate::domain::models::{Market, SymbolMatch};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("lookup service returned status {0}")]
    Status(u16),
    #[error("could not decode lookup response: {0}")]
    Decode(String),
    #[error("invalid lookup url: {0}")]
    InvalidUrl(String),
}

/// Resolves free text into tradable symbols for one market.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SymbolLookup: Send + Sync {
    async fn search(&self, query: &str, market: Market) -> Result<Vec<SymbolMatch>, LookupError>;
}
