use super::models::Market;

/// Canonical form of whatever the user typed. Used verbatim for display and
/// as the lookup key.
#[must_use]
pub fn normalize_query(raw: &str) -> String {
    raw.to_uppercase()
}

/// A query with nothing but whitespace never reaches the lookup service.
#[must_use]
pub fn is_blank(query: &str) -> bool {
    query.trim().is_empty()
}

/// Strips the market decoration from a canonical symbol.
#[must_use]
pub fn display_symbol(symbol: &str, market: Market) -> &str {
    match market.symbol_suffix() {
        Some(suffix) => symbol.strip_suffix(suffix).unwrap_or(symbol),
        None => symbol,
    }
}
