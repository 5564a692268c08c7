use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::query::display_symbol;

/// Which exchange family a lookup is scoped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Market {
    #[default]
    #[serde(rename = "IN", alias = "domestic", alias = "DOMESTIC")]
    Domestic,
    #[serde(rename = "US", alias = "international", alias = "INTERNATIONAL")]
    International,
}

impl Market {
    /// Short label shown next to each result row.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Market::Domestic => "NSE",
            Market::International => "NYSE/NASDAQ",
        }
    }

    /// First path segment of the lookup endpoint for this market.
    #[must_use]
    pub fn route(self) -> &'static str {
        match self {
            Market::Domestic => "market",
            Market::International => "us",
        }
    }

    /// Decoration the backend appends to canonical symbols of this market.
    #[must_use]
    pub fn symbol_suffix(self) -> Option<&'static str> {
        match self {
            Market::Domestic => Some(".NS"),
            Market::International => None,
        }
    }
}

impl fmt::Display for Market {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Market::Domestic => write!(f, "IN"),
            Market::International => write!(f, "US"),
        }
    }
}

impl FromStr for Market {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "in" | "nse" | "domestic" => Ok(Market::Domestic),
            "us" | "international" => Ok(Market::International),
            other => Err(format!(
                "unknown market '{other}' (expected IN or US)"
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolMatch {
    pub symbol: String,
    pub display_name: String,
    pub market: Market,
}

impl SymbolMatch {
    pub fn new(symbol: impl Into<String>, display_name: impl Into<String>, market: Market) -> Self {
        Self {
            symbol: symbol.into(),
            display_name: display_name.into(),
            market,
        }
    }

    /// The symbol as the user should see it, without market decoration.
    #[must_use]
    pub fn display_symbol(&self) -> &str {
        display_symbol(&self.symbol, self.market)
    }
}

/// Wire form returned by the lookup service.
#[derive(Debug, Clone, Deserialize)]
pub struct SymbolRecord {
    pub symbol: String,
    #[serde(default)]
    pub name: String,
}

impl SymbolRecord {
    #[must_use]
    pub fn into_match(self, market: Market) -> SymbolMatch {
        SymbolMatch {
            symbol: self.symbol,
            display_name: self.name,
            market,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_market_parsing_is_case_insensitive() {
        assert_eq!("IN".parse::<Market>(), Ok(Market::Domestic));
        assert_eq!("us".parse::<Market>(), Ok(Market::International));
        assert_eq!(" Domestic ".parse::<Market>(), Ok(Market::Domestic));
        assert!("LSE".parse::<Market>().is_err());
    }

    #[test]
    fn test_market_serde_names() {
        #[derive(Deserialize)]
        struct Wrapper {
            market: Market,
        }
        let w: Wrapper = toml::from_str("market = \"US\"").unwrap();
        assert_eq!(w.market, Market::International);
        let w: Wrapper = toml::from_str("market = \"domestic\"").unwrap();
        assert_eq!(w.market, Market::Domestic);
    }

    #[test]
    fn test_record_into_match_stamps_market() {
        let record = SymbolRecord {
            symbol: "TCS.NS".to_string(),
            name: "Tata Consultancy Services".to_string(),
        };
        let m = record.into_match(Market::Domestic);
        assert_eq!(m.market, Market::Domestic);
        assert_eq!(m.display_symbol(), "TCS");
    }
}
