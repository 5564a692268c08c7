use crate::app::debounce::DEFAULT_DEBOUNCE;
use crate::app::state::SearchConfig;
use crate::domain::models::Market;
use crate::infrastructure::http_lookup::DEFAULT_BASE_URL;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

const DEFAULT_TIMEOUT_MS: u64 = 5_000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Parser, Debug, Default)]
#[command(name = "tickerseek", about = "Terminal symbol search for NSE and US markets")]
pub struct Cli {
    /// Market to search: IN (NSE) or US
    #[arg(short, long)]
    pub market: Option<Market>,
    /// Base URL of the symbol search API
    #[arg(long)]
    pub base_url: Option<String>,
    /// Text placed in the search field on start
    #[arg(short, long)]
    pub initial: Option<String>,
    #[arg(long)]
    pub placeholder: Option<String>,
    /// Quiet period before a lookup is sent
    #[arg(long)]
    pub debounce_ms: Option<u64>,
    /// Config file (defaults to ~/.config/tickerseek/config.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub base_url: String,
    pub market: Market,
    pub placeholder: String,
    pub initial_value: String,
    pub debounce_ms: u64,
    pub request_timeout_ms: u64,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        let search = SearchConfig::default();
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            market: search.market,
            placeholder: search.placeholder,
            initial_value: search.initial_value,
            debounce_ms: DEFAULT_DEBOUNCE.as_millis() as u64,
            request_timeout_ms: DEFAULT_TIMEOUT_MS,
            log_file: None,
        }
    }
}

pub fn config_dir() -> Option<PathBuf> {
    home::home_dir().map(|mut path| {
        path.push(".config");
        path.push("tickerseek");
        path
    })
}

pub fn default_config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}

impl Config {
    /// A missing file yields the defaults; an unreadable or malformed one is
    /// an error.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(target: "config", path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// File values first, then command-line overrides.
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let mut config = match cli.config.clone().or_else(default_config_path) {
            Some(path) => Self::load_from(&path)?,
            None => Self::default(),
        };
        config.apply_cli(cli);
        Ok(config)
    }

    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(market) = cli.market {
            self.market = market;
        }
        if let Some(base_url) = &cli.base_url {
            self.base_url.clone_from(base_url);
        }
        if let Some(initial) = &cli.initial {
            self.initial_value.clone_from(initial);
        }
        if let Some(placeholder) = &cli.placeholder {
            self.placeholder.clone_from(placeholder);
        }
        if let Some(ms) = cli.debounce_ms {
            self.debounce_ms = ms;
        }
        if let Some(log_file) = &cli.log_file {
            self.log_file = Some(log_file.clone());
        }
    }

    #[must_use]
    pub fn search_config(&self) -> SearchConfig {
        SearchConfig {
            initial_value: self.initial_value.clone(),
            placeholder: self.placeholder.clone(),
            market: self.market,
        }
    }

    #[must_use]
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    #[must_use]
    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_file
            .clone()
            .or_else(|| config_dir().map(|dir| dir.join("tickerseek.log")))
    }
}
