//! Application configuration.
//!
//! Settings come from two places: an optional TOML file for exchange
//! endpoints, and the command line for what to check. Both are folded into
//! one immutable `RunSettings` at startup and passed down explicitly.

use crate::cli::Args;
use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tickwatch_client::ApiConfig;
use tickwatch_core::{Percent, TradingPair};

/// File-backed configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Exchange REST endpoints.
    #[serde(default)]
    pub api: ApiConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("Failed to read config {}: {e}", path.display()))
        })?;

        Self::from_toml(&content)
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml(content: &str) -> AppResult<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| AppError::Config(format!("Failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings that can only fail later at request time.
    pub fn validate(&self) -> AppResult<()> {
        for (name, url) in [
            ("api.v1_base_url", &self.api.v1_base_url),
            ("api.v2_base_url", &self.api.v2_base_url),
        ] {
            if !(url.starts_with("https://") || url.starts_with("http://")) {
                return Err(AppError::Config(format!(
                    "{name} must be an http(s) URL, got {url:?}"
                )));
            }
        }

        if self.api.request_timeout_secs == Some(0) {
            return Err(AppError::Config(
                "api.request_timeout_secs must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}

/// What a single invocation does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print all tradable pairs and stop.
    ListSymbols,
    /// Check one pair against a deviation threshold.
    Check {
        pair: TradingPair,
        threshold: Percent,
    },
}

/// Everything one run needs, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    pub config: AppConfig,
    pub command: Command,
}

impl RunSettings {
    /// Resolve settings from parsed arguments, reading `--config` if given.
    pub fn from_args(args: Args) -> AppResult<Self> {
        let config = match &args.config {
            Some(path) => AppConfig::from_file(path)?,
            None => AppConfig::default(),
        };

        Self::new(config, args)
    }

    /// Fold arguments into a command.
    ///
    /// `--symbols` wins over everything else; pair and threshold are only
    /// parsed for a check.
    pub fn new(config: AppConfig, args: Args) -> AppResult<Self> {
        let command = if args.symbols {
            Command::ListSymbols
        } else {
            Command::Check {
                pair: args.currency.parse::<TradingPair>().map_err(|e| {
                    AppError::Config(format!("--currency {:?}: {e}", args.currency))
                })?,
                threshold: args.deviation.parse::<Percent>().map_err(|e| {
                    AppError::Config(format!("--deviation {:?}: {e}", args.deviation))
                })?,
            }
        };

        Ok(Self { config, command })
    }
}
