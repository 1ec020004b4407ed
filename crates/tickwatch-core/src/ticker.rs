//! Trading pair identifier and ticker snapshot.

use crate::decimal::Price;
use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Pair checked when none is given on the command line.
pub const DEFAULT_TRADING_PAIR: &str = "btcusd";

/// Exchange trading pair identifier (e.g. "btcusd").
///
/// Only emptiness is rejected locally. Whether the pair exists is for the
/// exchange to decide.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TradingPair(String);

impl TradingPair {
    pub fn new(pair: impl Into<String>) -> CoreResult<Self> {
        let pair = pair.into();
        if pair.trim().is_empty() {
            return Err(CoreError::InvalidTradingPair(
                "trading pair must not be empty".to_string(),
            ));
        }
        Ok(Self(pair))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TradingPair {
    fn default() -> Self {
        Self(DEFAULT_TRADING_PAIR.to_string())
    }
}

impl fmt::Display for TradingPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for TradingPair {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Latest ticker state for one pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickerSnapshot {
    /// Symbol echoed back by the exchange, if any.
    pub symbol: Option<String>,
    /// Most recent close price.
    pub close: Price,
    /// Recent price samples, oldest-last as delivered.
    pub changes: Vec<Price>,
}

impl TickerSnapshot {
    pub fn new(symbol: Option<String>, close: Price, changes: Vec<Price>) -> Self {
        Self {
            symbol,
            close,
            changes,
        }
    }

    /// Build a snapshot from the exchange's string fields.
    ///
    /// Fails on the first value that does not parse as a decimal.
    pub fn from_raw<S: AsRef<str>>(
        symbol: Option<String>,
        close: &str,
        changes: &[S],
    ) -> CoreResult<Self> {
        let close: Price = close.parse()?;
        let changes = changes
            .iter()
            .map(|c| c.as_ref().parse::<Price>())
            .collect::<CoreResult<Vec<_>>>()?;

        Ok(Self::new(symbol, close, changes))
    }
}
