//! Main application orchestration.
//!
//! Runs exactly one command per invocation:
//! - Symbol listing
//! - Ticker fetch, deviation check and conditional alert

use crate::config::Command;
use crate::error::AppResult;
use std::io::Write;
use tickwatch_client::MarketDataSource;
use tickwatch_core::{Percent, TradingPair};
use tickwatch_detector::{write_alert, DeviationDetector};
use tracing::info;

/// Line printed above the symbol listing.
pub const SYMBOLS_HEADER: &str = "Available currency trading pairs:";

/// How a run finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    SymbolsListed,
    AlertEmitted,
    NoAlert,
}

/// Main application.
pub struct Application<S> {
    source: S,
}

impl<S: MarketDataSource> Application<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Run `command`, writing any output to `out`.
    pub async fn run<W: Write>(&self, command: &Command, out: &mut W) -> AppResult<Outcome> {
        match command {
            Command::ListSymbols => {
                self.list_symbols(out).await?;
                Ok(Outcome::SymbolsListed)
            }
            Command::Check { pair, threshold } => self.check(pair, *threshold, out).await,
        }
    }

    /// Print the header and the exchange's symbol list, pretty-printed.
    pub async fn list_symbols<W: Write>(&self, out: &mut W) -> AppResult<()> {
        let symbols = self.source.symbols().await?;
        let pretty = serde_json::to_string_pretty(&symbols).map_err(std::io::Error::from)?;

        writeln!(out, "{SYMBOLS_HEADER}")?;
        writeln!(out, "{pretty}")?;
        out.flush()?;

        info!(
            count = symbols.as_array().map(|a| a.len()),
            "Listed trading pairs"
        );
        Ok(())
    }

    /// Fetch `pair`, compute the deviation and emit an alert past `threshold`.
    pub async fn check<W: Write>(
        &self,
        pair: &TradingPair,
        threshold: Percent,
        out: &mut W,
    ) -> AppResult<Outcome> {
        let snapshot = self.source.ticker(pair).await?;
        let detector = DeviationDetector::new(threshold);

        match detector.check(pair, &snapshot)? {
            Some(alert) => {
                write_alert(out, &alert)?;
                Ok(Outcome::AlertEmitted)
            }
            None => {
                info!(%pair, %threshold, "Deviation within threshold, no alert");
                Ok(Outcome::NoAlert)
            }
        }
    }
}
