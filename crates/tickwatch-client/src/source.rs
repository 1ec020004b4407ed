//! Market data source abstraction.
//!
//! The application only needs symbols and one ticker snapshot per run, so
//! the seam is kept to those two calls.

use crate::client::ExchangeClient;
use crate::error::ClientResult;
use std::future::Future;
use tickwatch_core::{TickerSnapshot, TradingPair};

/// Provider of exchange market data.
pub trait MarketDataSource {
    /// All tradable pair identifiers, verbatim.
    fn symbols(&self) -> impl Future<Output = ClientResult<serde_json::Value>> + Send;

    /// Latest ticker snapshot for `pair`.
    fn ticker(&self, pair: &TradingPair)
        -> impl Future<Output = ClientResult<TickerSnapshot>> + Send;
}

impl MarketDataSource for ExchangeClient {
    async fn symbols(&self) -> ClientResult<serde_json::Value> {
        self.fetch_symbols().await
    }

    async fn ticker(&self, pair: &TradingPair) -> ClientResult<TickerSnapshot> {
        self.fetch_ticker(pair).await
    }
}
