//! In-memory market data source for integration tests.

use std::sync::Mutex;
use tickwatch_client::{parse_ticker, ClientError, ClientResult, MarketDataSource};
use tickwatch_core::{TickerSnapshot, TradingPair};

/// Serves canned symbols and ticker bodies, recording each call.
pub struct FakeSource {
    symbols: serde_json::Value,
    ticker_body: Option<String>,
    calls: Mutex<Vec<String>>,
}

impl FakeSource {
    pub fn new() -> Self {
        Self {
            symbols: serde_json::json!([]),
            ticker_body: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_symbols(mut self, symbols: serde_json::Value) -> Self {
        self.symbols = symbols;
        self
    }

    pub fn with_ticker(mut self, body: impl Into<String>) -> Self {
        self.ticker_body = Some(body.into());
        self
    }

    /// Calls made so far, e.g. `["symbols", "ticker:btcusd"]`.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl MarketDataSource for FakeSource {
    async fn symbols(&self) -> ClientResult<serde_json::Value> {
        self.calls.lock().unwrap().push("symbols".to_string());
        Ok(self.symbols.clone())
    }

    async fn ticker(&self, pair: &TradingPair) -> ClientResult<TickerSnapshot> {
        self.calls.lock().unwrap().push(format!("ticker:{pair}"));
        match &self.ticker_body {
            Some(body) => parse_ticker(body),
            None => Err(ClientError::Exchange {
                status: 400,
                message: format!("InvalidSymbol: {pair}"),
            }),
        }
    }
}
