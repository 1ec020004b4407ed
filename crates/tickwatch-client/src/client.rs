//! HTTP client for the exchange's public REST API.
//!
//! Two endpoints are used:
//! - `GET {v1}/symbols`: every tradable pair identifier
//! - `GET {v2}/ticker/{pair}`: close price and recent change samples

use crate::config::ApiConfig;
use crate::error::{ClientError, ClientResult};
use crate::response::{parse_ticker, ExchangeErrorBody};
use reqwest::{Client, Response, Url};
use tickwatch_core::{TickerSnapshot, TradingPair};
use tracing::{debug, info};

/// User agent sent with every request.
const USER_AGENT: &str = concat!("tickwatch/", env!("CARGO_PKG_VERSION"));

/// Client for the exchange's public market data endpoints.
pub struct ExchangeClient {
    /// HTTP client.
    client: Client,
    /// Base URL for v1 endpoints.
    v1_base: Url,
    /// Base URL for v2 endpoints.
    v2_base: Url,
}

impl ExchangeClient {
    /// Create a new exchange client.
    ///
    /// No timeout is set unless `config.request_timeout_secs` is present.
    pub fn new(config: &ApiConfig) -> ClientResult<Self> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ClientError::HttpClient(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            v1_base: parse_base(&config.v1_base_url)?,
            v2_base: parse_base(&config.v2_base_url)?,
        })
    }

    /// Fetch all tradable symbols.
    ///
    /// The body is returned as-is; no normalization is applied.
    pub async fn fetch_symbols(&self) -> ClientResult<serde_json::Value> {
        let url = join_segments(&self.v1_base, &["symbols"])?;
        info!(url = %url, "Fetching symbols from exchange");

        let body = self.get_text(url).await?;
        let symbols: serde_json::Value = serde_json::from_str(&body)
            .map_err(|e| ClientError::MalformedResponse(format!("symbols: {e}")))?;

        debug!(
            count = symbols.as_array().map(|a| a.len()),
            "Symbols received"
        );
        Ok(symbols)
    }

    /// Fetch the ticker body for `pair` as raw text.
    pub async fn fetch_ticker_raw(&self, pair: &TradingPair) -> ClientResult<String> {
        let url = join_segments(&self.v2_base, &["ticker", pair.as_str()])?;
        info!(url = %url, pair = %pair, "Fetching ticker from exchange");

        self.get_text(url).await
    }

    /// Fetch and decode the ticker for `pair`.
    pub async fn fetch_ticker(&self, pair: &TradingPair) -> ClientResult<TickerSnapshot> {
        let body = self.fetch_ticker_raw(pair).await?;
        let snapshot = parse_ticker(&body)?;

        debug!(
            pair = %pair,
            close = %snapshot.close,
            samples = snapshot.changes.len(),
            "Ticker decoded"
        );
        Ok(snapshot)
    }

    async fn get_text(&self, url: Url) -> ClientResult<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ClientError::Network(format!("HTTP request failed: {e}")))?;

        let response = check_status(response).await?;

        response
            .text()
            .await
            .map_err(|e| ClientError::Network(format!("Failed to read response body: {e}")))
    }
}

/// Turn a non-2xx response into `ClientError::Exchange`.
async fn check_status(response: Response) -> ClientResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(ClientError::Exchange {
        status: status.as_u16(),
        message: ExchangeErrorBody::describe(&body),
    })
}

fn parse_base(raw: &str) -> ClientResult<Url> {
    let url = Url::parse(raw).map_err(|e| ClientError::InvalidUrl(format!("{raw}: {e}")))?;
    if url.cannot_be_a_base() {
        return Err(ClientError::InvalidUrl(format!("{raw}: not a base URL")));
    }
    Ok(url)
}

/// Append path segments to `base`, percent-encoding each one.
fn join_segments(base: &Url, segments: &[&str]) -> ClientResult<Url> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| ClientError::InvalidUrl(format!("{base}: not a base URL")))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}
