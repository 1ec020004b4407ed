//! Typed exchange response bodies.

use crate::error::{ClientError, ClientResult};
use serde::Deserialize;
use tickwatch_core::TickerSnapshot;

/// Raw `/v2/ticker/{pair}` response.
///
/// Only `close` and `changes` are read; other fields (`open`, `bid`, ...)
/// are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RawTicker {
    #[serde(default)]
    pub symbol: Option<String>,
    pub close: String,
    pub changes: Vec<String>,
}

impl RawTicker {
    /// Convert string fields into decimals.
    pub fn into_snapshot(self) -> ClientResult<TickerSnapshot> {
        TickerSnapshot::from_raw(self.symbol, &self.close, self.changes.as_slice())
            .map_err(|e| ClientError::MalformedResponse(format!("ticker: {e}")))
    }
}

/// Error body returned by the exchange on failed requests, e.g.
/// `{"result":"error","reason":"InvalidSymbol","message":"..."}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ExchangeErrorBody {
    #[serde(default)]
    pub result: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ExchangeErrorBody {
    /// Human-readable summary, falling back to the raw body.
    pub fn describe(body: &str) -> String {
        match serde_json::from_str::<ExchangeErrorBody>(body) {
            Ok(ExchangeErrorBody {
                reason: Some(reason),
                message: Some(message),
                ..
            }) => format!("{reason}: {message}"),
            Ok(ExchangeErrorBody {
                reason: Some(text), ..
            })
            | Ok(ExchangeErrorBody {
                message: Some(text),
                ..
            }) => text,
            _ if body.trim().is_empty() => "<empty body>".to_string(),
            _ => body.trim().to_string(),
        }
    }
}

/// Decode a ticker response body into a snapshot.
pub fn parse_ticker(body: &str) -> ClientResult<TickerSnapshot> {
    let raw: RawTicker = serde_json::from_str(body)
        .map_err(|e| ClientError::MalformedResponse(format!("ticker: {e}")))?;
    raw.into_snapshot()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use tickwatch_core::Price;

    const TICKER_BODY: &str = r#"{
        "symbol": "BTCUSD",
        "open": "9121.76",
        "high": "9440.66",
        "low": "9106.51",
        "close": "9347.66",
        "changes": ["9365.1", "9,386.16", "9373.41"],
        "bid": "9345.70",
        "ask": "9347.67"
    }"#;

    #[test]
    fn test_parse_ticker() {
        let snapshot = parse_ticker(TICKER_BODY).unwrap();
        assert_eq!(snapshot.symbol.as_deref(), Some("BTCUSD"));
        assert_eq!(snapshot.close, Price::new(dec!(9347.66)));
        assert_eq!(snapshot.changes.len(), 3);
        assert_eq!(snapshot.changes[1], Price::new(dec!(9386.16)));
    }

    #[test]
    fn test_parse_ticker_ignores_unused_fields() {
        let body = r#"{"close":"100.00","changes":["100.00"],"high":"not a number","bid":null,"extra":[1,2]}"#;
        let snapshot = parse_ticker(body).unwrap();
        assert_eq!(snapshot.close, Price::new(dec!(100.00)));
    }

    #[test]
    fn test_parse_ticker_minimal_fields() {
        let snapshot = parse_ticker(r#"{"close":"100.00","changes":["90.00","110.00"]}"#).unwrap();
        assert!(snapshot.symbol.is_none());
        assert_eq!(snapshot.changes.len(), 2);
    }

    #[test]
    fn test_parse_ticker_missing_close() {
        let err = parse_ticker(r#"{"changes":["1"]}"#).unwrap_err();
        match err {
            ClientError::MalformedResponse(msg) => assert!(msg.contains("close"), "{msg}"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_ticker_missing_changes() {
        let err = parse_ticker(r#"{"close":"1"}"#).unwrap_err();
        assert!(matches!(err, ClientError::MalformedResponse(ref m) if m.contains("changes")));
    }

    #[test]
    fn test_parse_ticker_non_numeric() {
        let err = parse_ticker(r#"{"close":"abc","changes":["1"]}"#).unwrap_err();
        assert!(matches!(err, ClientError::MalformedResponse(_)));
    }

    #[test]
    fn test_parse_ticker_not_json() {
        let err = parse_ticker("<html>").unwrap_err();
        assert!(matches!(err, ClientError::MalformedResponse(_)));
    }

    #[test]
    fn test_describe_error_body() {
        let body = r#"{"result":"error","reason":"InvalidSymbol","message":"Supplied value 'nope' is not a valid symbol"}"#;
        assert_eq!(
            ExchangeErrorBody::describe(body),
            "InvalidSymbol: Supplied value 'nope' is not a valid symbol"
        );
        assert_eq!(
            ExchangeErrorBody::describe(r#"{"reason":"Maintenance"}"#),
            "Maintenance"
        );
        assert_eq!(ExchangeErrorBody::describe("Bad Gateway"), "Bad Gateway");
        assert_eq!(ExchangeErrorBody::describe(""), "<empty body>");
    }
}
