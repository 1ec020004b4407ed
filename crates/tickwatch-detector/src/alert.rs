//! Deviation alert record.

use crate::deviation::Deviation;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use tickwatch_core::TradingPair;

/// Alert severity. Deviation alerts are always informational.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AlertLevel {
    #[default]
    Info,
}

/// Values carried by an alert, each rendered with two fraction digits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertData {
    pub last_price: String,
    pub average: String,
    pub change: String,
    pub sdev: String,
}

impl From<&Deviation> for AlertData {
    fn from(dev: &Deviation) -> Self {
        Self {
            last_price: dev.close.to_display_string(),
            average: dev.average.to_display_string(),
            change: dev.change.to_display_string(),
            sdev: dev.sdev.to_display_string(),
        }
    }
}

/// A deviation alert, serialized as one JSON line.
///
/// Field order here is the order on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviationAlert {
    /// ISO-8601 UTC, e.g. "2024-05-01T12:00:00.123456+00:00".
    pub timestamp: String,
    pub level: AlertLevel,
    pub trading_pair: String,
    pub deviation: bool,
    pub data: AlertData,
}

impl DeviationAlert {
    pub fn new(pair: &TradingPair, deviation: &Deviation, at: DateTime<Utc>) -> Self {
        Self {
            timestamp: at.to_rfc3339_opts(SecondsFormat::Micros, false),
            level: AlertLevel::Info,
            trading_pair: pair.to_string(),
            deviation: true,
            data: AlertData::from(deviation),
        }
    }

    /// Single-line JSON rendering.
    pub fn to_json_line(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Write `alert` as one JSON line to `out`.
pub fn write_alert<W: Write>(out: &mut W, alert: &DeviationAlert) -> io::Result<()> {
    let line = alert.to_json_line().map_err(io::Error::from)?;
    writeln!(out, "{line}")?;
    out.flush()
}
