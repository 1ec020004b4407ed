//! Core domain types for tickwatch.
//!
//! This crate provides the fundamental types shared by the other crates:
//! - `Price`, `Percent`: Precision-safe numeric types
//! - `TradingPair`: Exchange pair identifier (e.g. "btcusd")
//! - `TickerSnapshot`: Close price plus recent change samples

pub mod decimal;
pub mod error;
pub mod ticker;

pub use decimal::{format_two_dp, parse_decimal, Percent, Price};
pub use error::{CoreError, CoreResult};
pub use ticker::{TickerSnapshot, TradingPair, DEFAULT_TRADING_PAIR};
