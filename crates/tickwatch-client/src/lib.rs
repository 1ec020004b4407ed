//! Exchange REST client for tickwatch.
//!
//! Fetches the list of tradable symbols and the latest ticker snapshot for
//! one trading pair, decoding responses into typed structures.

pub mod client;
pub mod config;
pub mod error;
pub mod response;
pub mod source;

pub use client::ExchangeClient;
pub use config::ApiConfig;
pub use error::{ClientError, ClientResult};
pub use response::{parse_ticker, ExchangeErrorBody, RawTicker};
pub use source::MarketDataSource;
