//! tickwatch: exchange price deviation checker.
//!
//! One invocation performs one of two commands:
//! - List every tradable pair on the exchange
//! - Fetch a pair's ticker and print a JSON alert when the close has
//!   drifted below the trailing average by more than a threshold

pub mod app;
pub mod cli;
pub mod config;
pub mod error;

pub use app::{Application, Outcome, SYMBOLS_HEADER};
pub use cli::Args;
pub use config::{AppConfig, Command, RunSettings};
pub use error::{AppError, AppResult};
