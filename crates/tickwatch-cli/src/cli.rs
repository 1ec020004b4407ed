//! Command-line arguments.

use clap::Parser;
use std::path::PathBuf;

/// Check an exchange ticker for price deviation and print a JSON alert
///
/// `currency` and `deviation` stay as text here. They are only validated
/// when a check actually runs, so `--symbols` works whatever they hold.
#[derive(Parser, Debug, Clone)]
#[command(name = "tickwatch", version, about, long_about = None)]
pub struct Args {
    /// The currency trading pair to check
    #[arg(short, long, default_value = "btcusd")]
    pub currency: String,

    /// Percentage threshold for deviation (e.g. 1 means 1%)
    #[arg(short, long, default_value = "1", allow_negative_numbers = true)]
    pub deviation: String,

    /// List available trading pairs and exit
    #[arg(short, long)]
    pub symbols: bool,

    /// TOML file with exchange endpoint settings
    #[arg(long)]
    pub config: Option<PathBuf>,
}
