//! tickwatch - Entry Point
//!
//! Lists exchange trading pairs, or checks one pair's ticker and prints a
//! JSON alert when its price deviation passes the threshold.

use clap::Parser;
use std::process::ExitCode;
use tickwatch_cli::{AppResult, Application, Args, Outcome, RunSettings};
use tickwatch_client::ExchangeClient;
use tracing::debug;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Parse command line arguments (usage errors exit here with status 2)
    let args = Args::parse();

    match run(args).await {
        Ok(outcome) => {
            debug!(?outcome, "Run complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            // Printed once for the user; the log line only shows up with RUST_LOG=debug
            debug!(error = %e, exit_code = e.exit_code(), "Run failed");
            eprintln!("tickwatch: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}

async fn run(args: Args) -> AppResult<Outcome> {
    tickwatch_telemetry::init_logging()?;

    debug!(?args, "Starting tickwatch v{}", env!("CARGO_PKG_VERSION"));

    let settings = RunSettings::from_args(args)?;
    let client = ExchangeClient::new(&settings.config.api)?;
    let app = Application::new(client);

    let mut stdout = std::io::stdout();
    app.run(&settings.command, &mut stdout).await
}
