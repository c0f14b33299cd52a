//! uitest - sequential E2E UI test runner
//!
//! Runs every discovered test script against the locally served target
//! application and gates CI on the aggregate result.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use uitest::{common, runner};

#[derive(Parser)]
#[command(name = "uitest", about = "Sequential E2E UI test runner")]
#[command(version, long_about = None)]
struct Cli {
    /// Directory containing the test scripts (defaults to the configured
    /// discovery directory)
    dir: Option<PathBuf>,

    /// Path to an alternate configuration file
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    common::logging::init();

    let cli = Cli::parse();

    let config = match common::Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(2);
        }
    };

    let dir = cli.dir.unwrap_or(config.discovery.dir);
    let budget = Duration::from_secs(config.timeouts.unit_secs);

    match runner::run(&dir, &config.discovery.prefix, budget).await {
        Ok(status) => std::process::exit(status.exit_code()),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(2);
        }
    }
}
