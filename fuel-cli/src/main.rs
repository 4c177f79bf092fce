//! Fuel CLI
//!
//! Command-line interface for Opet fuel prices.

use std::process::ExitCode;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};

use fuel_client::{ClientConfig, DEFAULT_BASE_URL, PriceClient};
use fuel_types::{FuelError, to_pretty_json};

#[derive(Debug, Parser)]
#[command(name = "fuel")]
#[command(author, version, about = "Opet fuel prices by province", long_about = None)]
struct Cli {
    /// Base URL of the fuel price API
    #[arg(long, global = true, env = "OPET_API_URL", default_value = DEFAULT_BASE_URL)]
    api_url: String,

    /// Upstream request timeout in seconds
    #[arg(long, global = true, env = "OPET_TIMEOUT_SECS", default_value_t = 10)]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show current fuel prices for a province
    Price {
        /// Plate code of the province (leading zeros are ignored)
        #[arg(long = "il", value_name = "PLATE_CODE", default_value = "34")]
        province: String,
    },
    /// List all provinces and their plate codes
    Provinces,
    /// Show when the provider last updated its prices
    LastUpdate,
}

async fn run(cli: Cli) -> Result<String> {
    let config =
        ClientConfig::new(cli.api_url).with_timeout(Duration::from_secs(cli.timeout_secs));
    let client = PriceClient::connect(&config).await?;

    let output = match cli.command {
        Commands::Price { province } => client.price(&province).await?,
        Commands::Provinces => to_pretty_json(client.directory().provinces())?,
        Commands::LastUpdate => to_pretty_json(&client.fetch_last_update().await?)?,
    };
    Ok(output)
}

/// Unknown provinces get the plain message; everything else is unexpected.
fn render_error(err: &anyhow::Error) -> String {
    match err.downcast_ref::<FuelError>() {
        Some(e @ FuelError::ProvinceNotFound(_)) => format!("Error: {e}"),
        _ => format!("An unexpected error occurred: {err}"),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    // stdout carries the JSON output, so logs go to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}", render_error(&err));
            ExitCode::FAILURE
        }
    }
}
