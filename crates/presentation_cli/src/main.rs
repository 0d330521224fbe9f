//! Weathercast CLI
//!
//! Command-line interface for building forecasts from a CSV file and
//! probing a running server.

#![allow(clippy::print_stdout)]

mod output;

use std::{path::PathBuf, sync::Arc};

use application::{ForecastTableBuilder, WeatherQueryService};
use clap::{Parser, Subcommand};
use infrastructure::{CsvHistoricalSource, LogFormat, init_logging};
use tracing::{debug, info};

/// Weathercast CLI
#[derive(Parser)]
#[command(name = "weathercast-cli")]
#[command(author, version, about = "Weathercast forecasting CLI", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build and print the 7-day forecast table
    Forecast {
        /// Historical observations CSV
        #[arg(short, long, env = "WEATHERCAST_DATA__PATH", default_value = "data/weather.csv")]
        data: PathBuf,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Look up one date in the historical or forecast table
    ///
    /// Example: weathercast-cli lookup 2024-01-15
    Lookup {
        /// Date to look up (YYYY-MM-DD, MM/DD/YYYY, "January 15, 2024", today, ...)
        date: String,

        /// Historical observations CSV
        #[arg(short, long, env = "WEATHERCAST_DATA__PATH", default_value = "data/weather.csv")]
        data: PathBuf,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Check server health (used by Docker healthcheck)
    Health {
        /// Server URL
        #[arg(short, long, default_value = "http://localhost:5000")]
        url: String,
    },
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Format endpoint URL
fn endpoint_url(base_url: &str, path: &str) -> String {
    format!("{}{path}", base_url.trim_end_matches('/'))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    init_logging(LogFormat::Text, log_filter_from_verbosity(cli.verbose))?;

    match cli.command {
        Commands::Forecast { data, json } => {
            info!(data = %data.display(), "Building forecast");
            let (_, forecast) =
                ForecastTableBuilder::default().prepare(&CsvHistoricalSource::new(data))?;

            if json {
                println!("{}", serde_json::to_string_pretty(forecast.rows())?);
            } else {
                print!("{}", output::format_forecast_table(&forecast));
            }
        },
        Commands::Lookup { date, data, json } => {
            info!(data = %data.display(), date = %date, "Looking up date");
            let (historical, forecast) =
                ForecastTableBuilder::default().prepare(&CsvHistoricalSource::new(data))?;
            let service = WeatherQueryService::new(Arc::new(historical), Arc::new(forecast));

            match service.lookup_str(&date)? {
                Some(found) if json => println!("{}", serde_json::to_string_pretty(&found)?),
                Some(found) => println!("{}", output::format_lookup(&found)),
                None => {
                    println!("No data available for this date.");
                    std::process::exit(1);
                },
            }
        },
        Commands::Health { url } => {
            debug!(url = %url, "Checking server health");
            let client = reqwest::Client::new();
            match client.get(endpoint_url(&url, "/health")).send().await {
                Ok(resp) if resp.status().is_success() => {
                    println!("Healthy");
                },
                Ok(resp) => {
                    println!("Unhealthy: HTTP {}", resp.status());
                    std::process::exit(1);
                },
                Err(e) => {
                    println!("Unreachable: {e}");
                    std::process::exit(1);
                },
            }
        },
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_filter() {
        assert_eq!(log_filter_from_verbosity(0), "warn");
        assert_eq!(log_filter_from_verbosity(1), "info");
        assert_eq!(log_filter_from_verbosity(2), "debug");
        assert_eq!(log_filter_from_verbosity(9), "trace");
    }

    #[test]
    fn endpoint_url_joins_without_double_slash() {
        assert_eq!(
            endpoint_url("http://localhost:5000/", "/health"),
            "http://localhost:5000/health"
        );
        assert_eq!(
            endpoint_url("http://localhost:5000", "/health"),
            "http://localhost:5000/health"
        );
    }

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn lookup_parses_date_and_data() {
        let cli = Cli::try_parse_from([
            "weathercast-cli",
            "lookup",
            "2024-01-15",
            "--data",
            "obs.csv",
        ])
        .unwrap();
        match cli.command {
            Commands::Lookup { date, data, json } => {
                assert_eq!(date, "2024-01-15");
                assert_eq!(data, PathBuf::from("obs.csv"));
                assert!(!json);
            },
            _ => panic!("expected lookup"),
        }
    }
}
