//! Integration tests for CLI
//!
//! These tests verify command parsing against a mirror of the CLI
//! structure, and the forecast pipeline the commands drive.

#![allow(clippy::panic, clippy::unwrap_used)]

use std::{ffi::OsString, io::Write, path::PathBuf, sync::Arc};

use application::{FORECAST_HORIZON, ForecastTableBuilder, LookupSource, WeatherQueryService};
use chrono::{Days, NaiveDate};
use clap::Parser;
use infrastructure::CsvHistoricalSource;

// Mock CLI structure for testing (mirrors main.rs)
#[derive(Parser)]
#[command(name = "weathercast-cli")]
#[command(author, version, about = "Weathercast forecasting CLI", long_about = None)]
struct Cli {
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    Forecast {
        #[arg(short, long, default_value = "data/weather.csv")]
        data: PathBuf,
        #[arg(long)]
        json: bool,
    },
    Lookup {
        date: String,
        #[arg(short, long, default_value = "data/weather.csv")]
        data: PathBuf,
        #[arg(long)]
        json: bool,
    },
    Health {
        #[arg(short, long, default_value = "http://localhost:5000")]
        url: String,
    },
}

fn parse_args(args: &[&str]) -> Result<Cli, clap::Error> {
    let os_args: Vec<OsString> = args.iter().map(OsString::from).collect();
    Cli::try_parse_from(os_args)
}

#[test]
fn cli_parses_forecast_command() {
    let cli = parse_args(&["weathercast-cli", "forecast"]).unwrap();
    if let Commands::Forecast { data, json } = cli.command {
        assert_eq!(data, PathBuf::from("data/weather.csv"));
        assert!(!json);
    } else {
        panic!("Expected Forecast command");
    }
}

#[test]
fn cli_parses_forecast_with_json_and_data() {
    let cli = parse_args(&["weathercast-cli", "forecast", "--json", "-d", "/tmp/obs.csv"]).unwrap();
    if let Commands::Forecast { data, json } = cli.command {
        assert_eq!(data, PathBuf::from("/tmp/obs.csv"));
        assert!(json);
    } else {
        panic!("Expected Forecast command");
    }
}

#[test]
fn cli_parses_lookup_command() {
    let cli = parse_args(&["weathercast-cli", "lookup", "01/15/2024"]).unwrap();
    if let Commands::Lookup { date, .. } = cli.command {
        assert_eq!(date, "01/15/2024");
    } else {
        panic!("Expected Lookup command");
    }
}

#[test]
fn cli_lookup_requires_date() {
    assert!(parse_args(&["weathercast-cli", "lookup"]).is_err());
}

#[test]
fn cli_parses_health_with_custom_url() {
    let cli = parse_args(&["weathercast-cli", "health", "--url", "http://custom:8080"]).unwrap();
    if let Commands::Health { url } = cli.command {
        assert_eq!(url, "http://custom:8080");
    } else {
        panic!("Expected Health command");
    }
}

#[test]
fn cli_counts_verbosity() {
    let cli = parse_args(&["weathercast-cli", "-vv", "health"]).unwrap();
    assert_eq!(cli.verbose, 2);
}

#[test]
fn cli_rejects_unknown_command() {
    assert!(parse_args(&["weathercast-cli", "chat"]).is_err());
}

// ============ Pipeline Tests ============

fn write_history(days: u64) -> (tempfile::NamedTempFile, NaiveDate) {
    let first = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "DATE,TMIN,TMAX,PRCP,SNOW,AWND").unwrap();
    for i in 0..days {
        let t = i as f64;
        let date = first.checked_add_days(Days::new(i)).unwrap();
        writeln!(
            file,
            "{},{},{},{},{},{}",
            date.format("%Y-%m-%d"),
            30.0 + 4.0 * (0.3 * t).sin() + ((i * 7) % 5) as f64 * 0.2,
            50.0 + 5.0 * (0.2 * t).cos() + ((i * 3) % 7) as f64 * 0.3,
            0.3 + 0.2 * (0.9 * t).sin() + 0.1 * (1.7 * t).cos() + ((i * 5) % 3) as f64 * 0.05,
            0.8 + 0.5 * (0.5 * t + 1.0).sin() + 0.2 * (2.1 * t).cos() + ((i * 11) % 4) as f64 * 0.1,
            6.0 + 2.0 * (0.7 * t).cos() + ((i * 13) % 6) as f64 * 0.15,
        )
        .unwrap();
    }
    let last = first.checked_add_days(Days::new(days - 1)).unwrap();
    (file, last)
}

#[test]
fn forecast_pipeline_from_csv() {
    let (file, last) = write_history(60);

    let (history, forecast) = ForecastTableBuilder::default()
        .prepare(&CsvHistoricalSource::new(file.path()))
        .unwrap();

    assert_eq!(history.len(), 60);
    assert_eq!(forecast.len(), FORECAST_HORIZON);
    assert_eq!(
        forecast.rows()[0].date,
        last.checked_add_days(Days::new(1)).unwrap()
    );
}

#[test]
fn lookup_pipeline_prefers_history() {
    let (file, last) = write_history(60);
    let (history, forecast) = ForecastTableBuilder::default()
        .prepare(&CsvHistoricalSource::new(file.path()))
        .unwrap();
    let service = WeatherQueryService::new(Arc::new(history), Arc::new(forecast));

    let found = service
        .lookup_str(&last.format("%Y-%m-%d").to_string())
        .unwrap()
        .unwrap();
    assert_eq!(found.source, LookupSource::Historical);

    let next = last.checked_add_days(Days::new(3)).unwrap();
    let found = service
        .lookup_str(&next.format("%m/%d/%Y").to_string())
        .unwrap()
        .unwrap();
    assert_eq!(found.source, LookupSource::Forecast);

    let beyond = last.checked_add_days(Days::new(30)).unwrap();
    assert!(
        service
            .lookup_str(&beyond.format("%Y-%m-%d").to_string())
            .unwrap()
            .is_none()
    );
}

#[test]
fn missing_csv_fails_to_prepare() {
    let result = ForecastTableBuilder::default()
        .prepare(&CsvHistoricalSource::new("/nonexistent/weather.csv"));
    assert!(result.is_err());
}
