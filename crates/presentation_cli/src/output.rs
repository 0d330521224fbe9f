//! Plain-text rendering of forecast tables and lookups

use std::fmt::Write;

use application::WeatherLookup;
use domain::ForecastTable;

/// Render the forecast table as aligned columns
pub fn format_forecast_table(table: &ForecastTable) -> String {
    let mut out = format!(
        "{:<12} {:<10} {:>7} {:>7} {:>7} {:>7} {:>7}\n",
        "DATE", "MONTH", "TMIN", "TMAX", "PRCP", "SNOW", "AWND"
    );
    for row in table.iter() {
        let _ = writeln!(
            out,
            "{:<12} {:<10} {:>7.1} {:>7.1} {:>7.1} {:>7.1} {:>7.1}",
            row.date.to_string(),
            row.month_name,
            row.tmin,
            row.tmax,
            row.prcp,
            row.snow,
            row.awnd
        );
    }
    out
}

/// Render a lookup result, one field per line
pub fn format_lookup(lookup: &WeatherLookup) -> String {
    let field = |v: Option<f64>| v.map_or_else(|| "-".to_string(), |v| v.to_string());
    format!(
        "Date: {} ({})\nTMIN: {}\nTMAX: {}\nPRCP: {}\nSNOW: {}\nAWND: {}",
        lookup.date,
        lookup.source,
        field(lookup.tmin),
        field(lookup.tmax),
        field(lookup.prcp),
        field(lookup.snow),
        field(lookup.awnd),
    )
}
