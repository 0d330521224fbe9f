//! Weather variable value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the five daily variables carried by the tables
///
/// Column names follow the GHCN-daily CSV headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WeatherVariable {
    /// Minimum temperature
    Tmin,
    /// Maximum temperature
    Tmax,
    /// Precipitation
    Prcp,
    /// Snowfall
    Snow,
    /// Average wind speed
    Awnd,
}

impl WeatherVariable {
    /// All variables, in table column order
    pub const ALL: [Self; 5] = [Self::Tmin, Self::Tmax, Self::Prcp, Self::Snow, Self::Awnd];

    /// Column header used in CSV input and JSON output
    #[must_use]
    pub const fn column(&self) -> &'static str {
        match self {
            Self::Tmin => "TMIN",
            Self::Tmax => "TMAX",
            Self::Prcp => "PRCP",
            Self::Snow => "SNOW",
            Self::Awnd => "AWND",
        }
    }

    /// Whether forecasts of this variable are temperature-converted
    #[must_use]
    pub const fn is_temperature(&self) -> bool {
        matches!(self, Self::Tmin | Self::Tmax)
    }

    /// Parse a column header, case-insensitively
    #[must_use]
    pub fn from_column(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|v| v.column().eq_ignore_ascii_case(name.trim()))
    }
}

impl fmt::Display for WeatherVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.column())
    }
}
