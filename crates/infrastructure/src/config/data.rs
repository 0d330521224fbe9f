//! Historical data location.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Where the historical observations are read from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Path to the daily observations CSV
    #[serde(default = "default_path")]
    pub path: PathBuf,
}

fn default_path() -> PathBuf {
    PathBuf::from("data/weather.csv")
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}
