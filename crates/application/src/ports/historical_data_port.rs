//! Historical data source port
//!
//! Defines the interface for loading the historical observation table.

#[cfg(test)]
use mockall::automock;

use domain::HistoricalTable;

use crate::error::ApplicationError;

/// Summary of where historical data comes from, for logs and readiness
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDescription {
    /// Source kind, e.g. "csv"
    pub kind: &'static str,
    /// Location of the data, e.g. a file path
    pub location: String,
}

/// Port for loading historical observations
///
/// Loading happens once at startup, so the port is synchronous.
#[cfg_attr(test, automock)]
pub trait HistoricalDataPort: Send + Sync {
    /// Load the full historical table
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::DataSource` when the source cannot be read
    /// or yields no valid rows.
    fn load(&self) -> Result<HistoricalTable, ApplicationError>;

    /// Describe the source
    fn describe(&self) -> SourceDescription;
}
