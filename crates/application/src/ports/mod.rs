//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod historical_data_port;

#[cfg(test)]
pub use historical_data_port::MockHistoricalDataPort;
pub use historical_data_port::{HistoricalDataPort, SourceDescription};
