//! Domain layer for Weathercast
//!
//! Contains the historical and forecast tables, the weather variables they
//! carry, unit conversion and month naming, and domain errors.
//! This layer has no I/O and defines the ubiquitous language.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
