//! Value Objects - Immutable, identity-less domain primitives

mod month;
pub mod temperature;
mod weather_variable;

pub use month::{InvalidMonth, month_name};
pub use temperature::{raw_to_celsius, round_to_tenth};
pub use weather_variable::WeatherVariable;
