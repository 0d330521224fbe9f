//! Calendar month naming
//!
//! Maps a 1-based month number to its full English name.
//!
//! # Examples
//!
//! ```
//! use domain::value_objects::month_name;
//!
//! assert_eq!(month_name(1).expect("valid month"), "January");
//! assert!(month_name(0).is_err());
//! ```

use thiserror::Error;

/// Error returned when a month number is out of range
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("invalid month: {0} is out of range (must be 1-12)")]
pub struct InvalidMonth(pub u32);

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Full English name of a 1-based month number
///
/// # Errors
///
/// Returns `InvalidMonth` for any value outside 1-12.
pub fn month_name(month: u32) -> Result<&'static str, InvalidMonth> {
    month
        .checked_sub(1)
        .and_then(|idx| MONTH_NAMES.get(idx as usize))
        .copied()
        .ok_or(InvalidMonth(month))
}
