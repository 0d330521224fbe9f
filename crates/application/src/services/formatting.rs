//! Display formatting for forecast values and lookup dates

use chrono::{NaiveDate, NaiveTime};
use domain::WeatherVariable;
use domain::value_objects::{raw_to_celsius, round_to_tenth};

/// Format string applied to lookup dates
///
/// `%D` is the US short date and `%M` the minute, so the middle field is
/// always `00` for a calendar date.
pub const LOOKUP_DATE_FORMAT: &str = "%D-%M-%Y";

/// Render a lookup date, e.g. 2024-01-15 as `01/15/24-00-2024`
#[must_use]
pub fn format_lookup_date(date: NaiveDate) -> String {
    date.and_time(NaiveTime::MIN)
        .format(LOOKUP_DATE_FORMAT)
        .to_string()
}

/// Convert and round a raw model output for display
///
/// Temperatures go through the conversion formula; every variable is
/// rounded to one decimal.
#[must_use]
pub fn display_forecast_value(variable: WeatherVariable, raw: f64) -> f64 {
    if variable.is_temperature() {
        round_to_tenth(raw_to_celsius(raw))
    } else {
        round_to_tenth(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_date_keeps_minute_field() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert_eq!(format_lookup_date(date), "01/15/24-00-2024");
    }

    #[test]
    fn lookup_date_pads_single_digits() {
        let date = NaiveDate::from_ymd_opt(2009, 7, 4).unwrap();
        assert_eq!(format_lookup_date(date), "07/04/09-00-2009");
    }

    #[test]
    fn temperatures_are_converted() {
        assert!((display_forecast_value(WeatherVariable::Tmax, 32.0) - (-14.2)).abs() < 1e-12);
        assert!((display_forecast_value(WeatherVariable::Tmin, 90.0) - 18.0).abs() < 1e-12);
    }

    #[test]
    fn other_variables_are_only_rounded() {
        assert!((display_forecast_value(WeatherVariable::Prcp, 0.126) - 0.1).abs() < 1e-12);
        assert!((display_forecast_value(WeatherVariable::Awnd, 7.46) - 7.5).abs() < 1e-12);
        assert!((display_forecast_value(WeatherVariable::Snow, -0.04) - 0.0).abs() < 1e-12);
    }

    // ==================== Property-Based Tests ====================

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(100))]

            #[test]
            fn lookup_date_minute_field_is_zero(days in 0u64..200_000) {
                let date = NaiveDate::from_ymd_opt(1900, 1, 1)
                    .unwrap()
                    .checked_add_days(chrono::Days::new(days))
                    .unwrap();
                let text = format_lookup_date(date);
                let expected = format!("{}-00-{}", date.format("%m/%d/%y"), date.format("%Y"));
                prop_assert_eq!(text, expected);
            }

            #[test]
            fn display_values_have_one_decimal(raw in -500.0f64..500.0) {
                for variable in WeatherVariable::ALL {
                    let shown = display_forecast_value(variable, raw);
                    prop_assert!(((shown * 10.0).round() - shown * 10.0).abs() < 1e-6);
                }
            }
        }
    }
}
