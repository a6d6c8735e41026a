//! FILENAME: core/engine/src/birth_date.rs
//! PURPOSE: The raw birth date fed into the formulas.
//! CONTEXT: Day, month and year are plain integers. There is no calendar
//! validation (31/02 and month 13 are accepted); the only rejected inputs are
//! the ones arithmetic cannot use: negative, fractional or non-finite numbers.

use parser::{DateLayout, DateParts};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DateNumbers")]
pub struct BirthDate {
    pub day: u32,
    pub month: u32,
    pub year: u32,
}

impl BirthDate {
    /// Builds a date from signed integers, rejecting negatives.
    pub fn new(day: i64, month: i64, year: i64) -> EngineResult<Self> {
        Ok(BirthDate {
            day: component("day", day)?,
            month: component("month", month)?,
            year: component("year", year)?,
        })
    }

    /// Builds a date from floating point numbers, the shape numbers arrive in
    /// from JSON. NaN, infinities and fractions are rejected instead of being
    /// carried into the arithmetic.
    pub fn from_numbers(day: f64, month: f64, year: f64) -> EngineResult<Self> {
        Ok(BirthDate {
            day: float_component("day", day)?,
            month: float_component("month", month)?,
            year: float_component("year", year)?,
        })
    }

    /// Last two digits of the year.
    pub fn year_tail(&self) -> u32 {
        self.year % 100
    }

    /// The date as day/month/year parts, e.g. for `to_dmy()`.
    pub fn to_parts(&self) -> DateParts {
        DateParts {
            day: self.day,
            month: self.month,
            year: self.year,
            layout: DateLayout::DayMonthYear,
        }
    }
}

/// A date as it arrives in JSON: any three numbers.
#[derive(Deserialize)]
struct DateNumbers {
    day: f64,
    month: f64,
    year: f64,
}

impl TryFrom<DateNumbers> for BirthDate {
    type Error = EngineError;

    fn try_from(numbers: DateNumbers) -> EngineResult<Self> {
        BirthDate::from_numbers(numbers.day, numbers.month, numbers.year)
    }
}

impl From<DateParts> for BirthDate {
    fn from(parts: DateParts) -> Self {
        BirthDate {
            day: parts.day,
            month: parts.month,
            year: parts.year,
        }
    }
}

fn component(name: &str, value: i64) -> EngineResult<u32> {
    u32::try_from(value).map_err(|_| {
        EngineError::InvalidInput(format!(
            "{} must be a non-negative integer no larger than {}, got {}",
            name,
            u32::MAX,
            value
        ))
    })
}

fn float_component(name: &str, value: f64) -> EngineResult<u32> {
    if !value.is_finite() {
        return Err(EngineError::InvalidInput(format!(
            "{} must be a finite number, got {}",
            name, value
        )));
    }
    if value.fract() != 0.0 {
        return Err(EngineError::InvalidInput(format!(
            "{} must be a whole number, got {}",
            name, value
        )));
    }
    if value < 0.0 || value > u32::MAX as f64 {
        return Err(EngineError::InvalidInput(format!(
            "{} must be between 0 and {}, got {}",
            name,
            u32::MAX,
            value
        )));
    }
    Ok(value as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_out_of_calendar_values() {
        let date = BirthDate::new(31, 13, 1990).unwrap();
        assert_eq!((date.day, date.month, date.year), (31, 13, 1990));
    }

    #[test]
    fn test_new_rejects_negative() {
        let err = BirthDate::new(-1, 5, 1982).unwrap_err();
        match err {
            EngineError::InvalidInput(msg) => assert!(msg.starts_with("day"), "{}", msg),
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(BirthDate::new(1, 5, i64::from(u32::MAX) + 1).is_err());
    }

    #[test]
    fn test_from_numbers_rejects_nan_and_fractions() {
        assert!(matches!(
            BirthDate::from_numbers(f64::NAN, 5.0, 1982.0),
            Err(EngineError::InvalidInput(_))
        ));
        assert!(matches!(
            BirthDate::from_numbers(6.0, f64::INFINITY, 1982.0),
            Err(EngineError::InvalidInput(_))
        ));
        assert!(matches!(
            BirthDate::from_numbers(6.5, 5.0, 1982.0),
            Err(EngineError::InvalidInput(_))
        ));
        assert!(matches!(
            BirthDate::from_numbers(6.0, 5.0, -1982.0),
            Err(EngineError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_from_numbers_accepts_whole_values() {
        let date = BirthDate::from_numbers(6.0, 5.0, 1982.0).unwrap();
        assert_eq!(date, BirthDate::new(6, 5, 1982).unwrap());
    }

    #[test]
    fn test_deserialize_validates_numbers() {
        let date: BirthDate = serde_json::from_str(r#"{"day":6,"month":5,"year":1982}"#).unwrap();
        assert_eq!(date, BirthDate::new(6, 5, 1982).unwrap());

        let err = serde_json::from_str::<BirthDate>(r#"{"day":6.5,"month":5,"year":1982}"#)
            .unwrap_err();
        assert!(err.to_string().contains("day must be a whole number"), "{}", err);

        assert!(serde_json::from_str::<BirthDate>(r#"{"day":6,"month":-5,"year":1982}"#).is_err());
        assert!(serde_json::from_str::<BirthDate>(r#"{"day":6,"month":5,"year":1e12}"#).is_err());
    }

    #[test]
    fn test_to_parts_pads_the_year() {
        let date = BirthDate::new(6, 5, 982).unwrap();
        assert_eq!(date.to_parts().to_dmy(), "06/05/0982");
        assert_eq!(BirthDate::from(date.to_parts()), date);
    }

    #[test]
    fn test_year_tail() {
        assert_eq!(BirthDate::new(6, 5, 1982).unwrap().year_tail(), 82);
        assert_eq!(BirthDate::new(6, 5, 2000).unwrap().year_tail(), 0);
    }

    #[test]
    fn test_from_parsed_parts() {
        let parts = parser::parse_birth_date("06/05/1982").unwrap();
        assert_eq!(BirthDate::from(parts), BirthDate::new(6, 5, 1982).unwrap());
    }
}
