mod consts;
mod convert;
mod cycle;
mod gregorian;
mod prelude;
mod types;

pub use consts::*;
pub use convert::{convert_date, nowruz_timestamp};
pub use cycle::{is_leap_year, leap_years_until, month_length};
pub use types::{Day, Month, Year};

use crate::prelude::*;
use std::str::FromStr;

/// A fully validated Jalaali calendar date.
/// Validity is established once at construction; conversion to a
/// timestamp is therefore infallible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct JalaaliDate {
    year: types::Year,
    month: types::Month,
    day: types::Day,
}

/// Error type for every fallible operation in the crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// Input text is not a `YYYY-MM-DD` date.
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),

    /// Year outside the supported range.
    #[error("Invalid year: {0} (must be {MIN_YEAR}..={MAX_YEAR})")]
    InvalidYear(i32),

    /// Month outside `1..=12`.
    #[error("Invalid month: {0} (must be 1-{MAX_MONTH})")]
    InvalidMonth(u8),

    /// Day outside the length of its month.
    #[error("Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { month: u8, day: u8, year: i32 },

    /// Empty date string.
    #[error("Empty date string")]
    EmptyInput,
}

impl JalaaliDate {
    /// Creates a new date, validating year, month and day in that order.
    /// Months and days are both 1-based.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear`, `DateError::InvalidMonth` or
    /// `DateError::InvalidDay` for the first component out of range.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, DateError> {
        let year = types::Year::new(year)?;
        let month = types::Month::new(month)?;
        let day = types::Day::new(day, year, month)?;

        Ok(Self { year, month, day })
    }

    /// Returns the year component (as i32 for convenience)
    pub const fn year(&self) -> i32 {
        self.year.get()
    }

    /// Returns the month component (as u8 for convenience)
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the day component (as u8 for convenience)
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Returns the Year type
    pub const fn year_typed(&self) -> types::Year {
        self.year
    }

    /// Returns the Month type
    pub const fn month_typed(&self) -> types::Month {
        self.month
    }

    /// Returns the Day type
    pub const fn day_typed(&self) -> types::Day {
        self.day
    }

    /// UTC midnight of this date's Gregorian equivalent, in UNIX
    /// milliseconds.
    pub fn timestamp_ms(&self) -> i64 {
        convert::date_timestamp(self)
    }
}

impl JalaaliDate {
    /// Helper to parse i32 with better error messages
    fn parse_i32(s: &str) -> Result<i32, DateError> {
        s.parse::<i32>()
            .map_err(|_| DateError::InvalidFormat(s.to_owned()))
    }

    /// Helper to parse u8 with better error messages
    fn parse_u8(s: &str) -> Result<u8, DateError> {
        s.parse::<u8>()
            .map_err(|_| DateError::InvalidFormat(s.to_owned()))
    }
}

impl FromStr for JalaaliDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }

        // A leading separator is the year's sign, not a delimiter
        let (negative, body) = match trimmed.strip_prefix(DATE_SEPARATOR) {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        let parts: Vec<&str> = body.split(DATE_SEPARATOR).map(str::trim).collect();
        if parts.len() != 3 {
            return Err(DateError::InvalidFormat(format!(
                "Expected 3 {DATE_SEPARATOR} separated parts, found {}",
                parts.len()
            )));
        }

        // Parse components - InvalidFormat if not numeric
        let mut year = Self::parse_i32(parts[0])?;
        if negative {
            year = -year;
        }
        let month = Self::parse_u8(parts[1])?;
        let day = Self::parse_u8(parts[2])?;

        Self::new(year, month, day)
    }
}

impl TryFrom<(i32, u8, u8)> for JalaaliDate {
    type Error = DateError;

    fn try_from(value: (i32, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1, value.2)
    }
}

impl serde::Serialize for JalaaliDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for JalaaliDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
