//! Conversion of Jalaali dates into UNIX millisecond timestamps.
//!
//! The conversion anchors every date to the Nowruz of its year: the
//! Jalaali/Gregorian leap-count difference locates Nowruz within March,
//! and whole days are added from there.

use crate::consts::{JALAALI_EPOCH_CE, MARCH, MS_PER_DAY, NOWRUZ_BASE_MARCH_DAY};
use crate::gregorian;
use crate::types::{Year, month_day_table};
use crate::{DateError, JalaaliDate, cycle};

/// Difference between the Jalaali and Gregorian cumulative leap counts up
/// to the given year.
fn leap_year_difference(year: Year) -> i32 {
    let jalaali_leaps = cycle::leap_years_until(year.get());
    let gregorian_leaps = gregorian::gregorian_leap_years_until(year.get() + JALAALI_EPOCH_CE);

    jalaali_leaps - gregorian_leaps
}

/// Nowruz of an already-validated year, as UTC midnight in UNIX
/// milliseconds.
pub(crate) fn nowruz_ms(year: Year) -> i64 {
    let march_day = NOWRUZ_BASE_MARCH_DAY + leap_year_difference(year);

    gregorian::unix_ms_at_midnight(year.get() + JALAALI_EPOCH_CE, MARCH, march_day)
}

/// Calculates the UTC midnight of Nowruz (the first day) of the given
/// Jalaali year, in UNIX milliseconds.
///
/// # Errors
/// Returns `DateError::InvalidYear` if the year is outside the supported
/// range.
pub fn nowruz_timestamp(year: i32) -> Result<i64, DateError> {
    Ok(nowruz_ms(Year::new(year)?))
}

/// Timestamp of a validated date: Nowruz of its year plus the days of the
/// months already passed.
pub(crate) fn date_timestamp(date: &JalaaliDate) -> i64 {
    let months = month_day_table(cycle::is_leap(date.year_typed()));

    let mut days_since_nowruz = i64::from(date.day()) - 1;
    for &length in &months[1..date.month() as usize] {
        days_since_nowruz += i64::from(length);
    }

    nowruz_ms(date.year_typed()) + days_since_nowruz * MS_PER_DAY
}

/// Converts the given Jalaali date into the UTC midnight UNIX millisecond
/// timestamp of its Gregorian equivalent.
///
/// Months and days are both 1-based.
///
/// # Errors
/// Returns `DateError::InvalidYear`, `DateError::InvalidMonth` or
/// `DateError::InvalidDay` if the respective component is out of range.
pub fn convert_date(year: i32, month: u8, day: u8) -> Result<i64, DateError> {
    Ok(JalaaliDate::new(year, month, day)?.timestamp_ms())
}
