//! The 33-year Jalaali leap cycle.
//!
//! Jalaali leap years follow an approximate 33-year cycle whose phase
//! resets at the break years in [`CYCLE_BREAKERS`]. Both operations here
//! scan that table; cost is bounded by its length, independent of the
//! year's magnitude.

use crate::DateError;
use crate::consts::{CYCLE_BREAKERS, CYCLE_LENGTH, LEAPS_PER_CYCLE};
use crate::types::{Month, Year, days_in_month};

/// Checks if the provided Jalaali year is a leap year.
///
/// # Errors
/// Returns `DateError::InvalidYear` if the year is outside the supported
/// range.
pub fn is_leap_year(year: i32) -> Result<bool, DateError> {
    Ok(is_leap(Year::new(year)?))
}

/// Leap status of an already-validated year.
///
/// The year is offset from the closest break year below it; within the
/// segment the leap pattern repeats every 33 years. This is a fixed
/// approximation of the astronomical rule, not an exact one.
pub(crate) fn is_leap(year: Year) -> bool {
    let year = year.get();

    let mut previous_break = CYCLE_BREAKERS[0];
    for &break_year in &CYCLE_BREAKERS {
        if year <= break_year {
            break;
        }
        previous_break = break_year;
    }

    let since_last_break = year - previous_break;
    let remainder = (since_last_break + 1) % CYCLE_LENGTH;

    (remainder - 1) % 4 == 0
}

/// Calculates the number of Jalaali leap years from the epoch until the
/// provided year.
///
/// Unlike the other operations this has no error channel: a year outside
/// the supported range yields `0` silently.
pub fn leap_years_until(year: i32) -> i32 {
    if year <= CYCLE_BREAKERS[0] || year >= CYCLE_BREAKERS[CYCLE_BREAKERS.len() - 1] {
        return 0;
    }

    let mut leaps = 0;

    for pair in CYCLE_BREAKERS.windows(2) {
        let (previous_break, next_break) = (pair[0], pair[1]);

        if year >= previous_break && year < next_break {
            // The partial segment containing the year; the +3 rounds the
            // trailing years up to their next leap, and the lookahead
            // credits the boundary leap year of the segment's tail.
            let diff = year - previous_break;
            let lookahead = i32::from(year + 4 >= next_break);

            return leaps
                + LEAPS_PER_CYCLE * (diff / CYCLE_LENGTH)
                + (diff % CYCLE_LENGTH + 3) / 4
                + lookahead;
        }

        // A full segment entirely below the year
        let diff = next_break - previous_break;
        leaps += LEAPS_PER_CYCLE * (diff / CYCLE_LENGTH) + (diff % CYCLE_LENGTH) / 4;
    }

    0
}

/// Returns the length in days of the given month (1..=12, Farvardin..=Esfand)
/// of the given Jalaali year.
///
/// # Errors
/// Returns `DateError::InvalidYear` or `DateError::InvalidMonth` if either
/// input is out of range.
pub fn month_length(year: i32, month: u8) -> Result<u8, DateError> {
    let year = Year::new(year)?;
    let month = Month::new(month)?;
    Ok(days_in_month(year, month))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{MAX_YEAR, MIN_YEAR};

    /// Leap years between 1354 and 1420 under the cycle approximation.
    const LEAP_YEARS_1354_1420: [i32; 16] = [
        1354, 1358, 1362, 1366, 1370, 1375, 1379, 1383, 1387, 1391, 1395, 1399, 1403, 1408, 1412,
        1416,
    ];

    #[test]
    fn test_is_leap_year_reference_set() {
        for year in 1354..1420 {
            let leap = is_leap_year(year).unwrap();
            assert_eq!(
                leap,
                LEAP_YEARS_1354_1420.contains(&year),
                "unexpected leap status for {year}"
            );
        }
    }

    #[test]
    fn test_is_leap_year_out_of_range() {
        assert!(matches!(
            is_leap_year(-61),
            Err(DateError::InvalidYear(-61))
        ));
        assert!(matches!(
            is_leap_year(3178),
            Err(DateError::InvalidYear(3178))
        ));
        assert!(matches!(
            is_leap_year(4000),
            Err(DateError::InvalidYear(4000))
        ));
        assert!(matches!(
            is_leap_year(-100),
            Err(DateError::InvalidYear(-100))
        ));
    }

    #[test]
    fn test_is_leap_year_at_supported_bounds() {
        assert!(is_leap_year(MIN_YEAR).is_ok());
        assert!(is_leap_year(MAX_YEAR).is_ok());
    }

    #[test]
    fn test_is_leap_year_at_break_year() {
        // Break years themselves are valid input; 1210 sits 29 years past
        // the 1181 break and is not leap.
        assert!(!is_leap_year(1210).unwrap());
    }

    #[test]
    fn test_leap_years_until_known_counts() {
        assert_eq!(leap_years_until(1374), 348);
        assert_eq!(leap_years_until(1388), 352);
        assert_eq!(leap_years_until(1392), 353);
        assert_eq!(leap_years_until(1403), 355);
    }

    #[test]
    fn test_leap_years_until_out_of_range_is_zero() {
        // Documented quirk: no error channel, silent zero
        assert_eq!(leap_years_until(-61), 0);
        assert_eq!(leap_years_until(3178), 0);
        assert_eq!(leap_years_until(i32::MIN), 0);
        assert_eq!(leap_years_until(i32::MAX), 0);
    }

    #[test]
    fn test_leap_years_until_at_segment_start() {
        // A year equal to its break contributes nothing beyond the full
        // segments below it
        assert_eq!(leap_years_until(1210), 308);
        assert_eq!(leap_years_until(1211), 309);
    }

    #[test]
    fn test_leap_count_deltas_match_leap_status() {
        // Within a segment, consecutive cumulative counts must step by
        // exactly the leap status of the year between them
        for year in 1212..1600 {
            let delta = leap_years_until(year + 1) - leap_years_until(year);
            let leap = i32::from(is_leap_year(year).unwrap());
            assert_eq!(delta, leap, "count delta disagrees with leap status at {year}");
        }
    }

    #[test]
    fn test_month_length_first_and_second_half() {
        for month in 1..=6 {
            assert_eq!(month_length(1400, month).unwrap(), 31);
        }
        for month in 7..=11 {
            assert_eq!(month_length(1400, month).unwrap(), 30);
        }
    }

    #[test]
    fn test_month_length_esfand_follows_leap_status() {
        for year in 1354..1420 {
            let expected = if LEAP_YEARS_1354_1420.contains(&year) {
                30
            } else {
                29
            };
            assert_eq!(
                month_length(year, 12).unwrap(),
                expected,
                "unexpected Esfand length for {year}"
            );
        }
    }

    #[test]
    fn test_month_length_invalid_month() {
        assert!(matches!(
            month_length(1400, 0),
            Err(DateError::InvalidMonth(0))
        ));
        assert!(matches!(
            month_length(1400, 13),
            Err(DateError::InvalidMonth(13))
        ));
    }

    #[test]
    fn test_month_length_invalid_year() {
        assert!(matches!(
            month_length(4000, 1),
            Err(DateError::InvalidYear(4000))
        ));
        assert!(matches!(
            month_length(-100, 1),
            Err(DateError::InvalidYear(-100))
        ));
    }

    #[test]
    fn test_month_length_year_checked_before_month() {
        // Both inputs invalid: the year check wins
        assert!(matches!(
            month_length(4000, 13),
            Err(DateError::InvalidYear(4000))
        ));
    }
}
