/// Jalaali years that break the regular 33-year leap cycle.
///
/// The table partitions the supported year range into segments; within a
/// segment leap years recur on the 33-year cycle. The first and last
/// entries are the exclusive bounds of the supported range.
pub const CYCLE_BREAKERS: [i32; 20] = [
    -61, 9, 38, 199, 426, 686, 756, 818, 1111, 1181, 1210, 1635, 2060, 2097, 2192, 2262, 2324,
    2394, 2456, 3178,
];

/// First supported Jalaali year (inclusive)
pub const MIN_YEAR: i32 = CYCLE_BREAKERS[0] + 1;

/// Last supported Jalaali year (inclusive)
pub const MAX_YEAR: i32 = CYCLE_BREAKERS[CYCLE_BREAKERS.len() - 1] - 1;

/// Length of one Jalaali leap cycle in years
pub(crate) const CYCLE_LENGTH: i32 = 33;

/// Leap years contained in one full 33-year cycle
pub(crate) const LEAPS_PER_CYCLE: i32 = 8;

/// Maximum valid month (Esfand)
pub const MAX_MONTH: u8 = 12;

/// First day of month
pub const MIN_DAY: u8 = 1;

/// Month number for Farvardin, the first month
pub const FARVARDIN: u8 = 1;
/// Month number for Esfand, the last month
pub const ESFAND: u8 = 12;

/// Days in Esfand in leap years
pub const ESFAND_DAYS_LEAP: u8 = 30;

/// Days in each month of a common (365-day) year
/// (index 0 is unused, months are 1-indexed)
pub const COMMON_YEAR_MONTH_DAYS: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // Farvardin
    31, // Ordibehesht
    31, // Khordad
    31, // Tir
    31, // Mordad
    31, // Shahrivar
    30, // Mehr
    30, // Aban
    30, // Azar
    30, // Dey
    30, // Bahman
    29, // Esfand (30 in leap years)
];

/// Days in each month of a leap (366-day) year.
/// Differs from the common table only at Esfand.
pub const LEAP_YEAR_MONTH_DAYS: [u8; 13] = [0, 31, 31, 31, 31, 31, 31, 30, 30, 30, 30, 30, 30];

/// Common-Era year of Jalaali year zero
pub(crate) const JALAALI_EPOCH_CE: i32 = 621;

/// Gregorian leap years that occurred before the Jalaali epoch
pub(crate) const GREGORIAN_LEAPS_BEFORE_EPOCH: i32 = 150;

/// Gregorian month number for March, the month Nowruz falls in
pub(crate) const MARCH: u8 = 3;

/// Day of March that the Jalaali/Gregorian leap difference offsets Nowruz from
pub(crate) const NOWRUZ_BASE_MARCH_DAY: i32 = 6;

/// Milliseconds in one day
pub(crate) const MS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Date component separator (ISO 8601 style)
pub const DATE_SEPARATOR: char = '-';
