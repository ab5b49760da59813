/// Jalali years at which the 33-year leap sub-cycle shifts.
/// The table covers Jalali years `-61..=3177`; the last entry closes the span.
pub const BREAKS: [i32; 20] = [
    -61, 9, 38, 199, 426, 686, 756, 818, 1111, 1181, 1210, 1635, 2060, 2097, 2192, 2262, 2324,
    2394, 2456, 3178,
];

/// Earliest supported Jalali year (inclusive)
pub const MIN_JALALI_YEAR: i32 = BREAKS[0];

/// Latest supported Jalali year (inclusive)
pub const MAX_JALALI_YEAR: i32 = BREAKS[BREAKS.len() - 1] - 1;

/// Earliest Gregorian year with dates in the supported Jalali span
pub const MIN_GREGORIAN_YEAR: i32 = MIN_JALALI_YEAR + JALALI_GREGORIAN_YEAR_OFFSET;

/// Latest Gregorian year with dates in the supported Jalali span
pub const MAX_GREGORIAN_YEAR: i32 = MAX_JALALI_YEAR + JALALI_GREGORIAN_YEAR_OFFSET + 1;

/// Earliest Julian Day the decoder accepts (1 March -100100)
pub const MIN_JULIAN_DAY: i64 = -34_839_655;

/// Latest Julian Day the decoder accepts (31 December 999999, Gregorian)
pub const MAX_JULIAN_DAY: i64 = 366_963_559;

/// Maximum valid month (Esfand / December)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for March, the Gregorian month in which every Jalali year begins
pub const MARCH: u8 = 3;
/// Month number for Esfand, the last Jalali month
pub const ESFAND: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each Gregorian month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Days in each of Farvardin through Shahrivar
pub const JALALI_FIRST_HALF_DAYS: u8 = 31;
/// Days in each of Mehr through Bahman, and in Esfand of a leap year
pub const JALALI_SECOND_HALF_DAYS: u8 = 30;
/// Days in Esfand of a common year
pub const ESFAND_DAYS_COMMON: u8 = 29;

/// Days from 1 Farvardin to the last day of Shahrivar, minus one
pub(crate) const JALALI_FIRST_HALF_LAST_OFFSET: i64 = 185;

/// Offset between a Jalali year and the Gregorian year in which it begins
pub const JALALI_GREGORIAN_YEAR_OFFSET: i32 = 621;

/// Year shift that keeps every encoder/decoder numerator non-negative
/// back to 1 March, -100100.
pub(crate) const EPOCH_YEAR_SHIFT: i64 = 100_100;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Length of the Jalali leap sub-cycle in years
pub(crate) const JALALI_SUB_CYCLE: i64 = 33;
/// Leap days in one full Jalali sub-cycle
pub(crate) const JALALI_SUB_CYCLE_LEAPS: i64 = 8;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
