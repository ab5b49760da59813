//! Conversion between the Gregorian and Jalali (Persian solar Hijri) calendars
//! through Julian Day Numbers.
//!
//! ```
//! use jalali_date::{gregorian_to_jalali, jalali_to_gregorian, CalendarDate};
//!
//! let nowruz = gregorian_to_jalali(2024, 3, 20).unwrap();
//! assert_eq!(nowruz, CalendarDate::new(1403, 1, 1));
//! assert_eq!(jalali_to_gregorian(1403, 1, 1).unwrap().to_string(), "2024-03-20");
//! ```

mod bridge;
mod consts;
mod jalali;
mod julian_day;
mod prelude;
mod types;

pub use consts::*;
pub use jalali::{
    JalaliYearInfo, is_jalali_leap_year, jalali_days_in_month, jalali_days_in_year, jalali_year_info,
};
pub use types::{CalendarDate, JulianDay, PersianMonth, gregorian_days_in_month, is_gregorian_leap_year};

use crate::prelude::*;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

/// Error type for conversions between calendars.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// Month outside 1..=12.
    #[error("Invalid month: {month} (must be 1-{})", MAX_MONTH)]
    InvalidMonth { month: u8 },

    /// Day outside the length of its month.
    #[error("Invalid day {day} for month {year:04}-{month:02} (must be 1-{max_day})")]
    InvalidDay {
        year: i32,
        month: u8,
        day: u8,
        max_day: u8,
    },

    /// Jalali year outside the span covered by the leap-cycle table.
    #[error(
        "Jalali year {year} is outside the supported range {}..={}",
        MIN_JALALI_YEAR,
        MAX_JALALI_YEAR
    )]
    YearOutOfRange { year: i32 },

    /// Gregorian year with no day inside the supported Jalali span.
    #[error(
        "Gregorian year {year} is outside the supported range {}..={}",
        MIN_GREGORIAN_YEAR,
        MAX_GREGORIAN_YEAR
    )]
    GregorianYearOutOfRange { year: i32 },

    /// Julian Day the decoder cannot map to a calendar date.
    #[error(
        "Julian Day {jd} is outside the supported range {}..={}",
        MIN_JULIAN_DAY,
        MAX_JULIAN_DAY
    )]
    JulianDayOutOfRange { jd: i64 },

    /// Error parsing a date string.
    #[error(transparent)]
    ParseError(#[from] ParseError),
}

/// Converts a proleptic Gregorian date to the Jalali calendar.
///
/// # Errors
/// Returns `ConversionError` if the Gregorian date is invalid, its year is
/// outside `MIN_GREGORIAN_YEAR..=MAX_GREGORIAN_YEAR`, or it falls outside the
/// supported Jalali year span.
pub fn gregorian_to_jalali(year: i32, month: u8, day: u8) -> Result<CalendarDate, ConversionError> {
    let date = CalendarDate::new(year, month, day);
    date.validate_gregorian()?;
    if !(MIN_GREGORIAN_YEAR..=MAX_GREGORIAN_YEAR).contains(&year) {
        debug!(year, "gregorian year outside supported range");
        return Err(ConversionError::GregorianYearOutOfRange { year });
    }
    JulianDay::from_gregorian(date).to_jalali()
}

/// Converts a Jalali date to the proleptic Gregorian calendar.
///
/// # Errors
/// Returns `ConversionError` if the Jalali date is invalid or its year is
/// outside the supported span.
pub fn jalali_to_gregorian(year: i32, month: u8, day: u8) -> Result<CalendarDate, ConversionError> {
    let date = CalendarDate::new(year, month, day);
    JulianDay::from_jalali(date)?.to_gregorian()
}

/// Holds the result of the most recent successful conversion.
///
/// Each `convert_*` call overwrites the stored date and also returns it; a
/// failed call leaves the stored date untouched. A new converter holds
/// `0000-00-00`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{result}")]
pub struct DateConverter {
    result: CalendarDate,
}

impl DateConverter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Converts a Gregorian date to Jalali and stores the result.
    ///
    /// # Errors
    /// See [`gregorian_to_jalali`].
    pub fn convert_gregorian_to_jalali(
        &mut self,
        year: i32,
        month: u8,
        day: u8,
    ) -> Result<CalendarDate, ConversionError> {
        let result = gregorian_to_jalali(year, month, day)?;
        debug!(from = %CalendarDate::new(year, month, day), to = %result, "gregorian to jalali");
        self.result = result;
        Ok(result)
    }

    /// Converts a Jalali date to Gregorian and stores the result.
    ///
    /// # Errors
    /// See [`jalali_to_gregorian`].
    pub fn convert_jalali_to_gregorian(
        &mut self,
        year: i32,
        month: u8,
        day: u8,
    ) -> Result<CalendarDate, ConversionError> {
        let result = jalali_to_gregorian(year, month, day)?;
        debug!(from = %CalendarDate::new(year, month, day), to = %result, "jalali to gregorian");
        self.result = result;
        Ok(result)
    }

    /// The stored date
    #[inline]
    pub const fn date(&self) -> CalendarDate {
        self.result
    }

    #[inline]
    pub const fn year(&self) -> i32 {
        self.result.year
    }

    #[inline]
    pub const fn month(&self) -> u8 {
        self.result.month
    }

    #[inline]
    pub const fn day(&self) -> u8 {
        self.result.day
    }
}
