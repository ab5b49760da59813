//! Jalali dates to and from Julian Days.
//!
//! Every Jalali year is anchored on the Gregorian date of its 1 Farvardin.
//! Farvardin through Shahrivar have 31 days and Mehr through Esfand 30 (29 in
//! a common year's Esfand), so day offsets from the anchor map to months
//! with plain division.

use crate::ConversionError;
use crate::consts::{
    JALALI_FIRST_HALF_DAYS, JALALI_FIRST_HALF_LAST_OFFSET, JALALI_GREGORIAN_YEAR_OFFSET,
    JALALI_SECOND_HALF_DAYS, MARCH,
};
use crate::jalali::{check_year, epoch_info, jalali_year_info};
use crate::julian_day::{CalendarKind, decode, encode};
use crate::types::{CalendarDate, JulianDay};
use tracing::trace;

/// Julian Day of 1 Farvardin, given the Gregorian year it falls in and its March day.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn new_year_anchor(gregorian_year: i32, march_day: i32) -> JulianDay {
    // march_day stays within 19..=22 across the break table
    encode(
        CalendarDate::new(gregorian_year, MARCH, march_day as u8),
        CalendarKind::Gregorian,
    )
}

/// Julian Day of a Jalali date. Month and day are folded in without checks.
pub(crate) fn jalali_to_jd(date: CalendarDate) -> Result<JulianDay, ConversionError> {
    let info = jalali_year_info(date.year)?;
    let anchor = new_year_anchor(info.gregorian_year(), info.march_day());

    let month = i64::from(date.month);
    let day = i64::from(date.day);
    let jd = anchor.get() + (month - 1) * i64::from(JALALI_FIRST_HALF_DAYS) - month / 7 * (month - 7)
        + day
        - 1;
    trace!(%date, jd, "jalali date encoded");
    Ok(JulianDay::new(jd))
}

/// Jalali date of the Julian Day `jd`.
///
/// The Gregorian year of `jd` fixes a candidate Jalali year; days before its
/// 1 Farvardin belong to the second half of the year before.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn jd_to_jalali(jd: JulianDay) -> Result<CalendarDate, ConversionError> {
    let gregorian = decode(jd, CalendarKind::Gregorian)?;
    let mut year = gregorian.year - JALALI_GREGORIAN_YEAR_OFFSET;
    let info = epoch_info(year)?;
    let anchor = new_year_anchor(gregorian.year, info.march_day());

    let first_half = i64::from(JALALI_FIRST_HALF_DAYS);
    let second_half = i64::from(JALALI_SECOND_HALF_DAYS);

    let mut k = jd.get() - anchor.get();
    if k >= 0 {
        if k <= JALALI_FIRST_HALF_LAST_OFFSET {
            check_year(year)?;
            return Ok(CalendarDate::new(
                year,
                (1 + k / first_half) as u8,
                (k % first_half + 1) as u8,
            ));
        }
        k -= JALALI_FIRST_HALF_LAST_OFFSET + 1;
    } else {
        // Esfand of the previous year ends the day before the anchor
        year -= 1;
        k += 179;
        if info.follows_leap_year() {
            k += 1;
        }
    }

    check_year(year)?;
    Ok(CalendarDate::new(
        year,
        (7 + k / second_half) as u8,
        (k % second_half + 1) as u8,
    ))
}

impl JulianDay {
    /// Julian Day of a Jalali date.
    ///
    /// # Errors
    /// Returns `ConversionError` if the date is not a valid Jalali date within
    /// the supported year span.
    ///
    /// # Example
    ///
    /// ```
    /// use jalali_date::{CalendarDate, JulianDay};
    ///
    /// let jd = JulianDay::from_jalali(CalendarDate::new(1403, 1, 1)).unwrap();
    /// assert_eq!(jd.to_gregorian().unwrap(), CalendarDate::new(2024, 3, 20));
    /// ```
    pub fn from_jalali(date: CalendarDate) -> Result<Self, ConversionError> {
        date.validate_jalali()?;
        jalali_to_jd(date)
    }

    /// The Jalali date of this day.
    ///
    /// # Errors
    /// Returns `ConversionError::YearOutOfRange` if the day falls outside the
    /// supported Jalali year span, or `ConversionError::JulianDayOutOfRange`
    /// outside `MIN_JULIAN_DAY..=MAX_JULIAN_DAY`.
    pub fn to_jalali(self) -> Result<CalendarDate, ConversionError> {
        jd_to_jalali(self)
    }
}
