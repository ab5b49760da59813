//! Julian Day encoder and decoder for the Gregorian and Julian calendars.
//!
//! Hatcher's formulae (Q. Jl. R. Astron. Soc. 25, 1984) in Borkowski's
//! shifted form, good from 1 March -100100 to a few million years ahead.
//! Every large numerator is shifted by [`EPOCH_YEAR_SHIFT`] years so that it
//! stays non-negative; the small month terms `(m - 8) / 6` and `(8 - m) / 6`
//! rely on division truncating toward zero, which is what `/` does on `i64`.

use crate::ConversionError;
use crate::consts::{EPOCH_YEAR_SHIFT, MAX_JULIAN_DAY, MIN_JULIAN_DAY};
use crate::types::{CalendarDate, JulianDay};

/// Which solar calendar a `(year, month, day)` triple is read in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CalendarKind {
    Gregorian,
    Julian,
}

const ENCODE_OFFSET: i64 = 34_840_408;
const DECODE_OFFSET: i64 = 139_361_631;
const GREGORIAN_DECODE_OFFSET: i64 = 183_187_720;
const GREGORIAN_ENCODE_SHIFT: i64 = 752;
const GREGORIAN_DECODE_SHIFT: i64 = 3908;
const DAYS_PER_400_YEARS: i64 = 146_097;
const DAYS_PER_4_YEARS: i64 = 1461;
const DAYS_PER_5_MONTHS: i64 = 153;

/// Julian Day of `date` at noon.
///
/// No range checks: any month or day value is folded into the arithmetic.
pub(crate) fn encode(date: CalendarDate, kind: CalendarKind) -> JulianDay {
    let year = i64::from(date.year);
    let month = i64::from(date.month);
    let day = i64::from(date.day);

    let mut jd = (year + (month - 8) / 6 + EPOCH_YEAR_SHIFT) * DAYS_PER_4_YEARS / 4
        + (DAYS_PER_5_MONTHS * ((month + 9) % 12) + 2) / 5
        + day
        - ENCODE_OFFSET;
    if kind == CalendarKind::Gregorian {
        jd = jd - (year + EPOCH_YEAR_SHIFT + (month - 8) / 6) / 100 * 3 / 4 + GREGORIAN_ENCODE_SHIFT;
    }
    JulianDay::new(jd)
}

/// Calendar date for the Julian Day `jd`.
///
/// # Errors
/// Returns `ConversionError::JulianDayOutOfRange` outside
/// `MIN_JULIAN_DAY..=MAX_JULIAN_DAY`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn decode(jd: JulianDay, kind: CalendarKind) -> Result<CalendarDate, ConversionError> {
    if !(MIN_JULIAN_DAY..=MAX_JULIAN_DAY).contains(&jd.get()) {
        return Err(ConversionError::JulianDayOutOfRange { jd: jd.get() });
    }
    let jd = jd.get();

    let mut j = 4 * jd + DECODE_OFFSET;
    if kind == CalendarKind::Gregorian {
        j = j + (4 * jd + GREGORIAN_DECODE_OFFSET) / DAYS_PER_400_YEARS * 3 / 4 * 4
            - GREGORIAN_DECODE_SHIFT;
    }
    let i = (j % DAYS_PER_4_YEARS) / 4 * 5 + 308;
    let day = (i % DAYS_PER_5_MONTHS) / 5 + 1;
    let month = (i / DAYS_PER_5_MONTHS) % 12 + 1;
    let year = j / DAYS_PER_4_YEARS - EPOCH_YEAR_SHIFT + (8 - month) / 6;
    let year = i32::try_from(year).map_err(|_| ConversionError::JulianDayOutOfRange { jd })?;

    // month is in 1..=12 and day in 1..=31 by construction
    Ok(CalendarDate::new(year, month as u8, day as u8))
}

impl JulianDay {
    /// Julian Day of a proleptic Gregorian date.
    ///
    /// The date is not validated; use [`CalendarDate::validate_gregorian`] first
    /// if the input is untrusted.
    ///
    /// # Example
    ///
    /// ```
    /// use jalali_date::{CalendarDate, JulianDay};
    ///
    /// let jd = JulianDay::from_gregorian(CalendarDate::new(2000, 1, 1));
    /// assert_eq!(jd.get(), 2451545);
    /// ```
    pub fn from_gregorian(date: CalendarDate) -> Self {
        encode(date, CalendarKind::Gregorian)
    }

    /// Julian Day of a proleptic Julian calendar date.
    pub fn from_julian(date: CalendarDate) -> Self {
        encode(date, CalendarKind::Julian)
    }

    /// The proleptic Gregorian date of this day.
    ///
    /// # Errors
    /// Returns `ConversionError::JulianDayOutOfRange` outside
    /// `MIN_JULIAN_DAY..=MAX_JULIAN_DAY`.
    pub fn to_gregorian(self) -> Result<CalendarDate, ConversionError> {
        decode(self, CalendarKind::Gregorian)
    }

    /// The proleptic Julian calendar date of this day.
    ///
    /// # Errors
    /// Returns `ConversionError::JulianDayOutOfRange` outside
    /// `MIN_JULIAN_DAY..=MAX_JULIAN_DAY`.
    pub fn to_julian(self) -> Result<CalendarDate, ConversionError> {
        decode(self, CalendarKind::Julian)
    }
}
