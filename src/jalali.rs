//! Jalali leap years and new-year epochs.
//!
//! The Jalali leap rule follows an irregular cycle, so it is evaluated from
//! [`BREAKS`]: between two consecutive break years leap years recur in
//! 33-year sub-cycles (eight leap years each), and the table records where a
//! sub-cycle is cut short.

use crate::ConversionError;
use crate::consts::{
    BREAKS, JALALI_GREGORIAN_YEAR_OFFSET, JALALI_SUB_CYCLE, JALALI_SUB_CYCLE_LEAPS, MAX_JALALI_YEAR,
    MIN_JALALI_YEAR,
};
use crate::types::PersianMonth;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Where a Jalali year sits in the leap cycle and on which day of March it begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JalaliYearInfo {
    years_since_leap: u8,
    march_day: i32,
    gregorian_year: i32,
}

impl JalaliYearInfo {
    /// Years elapsed since the most recent leap year, `0..=4`; `0` for a leap year.
    #[inline]
    pub const fn years_since_leap(&self) -> u8 {
        self.years_since_leap
    }

    /// Whether the year has 366 days
    #[inline]
    pub const fn is_leap(&self) -> bool {
        self.years_since_leap == 0
    }

    /// Whether the preceding Jalali year had 366 days
    #[inline]
    pub const fn follows_leap_year(&self) -> bool {
        self.years_since_leap == 1
    }

    /// Day of March (Gregorian) on which 1 Farvardin falls
    #[inline]
    pub const fn march_day(&self) -> i32 {
        self.march_day
    }

    /// Gregorian year in which the Jalali year begins
    #[inline]
    pub const fn gregorian_year(&self) -> i32 {
        self.gregorian_year
    }
}

/// Leap-cycle position and epoch of the Jalali year `year`.
///
/// # Errors
/// Returns `ConversionError::YearOutOfRange` outside `MIN_JALALI_YEAR..=MAX_JALALI_YEAR`.
///
/// # Example
///
/// ```
/// use jalali_date::jalali_year_info;
///
/// let info = jalali_year_info(1403).unwrap();
/// assert!(info.is_leap());
/// assert_eq!(info.gregorian_year(), 2024);
/// assert_eq!(info.march_day(), 20);
/// ```
pub fn jalali_year_info(year: i32) -> Result<JalaliYearInfo, ConversionError> {
    check_year(year)?;
    epoch_info(year)
}

/// Whether the Jalali year `year` has 366 days.
///
/// # Errors
/// Returns `ConversionError::YearOutOfRange` outside the supported span.
pub fn is_jalali_leap_year(year: i32) -> Result<bool, ConversionError> {
    Ok(jalali_year_info(year)?.is_leap())
}

/// Number of days in `month` of the Jalali year `year`.
///
/// # Errors
/// Returns `ConversionError::InvalidMonth` or `ConversionError::YearOutOfRange`.
pub fn jalali_days_in_month(year: i32, month: u8) -> Result<u8, ConversionError> {
    let month = PersianMonth::try_from(month)?;
    Ok(month.days(is_jalali_leap_year(year)?))
}

/// Number of days in the Jalali year `year`, 365 or 366.
///
/// # Errors
/// Returns `ConversionError::YearOutOfRange` outside the supported span.
pub fn jalali_days_in_year(year: i32) -> Result<u16, ConversionError> {
    Ok(if is_jalali_leap_year(year)? { 366 } else { 365 })
}

pub(crate) fn check_year(year: i32) -> Result<(), ConversionError> {
    if !(MIN_JALALI_YEAR..=MAX_JALALI_YEAR).contains(&year) {
        debug!(year, "jalali year outside supported range");
        return Err(ConversionError::YearOutOfRange { year });
    }
    Ok(())
}

/// Like [`jalali_year_info`], but also accepts the closing break year.
///
/// The epoch of the closing year is still well defined and is needed to place
/// Gregorian dates that fall in the last Jalali months of the table.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn epoch_info(year: i32) -> Result<JalaliYearInfo, ConversionError> {
    let first = BREAKS[0];
    let last = BREAKS[BREAKS.len() - 1];
    if year < first || year > last {
        debug!(year, first, last, "jalali year outside break table");
        return Err(ConversionError::YearOutOfRange { year });
    }

    let jy = i64::from(year);
    let gy = jy + i64::from(JALALI_GREGORIAN_YEAR_OFFSET);

    // Leap days from AD 621 to the start of the interval holding `jy`
    let mut leap_j: i64 = -14;
    let mut jp = i64::from(first);
    let mut jump = 0;
    for &jm in &BREAKS[1..] {
        let jm = i64::from(jm);
        jump = jm - jp;
        if jy < jm {
            break;
        }
        leap_j += jump / JALALI_SUB_CYCLE * JALALI_SUB_CYCLE_LEAPS + (jump % JALALI_SUB_CYCLE) / 4;
        jp = jm;
    }

    let mut n = jy - jp;
    leap_j += n / JALALI_SUB_CYCLE * JALALI_SUB_CYCLE_LEAPS + ((n % JALALI_SUB_CYCLE) + 3) / 4;
    if jump % JALALI_SUB_CYCLE == 4 && jump - n == 4 {
        leap_j += 1;
    }

    // Same count in the Gregorian calendar up to `gy`
    let leap_g = gy / 4 - (gy / 100 + 1) * 3 / 4 - 150;
    let march_day = 20 + leap_j - leap_g;

    if jump - n < 6 {
        n = n - jump + (jump + 4) / JALALI_SUB_CYCLE * JALALI_SUB_CYCLE;
    }
    let cycle_position = (n + 1) % JALALI_SUB_CYCLE - 1;
    let years_since_leap = if cycle_position < 0 { 4 } else { cycle_position % 4 };

    Ok(JalaliYearInfo {
        years_since_leap: years_since_leap as u8,
        march_day: march_day as i32,
        gregorian_year: gy as i32,
    })
}
