use crate::consts::{
    CENTURY_CYCLE, DATE_SEPARATOR, DAYS_IN_MONTH, ESFAND, ESFAND_DAYS_COMMON, FEBRUARY,
    FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, JALALI_FIRST_HALF_DAYS, JALALI_SECOND_HALF_DAYS,
    LEAP_YEAR_CYCLE, MAX_MONTH, MIN_DAY,
};
use crate::prelude::*;
use crate::{ConversionError, ParseError};
use std::fmt;
use std::str::FromStr;

/// A `(year, month, day)` triple in the Gregorian, Julian or Jalali calendar.
///
/// The value carries no calendar tag and is not validated on construction;
/// the conversion functions check it against the calendar they read it in.
/// Years are astronomical: 1 BC is `0`, 2 BC is `-1`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{year:04}-{month:02}-{day:02}")]
pub struct CalendarDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl CalendarDate {
    /// Creates a date from its components without validation
    pub const fn new(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Checks the date against the proleptic Gregorian calendar
    ///
    /// # Errors
    /// Returns `ConversionError::InvalidMonth` or `ConversionError::InvalidDay`.
    pub fn validate_gregorian(&self) -> Result<(), ConversionError> {
        check_day(*self, gregorian_days_in_month(self.year, self.month)?)
    }

    /// Checks the date against the Jalali calendar, including the supported year span
    ///
    /// # Errors
    /// Returns `ConversionError::YearOutOfRange`, `ConversionError::InvalidMonth`
    /// or `ConversionError::InvalidDay`.
    pub fn validate_jalali(&self) -> Result<(), ConversionError> {
        check_month(self.month)?;
        let max_day = crate::jalali::jalali_days_in_month(self.year, self.month)?;
        check_day(*self, max_day)
    }
}

fn check_month(month: u8) -> Result<(), ConversionError> {
    if month == 0 || month > MAX_MONTH {
        return Err(ConversionError::InvalidMonth { month });
    }
    Ok(())
}

fn check_day(date: CalendarDate, max_day: u8) -> Result<(), ConversionError> {
    if date.day < MIN_DAY || date.day > max_day {
        return Err(ConversionError::InvalidDay {
            year: date.year,
            month: date.month,
            day: date.day,
            max_day,
        });
    }
    Ok(())
}

impl From<(i32, u8, u8)> for CalendarDate {
    fn from((year, month, day): (i32, u8, u8)) -> Self {
        Self::new(year, month, day)
    }
}

impl From<CalendarDate> for (i32, u8, u8) {
    fn from(date: CalendarDate) -> Self {
        (date.year, date.month, date.day)
    }
}

impl FromStr for CalendarDate {
    type Err = ParseError;

    /// Parses `YYYY-MM-DD`, with an optional leading `-` on the year.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let (negative, body) = match trimmed.strip_prefix(DATE_SEPARATOR) {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        let parts: Vec<&str> = body.split(DATE_SEPARATOR).map(str::trim).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(ParseError::InvalidFormat(format!(
                "Expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, found {} component(s): {trimmed}",
                parts.len()
            )));
        };

        let year: i32 = parse_component(year)?;
        let month: u8 = parse_component(month)?;
        let day: u8 = parse_component(day)?;

        Ok(Self::new(if negative { -year } else { year }, month, day))
    }
}

fn parse_component<T: FromStr>(s: &str) -> Result<T, ParseError> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidFormat(s.to_owned()));
    }
    s.parse::<T>()
        .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Julian Day Number: days since the Julian Period epoch, counted at noon UTC.
///
/// Every conversion in this crate passes through this value.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    Deref,
    From,
    Into,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(transparent)]
pub struct JulianDay(i64);

impl JulianDay {
    #[inline]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn get(self) -> i64 {
        self.0
    }
}

/// The twelve months of the Jalali year
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum PersianMonth {
    Farvardin = 1,
    Ordibehesht,
    Khordad,
    Tir,
    Mordad,
    Shahrivar,
    Mehr,
    Aban,
    Azar,
    Dey,
    Bahman,
    Esfand,
}

impl PersianMonth {
    pub const ALL: [Self; 12] = [
        Self::Farvardin,
        Self::Ordibehesht,
        Self::Khordad,
        Self::Tir,
        Self::Mordad,
        Self::Shahrivar,
        Self::Mehr,
        Self::Aban,
        Self::Azar,
        Self::Dey,
        Self::Bahman,
        Self::Esfand,
    ];

    /// Month number, 1 for Farvardin through 12 for Esfand
    #[inline]
    pub const fn number(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Farvardin => "Farvardin",
            Self::Ordibehesht => "Ordibehesht",
            Self::Khordad => "Khordad",
            Self::Tir => "Tir",
            Self::Mordad => "Mordad",
            Self::Shahrivar => "Shahrivar",
            Self::Mehr => "Mehr",
            Self::Aban => "Aban",
            Self::Azar => "Azar",
            Self::Dey => "Dey",
            Self::Bahman => "Bahman",
            Self::Esfand => "Esfand",
        }
    }

    /// Days in this month; only Esfand depends on `leap`.
    pub const fn days(self, leap: bool) -> u8 {
        match self.number() {
            1..=6 => JALALI_FIRST_HALF_DAYS,
            ESFAND if !leap => ESFAND_DAYS_COMMON,
            _ => JALALI_SECOND_HALF_DAYS,
        }
    }
}

impl TryFrom<u8> for PersianMonth {
    type Error = ConversionError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        check_month(value)?;
        Ok(Self::ALL[usize::from(value - 1)])
    }
}

impl From<PersianMonth> for u8 {
    fn from(month: PersianMonth) -> Self {
        month.number()
    }
}

impl fmt::Display for PersianMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// Helper functions

pub const fn is_gregorian_leap_year(year: i32) -> bool {
    (year.rem_euclid(LEAP_YEAR_CYCLE) == 0 && year.rem_euclid(CENTURY_CYCLE) != 0)
        || year.rem_euclid(GREGORIAN_CYCLE) == 0
}

/// Number of days in `month` of the proleptic Gregorian year `year`.
///
/// # Errors
/// Returns `ConversionError::InvalidMonth` for a month outside `1..=12`.
pub fn gregorian_days_in_month(year: i32, month: u8) -> Result<u8, ConversionError> {
    check_month(month)?;

    if month == FEBRUARY && is_gregorian_leap_year(year) {
        Ok(FEBRUARY_DAYS_LEAP)
    } else {
        Ok(DAYS_IN_MONTH[usize::from(month)])
    }
}
