//! Bikram Sambat (BS) ↔ Gregorian (AD) date conversion and calendar-aware
//! arithmetic.
//!
//! BS month lengths follow no arithmetic rule, so everything is driven by a
//! table of month lengths (see [`table`]). The engine is [`Calendar`]; the
//! free functions in this crate and [`NepaliDate`] use the process-wide
//! calendar returned by [`calendar::global`].
//!
//! ```
//! use bikram_sambat::{NepaliDate, Unit, Weekday};
//!
//! let date = NepaliDate::from_ad(2020, 1, 1).unwrap();
//! assert_eq!(date.to_string(), "2076-09-16");
//! assert_eq!(date.weekday(), Weekday::Wednesday);
//!
//! let later = date.checked_add(1, Unit::Month).unwrap();
//! assert_eq!(later.to_string(), "2076-10-16");
//! ```

#[macro_use]
mod logging;

mod arithmetic;
pub mod calendar;
mod consts;
mod converter;
pub mod day_count;
mod error;
pub mod gregorian;
pub mod locale;
mod prelude;
pub mod table;
mod types;
mod validator;

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
struct ReadmeDoctests;

pub use arithmetic::quantity_from_f64;
pub use calendar::{Calendar, EpochAnchor};
pub use consts::*;
pub use error::CalendarError;
pub use locale::Locale;
pub use table::{CalendarTable, TableSource, YearRecord};
pub use types::{CalendarSystem, DateParts, TimeParts, Unit, Weekday};
pub use validator::{is_valid_hour, is_valid_minute_second, is_valid_month, validate_time};

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Converts an AD date to BS using the global calendar.
///
/// # Errors
/// See [`Calendar::ad_to_bs`].
pub fn ad_to_bs(year: u16, month: u8, day: u8) -> Result<DateParts, CalendarError> {
    calendar::global().ad_to_bs(year, month, day)
}

/// Converts a BS date to AD using the global calendar.
///
/// # Errors
/// See [`Calendar::bs_to_ad`].
pub fn bs_to_ad(year: u16, month: u8, day: u8) -> Result<DateParts, CalendarError> {
    calendar::global().bs_to_ad(year, month, day)
}

/// # Errors
/// See [`Calendar::day_of_week`].
pub fn day_of_week(year: u16, month: u8, day: u8) -> Result<Weekday, CalendarError> {
    calendar::global().day_of_week(year, month, day)
}

pub fn days_in_bs_month(year: u16, month: u8) -> u8 {
    calendar::global().days_in_bs_month(year, month)
}

/// # Errors
/// See [`Calendar::add_days`].
pub fn add_days(date: DateParts, days: u32) -> Result<DateParts, CalendarError> {
    calendar::global().add_days(date, days)
}

/// # Errors
/// See [`Calendar::sub_days`].
pub fn sub_days(date: DateParts, days: u32) -> Result<DateParts, CalendarError> {
    calendar::global().sub_days(date, days)
}

/// # Errors
/// See [`Calendar::add_weeks`].
pub fn add_weeks(date: DateParts, weeks: u32) -> Result<DateParts, CalendarError> {
    calendar::global().add_weeks(date, weeks)
}

/// # Errors
/// See [`Calendar::sub_weeks`].
pub fn sub_weeks(date: DateParts, weeks: u32) -> Result<DateParts, CalendarError> {
    calendar::global().sub_weeks(date, weeks)
}

/// # Errors
/// See [`Calendar::add_months`].
pub fn add_months(date: DateParts, months: u32) -> Result<DateParts, CalendarError> {
    calendar::global().add_months(date, months)
}

/// # Errors
/// See [`Calendar::sub_months`].
pub fn sub_months(date: DateParts, months: u32) -> Result<DateParts, CalendarError> {
    calendar::global().sub_months(date, months)
}

/// # Errors
/// See [`Calendar::add_years`].
pub fn add_years(date: DateParts, years: u16) -> Result<DateParts, CalendarError> {
    calendar::global().add_years(date, years)
}

/// # Errors
/// See [`Calendar::sub_years`].
pub fn sub_years(date: DateParts, years: u16) -> Result<DateParts, CalendarError> {
    calendar::global().sub_years(date, years)
}

/// # Errors
/// See [`Calendar::shift`].
pub fn shift(
    date: DateParts,
    time: TimeParts,
    amount: i64,
    unit: Unit,
) -> Result<(DateParts, TimeParts), CalendarError> {
    calendar::global().shift(date, time, amount, unit)
}

/// # Errors
/// See [`Calendar::validate_bs`].
pub fn validate_bs(year: u16, month: u8, day: u8) -> Result<(), CalendarError> {
    calendar::global().validate_bs(year, month, day)
}

/// # Errors
/// See [`Calendar::validate_ad`].
pub fn validate_ad(year: u16, month: u8, day: u8) -> Result<(), CalendarError> {
    calendar::global().validate_ad(year, month, day)
}

pub fn is_valid_bs_year(year: u16) -> bool {
    calendar::global().is_valid_bs_year(year)
}

pub fn is_valid_bs_day(year: u16, month: u8, day: u8) -> bool {
    calendar::global().is_valid_bs_day(year, month, day)
}

/// A BS date with a time of day.
///
/// The weekday is always derived from the date by the global calendar; there
/// is no way to set it independently. Shifts come in two forms:
/// [`NepaliDate::checked_add`] / [`NepaliDate::checked_sub`] return a new
/// value, [`NepaliDate::shift`] updates in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NepaliDate {
    date: DateParts,
    time: TimeParts,
}

impl NepaliDate {
    /// Creates a BS date at midnight.
    ///
    /// # Errors
    /// Returns a range error if the date is not in the calendar table.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, CalendarError> {
        let weekday = calendar::global().day_of_week(year, month, day)?;
        Ok(Self {
            date: DateParts::new(year, month, day, weekday),
            time: TimeParts::MIDNIGHT,
        })
    }

    /// Returns the same date at the given time of day.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidHour` or `CalendarError::InvalidMinuteSecond`.
    pub fn with_time(self, hour: u8, minute: u8, second: u8) -> Result<Self, CalendarError> {
        Ok(Self {
            time: validate_time(hour, minute, second)?,
            ..self
        })
    }

    /// Converts an AD date. The result is at midnight; use
    /// [`NepaliDate::from_ad_datetime`] to carry a time of day over.
    ///
    /// # Errors
    /// See [`Calendar::ad_to_bs`].
    pub fn from_ad(year: u16, month: u8, day: u8) -> Result<Self, CalendarError> {
        Ok(Self {
            date: calendar::global().ad_to_bs(year, month, day)?,
            time: TimeParts::MIDNIGHT,
        })
    }

    /// Converts an AD date and time of day. The clock fields are kept as is.
    ///
    /// # Errors
    /// See [`Calendar::ad_to_bs`] and [`validate_time`].
    pub fn from_ad_datetime(
        year: u16,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> Result<Self, CalendarError> {
        Self::from_ad(year, month, day)?.with_time(hour, minute, second)
    }

    /// The current date and time in the system time zone.
    ///
    /// # Errors
    /// Returns a range error if today is outside the calendar table.
    pub fn now() -> Result<Self, CalendarError> {
        Self::from_civil(jiff::Zoned::now().datetime())
    }

    fn from_civil(dt: jiff::civil::DateTime) -> Result<Self, CalendarError> {
        // Years before AD 1 map to 0, which no table covers.
        let year = u16::try_from(dt.year()).unwrap_or(0);
        Self::from_ad_datetime(
            year,
            dt.month().unsigned_abs(),
            dt.day().unsigned_abs(),
            dt.hour().unsigned_abs(),
            dt.minute().unsigned_abs(),
            dt.second().unsigned_abs(),
        )
    }

    /// First supported date
    pub fn min() -> Self {
        Self {
            date: calendar::global().first_bs_date(),
            time: TimeParts::MIDNIGHT,
        }
    }

    /// Last supported date, at midnight
    pub fn max() -> Self {
        Self {
            date: calendar::global().last_bs_date(),
            time: TimeParts::MIDNIGHT,
        }
    }

    pub const fn year(&self) -> u16 {
        self.date.year
    }

    pub const fn month(&self) -> u8 {
        self.date.month
    }

    pub const fn day(&self) -> u8 {
        self.date.day
    }

    pub const fn weekday(&self) -> Weekday {
        self.date.weekday
    }

    pub const fn hour(&self) -> u8 {
        self.time.hour
    }

    pub const fn minute(&self) -> u8 {
        self.time.minute
    }

    pub const fn second(&self) -> u8 {
        self.time.second
    }

    pub const fn date_parts(&self) -> DateParts {
        self.date
    }

    pub const fn time_parts(&self) -> TimeParts {
        self.time
    }

    /// Length of this date's month
    pub fn days_in_month(&self) -> u8 {
        calendar::global().days_in_bs_month(self.date.year, self.date.month)
    }

    /// The AD date of the same day.
    pub fn to_ad(&self) -> DateParts {
        let calendar = calendar::global();
        calendar.walk_ad(calendar.bs_offset(self.date.year, self.date.month, self.date.day))
    }

    /// Returns a copy moved `amount` units forward (backward when negative).
    ///
    /// # Errors
    /// Returns `CalendarError::ResultOutOfRange` if the result leaves the
    /// calendar table.
    pub fn checked_add(&self, amount: i64, unit: Unit) -> Result<Self, CalendarError> {
        let (date, time) = calendar::global().shift(self.date, self.time, amount, unit)?;
        Ok(Self { date, time })
    }

    /// Returns a copy moved `amount` units backward (forward when negative).
    ///
    /// # Errors
    /// Same as [`NepaliDate::checked_add`].
    pub fn checked_sub(&self, amount: i64, unit: Unit) -> Result<Self, CalendarError> {
        let amount = amount.checked_neg().ok_or(CalendarError::ResultOutOfRange)?;
        self.checked_add(amount, unit)
    }

    /// Moves this value in place. On error it is left unchanged.
    ///
    /// # Errors
    /// Same as [`NepaliDate::checked_add`].
    pub fn shift(&mut self, amount: i64, unit: Unit) -> Result<(), CalendarError> {
        *self = self.checked_add(amount, unit)?;
        Ok(())
    }

    /// # Errors
    /// Returns a range error if the resulting date does not exist.
    pub fn with_year(&self, year: u16) -> Result<Self, CalendarError> {
        Self::new(year, self.date.month, self.date.day).map(|date| Self { time: self.time, ..date })
    }

    /// # Errors
    /// Returns a range error if the resulting date does not exist.
    pub fn with_month(&self, month: u8) -> Result<Self, CalendarError> {
        Self::new(self.date.year, month, self.date.day).map(|date| Self { time: self.time, ..date })
    }

    /// # Errors
    /// Returns a range error if the resulting date does not exist.
    pub fn with_day(&self, day: u8) -> Result<Self, CalendarError> {
        Self::new(self.date.year, self.date.month, day).map(|date| Self { time: self.time, ..date })
    }

    /// Compares the dates only, ignoring the time of day.
    pub fn cmp_date(&self, other: &Self) -> Ordering {
        self.date.ymd().cmp(&other.date.ymd())
    }

    /// Display text with digits rendered for `locale`.
    pub fn localized(&self, locale: Locale) -> String {
        locale::localize_digits(&self.to_string(), locale)
    }

    pub const fn month_name(&self, locale: Locale) -> &'static str {
        locale::month_name(self.date.month, locale)
    }

    pub const fn weekday_name(&self, locale: Locale) -> &'static str {
        locale::weekday_name(self.date.weekday, locale)
    }
}

impl Default for NepaliDate {
    fn default() -> Self {
        Self::min()
    }
}

impl PartialOrd for NepaliDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for NepaliDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_date(other).then_with(|| self.time.cmp(&other.time))
    }
}

impl fmt::Display for NepaliDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.date)?;
        if self.time != TimeParts::MIDNIGHT {
            write!(f, "{DATE_TIME_SEPARATOR}{}", self.time)?;
        }
        Ok(())
    }
}

impl FromStr for NepaliDate {
    type Err = CalendarError;

    /// Parses `YYYY-MM-DD`, optionally followed by ` HH:MM` or ` HH:MM:SS`.
    /// Digits may be ASCII or Devanagari.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(CalendarError::EmptyInput);
        }
        let normalized = locale::from_devanagari_digits(trimmed);

        let (date_text, time_text) = match normalized.split_once(DATE_TIME_SEPARATOR) {
            Some((date, time)) => (date, Some(time.trim())),
            None => (normalized.as_str(), None),
        };

        let parts: Vec<&str> = date_text.split(DATE_SEPARATOR).collect();
        let [year, month, day] = parts[..] else {
            return Err(CalendarError::InvalidFormat(format!(
                "expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, got {date_text}"
            )));
        };
        let date = Self::new(parse_number(year)?, parse_number(month)?, parse_number(day)?)?;

        let Some(time_text) = time_text else {
            return Ok(date);
        };
        let parts: Vec<&str> = time_text.split(TIME_SEPARATOR).collect();
        match parts[..] {
            [hour, minute] => date.with_time(parse_number(hour)?, parse_number(minute)?, 0),
            [hour, minute, second] => {
                date.with_time(parse_number(hour)?, parse_number(minute)?, parse_number(second)?)
            },
            _ => Err(CalendarError::InvalidFormat(format!(
                "expected HH{TIME_SEPARATOR}MM[{TIME_SEPARATOR}SS], got {time_text}"
            ))),
        }
    }
}

/// Parses an all-digit component; signs and blanks are rejected.
fn parse_number<T: FromStr>(s: &str) -> Result<T, CalendarError> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CalendarError::InvalidFormat(s.to_owned()));
    }
    s.parse::<T>().map_err(|_| CalendarError::InvalidFormat(s.to_owned()))
}

impl serde::Serialize for NepaliDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for NepaliDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
