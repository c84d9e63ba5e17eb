//! Error type shared by every fallible operation in the crate.

use crate::types::CalendarSystem;

/// Error type for conversion, arithmetic, validation and parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Year lies outside the span covered by the calendar table.
    #[error("Supported {system} years: {min}-{max}, got {year}")]
    YearOutOfRange {
        system: CalendarSystem,
        year:   u16,
        min:    u16,
        max:    u16,
    },

    /// Month is not in `1..=12`.
    #[error("Invalid month {0}. Supported months: 1-12")]
    InvalidMonth(u8),

    /// Day is zero or exceeds the length of its month.
    #[error("Invalid day {day} for month {month} in year {year}")]
    InvalidDay { year: u16, month: u8, day: u8 },

    /// A well-formed date that falls before the first or after the last
    /// supported day.
    #[error("{system} date {year:04}-{month:02}-{day:02} is outside the supported range")]
    DateOutOfRange {
        system: CalendarSystem,
        year:   u16,
        month:  u8,
        day:    u8,
    },

    /// Weekday number is not in `1..=7` (Sunday = 1).
    #[error("Invalid weekday {0}. Supported weekdays: 1-7")]
    InvalidWeekday(u8),

    #[error("Invalid hour {0}. Supported hours: 0-23")]
    InvalidHour(u8),

    #[error("Invalid {field} {value}. Supported values: 0-59")]
    InvalidMinuteSecond { field: &'static str, value: u8 },

    #[error("Unsupported unit: {0}")]
    UnsupportedUnit(String),

    #[error("Unsupported locale: {0}")]
    UnsupportedLocale(String),

    /// Amount handed to arithmetic is NaN, infinite, fractional or too large.
    #[error("Invalid quantity {0}: expected a finite whole number")]
    InvalidQuantity(String),

    /// Arithmetic would walk past the first or last month of the table.
    #[error("Result is outside the supported calendar range")]
    ResultOutOfRange,

    #[error("Invalid calendar table: {0}")]
    InvalidTable(String),

    /// The global calendar was already initialized.
    #[error("Global calendar is already installed")]
    AlreadyInstalled,

    #[error("Invalid date format: {0}")]
    InvalidFormat(String),

    #[error("Empty date string")]
    EmptyInput,
}
