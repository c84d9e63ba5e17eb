use crate::consts::{
    DAYS_IN_WEEK, MAX_HOUR, MAX_MINUTE_SECOND, SECONDS_PER_HOUR, SECONDS_PER_MINUTE,
};
use crate::error::CalendarError;
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The two calendars the engine converts between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum CalendarSystem {
    /// Bikram Sambat
    #[display(fmt = "BS")]
    Bs,
    /// Gregorian (Anno Domini)
    #[display(fmt = "AD")]
    Ad,
}

/// Day of the week, numbered `1..=7` starting from Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Weekday {
    Sunday = 1,
    Monday = 2,
    Tuesday = 3,
    Wednesday = 4,
    Thursday = 5,
    Friday = 6,
    Saturday = 7,
}

impl Weekday {
    /// All weekdays in calendar order, Sunday first.
    pub const ALL: [Self; 7] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// Creates a weekday from its number (`1` = Sunday, `7` = Saturday)
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidWeekday` if the value is not in `1..=7`.
    pub fn new(value: u8) -> Result<Self, CalendarError> {
        match value {
            1..=7 => Ok(Self::ALL[usize::from(value - 1)]),
            _ => Err(CalendarError::InvalidWeekday(value)),
        }
    }

    /// Returns the weekday number (`1` = Sunday)
    #[inline]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Moves the weekday `days` forward (or backward, when negative).
    pub const fn advance(self, days: i64) -> Self {
        let offset = days.rem_euclid(DAYS_IN_WEEK as i64) as u8;
        let index = (self.number() - 1 + offset) % DAYS_IN_WEEK;
        Self::ALL[index as usize]
    }

    /// The following day of the week, wrapping Saturday to Sunday.
    #[inline]
    pub const fn next(self) -> Self {
        self.advance(1)
    }
}

impl TryFrom<u8> for Weekday {
    type Error = CalendarError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Weekday> for u8 {
    fn from(weekday: Weekday) -> Self {
        weekday.number()
    }
}

/// A calendar date as plain numbers, in either calendar, together with its
/// day of the week.
///
/// This is what every core operation takes and returns. Callers own the
/// value and decide whether to keep the returned copy or overwrite their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{:04}-{:02}-{:02}", year, month, day)]
pub struct DateParts {
    pub year:    u16,
    pub month:   u8,
    pub day:     u8,
    pub weekday: Weekday,
}

impl DateParts {
    pub const fn new(year: u16, month: u8, day: u8, weekday: Weekday) -> Self {
        Self {
            year,
            month,
            day,
            weekday,
        }
    }

    /// Returns `(year, month, day)` without the weekday
    pub const fn ymd(&self) -> (u16, u8, u8) {
        (self.year, self.month, self.day)
    }
}

/// Time of day. Midnight is the default.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize,
    Deserialize,
)]
#[display(fmt = "{:02}:{:02}:{:02}", hour, minute, second)]
pub struct TimeParts {
    pub hour:   u8,
    pub minute: u8,
    pub second: u8,
}

impl TimeParts {
    /// Midnight
    pub const MIDNIGHT: Self = Self {
        hour:   0,
        minute: 0,
        second: 0,
    };

    /// Creates a validated time of day
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidHour` or `CalendarError::InvalidMinuteSecond`
    /// for a component out of range.
    pub fn new(hour: u8, minute: u8, second: u8) -> Result<Self, CalendarError> {
        if hour > MAX_HOUR {
            return Err(CalendarError::InvalidHour(hour));
        }
        if minute > MAX_MINUTE_SECOND {
            return Err(CalendarError::InvalidMinuteSecond {
                field: "minute",
                value: minute,
            });
        }
        if second > MAX_MINUTE_SECOND {
            return Err(CalendarError::InvalidMinuteSecond {
                field: "second",
                value: second,
            });
        }
        Ok(Self {
            hour,
            minute,
            second,
        })
    }

    pub(crate) const fn seconds_of_day(self) -> i64 {
        self.hour as i64 * SECONDS_PER_HOUR
            + self.minute as i64 * SECONDS_PER_MINUTE
            + self.second as i64
    }

    /// Inverse of `seconds_of_day`; `secs` must be in `0..86_400`.
    pub(crate) const fn from_seconds_of_day(secs: i64) -> Self {
        Self {
            hour:   (secs / SECONDS_PER_HOUR) as u8,
            minute: (secs % SECONDS_PER_HOUR / SECONDS_PER_MINUTE) as u8,
            second: (secs % SECONDS_PER_MINUTE) as u8,
        }
    }
}

/// Unit of a calendar shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Unit {
    #[display(fmt = "year")]
    Year,
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "week")]
    Week,
    #[display(fmt = "day")]
    Day,
    #[display(fmt = "hour")]
    Hour,
    #[display(fmt = "minute")]
    Minute,
    #[display(fmt = "second")]
    Second,
}

impl FromStr for Unit {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "year" | "years" => Ok(Self::Year),
            "month" | "months" => Ok(Self::Month),
            "week" | "weeks" => Ok(Self::Week),
            "day" | "days" => Ok(Self::Day),
            "hour" | "hours" => Ok(Self::Hour),
            "minute" | "minutes" => Ok(Self::Minute),
            "second" | "seconds" => Ok(Self::Second),
            other => Err(CalendarError::UnsupportedUnit(other.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekday_new_valid() {
        for n in 1..=7 {
            let weekday = Weekday::new(n).unwrap();
            assert_eq!(weekday.number(), n);
        }
        assert_eq!(Weekday::new(1).unwrap(), Weekday::Sunday);
        assert_eq!(Weekday::new(7).unwrap(), Weekday::Saturday);
    }

    #[test]
    fn test_weekday_new_invalid() {
        assert!(matches!(Weekday::new(0), Err(CalendarError::InvalidWeekday(0))));
        assert!(matches!(Weekday::new(8), Err(CalendarError::InvalidWeekday(8))));
    }

    #[test]
    fn test_weekday_advance_cases() {
        struct TestCase {
            start:    Weekday,
            days:     i64,
            expected: Weekday,
        }

        let cases = [
            TestCase {
                start:    Weekday::Sunday,
                days:     0,
                expected: Weekday::Sunday,
            },
            TestCase {
                start:    Weekday::Saturday,
                days:     1,
                expected: Weekday::Sunday,
            },
            TestCase {
                start:    Weekday::Wednesday,
                days:     10,
                expected: Weekday::Saturday,
            },
            TestCase {
                start:    Weekday::Sunday,
                days:     -1,
                expected: Weekday::Saturday,
            },
            TestCase {
                start:    Weekday::Friday,
                days:     -13,
                expected: Weekday::Saturday,
            },
            TestCase {
                start:    Weekday::Monday,
                days:     i64::MAX,
                expected: Weekday::Monday.advance(i64::MAX % 7),
            },
        ];

        for case in &cases {
            assert_eq!(
                case.start.advance(case.days),
                case.expected,
                "{} advanced by {}",
                case.start,
                case.days
            );
        }
    }

    #[test]
    fn test_weekday_next_wraps() {
        let mut weekday = Weekday::Sunday;
        for _ in 0..7 {
            weekday = weekday.next();
        }
        assert_eq!(weekday, Weekday::Sunday);
        assert_eq!(Weekday::Saturday.next(), Weekday::Sunday);
    }

    #[test]
    fn test_weekday_display_and_serde() {
        assert_eq!(Weekday::Thursday.to_string(), "Thursday");

        let json = serde_json::to_string(&Weekday::Friday).unwrap();
        assert_eq!(json, "6");
        let parsed: Weekday = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Weekday::Friday);

        let result: Result<Weekday, _> = serde_json::from_str("9");
        assert!(result.is_err());
    }

    #[test]
    fn test_date_parts_display() {
        let parts = DateParts::new(2082, 6, 7, Weekday::Tuesday);
        assert_eq!(parts.to_string(), "2082-06-07");
        assert_eq!(parts.ymd(), (2082, 6, 7));
    }

    #[test]
    fn test_time_parts_new() {
        assert!(TimeParts::new(0, 0, 0).is_ok());
        assert!(TimeParts::new(23, 59, 59).is_ok());
        assert!(matches!(TimeParts::new(24, 0, 0), Err(CalendarError::InvalidHour(24))));
        assert!(matches!(
            TimeParts::new(10, 60, 0),
            Err(CalendarError::InvalidMinuteSecond { field: "minute", value: 60 })
        ));
        assert!(matches!(
            TimeParts::new(10, 0, 61),
            Err(CalendarError::InvalidMinuteSecond { field: "second", value: 61 })
        ));
    }

    #[test]
    fn test_time_parts_seconds_of_day() {
        let time = TimeParts::new(10, 30, 45).unwrap();
        assert_eq!(time.seconds_of_day(), 37_845);
        assert_eq!(TimeParts::from_seconds_of_day(37_845), time);
        assert_eq!(TimeParts::from_seconds_of_day(0), TimeParts::MIDNIGHT);
        assert_eq!(time.to_string(), "10:30:45");
    }

    #[test]
    fn test_unit_from_str() {
        assert_eq!("day".parse::<Unit>().unwrap(), Unit::Day);
        assert_eq!("weeks".parse::<Unit>().unwrap(), Unit::Week);
        assert_eq!(" month ".parse::<Unit>().unwrap(), Unit::Month);
        assert_eq!("second".parse::<Unit>().unwrap(), Unit::Second);

        let result = "fortnight".parse::<Unit>();
        assert!(matches!(result, Err(CalendarError::UnsupportedUnit(ref u)) if u == "fortnight"));
    }
}
