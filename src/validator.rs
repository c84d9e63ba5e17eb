//! Boolean and fallible predicates guarding every entry point.
//!
//! Year and day checks depend on the calendar table and live on
//! [`Calendar`]; month and time-of-day checks are table independent.

use crate::calendar::Calendar;
use crate::consts::{FIRST_MONTH, MAX_HOUR, MAX_MINUTE_SECOND, MIN_DAY, MONTHS_IN_YEAR};
use crate::error::CalendarError;
use crate::gregorian;
use crate::types::{CalendarSystem, TimeParts};

#[inline]
pub const fn is_valid_month(month: u8) -> bool {
    month >= FIRST_MONTH && month <= MONTHS_IN_YEAR
}

#[inline]
pub const fn is_valid_hour(hour: u8) -> bool {
    hour <= MAX_HOUR
}

#[inline]
pub const fn is_valid_minute_second(value: u8) -> bool {
    value <= MAX_MINUTE_SECOND
}

/// Checks a time of day component by component.
///
/// # Errors
/// Returns `CalendarError::InvalidHour` or `CalendarError::InvalidMinuteSecond`
/// naming the first component out of range.
pub fn validate_time(hour: u8, minute: u8, second: u8) -> Result<TimeParts, CalendarError> {
    TimeParts::new(hour, minute, second)
}

impl Calendar {
    pub fn is_valid_bs_year(&self, year: u16) -> bool {
        self.table.contains_year(year)
    }

    /// Whether any day of the AD `year` is convertible.
    pub fn is_valid_ad_year(&self, year: u16) -> bool {
        (self.epoch.ad.0..=self.last_ad.year).contains(&year)
    }

    /// Whether `day` exists in BS `month` of `year`. False for any year or
    /// month outside the table.
    pub fn is_valid_bs_day(&self, year: u16, month: u8, day: u8) -> bool {
        day >= MIN_DAY && day <= self.table.days_in_month(year, month)
    }

    /// Whether `day` exists in AD `month` of `year`.
    pub fn is_valid_ad_day(&self, year: u16, month: u8, day: u8) -> bool {
        day >= MIN_DAY && day <= gregorian::days_in_month(year, month)
    }

    /// Checks that the BS date exists in the table.
    ///
    /// # Errors
    /// Returns the error for the first component out of range: year, then
    /// month, then day.
    pub fn validate_bs(&self, year: u16, month: u8, day: u8) -> Result<(), CalendarError> {
        if !self.is_valid_bs_year(year) {
            return Err(CalendarError::YearOutOfRange {
                system: CalendarSystem::Bs,
                year,
                min: self.table.base_year(),
                max: self.table.last_year(),
            });
        }
        if !is_valid_month(month) {
            return Err(CalendarError::InvalidMonth(month));
        }
        if !self.is_valid_bs_day(year, month, day) {
            return Err(CalendarError::InvalidDay { year, month, day });
        }
        Ok(())
    }

    /// Checks that the AD date exists and lies within the supported span.
    ///
    /// The first and last supported AD years are only partially covered, so
    /// a real date in one of them can still fail with
    /// `CalendarError::DateOutOfRange`.
    ///
    /// # Errors
    /// Returns the error for the first component out of range: year, then
    /// month, then day, then the span itself.
    pub fn validate_ad(&self, year: u16, month: u8, day: u8) -> Result<(), CalendarError> {
        if !self.is_valid_ad_year(year) {
            return Err(CalendarError::YearOutOfRange {
                system: CalendarSystem::Ad,
                year,
                min: self.epoch.ad.0,
                max: self.last_ad.year,
            });
        }
        if !is_valid_month(month) {
            return Err(CalendarError::InvalidMonth(month));
        }
        if !self.is_valid_ad_day(year, month, day) {
            return Err(CalendarError::InvalidDay { year, month, day });
        }
        let date = (year, month, day);
        if date < self.epoch.ad || date > self.last_ad.ymd() {
            return Err(CalendarError::DateOutOfRange {
                system: CalendarSystem::Ad,
                year,
                month,
                day,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_month_bounds() {
        assert!(!is_valid_month(0));
        assert!(is_valid_month(1));
        assert!(is_valid_month(12));
        assert!(!is_valid_month(13));
    }

    #[test]
    fn test_is_valid_hour_bounds() {
        assert!(is_valid_hour(0));
        assert!(is_valid_hour(23));
        assert!(!is_valid_hour(24));
    }

    #[test]
    fn test_is_valid_minute_second_bounds() {
        assert!(is_valid_minute_second(0));
        assert!(is_valid_minute_second(59));
        assert!(!is_valid_minute_second(60));
    }

    #[test]
    fn test_validate_time() {
        assert_eq!(validate_time(23, 59, 59).unwrap().to_string(), "23:59:59");
        assert!(matches!(validate_time(24, 0, 0), Err(CalendarError::InvalidHour(24))));
        assert!(matches!(
            validate_time(0, 0, 60),
            Err(CalendarError::InvalidMinuteSecond { field: "second", .. })
        ));
    }

    #[test]
    fn test_bs_year_bounds() {
        let calendar = Calendar::bundled();
        assert!(!calendar.is_valid_bs_year(1999));
        assert!(calendar.is_valid_bs_year(2000));
        assert!(calendar.is_valid_bs_year(2090));
        assert!(!calendar.is_valid_bs_year(2091));
    }

    #[test]
    fn test_ad_year_bounds() {
        let calendar = Calendar::bundled();
        assert!(!calendar.is_valid_ad_year(1942));
        assert!(calendar.is_valid_ad_year(1943));
        assert!(calendar.is_valid_ad_year(2034));
        assert!(!calendar.is_valid_ad_year(2035));
    }

    #[test]
    fn test_bs_day_bounds() {
        let calendar = Calendar::bundled();
        assert!(!calendar.is_valid_bs_day(2082, 6, 0));
        assert!(calendar.is_valid_bs_day(2082, 6, 31));
        assert!(!calendar.is_valid_bs_day(2082, 6, 32));
        assert!(calendar.is_valid_bs_day(2082, 3, 32));
        assert!(!calendar.is_valid_bs_day(2082, 13, 1));
        assert!(!calendar.is_valid_bs_day(2091, 1, 1));
    }

    #[test]
    fn test_ad_day_bounds() {
        let calendar = Calendar::bundled();
        assert!(calendar.is_valid_ad_day(2024, 2, 29));
        assert!(!calendar.is_valid_ad_day(2023, 2, 29));
        assert!(!calendar.is_valid_ad_day(2023, 4, 31));
        assert!(!calendar.is_valid_ad_day(2023, 1, 0));
    }

    #[test]
    fn test_validate_bs_reports_first_failure() {
        let calendar = Calendar::bundled();
        assert!(calendar.validate_bs(2082, 6, 17).is_ok());
        assert!(matches!(
            calendar.validate_bs(2091, 13, 40),
            Err(CalendarError::YearOutOfRange { year: 2091, .. })
        ));
        assert!(matches!(calendar.validate_bs(2082, 0, 40), Err(CalendarError::InvalidMonth(0))));
        assert_eq!(
            calendar.validate_bs(2082, 12, 31),
            Err(CalendarError::InvalidDay {
                year:  2082,
                month: 12,
                day:   31,
            })
        );
    }

    #[test]
    fn test_validate_ad_partial_years() {
        let calendar = Calendar::bundled();
        assert!(calendar.validate_ad(1943, 4, 14).is_ok());
        assert!(calendar.validate_ad(2034, 4, 13).is_ok());
        assert!(matches!(
            calendar.validate_ad(1943, 1, 1),
            Err(CalendarError::DateOutOfRange { .. })
        ));
        assert!(matches!(
            calendar.validate_ad(2034, 12, 31),
            Err(CalendarError::DateOutOfRange { .. })
        ));
        assert!(matches!(calendar.validate_ad(2020, 13, 1), Err(CalendarError::InvalidMonth(13))));
        assert!(matches!(
            calendar.validate_ad(2035, 1, 1),
            Err(CalendarError::YearOutOfRange {
                system: CalendarSystem::Ad,
                min: 1943,
                max: 2034,
                ..
            })
        ));
    }
}
