//! AD ↔ BS conversion.
//!
//! Both directions count the days between the input and the epoch, then walk
//! forward from the epoch's date in the other calendar. The walk jumps a
//! whole month whenever the remaining count reaches past the month's end, and
//! advances the weekday by the full count, so the result and weekday equal a
//! day-by-day walk.

use crate::calendar::Calendar;
use crate::consts::{FIRST_MONTH, MIN_DAY, MONTHS_IN_YEAR};
use crate::day_count;
use crate::error::CalendarError;
use crate::gregorian;
use crate::types::{CalendarSystem, DateParts, Weekday};

impl Calendar {
    /// Converts an AD date to BS.
    ///
    /// # Errors
    /// Returns a range error if the AD date is malformed or outside the
    /// span covered by the calendar table.
    pub fn ad_to_bs(&self, year: u16, month: u8, day: u8) -> Result<DateParts, CalendarError> {
        self.validate_ad(year, month, day)?;
        let offset = self.ad_offset(year, month, day);
        self.walk_bs(offset).ok_or(CalendarError::DateOutOfRange {
            system: CalendarSystem::Ad,
            year,
            month,
            day,
        })
    }

    /// Converts a BS date to AD.
    ///
    /// # Errors
    /// Returns a range error if the BS date is not in the calendar table.
    pub fn bs_to_ad(&self, year: u16, month: u8, day: u8) -> Result<DateParts, CalendarError> {
        self.validate_bs(year, month, day)?;
        Ok(self.walk_ad(self.bs_offset(year, month, day)))
    }

    /// Recomputes the weekday of a BS date from scratch.
    ///
    /// # Errors
    /// Returns a range error if the BS date is not in the calendar table.
    pub fn day_of_week(&self, year: u16, month: u8, day: u8) -> Result<Weekday, CalendarError> {
        self.validate_bs(year, month, day)?;
        let offset = self.bs_offset(year, month, day);
        Ok(self.epoch.weekday.advance(i64::from(offset)))
    }

    /// Days in BS `month` of `year`, 0 outside the table.
    pub fn days_in_bs_month(&self, year: u16, month: u8) -> u8 {
        self.table.days_in_month(year, month)
    }

    /// Days in AD `month` of `year`, 0 for a month outside `1..=12`.
    pub fn days_in_ad_month(&self, year: u16, month: u8) -> u8 {
        gregorian::days_in_month(year, month)
    }

    pub fn min_bs_year(&self) -> u16 {
        self.table.base_year()
    }

    pub fn max_bs_year(&self) -> u16 {
        self.table.last_year()
    }

    /// First supported BS date (the epoch).
    pub fn first_bs_date(&self) -> DateParts {
        let (year, month, day) = self.epoch.bs;
        DateParts::new(year, month, day, self.epoch.weekday)
    }

    /// Last supported BS date: the final day of the table.
    pub fn last_bs_date(&self) -> DateParts {
        let year = self.table.last_year();
        let day = self.table.days_in_month(year, MONTHS_IN_YEAR);
        DateParts::new(year, MONTHS_IN_YEAR, day, self.last_ad.weekday)
    }

    /// First supported AD date (the epoch).
    pub fn first_ad_date(&self) -> DateParts {
        let (year, month, day) = self.epoch.ad;
        DateParts::new(year, month, day, self.epoch.weekday)
    }

    /// Last supported AD date: the AD counterpart of [`Calendar::last_bs_date`].
    pub const fn last_ad_date(&self) -> DateParts {
        self.last_ad
    }

    /// Days between the epoch and an already validated AD date.
    fn ad_offset(&self, year: u16, month: u8, day: u8) -> u32 {
        day_count::total_ad_days(self.epoch.ad.0, year, month, day) - self.epoch_ad_days
    }

    /// Days between the epoch and an already validated BS date.
    pub(crate) fn bs_offset(&self, year: u16, month: u8, day: u8) -> u32 {
        day_count::total_bs_days(&self.table, year, month, day) - 1
    }

    /// BS date `offset` days after the epoch, or `None` past the table's end.
    pub(crate) fn walk_bs(&self, offset: u32) -> Option<DateParts> {
        let (mut year, mut month, mut day) = self.epoch.bs;
        let mut remaining = offset;
        loop {
            let length = self.table.days_in_month(year, month);
            if length == 0 {
                return None;
            }
            let left_in_month = u32::from(length - day);
            if remaining <= left_in_month {
                // remaining <= 31 here
                day += remaining as u8;
                break;
            }
            remaining -= left_in_month + 1;
            day = MIN_DAY;
            month += 1;
            if month > MONTHS_IN_YEAR {
                month = FIRST_MONTH;
                year = year.checked_add(1)?;
            }
        }
        let weekday = self.epoch.weekday.advance(i64::from(offset));
        Some(DateParts::new(year, month, day, weekday))
    }

    /// AD date `offset` days after the epoch.
    pub(crate) fn walk_ad(&self, offset: u32) -> DateParts {
        let (mut year, mut month, mut day) = self.epoch.ad;
        let mut remaining = offset;
        loop {
            let left_in_month = u32::from(gregorian::days_in_month(year, month) - day);
            if remaining <= left_in_month {
                day += remaining as u8;
                break;
            }
            remaining -= left_in_month + 1;
            day = MIN_DAY;
            month += 1;
            if month > MONTHS_IN_YEAR {
                month = FIRST_MONTH;
                year += 1;
            }
        }
        let weekday = self.epoch.weekday.advance(i64::from(offset));
        DateParts::new(year, month, day, weekday)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calendar() -> Calendar {
        Calendar::bundled()
    }

    /// One day at a time from the epoch, the way the month-skipping walk
    /// must behave.
    fn naive_walk_bs(calendar: &Calendar, offset: u32) -> DateParts {
        let (mut year, mut month, mut day) = calendar.epoch.bs;
        let mut weekday = calendar.epoch.weekday;
        for _ in 0..offset {
            day += 1;
            weekday = weekday.next();
            if day > calendar.table.days_in_month(year, month) {
                day = 1;
                month += 1;
            }
            if month > 12 {
                month = 1;
                year += 1;
            }
        }
        DateParts::new(year, month, day, weekday)
    }

    #[test]
    fn test_ad_to_bs_scenarios() {
        struct TestCase {
            ad:      (u16, u8, u8),
            bs:      (u16, u8, u8),
            weekday: Weekday,
        }

        let cases = [
            TestCase {
                ad:      (1943, 4, 14),
                bs:      (2000, 1, 1),
                weekday: Weekday::Wednesday,
            },
            TestCase {
                ad:      (1944, 1, 1),
                bs:      (2000, 9, 17),
                weekday: Weekday::Saturday,
            },
            TestCase {
                ad:      (2020, 1, 1),
                bs:      (2076, 9, 16),
                weekday: Weekday::Wednesday,
            },
            TestCase {
                ad:      (2013, 4, 14),
                bs:      (2070, 1, 1),
                weekday: Weekday::Sunday,
            },
            TestCase {
                ad:      (2025, 10, 3),
                bs:      (2082, 6, 17),
                weekday: Weekday::Friday,
            },
            TestCase {
                ad:      (2034, 4, 13),
                bs:      (2090, 12, 30),
                weekday: Weekday::Thursday,
            },
        ];

        let calendar = calendar();
        for case in &cases {
            let (y, m, d) = case.ad;
            let got = calendar.ad_to_bs(y, m, d).unwrap();
            assert_eq!(got.ymd(), case.bs, "AD {y}-{m}-{d}");
            assert_eq!(got.weekday, case.weekday, "AD {y}-{m}-{d}");

            let (y, m, d) = case.bs;
            let back = calendar.bs_to_ad(y, m, d).unwrap();
            assert_eq!(back.ymd(), case.ad, "BS {y}-{m}-{d}");
            assert_eq!(back.weekday, case.weekday, "BS {y}-{m}-{d}");
        }
    }

    #[test]
    fn test_ad_to_bs_out_of_range() {
        let calendar = calendar();
        assert!(matches!(
            calendar.ad_to_bs(1943, 4, 13),
            Err(CalendarError::DateOutOfRange {
                system: CalendarSystem::Ad,
                ..
            })
        ));
        assert!(matches!(
            calendar.ad_to_bs(2034, 4, 14),
            Err(CalendarError::DateOutOfRange { .. })
        ));
        assert!(matches!(
            calendar.ad_to_bs(1942, 12, 31),
            Err(CalendarError::YearOutOfRange { .. })
        ));
        assert!(matches!(
            calendar.ad_to_bs(2021, 2, 29),
            Err(CalendarError::InvalidDay { .. })
        ));
    }

    #[test]
    fn test_bs_to_ad_out_of_range() {
        let calendar = calendar();
        assert!(matches!(
            calendar.bs_to_ad(1999, 12, 30),
            Err(CalendarError::YearOutOfRange {
                system: CalendarSystem::Bs,
                year: 1999,
                min: 2000,
                max: 2090,
            })
        ));
        assert!(matches!(calendar.bs_to_ad(2091, 1, 1), Err(CalendarError::YearOutOfRange { .. })));
        assert!(matches!(calendar.bs_to_ad(2082, 13, 1), Err(CalendarError::InvalidMonth(13))));
        assert!(matches!(calendar.bs_to_ad(2082, 12, 31), Err(CalendarError::InvalidDay { .. })));
    }

    #[test]
    fn test_day_of_week_scenarios() {
        let cases = [
            ((2070, 1, 1), Weekday::Sunday),
            ((2061, 12, 15), Weekday::Monday),
            ((2078, 3, 1), Weekday::Tuesday),
            ((2080, 4, 3), Weekday::Wednesday),
            ((2082, 6, 17), Weekday::Friday),
        ];
        let calendar = calendar();
        for ((y, m, d), expected) in cases {
            assert_eq!(calendar.day_of_week(y, m, d).unwrap(), expected, "{y}-{m}-{d}");
        }
        assert_eq!(calendar.day_of_week(2070, 1, 1).unwrap().number(), 1);
    }

    #[test]
    fn test_walk_matches_naive_walk() {
        let calendar = calendar();
        let span = calendar.bs_offset(2090, 12, 30);
        let mut offset = 0;
        while offset <= span {
            assert_eq!(
                calendar.walk_bs(offset),
                Some(naive_walk_bs(&calendar, offset)),
                "offset {offset}"
            );
            offset += 997;
        }
        assert_eq!(calendar.walk_bs(span), Some(naive_walk_bs(&calendar, span)));
        assert_eq!(calendar.walk_bs(span + 1), None);
    }

    #[test]
    fn test_span_accessors() {
        let calendar = calendar();
        assert_eq!(calendar.min_bs_year(), 2000);
        assert_eq!(calendar.max_bs_year(), 2090);
        assert_eq!(calendar.first_bs_date().ymd(), (2000, 1, 1));
        assert_eq!(calendar.last_bs_date().ymd(), (2090, 12, 30));
        assert_eq!(calendar.first_ad_date().ymd(), (1943, 4, 14));
        assert_eq!(calendar.last_ad_date().ymd(), (2034, 4, 13));
        assert_eq!(calendar.last_bs_date().weekday, calendar.last_ad_date().weekday);
        assert_eq!(calendar.days_in_bs_month(2082, 6), 31);
        assert_eq!(calendar.days_in_bs_month(2082, 12), 30);
        assert_eq!(calendar.days_in_ad_month(2020, 2), 29);
    }
}
