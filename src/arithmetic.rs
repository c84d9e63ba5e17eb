//! Calendar-aware arithmetic on BS dates.
//!
//! Every operation validates its input, walks the table, and returns a fresh
//! [`DateParts`] whose weekday is advanced by exactly the number of days
//! moved. Month and year shifts clamp the day to the target month's length;
//! the weekday accounts for the clamp.

use crate::calendar::Calendar;
use crate::consts::{
    DAYS_IN_WEEK, FIRST_MONTH, LAST_MONTH, MIN_DAY, SECONDS_PER_DAY, SECONDS_PER_HOUR,
    SECONDS_PER_MINUTE,
};
use crate::error::CalendarError;
use crate::types::{DateParts, TimeParts, Unit};

impl Calendar {
    /// Moves `days` days forward.
    ///
    /// # Errors
    /// Returns a validation error for an invalid `date`, or
    /// `CalendarError::ResultOutOfRange` if the result is past the table.
    pub fn add_days(&self, date: DateParts, days: u32) -> Result<DateParts, CalendarError> {
        self.validate_bs(date.year, date.month, date.day)?;
        let (mut year, mut month, mut day) = date.ymd();
        let mut remaining = days;
        loop {
            let length = self.table.days_in_month(year, month);
            if length == 0 {
                return Err(CalendarError::ResultOutOfRange);
            }
            let left_in_month = u32::from(length - day);
            if remaining <= left_in_month {
                day += remaining as u8;
                break;
            }
            remaining -= left_in_month + 1;
            day = MIN_DAY;
            (year, month) = next_month(year, month)?;
        }
        Ok(DateParts::new(year, month, day, date.weekday.advance(i64::from(days))))
    }

    /// Moves `days` days backward.
    ///
    /// # Errors
    /// Returns a validation error for an invalid `date`, or
    /// `CalendarError::ResultOutOfRange` if the result is before the table.
    pub fn sub_days(&self, date: DateParts, days: u32) -> Result<DateParts, CalendarError> {
        self.validate_bs(date.year, date.month, date.day)?;
        let (mut year, mut month, mut day) = date.ymd();
        let mut remaining = days;
        loop {
            let back_in_month = u32::from(day - MIN_DAY);
            if remaining <= back_in_month {
                day -= remaining as u8;
                break;
            }
            remaining -= back_in_month + 1;
            (year, month) = previous_month(year, month)?;
            day = self.table.days_in_month(year, month);
            if day == 0 {
                return Err(CalendarError::ResultOutOfRange);
            }
        }
        Ok(DateParts::new(year, month, day, date.weekday.advance(-i64::from(days))))
    }

    /// # Errors
    /// Same as [`Calendar::add_days`].
    pub fn add_weeks(&self, date: DateParts, weeks: u32) -> Result<DateParts, CalendarError> {
        self.add_days(date, weeks_to_days(weeks)?)
    }

    /// # Errors
    /// Same as [`Calendar::sub_days`].
    pub fn sub_weeks(&self, date: DateParts, weeks: u32) -> Result<DateParts, CalendarError> {
        self.sub_days(date, weeks_to_days(weeks)?)
    }

    /// Moves `months` months forward, clamping the day to the length of the
    /// target month.
    ///
    /// # Errors
    /// Returns a validation error for an invalid `date`, or
    /// `CalendarError::ResultOutOfRange` if the target month is past the table.
    pub fn add_months(&self, date: DateParts, months: u32) -> Result<DateParts, CalendarError> {
        self.validate_bs(date.year, date.month, date.day)?;
        let (mut year, mut month) = (date.year, date.month);
        let mut traversed = 0_i64;
        for _ in 0..months {
            traversed += i64::from(self.table.days_in_month(year, month));
            (year, month) = next_month(year, month)?;
            if !self.table.contains_year(year) {
                return Err(CalendarError::ResultOutOfRange);
            }
        }
        Ok(self.land(date, year, month, traversed))
    }

    /// Moves `months` months backward, clamping the day to the length of the
    /// target month.
    ///
    /// # Errors
    /// Returns a validation error for an invalid `date`, or
    /// `CalendarError::ResultOutOfRange` if the target month is before the
    /// table.
    pub fn sub_months(&self, date: DateParts, months: u32) -> Result<DateParts, CalendarError> {
        self.validate_bs(date.year, date.month, date.day)?;
        let (mut year, mut month) = (date.year, date.month);
        let mut traversed = 0_i64;
        for _ in 0..months {
            (year, month) = previous_month(year, month)?;
            if !self.table.contains_year(year) {
                return Err(CalendarError::ResultOutOfRange);
            }
            traversed -= i64::from(self.table.days_in_month(year, month));
        }
        Ok(self.land(date, year, month, traversed))
    }

    /// Moves `years` years forward, keeping the month and clamping the day.
    ///
    /// # Errors
    /// Returns a validation error for an invalid `date`, or
    /// `CalendarError::ResultOutOfRange` if the target year is past the table.
    pub fn add_years(&self, date: DateParts, years: u16) -> Result<DateParts, CalendarError> {
        self.validate_bs(date.year, date.month, date.day)?;
        let target = date
            .year
            .checked_add(years)
            .filter(|&year| self.table.contains_year(year))
            .ok_or(CalendarError::ResultOutOfRange)?;
        let whole_years: i64 = (date.year..target)
            .map(|year| i64::from(self.table.days_in_year(year)))
            .sum();
        Ok(self.land(date, target, date.month, whole_years + self.month_start_shift(date, target)))
    }

    /// Moves `years` years backward, keeping the month and clamping the day.
    ///
    /// # Errors
    /// Returns a validation error for an invalid `date`, or
    /// `CalendarError::ResultOutOfRange` if the target year is before the
    /// table.
    pub fn sub_years(&self, date: DateParts, years: u16) -> Result<DateParts, CalendarError> {
        self.validate_bs(date.year, date.month, date.day)?;
        let target = date
            .year
            .checked_sub(years)
            .filter(|&year| self.table.contains_year(year))
            .ok_or(CalendarError::ResultOutOfRange)?;
        let whole_years: i64 = (target..date.year)
            .map(|year| i64::from(self.table.days_in_year(year)))
            .sum();
        Ok(self.land(date, target, date.month, self.month_start_shift(date, target) - whole_years))
    }

    /// Signed shift of a date and time of day by `amount` of `unit`.
    ///
    /// Hours, minutes and seconds move the time of day; every midnight
    /// crossed in either direction moves the date one day.
    ///
    /// # Errors
    /// Returns a validation error for an invalid `date` or `time`, or
    /// `CalendarError::ResultOutOfRange` if the result leaves the table.
    pub fn shift(
        &self,
        date: DateParts,
        time: TimeParts,
        amount: i64,
        unit: Unit,
    ) -> Result<(DateParts, TimeParts), CalendarError> {
        let time = TimeParts::new(time.hour, time.minute, time.second)?;
        let backward = amount < 0;
        let date = match unit {
            Unit::Year => {
                let years = magnitude(amount)?;
                if backward { self.sub_years(date, years)? } else { self.add_years(date, years)? }
            },
            Unit::Month => {
                let months = magnitude(amount)?;
                if backward {
                    self.sub_months(date, months)?
                } else {
                    self.add_months(date, months)?
                }
            },
            Unit::Week => {
                let weeks = magnitude(amount)?;
                if backward { self.sub_weeks(date, weeks)? } else { self.add_weeks(date, weeks)? }
            },
            Unit::Day => self.shift_days(date, amount)?,
            Unit::Hour => return self.shift_seconds(date, time, amount, SECONDS_PER_HOUR),
            Unit::Minute => return self.shift_seconds(date, time, amount, SECONDS_PER_MINUTE),
            Unit::Second => return self.shift_seconds(date, time, amount, 1),
        };
        Ok((date, time))
    }

    fn shift_days(&self, date: DateParts, days: i64) -> Result<DateParts, CalendarError> {
        let count = magnitude(days)?;
        if days < 0 { self.sub_days(date, count) } else { self.add_days(date, count) }
    }

    fn shift_seconds(
        &self,
        date: DateParts,
        time: TimeParts,
        amount: i64,
        unit_seconds: i64,
    ) -> Result<(DateParts, TimeParts), CalendarError> {
        let total = amount
            .checked_mul(unit_seconds)
            .and_then(|seconds| seconds.checked_add(time.seconds_of_day()))
            .ok_or(CalendarError::ResultOutOfRange)?;
        let date = self.shift_days(date, total.div_euclid(SECONDS_PER_DAY))?;
        Ok((date, TimeParts::from_seconds_of_day(total.rem_euclid(SECONDS_PER_DAY))))
    }

    /// Difference in the days preceding `date.month` between `target` and
    /// `date.year`.
    fn month_start_shift(&self, date: DateParts, target: u16) -> i64 {
        i64::from(self.table.days_before_month(target, date.month))
            - i64::from(self.table.days_before_month(date.year, date.month))
    }

    /// Builds the landed date in `(year, month)`: the day is clamped to the
    /// month's length and the weekday moves by `moved` days plus the clamp.
    fn land(&self, date: DateParts, year: u16, month: u8, moved: i64) -> DateParts {
        let day = date.day.min(self.table.days_in_month(year, month));
        let clamp = i64::from(day) - i64::from(date.day);
        DateParts::new(year, month, day, date.weekday.advance(moved + clamp))
    }
}

/// Converts an `f64` amount into a whole quantity.
///
/// # Errors
/// Returns `CalendarError::InvalidQuantity` for NaN, infinities, fractional
/// values and values outside the `i64` range.
pub fn quantity_from_f64(value: f64) -> Result<i64, CalendarError> {
    // i64::MAX as f64 rounds up to 2^63, which is itself out of range
    #[allow(clippy::cast_precision_loss)]
    let in_range = value >= i64::MIN as f64 && value < i64::MAX as f64;
    if !value.is_finite() || value.fract() != 0.0 || !in_range {
        return Err(CalendarError::InvalidQuantity(value.to_string()));
    }
    #[allow(clippy::cast_possible_truncation)]
    let quantity = value as i64;
    Ok(quantity)
}

fn next_month(year: u16, month: u8) -> Result<(u16, u8), CalendarError> {
    if month >= LAST_MONTH {
        let year = year.checked_add(1).ok_or(CalendarError::ResultOutOfRange)?;
        Ok((year, FIRST_MONTH))
    } else {
        Ok((year, month + 1))
    }
}

fn previous_month(year: u16, month: u8) -> Result<(u16, u8), CalendarError> {
    if month <= FIRST_MONTH {
        let year = year.checked_sub(1).ok_or(CalendarError::ResultOutOfRange)?;
        Ok((year, LAST_MONTH))
    } else {
        Ok((year, month - 1))
    }
}

fn weeks_to_days(weeks: u32) -> Result<u32, CalendarError> {
    weeks
        .checked_mul(u32::from(DAYS_IN_WEEK))
        .ok_or(CalendarError::ResultOutOfRange)
}

/// Absolute value of a signed amount, narrowed to the unsigned type the
/// per-unit operation takes. Too large to fit means out of range.
fn magnitude<T: TryFrom<u64>>(amount: i64) -> Result<T, CalendarError> {
    T::try_from(amount.unsigned_abs()).map_err(|_| CalendarError::ResultOutOfRange)
}
