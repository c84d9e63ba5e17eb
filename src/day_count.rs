//! Elapsed-day counting for both calendars.
//!
//! Counts start at 1 on the first day of the base year, so within one
//! calendar `a < b` implies `total(a) < total(b)`.

use crate::gregorian;
use crate::table::CalendarTable;

/// Days from January 1 of `base_year` up to and including the AD date.
///
/// Years before `base_year` contribute nothing.
pub fn total_ad_days(base_year: u16, year: u16, month: u8, day: u8) -> u32 {
    let full_years: u32 = (base_year..year)
        .map(|y| u32::from(gregorian::days_in_year(y)))
        .sum();
    let full_months: u32 = (1..month)
        .map(|m| u32::from(gregorian::days_in_month(year, m)))
        .sum();
    full_years + full_months + u32::from(day)
}

/// Days from the first day of the table up to and including the BS date.
///
/// Years outside the table contribute 0 instead of failing; callers validate
/// the date before relying on the count.
pub fn total_bs_days(table: &CalendarTable, year: u16, month: u8, day: u8) -> u32 {
    let full_years: u32 = (table.base_year()..year)
        .map(|y| u32::from(table.days_in_year(y)))
        .sum();
    full_years + u32::from(table.days_before_month(year, month)) + u32::from(day)
}
