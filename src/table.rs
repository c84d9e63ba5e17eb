//! The Bikram Sambat month-length table.
//!
//! BS month lengths follow no closed-form rule; they come from published
//! almanac data. Each [`YearRecord`] holds a reserved leading slot followed by
//! the day counts of months 1 (Baisakh) through 12 (Chaitra).

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_BS_MONTH_DAYS, MIN_BS_MONTH_DAYS, MONTHS_IN_YEAR};
use crate::error::CalendarError;

/// `[reserved, d1, .., d12]`: slot 0 is never read as a month length.
pub type YearRecord = [u8; 13];

/// First BS year of the bundled table
pub const BUNDLED_BASE_YEAR: u16 = 2000;

static BUNDLED_RECORDS: [YearRecord; 91] = [
    [0, 30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2000
    [0, 31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2001
    [0, 31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2002
    [0, 31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2003
    [0, 30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2004
    [0, 31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2005
    [0, 31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2006
    [0, 31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2007
    [0, 31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 29, 31], // 2008
    [0, 31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2009
    [0, 31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2010
    [0, 31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2011
    [0, 31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30], // 2012
    [0, 31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2013
    [0, 31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2014
    [0, 31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2015
    [0, 31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30], // 2016
    [0, 31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2017
    [0, 31, 32, 31, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2018
    [0, 31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2019
    [0, 31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], // 2020
    [0, 31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2021
    [0, 31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30], // 2022
    [0, 31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2023
    [0, 31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], // 2024
    [0, 31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2025
    [0, 31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2026
    [0, 30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2027
    [0, 31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2028
    [0, 31, 31, 32, 31, 32, 30, 30, 29, 30, 29, 30, 30], // 2029
    [0, 31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2030
    [0, 30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2031
    [0, 31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2032
    [0, 31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2033
    [0, 31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2034
    [0, 30, 32, 31, 32, 31, 31, 29, 30, 30, 29, 29, 31], // 2035
    [0, 31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2036
    [0, 31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2037
    [0, 31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2038
    [0, 31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30], // 2039
    [0, 31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2040
    [0, 31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2041
    [0, 31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2042
    [0, 31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30], // 2043
    [0, 31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2044
    [0, 31, 32, 31, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2045
    [0, 31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2046
    [0, 31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], // 2047
    [0, 31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2048
    [0, 31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30], // 2049
    [0, 31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2050
    [0, 31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], // 2051
    [0, 31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2052
    [0, 31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30], // 2053
    [0, 31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2054
    [0, 31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2055
    [0, 31, 31, 32, 31, 32, 30, 30, 29, 30, 29, 30, 30], // 2056
    [0, 31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2057
    [0, 30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2058
    [0, 31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2059
    [0, 31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2060
    [0, 31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2061
    [0, 30, 32, 31, 32, 31, 31, 29, 30, 29, 30, 29, 31], // 2062
    [0, 31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2063
    [0, 31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2064
    [0, 31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2065
    [0, 31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 29, 31], // 2066
    [0, 31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2067
    [0, 31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2068
    [0, 31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2069
    [0, 31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30], // 2070
    [0, 31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2071
    [0, 31, 32, 31, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2072
    [0, 31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2073
    [0, 31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], // 2074
    [0, 31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2075
    [0, 31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30], // 2076
    [0, 31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2077
    [0, 31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], // 2078
    [0, 31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2079
    [0, 31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30], // 2080
    [0, 31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2081
    [0, 31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2082
    [0, 31, 31, 32, 31, 31, 30, 30, 30, 29, 30, 30, 30], // 2083
    [0, 31, 31, 32, 31, 31, 30, 30, 30, 29, 30, 30, 30], // 2084
    [0, 31, 32, 31, 32, 30, 31, 30, 30, 29, 30, 30, 30], // 2085
    [0, 30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 30, 30], // 2086
    [0, 31, 31, 32, 31, 31, 31, 30, 30, 29, 30, 30, 30], // 2087
    [0, 30, 31, 32, 32, 30, 31, 30, 30, 29, 30, 30, 30], // 2088
    [0, 30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 30, 30], // 2089
    [0, 30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 30, 30], // 2090
];

/// Month-length table indexed by `year - base_year`.
///
/// The table is immutable once built. [`CalendarTable::bundled`] covers BS
/// 2000 through 2090; [`CalendarTable::from_records`] (or deserializing a
/// [`TableSource`]) builds an extended or replacement table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TableSource", into = "TableSource")]
pub struct CalendarTable {
    base_year: u16,
    records:   Cow<'static, [YearRecord]>,
}

/// Serialized form of a [`CalendarTable`]: the first covered year and the
/// twelve month lengths of every year from there on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSource {
    pub base_year: u16,
    pub months:    Vec<[u8; 12]>,
}

impl CalendarTable {
    /// The table shipped with the crate.
    pub const fn bundled() -> Self {
        Self {
            base_year: BUNDLED_BASE_YEAR,
            records:   Cow::Borrowed(&BUNDLED_RECORDS),
        }
    }

    /// Builds a table from per-year month lengths starting at `base_year`.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidTable` if `months` is empty, if any
    /// month length lies outside `29..=32`, or if the last year would not
    /// fit in a `u16`.
    pub fn from_records(base_year: u16, months: Vec<[u8; 12]>) -> Result<Self, CalendarError> {
        if months.is_empty() {
            return Err(CalendarError::InvalidTable("no year records".to_owned()));
        }
        let fits = u16::try_from(months.len() - 1)
            .ok()
            .and_then(|extra| base_year.checked_add(extra))
            .is_some();
        if !fits {
            return Err(CalendarError::InvalidTable(format!(
                "{} years starting at {base_year} overflow the year range",
                months.len()
            )));
        }

        let mut records = Vec::with_capacity(months.len());
        for (offset, year) in months.iter().enumerate() {
            if let Some(position) = year
                .iter()
                .position(|days| !(MIN_BS_MONTH_DAYS..=MAX_BS_MONTH_DAYS).contains(days))
            {
                return Err(CalendarError::InvalidTable(format!(
                    "month {} of year {} has {} days (must be {}-{})",
                    position + 1,
                    usize::from(base_year) + offset,
                    year[position],
                    MIN_BS_MONTH_DAYS,
                    MAX_BS_MONTH_DAYS
                )));
            }
            let mut record: YearRecord = [0; 13];
            record[1..].copy_from_slice(year);
            records.push(record);
        }

        debug!(
            "built BS calendar table covering {base_year}-{}",
            usize::from(base_year) + records.len() - 1
        );
        Ok(Self {
            base_year,
            records: Cow::Owned(records),
        })
    }

    /// First covered BS year
    #[inline]
    pub const fn base_year(&self) -> u16 {
        self.base_year
    }

    /// Last covered BS year
    pub fn last_year(&self) -> u16 {
        // from_records guarantees the span fits
        self.base_year + (self.records.len() - 1) as u16
    }

    /// Number of covered years
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false: construction rejects empty tables.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains_year(&self, year: u16) -> bool {
        self.record(year).is_some()
    }

    /// Raw record for `year`, including the reserved slot.
    pub fn record(&self, year: u16) -> Option<&YearRecord> {
        let index = year.checked_sub(self.base_year)?;
        self.records.get(usize::from(index))
    }

    /// The twelve month lengths of `year`, reserved slot skipped.
    pub fn months(&self, year: u16) -> Option<&[u8]> {
        self.record(year).map(|record| &record[1..])
    }

    /// Days in BS month `month` of `year`, or 0 when either lies outside the
    /// table. Callers must treat 0 as "invalid".
    pub fn days_in_month(&self, year: u16, month: u8) -> u8 {
        if month == 0 || month > MONTHS_IN_YEAR {
            return 0;
        }
        self.record(year).map_or(0, |record| record[usize::from(month)])
    }

    /// Total days of `year`, or 0 outside the table.
    pub fn days_in_year(&self, year: u16) -> u16 {
        self.months(year)
            .map_or(0, |months| months.iter().map(|&days| u16::from(days)).sum())
    }

    /// Sum of the lengths of months `1..month` (exclusive) of `year`, 0 outside the table.
    pub fn days_before_month(&self, year: u16, month: u8) -> u16 {
        let end = usize::from(month.clamp(1, MONTHS_IN_YEAR + 1)) - 1;
        self.months(year)
            .map_or(0, |months| months[..end].iter().map(|&days| u16::from(days)).sum())
    }
}

impl Default for CalendarTable {
    fn default() -> Self {
        Self::bundled()
    }
}

impl TryFrom<TableSource> for CalendarTable {
    type Error = CalendarError;

    fn try_from(source: TableSource) -> Result<Self, Self::Error> {
        Self::from_records(source.base_year, source.months)
    }
}

impl From<CalendarTable> for TableSource {
    fn from(table: CalendarTable) -> Self {
        let months = table
            .records
            .iter()
            .map(|record| {
                let mut year = [0; 12];
                year.copy_from_slice(&record[1..]);
                year
            })
            .collect();
        Self {
            base_year: table.base_year,
            months,
        }
    }
}
