//! The conversion engine: one calendar table paired with one epoch anchor.
//!
//! Conversion, arithmetic and validation are all methods on [`Calendar`]
//! (see the `converter`, `arithmetic` and `validator` modules). A
//! process-wide default built from the bundled table is available through
//! [`global`]; [`install`] replaces it once, before first use.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::consts::{DAYS_IN_COMMON_YEAR, FIRST_MONTH, MIN_DAY, MONTHS_IN_YEAR};
use crate::day_count;
use crate::error::CalendarError;
use crate::gregorian;
use crate::table::CalendarTable;
use crate::types::{DateParts, Weekday};

/// A fixed correspondence between a BS date, an AD date and their weekday.
///
/// All day counts are taken relative to this point. The BS side must be the
/// first day of the calendar table it is paired with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EpochAnchor {
    pub bs:      (u16, u8, u8),
    pub ad:      (u16, u8, u8),
    pub weekday: Weekday,
}

impl EpochAnchor {
    /// BS 2000-01-01 is AD 1943-04-14, a Wednesday.
    pub const BUNDLED: Self = Self {
        bs:      (2000, 1, 1),
        ad:      (1943, 4, 14),
        weekday: Weekday::Wednesday,
    };
}

impl Default for EpochAnchor {
    fn default() -> Self {
        Self::BUNDLED
    }
}

/// Calendar table plus epoch, with the supported AD span precomputed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calendar {
    pub(crate) table:         CalendarTable,
    pub(crate) epoch:         EpochAnchor,
    /// `total_ad_days` of the epoch's AD date
    pub(crate) epoch_ad_days: u32,
    pub(crate) last_ad:       DateParts,
}

impl Calendar {
    /// Pairs `table` with `epoch`.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidTable` if the epoch's BS date is not the
    /// first day of the table, its AD date is not a real Gregorian date, or
    /// the table would run past AD year 65535.
    pub fn new(table: CalendarTable, epoch: EpochAnchor) -> Result<Self, CalendarError> {
        if epoch.bs != (table.base_year(), FIRST_MONTH, MIN_DAY) {
            let (y, m, d) = epoch.bs;
            return Err(CalendarError::InvalidTable(format!(
                "epoch BS date {y:04}-{m:02}-{d:02} is not the first day of a table starting at {}",
                table.base_year()
            )));
        }
        let (y, m, d) = epoch.ad;
        if d == 0 || d > gregorian::days_in_month(y, m) {
            return Err(CalendarError::InvalidTable(format!(
                "epoch AD date {y:04}-{m:02}-{d:02} does not exist"
            )));
        }
        // Every AD year has at least 365 days, so the walk to the last table
        // day crosses at most `span / 365 + 1` new years.
        let years = u16::try_from(span_days(&table) / DAYS_IN_COMMON_YEAR + 1).ok();
        if years.and_then(|years| y.checked_add(years)).is_none() {
            return Err(CalendarError::InvalidTable(format!(
                "table of {} years starting at AD {y:04}-{m:02}-{d:02} runs past AD year {}",
                table.len(),
                u16::MAX
            )));
        }
        Ok(Self::assemble(table, epoch))
    }

    /// The bundled table with its matching epoch.
    pub fn bundled() -> Self {
        Self::assemble(CalendarTable::bundled(), EpochAnchor::BUNDLED)
    }

    fn assemble(table: CalendarTable, epoch: EpochAnchor) -> Self {
        let (ad_year, ad_month, ad_day) = epoch.ad;
        let epoch_ad_days = day_count::total_ad_days(ad_year, ad_year, ad_month, ad_day);
        let span = span_days(&table);
        let mut calendar = Self {
            table,
            epoch,
            epoch_ad_days,
            last_ad: DateParts::new(ad_year, ad_month, ad_day, epoch.weekday),
        };
        calendar.last_ad = calendar.walk_ad(span);
        calendar
    }

    pub const fn table(&self) -> &CalendarTable {
        &self.table
    }

    pub const fn epoch(&self) -> EpochAnchor {
        self.epoch
    }
}

/// Days from the first to the last day of `table`.
fn span_days(table: &CalendarTable) -> u32 {
    let last_year = table.last_year();
    let last_day = table.days_in_month(last_year, MONTHS_IN_YEAR);
    day_count::total_bs_days(table, last_year, MONTHS_IN_YEAR, last_day) - 1
}

impl Default for Calendar {
    fn default() -> Self {
        Self::bundled()
    }
}

static GLOBAL: OnceLock<Calendar> = OnceLock::new();

/// The process-wide calendar, initialized with [`Calendar::bundled`] unless
/// [`install`] ran first.
pub fn global() -> &'static Calendar {
    GLOBAL.get_or_init(Calendar::bundled)
}

/// Replaces the process-wide calendar. Only succeeds before the first call
/// to [`global`] (directly or through any crate-level function).
///
/// # Errors
/// Returns `CalendarError::AlreadyInstalled` if the global calendar exists.
pub fn install(calendar: Calendar) -> Result<(), CalendarError> {
    debug!(
        "installing global calendar covering BS {}-{}",
        calendar.table.base_year(),
        calendar.table.last_year()
    );
    GLOBAL.set(calendar).map_err(|_| {
        warn!("global calendar already installed; keeping the existing one");
        CalendarError::AlreadyInstalled
    })
}
