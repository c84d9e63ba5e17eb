/// Number of months in both the BS and the AD year
pub const MONTHS_IN_YEAR: u8 = 12;

/// Number of days in a week
pub const DAYS_IN_WEEK: u8 = 7;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for the first month (Baisakh / January)
pub const FIRST_MONTH: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for the last month (Chaitra / December)
pub const LAST_MONTH: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each Gregorian month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;
/// Days in a non-leap Gregorian year, the shortest AD year
pub(crate) const DAYS_IN_COMMON_YEAR: u32 = 365;

/// Shortest BS month ever recorded in the calendar table
pub const MIN_BS_MONTH_DAYS: u8 = 29;
/// Longest BS month ever recorded in the calendar table
pub const MAX_BS_MONTH_DAYS: u8 = 32;

/// Last valid hour of the day
pub const MAX_HOUR: u8 = 23;
/// Last valid minute of the hour, and second of the minute
pub const MAX_MINUTE_SECOND: u8 = 59;

pub(crate) const SECONDS_PER_MINUTE: i64 = 60;
pub(crate) const SECONDS_PER_HOUR: i64 = 60 * SECONDS_PER_MINUTE;
pub(crate) const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;

/// Date component separator (`YYYY-MM-DD`)
pub const DATE_SEPARATOR: char = '-';
/// Time component separator (`HH:MM:SS`)
pub const TIME_SEPARATOR: char = ':';
/// Separator between the date and the time of day
pub const DATE_TIME_SEPARATOR: char = ' ';
