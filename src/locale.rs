//! English and Nepali names for BS months and weekdays, and Devanagari
//! digit conversion.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::MONTHS_IN_YEAR;
use crate::error::CalendarError;
use crate::prelude::*;
use crate::types::Weekday;

/// Language used when rendering names and digits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    #[display(fmt = "en")]
    En,
    #[display(fmt = "np")]
    Np,
}

impl FromStr for Locale {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "en" => Ok(Self::En),
            "np" | "ne" => Ok(Self::Np),
            other => Err(CalendarError::UnsupportedLocale(other.to_owned())),
        }
    }
}

const MONTHS_EN: [&str; 12] = [
    "Baisakh", "Jestha", "Asar", "Shrawan", "Bhadra", "Aswin", "Kartik", "Mangsir", "Poush", "Magh",
    "Falgun", "Chaitra",
];
const MONTHS_SHORT_EN: [&str; 12] = [
    "Bai", "Jes", "Asa", "Shr", "Bhd", "Asw", "Kar", "Man", "Pou", "Mag", "Fal", "Cha",
];
const MONTHS_NP: [&str; 12] = [
    "बैशाख", "जेठ", "असार", "श्रावण", "भाद्र", "आश्विन",
    "कार्तिक", "मंसिर", "पौष", "माघ", "फाल्गुण", "चैत्र",
];
const MONTHS_SHORT_NP: [&str; 12] = [
    "बै", "जे", "अ", "श्रा", "भा", "आ", "का", "मं", "पौ", "मा", "फा", "चै",
];

const WEEKDAYS_EN: [&str; 7] = [
    "Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday",
];
const WEEKDAYS_SHORT_EN: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const WEEKDAYS_NP: [&str; 7] = [
    "आइतबार", "सोमबार", "मंगलबार", "बुधबार", "बिहिबार", "शुक्रबार", "शनिबार",
];
const WEEKDAYS_SHORT_NP: [&str; 7] = ["आइत", "सोम", "मंगल", "बुध", "बिहि", "शुक्र", "शनि"];

const DEVANAGARI_DIGITS: [char; 10] = ['०', '१', '२', '३', '४', '५', '६', '७', '८', '९'];

/// Index into a 12-entry month table; 0 wraps to Chaitra, 13 to Baisakh.
const fn month_index(month: u8) -> usize {
    ((month as usize) + MONTHS_IN_YEAR as usize - 1) % MONTHS_IN_YEAR as usize
}

const fn weekday_index(weekday: Weekday) -> usize {
    weekday.number() as usize - 1
}

pub const fn month_name(month: u8, locale: Locale) -> &'static str {
    match locale {
        Locale::En => MONTHS_EN[month_index(month)],
        Locale::Np => MONTHS_NP[month_index(month)],
    }
}

pub const fn month_short_name(month: u8, locale: Locale) -> &'static str {
    match locale {
        Locale::En => MONTHS_SHORT_EN[month_index(month)],
        Locale::Np => MONTHS_SHORT_NP[month_index(month)],
    }
}

pub const fn weekday_name(weekday: Weekday, locale: Locale) -> &'static str {
    match locale {
        Locale::En => WEEKDAYS_EN[weekday_index(weekday)],
        Locale::Np => WEEKDAYS_NP[weekday_index(weekday)],
    }
}

pub const fn weekday_short_name(weekday: Weekday, locale: Locale) -> &'static str {
    match locale {
        Locale::En => WEEKDAYS_SHORT_EN[weekday_index(weekday)],
        Locale::Np => WEEKDAYS_SHORT_NP[weekday_index(weekday)],
    }
}

/// Replaces ASCII digits with Devanagari digits. Everything else passes
/// through.
pub fn to_devanagari_digits(text: &str) -> String {
    text.chars()
        .map(|c| c.to_digit(10).map_or(c, |d| DEVANAGARI_DIGITS[d as usize]))
        .collect()
}

/// Replaces Devanagari digits with ASCII digits. Everything else passes
/// through.
pub fn from_devanagari_digits(text: &str) -> String {
    text.chars()
        .map(|c| {
            DEVANAGARI_DIGITS
                .iter()
                .position(|&digit| digit == c)
                .and_then(|d| char::from_digit(d as u32, 10))
                .unwrap_or(c)
        })
        .collect()
}

/// Renders `text` in `locale`: digits become Devanagari for [`Locale::Np`].
pub fn localize_digits(text: &str, locale: Locale) -> String {
    match locale {
        Locale::En => text.to_owned(),
        Locale::Np => to_devanagari_digits(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_from_str() {
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!("np".parse::<Locale>().unwrap(), Locale::Np);
        assert_eq!("ne".parse::<Locale>().unwrap(), Locale::Np);
        assert!(matches!(
            "fr".parse::<Locale>(),
            Err(CalendarError::UnsupportedLocale(ref l)) if l == "fr"
        ));
        assert_eq!(Locale::default(), Locale::En);
        assert_eq!(Locale::Np.to_string(), "np");
    }

    #[test]
    fn test_month_names() {
        assert_eq!(month_name(1, Locale::En), "Baisakh");
        assert_eq!(month_name(12, Locale::En), "Chaitra");
        assert_eq!(month_name(6, Locale::Np), "आश्विन");
        assert_eq!(month_short_name(4, Locale::En), "Shr");
        assert_eq!(month_short_name(1, Locale::Np), "बै");
    }

    #[test]
    fn test_month_names_wrap() {
        assert_eq!(month_name(13, Locale::En), "Baisakh");
        assert_eq!(month_name(14, Locale::En), "Jestha");
        assert_eq!(month_short_name(0, Locale::Np), "चै");
        assert_eq!(month_name(0, Locale::En), "Chaitra");
    }

    #[test]
    fn test_weekday_names() {
        assert_eq!(weekday_name(Weekday::Sunday, Locale::En), "Sunday");
        assert_eq!(weekday_name(Weekday::Saturday, Locale::Np), "शनिबार");
        assert_eq!(weekday_short_name(Weekday::Friday, Locale::En), "Fri");
        assert_eq!(weekday_short_name(Weekday::Monday, Locale::Np), "सोम");
        for weekday in Weekday::ALL {
            assert_eq!(weekday_name(weekday, Locale::En), weekday.to_string());
        }
    }

    #[test]
    fn test_devanagari_digits() {
        assert_eq!(to_devanagari_digits("789"), "७८९");
        assert_eq!(to_devanagari_digits("1011-excepthis"), "१०११-excepthis");
        assert_eq!(from_devanagari_digits("२०८२-०६-१७"), "2082-06-17");
        assert_eq!(from_devanagari_digits("abc"), "abc");
        assert_eq!(localize_digits("2082", Locale::En), "2082");
        assert_eq!(localize_digits("2082", Locale::Np), "२०८२");
    }
}
