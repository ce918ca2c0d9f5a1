//! Everything the extractors need to know about the current date.
use chrono::{Datelike, Local, NaiveDate};

/// Site specific labels for each weekday, starting from Sunday.
pub type WeekdayTable = [&'static str; 7];

pub const FINNISH_NOMINATIVE: WeekdayTable = [
    "Sunnuntai",
    "Maanantai",
    "Tiistai",
    "Keskiviikko",
    "Torstai",
    "Perjantai",
    "Lauantai",
];

/// "on Monday" forms, as used in headings such as "Maanantaina 19.10."
pub const FINNISH_ESSIVE: WeekdayTable = [
    "Sunnuntaina",
    "Maanantaina",
    "Tiistaina",
    "Keskiviikkona",
    "Torstaina",
    "Perjantaina",
    "Lauantaina",
];

pub const FINNISH_ABBREVIATIONS: WeekdayTable = ["Su", "Ma", "Ti", "Ke", "To", "Pe", "La"];

pub const TAB_IDS: WeekdayTable = [
    "tab-sunday",
    "tab-monday",
    "tab-tuesday",
    "tab-wednesday",
    "tab-thursday",
    "tab-friday",
    "tab-saturday",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Today {
    date: NaiveDate,
}

impl Today {
    /// Reads the local wall clock. Call once per request, never cache the result.
    pub fn now() -> Self {
        Self::from_date(Local::now().date_naive())
    }

    pub const fn from_date(date: NaiveDate) -> Self {
        Self { date }
    }

    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Zero padded `dd.mm`, e.g. `"05.03"`.
    pub fn day_month(&self) -> String {
        self.date.format("%d.%m").to_string()
    }

    /// 0 for Sunday through 6 for Saturday.
    pub fn weekday_index(&self) -> usize {
        self.date.weekday().num_days_from_sunday() as usize
    }

    pub fn pick(&self, table: &WeekdayTable) -> &'static str {
        table[self.weekday_index()]
    }
}

#[cfg(test)]
pub(crate) fn tuesday() -> Today {
    Today::from_date(NaiveDate::from_ymd_opt(2026, 10, 20).expect("date should be valid"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_month_is_zero_padded() {
        let today = Today::from_date(NaiveDate::from_ymd_opt(2026, 3, 5).unwrap());
        assert_eq!(today.day_month(), "05.03");
        assert_eq!(tuesday().day_month(), "20.10");
    }

    #[test]
    fn test_weekday_index_starts_from_sunday() {
        let sunday = Today::from_date(NaiveDate::from_ymd_opt(2026, 10, 18).unwrap());
        assert_eq!(sunday.weekday_index(), 0);
        assert_eq!(tuesday().weekday_index(), 2);
        let saturday = Today::from_date(NaiveDate::from_ymd_opt(2026, 10, 24).unwrap());
        assert_eq!(saturday.weekday_index(), 6);
    }

    #[test]
    fn test_pick() {
        let today = tuesday();
        assert_eq!(today.pick(&FINNISH_NOMINATIVE), "Tiistai");
        assert_eq!(today.pick(&FINNISH_ESSIVE), "Tiistaina");
        assert_eq!(today.pick(&FINNISH_ABBREVIATIONS), "Ti");
        assert_eq!(today.pick(&TAB_IDS), "tab-tuesday");
    }
}
