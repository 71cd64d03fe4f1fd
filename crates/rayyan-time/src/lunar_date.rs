//! Dates in the Hijri calendar.

use crate::hijri_month::HijriMonth;
use crate::locale::Locale;
use rayyan_core::errors::{Error, Result};

/// A Hijri date.
///
/// Only produced by a [`LunarCalendar`](crate::calendar::LunarCalendar);
/// the day is always in `1..=30` and the month in `1..=12`. Ordering is
/// chronological.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LunarDate {
    year: u16,
    month: HijriMonth,
    day: u8,
}

impl LunarDate {
    /// Validate raw calendar output.
    pub(crate) fn new(year: u16, month: u8, day: u8) -> Result<Self> {
        let month = HijriMonth::from_number(month)
            .ok_or_else(|| Error::Conversion(format!("lunar month {month} out of range [1, 12]")))?;
        if !(1..=30).contains(&day) {
            return Err(Error::Conversion(format!(
                "lunar day {day} out of range [1, 30]"
            )));
        }
        Ok(Self { year, month, day })
    }

    /// Day of the lunar month (1–30).
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Lunar month number (1–12).
    pub fn month(&self) -> u8 {
        self.month.number()
    }

    /// Lunar month.
    pub fn hijri_month(&self) -> HijriMonth {
        self.month
    }

    /// Lunar year (AH).
    pub fn year(&self) -> u16 {
        self.year
    }

    /// Month name in `locale`.
    pub fn month_name(&self, locale: Locale) -> &'static str {
        self.month.name(locale)
    }

    /// `true` if both dates fall in the same lunar month of the same year.
    pub fn same_month(&self, other: &LunarDate) -> bool {
        self.year == other.year && self.month == other.month
    }
}

impl std::fmt::Display for LunarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} AH", self.day, self.month, self.year)
    }
}

impl std::fmt::Debug for LunarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "LunarDate({:04}-{:02}-{:02})", self.year, self.month(), self.day)
    }
}
