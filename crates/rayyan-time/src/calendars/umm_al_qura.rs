//! Umm al-Qura calendar.
//!
//! The official tabular calendar of Saudi Arabia, computed from the
//! `hijri_date` crate's Umm al-Qura tables.

use hijri_date::HijriDate;

use crate::calendar::LunarCalendar;
use crate::date::Date;
use crate::lunar_date::LunarDate;
use rayyan_core::errors::{Error, Result};

/// First civil year served from the Umm al-Qura tables.
///
/// The tables start in 1938 but hold a 28-day Sha'ban 1364 (ending
/// 1945-08-07), so earlier years are not served.
pub const MIN_CIVIL_YEAR: u16 = 1946;

/// Last civil year covered by the Umm al-Qura tables.
pub const MAX_CIVIL_YEAR: u16 = 2076;

/// Umm al-Qura calendar.
///
/// Only civil years in `[MIN_CIVIL_YEAR, MAX_CIVIL_YEAR]` convert; anything
/// else is an [`Error::Conversion`].
#[derive(Debug, Clone, Copy, Default)]
pub struct UmmAlQura;

impl UmmAlQura {
    /// Return `true` if `date` lies inside the table range.
    pub fn supports(date: Date) -> bool {
        !date.is_null() && (MIN_CIVIL_YEAR..=MAX_CIVIL_YEAR).contains(&date.year())
    }
}

impl LunarCalendar for UmmAlQura {
    fn name(&self) -> &str {
        "Umm al-Qura"
    }

    fn lunar_date(&self, date: Date) -> Result<LunarDate> {
        if date.is_null() {
            return Err(Error::Date("cannot convert the null date".into()));
        }
        if !Self::supports(date) {
            return Err(Error::Conversion(format!(
                "{date} is outside the Umm al-Qura range [{MIN_CIVIL_YEAR}, {MAX_CIVIL_YEAR}]"
            )));
        }
        let hijri = HijriDate::from_gr(
            date.year() as usize,
            date.month() as usize,
            date.day_of_month() as usize,
        )
        .map_err(|e| Error::Conversion(format!("{date}: {e}")))?;
        LunarDate::new(hijri.year() as u16, hijri.month() as u8, hijri.day() as u8)
    }
}
