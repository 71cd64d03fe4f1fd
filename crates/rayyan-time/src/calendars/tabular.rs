//! Tabular Islamic calendar.
//!
//! The arithmetic calendar with the civil (Friday) epoch, 16 July 622
//! Julian, and the 30-year intercalation cycle in which years 2, 5, 7, 10,
//! 13, 16, 18, 21, 24, 26 and 29 are leap years. Odd months have 30 days,
//! even months 29, and Dhu al-Hijjah gains a day in leap years.

use crate::calendar::LunarCalendar;
use crate::date::Date;
use crate::lunar_date::LunarDate;
use rayyan_core::errors::{Error, Result};

/// Julian Day Number of 1 Muharram 1 AH.
const EPOCH_JDN: i32 = 1_948_440;

/// Arithmetic Islamic calendar.
///
/// Covers the whole civil range of [`Date`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TabularIslamic;

impl TabularIslamic {
    /// Return `true` if `year` (AH) has 355 days.
    pub fn is_leap_year(year: u16) -> bool {
        (14 + 11 * u32::from(year)) % 30 < 11
    }

    /// Number of days in a lunar month.
    pub fn month_length(year: u16, month: u8) -> u8 {
        debug_assert!((1..=12).contains(&month));
        if month % 2 == 1 || (month == 12 && Self::is_leap_year(year)) {
            30
        } else {
            29
        }
    }
}

fn jdn_of(year: i32, month: i32, day: i32) -> i32 {
    day + (59 * (month - 1) + 1) / 2 + (year - 1) * 354 + (3 + 11 * year) / 30 + EPOCH_JDN - 1
}

impl LunarCalendar for TabularIslamic {
    fn name(&self) -> &str {
        "Tabular Islamic"
    }

    fn lunar_date(&self, date: Date) -> Result<LunarDate> {
        if date.is_null() {
            return Err(Error::Date("cannot convert the null date".into()));
        }
        let jdn = date.julian_day();
        // estimate, then correct by at most a year either way
        let mut year = (30 * (jdn - EPOCH_JDN) + 10_646) / 10_631;
        while jdn_of(year + 1, 1, 1) <= jdn {
            year += 1;
        }
        while jdn_of(year, 1, 1) > jdn {
            year -= 1;
        }
        let month = (2..=12)
            .rev()
            .find(|&m| jdn_of(year, m, 1) <= jdn)
            .unwrap_or(1);
        let day = jdn - jdn_of(year, month, 1) + 1;
        LunarDate::new(year as u16, month as u8, day as u8)
    }
}
