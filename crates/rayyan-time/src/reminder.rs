//! Daily reminder decision for tomorrow's fast.
//!
//! The date of the last reminder is an explicit input; storing it is the
//! caller's job.

use serde::{Deserialize, Serialize};

use crate::calendar::LunarCalendar;
use crate::date::Date;
use crate::fasting_day::FastingDay;
use crate::occasion::OccasionCategory;
use rayyan_core::errors::Result;
use rayyan_core::DayOffset;

/// Which kinds of fast the user wants to be reminded about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReminderPreferences {
    /// Mondays and Thursdays.
    pub monday_thursday: bool,
    /// White Days (lunar 13–15).
    pub white_days: bool,
    /// Ashura, Tasu'a, Arafah and the first ten days of Dhu al-Hijjah.
    pub special_days: bool,
}

impl Default for ReminderPreferences {
    fn default() -> Self {
        Self {
            monday_thursday: true,
            white_days: true,
            special_days: true,
        }
    }
}

impl ReminderPreferences {
    /// `true` if a fast of `category` should trigger a reminder.
    pub fn wants(&self, category: OccasionCategory) -> bool {
        match category {
            OccasionCategory::MondayThursday => self.monday_thursday,
            OccasionCategory::WhiteDays => self.white_days,
            c if c.is_special() => self.special_days,
            _ => false,
        }
    }
}

/// A reminder to fast tomorrow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reminder {
    /// Tomorrow, classified.
    pub day: FastingDay,
}

/// Decide whether to remind the user today about tomorrow.
///
/// Returns `None` when a reminder already went out today, when tomorrow
/// holds no fast, or when the user opted out of tomorrow's kind of fast.
pub fn due_reminder<C: LunarCalendar + ?Sized>(
    calendar: &C,
    today: Date,
    last_notified: Option<Date>,
    offset: DayOffset,
    prefs: &ReminderPreferences,
) -> Result<Option<Reminder>> {
    if last_notified == Some(today) {
        return Ok(None);
    }
    let tomorrow = calendar.fasting_day(today.succ()?, offset)?;
    if prefs.wants(tomorrow.category()) {
        Ok(Some(Reminder { day: tomorrow }))
    } else {
        Ok(None)
    }
}
