//! # rayyan-time
//!
//! Civil and lunar dates, Hijri calendars, and the fasting calendar engine:
//! lunar conversion under a day offset, occasion classification, upcoming
//! opportunities, lunar month pages and daily reminders.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `LunarCalendar` trait.
pub mod calendar;

/// Concrete Hijri calendars and the pinned default.
pub mod calendars;

/// Engine configuration.
pub mod config;

/// Civil `Date` type.
pub mod date;

/// Intention text and links per fasting category.
pub mod details;

/// Default-calendar entry points.
pub mod engine;

/// A classified civil day.
pub mod fasting_day;

/// Months of the lunar year.
pub mod hijri_month;

/// Month-name language.
pub mod locale;

/// `LunarDate` type.
pub mod lunar_date;

/// One lunar month of classified days.
pub mod month_page;

/// `OccasionCategory` and the classifier.
pub mod occasion;

/// Upcoming fasting opportunities.
pub mod opportunities;

/// Daily reminder decision.
pub mod reminder;

/// Days of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::LunarCalendar;
pub use calendars::{HijriAlgorithm, TabularIslamic, UmmAlQura, DEFAULT_ALGORITHM};
pub use config::EngineConfig;
pub use date::Date;
pub use details::FastingDetails;
pub use engine::{
    fasting_day, month_calendar, month_page, month_start, next_opportunities, to_lunar,
};
pub use fasting_day::FastingDay;
pub use hijri_month::HijriMonth;
pub use locale::Locale;
pub use lunar_date::LunarDate;
pub use month_page::MonthPage;
pub use occasion::{classify, OccasionCategory};
pub use opportunities::{Opportunities, DEFAULT_SCAN_LIMIT};
pub use reminder::{due_reminder, Reminder, ReminderPreferences};
pub use weekday::Weekday;
