//! Engine configuration.
//!
//! Bundles the parameters a caller keeps between calls: which Hijri
//! transform to use, the user's day offset, the opportunity scan cap and
//! reminder preferences.

use serde::{Deserialize, Serialize};

use crate::calendar::LunarCalendar;
use crate::calendars::{HijriAlgorithm, DEFAULT_ALGORITHM};
use crate::date::Date;
use crate::fasting_day::FastingDay;
use crate::month_page::MonthPage;
use crate::opportunities::{Opportunities, DEFAULT_SCAN_LIMIT};
use crate::reminder::{due_reminder, Reminder, ReminderPreferences};
use rayyan_core::ensure;
use rayyan_core::errors::{Error, Result};
use rayyan_core::DayOffset;

/// Configuration for the fasting calendar engine.
///
/// # Example
///
/// ```
/// use rayyan_time::config::EngineConfig;
/// use rayyan_time::calendars::HijriAlgorithm;
///
/// let config = EngineConfig::new()
///     .with_algorithm(HijriAlgorithm::Tabular)
///     .with_day_offset(-1);
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.day_offset(), -1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    algorithm: HijriAlgorithm,
    day_offset: DayOffset,
    scan_limit: u32,
    reminders: ReminderPreferences,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            algorithm: DEFAULT_ALGORITHM,
            day_offset: 0,
            scan_limit: DEFAULT_SCAN_LIMIT,
            reminders: ReminderPreferences::default(),
        }
    }
}

impl EngineConfig {
    /// Defaults: Umm al-Qura, offset 0, ten-year scan cap, all reminders on.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a JSON document; missing fields take their defaults.
    ///
    /// The document must be a JSON object.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: serde_json::Value =
            serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))?;
        if !value.is_object() {
            return Err(Error::Config(format!("expected a JSON object, got {value}")));
        }
        let config: Self = serde_json::from_value(value).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the Hijri transform.
    pub fn with_algorithm(mut self, algorithm: HijriAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Sets the day offset.
    pub fn with_day_offset(mut self, offset: DayOffset) -> Self {
        self.day_offset = offset;
        self
    }

    /// Sets the opportunity scan cap, in civil days.
    pub fn with_scan_limit(mut self, days: u32) -> Self {
        self.scan_limit = days;
        self
    }

    /// Sets reminder preferences.
    pub fn with_reminders(mut self, reminders: ReminderPreferences) -> Self {
        self.reminders = reminders;
        self
    }

    /// Check the configuration.
    pub fn validate(&self) -> Result<()> {
        ensure!(self.scan_limit >= 1, "scan_limit must be >= 1, got {}", self.scan_limit);
        Ok(())
    }

    /// The Hijri transform.
    pub fn algorithm(&self) -> HijriAlgorithm {
        self.algorithm
    }

    /// The day offset.
    pub fn day_offset(&self) -> DayOffset {
        self.day_offset
    }

    /// The opportunity scan cap.
    pub fn scan_limit(&self) -> u32 {
        self.scan_limit
    }

    /// Reminder preferences.
    pub fn reminders(&self) -> &ReminderPreferences {
        &self.reminders
    }

    /// The calendar selected by [`algorithm`](Self::algorithm).
    pub fn calendar(&self) -> &'static dyn LunarCalendar {
        self.algorithm.calendar()
    }

    /// Classify one civil day.
    pub fn fasting_day(&self, date: Date) -> Result<FastingDay> {
        self.calendar().fasting_day(date, self.day_offset)
    }

    /// Lazy walk over the opportunities on or after `start`.
    pub fn opportunities(&self, start: Date) -> Opportunities<'static, dyn LunarCalendar> {
        Opportunities::new(self.calendar(), start, self.day_offset).scan_limit(self.scan_limit)
    }

    /// The next `limit` opportunities on or after `start`.
    pub fn next_opportunities(&self, start: Date, limit: usize) -> Result<Vec<FastingDay>> {
        self.opportunities(start).collect_limit(limit)
    }

    /// The lunar month page containing `reference`.
    pub fn month_page(&self, reference: Date) -> Result<MonthPage> {
        self.calendar().month_page(reference, self.day_offset)
    }

    /// Whether a reminder for tomorrow is due today.
    pub fn due_reminder(&self, today: Date, last_notified: Option<Date>) -> Result<Option<Reminder>> {
        due_reminder(
            self.calendar(),
            today,
            last_notified,
            self.day_offset,
            &self.reminders,
        )
    }
}
