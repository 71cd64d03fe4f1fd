//! `LunarCalendar` trait.
//!
//! A lunar calendar knows one thing: how to turn a civil date into a
//! [`LunarDate`]. Everything the engine derives from that (offset
//! correction, fasting classification, upcoming opportunities, month pages)
//! is provided on top of it.

use crate::date::Date;
use crate::fasting_day::FastingDay;
use crate::lunar_date::LunarDate;
use crate::month_page::{self, MonthPage};
use crate::opportunities::{Opportunities, DEFAULT_SCAN_LIMIT};
use rayyan_core::errors::{Error, Result};
use rayyan_core::DayOffset;

/// A civil-to-Hijri calendar transform.
pub trait LunarCalendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"Umm al-Qura"`).
    fn name(&self) -> &str;

    /// Convert `date` as-is, without any offset.
    fn lunar_date(&self, date: Date) -> Result<LunarDate>;

    /// Shift `date` by `offset` days, then convert.
    fn to_lunar(&self, date: Date, offset: DayOffset) -> Result<LunarDate> {
        if date.is_null() {
            return Err(Error::Date("cannot convert the null date".into()));
        }
        self.lunar_date(date.add_days(offset)?)
    }

    /// Convert and classify `date`.
    fn fasting_day(&self, date: Date, offset: DayOffset) -> Result<FastingDay> {
        let lunar = self.to_lunar(date, offset)?;
        Ok(FastingDay::new(date, lunar))
    }

    /// Civil date of lunar day 1 of the month containing `reference`.
    fn month_start(&self, reference: Date, offset: DayOffset) -> Result<Date> {
        month_page::month_start(self, reference, offset)
    }

    /// Every day of the lunar month beginning on `start`.
    ///
    /// `start` must be lunar day 1.
    fn month_calendar(&self, start: Date, offset: DayOffset) -> Result<MonthPage> {
        month_page::month_calendar(self, start, offset)
    }

    /// The lunar month page containing `reference`.
    fn month_page(&self, reference: Date, offset: DayOffset) -> Result<MonthPage> {
        let start = self.month_start(reference, offset)?;
        self.month_calendar(start, offset)
    }

    /// The next `limit` fasting opportunities on or after `start`.
    fn next_opportunities(
        &self,
        start: Date,
        offset: DayOffset,
        limit: usize,
    ) -> Result<Vec<FastingDay>> {
        Opportunities::new(self, start, offset)
            .scan_limit(DEFAULT_SCAN_LIMIT)
            .collect_limit(limit)
    }
}
