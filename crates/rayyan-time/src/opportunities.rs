//! Upcoming fasting days, found one civil day at a time.
//!
//! Every walk is capped at a fixed number of civil days.

use crate::calendar::LunarCalendar;
use crate::date::Date;
use crate::fasting_day::FastingDay;
use rayyan_core::errors::{Error, Result};
use rayyan_core::DayOffset;

/// Default number of civil days examined before giving up (about ten years).
pub const DEFAULT_SCAN_LIMIT: u32 = 3660;

/// Lazy walk over the fasting opportunities on or after a start date.
///
/// Yields days whose category [is an opportunity](crate::OccasionCategory::is_opportunity),
/// in strictly increasing civil order. Stops after `scan_limit` civil days,
/// or after the first error.
#[derive(Debug)]
pub struct Opportunities<'a, C: LunarCalendar + ?Sized> {
    calendar: &'a C,
    offset: DayOffset,
    cursor: Result<Date>,
    scanned: u32,
    scan_limit: u32,
    done: bool,
}

impl<'a, C: LunarCalendar + ?Sized> Opportunities<'a, C> {
    /// Begin at `start` (inclusive).
    pub fn new(calendar: &'a C, start: Date, offset: DayOffset) -> Self {
        Self {
            calendar,
            offset,
            cursor: Ok(start),
            scanned: 0,
            scan_limit: DEFAULT_SCAN_LIMIT,
            done: false,
        }
    }

    /// Cap the number of civil days examined.
    pub fn scan_limit(mut self, days: u32) -> Self {
        self.scan_limit = days;
        self
    }

    /// Number of civil days examined so far.
    pub fn scanned(&self) -> u32 {
        self.scanned
    }

    /// Collect exactly `limit` days.
    ///
    /// # Errors
    /// [`Error::LimitUnreachable`] if the scan cap is hit first; conversion
    /// errors are passed through.
    pub fn collect_limit(mut self, limit: usize) -> Result<Vec<FastingDay>> {
        let mut days = Vec::with_capacity(limit);
        if limit == 0 {
            return Ok(days);
        }
        for day in self.by_ref() {
            days.push(day?);
            if days.len() == limit {
                return Ok(days);
            }
        }
        tracing::debug!(
            limit,
            found = days.len(),
            scanned = self.scanned,
            "opportunity search exhausted its scan limit"
        );
        Err(Error::LimitUnreachable {
            limit,
            found: days.len(),
            scanned: self.scanned,
        })
    }
}

impl<C: LunarCalendar + ?Sized> Iterator for Opportunities<'_, C> {
    type Item = Result<FastingDay>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done && self.scanned < self.scan_limit {
            let date = match &self.cursor {
                Ok(date) => *date,
                Err(e) => {
                    self.done = true;
                    return Some(Err(e.clone()));
                }
            };
            self.scanned += 1;
            let day = match self.calendar.fasting_day(date, self.offset) {
                Ok(day) => day,
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            };
            self.cursor = date.succ();
            if day.category().is_opportunity() {
                return Some(Ok(day));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendars::TabularIslamic;
    use crate::OccasionCategory;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn includes_start_date() {
        // 2024-03-11 is a Monday
        let days = Opportunities::new(&TabularIslamic, date(2024, 3, 11), 0)
            .collect_limit(1)
            .unwrap();
        assert_eq!(days[0].date(), date(2024, 3, 11));
        assert_eq!(days[0].category(), OccasionCategory::MondayThursday);
    }

    #[test]
    fn zero_limit_is_empty() {
        let days = Opportunities::new(&TabularIslamic, date(2024, 3, 11), 0)
            .collect_limit(0)
            .unwrap();
        assert!(days.is_empty());
    }

    #[test]
    fn scan_limit_guard() {
        // Tue 2024-03-12, Wed 2024-03-13 hold nothing (lunar 2 and 3 Ramadan)
        let err = Opportunities::new(&TabularIslamic, date(2024, 3, 12), 0)
            .scan_limit(2)
            .collect_limit(1)
            .unwrap_err();
        assert_eq!(
            err,
            Error::LimitUnreachable {
                limit: 1,
                found: 0,
                scanned: 2
            }
        );
    }

    #[test]
    fn stops_at_end_of_civil_range() {
        let mut it = Opportunities::new(&TabularIslamic, Date::MAX - 3, 0);
        let results: Vec<_> = it.by_ref().collect();
        assert!(results.last().unwrap().is_err());
        assert!(it.next().is_none());
    }

    #[test]
    fn null_start_is_an_error() {
        let mut it = Opportunities::new(&TabularIslamic, Date::NULL, 0);
        assert!(matches!(it.next(), Some(Err(Error::Date(_)))));
        assert!(it.next().is_none());
    }
}
