//! Entry points on the pinned default calendar ([`DEFAULT_ALGORITHM`]).
//!
//! Each function is the matching [`LunarCalendar`](crate::calendar::LunarCalendar) method called on
//! `DEFAULT_ALGORITHM.calendar()`.

use crate::calendars::DEFAULT_ALGORITHM;
use crate::date::Date;
use crate::fasting_day::FastingDay;
use crate::lunar_date::LunarDate;
use crate::month_page::MonthPage;
use rayyan_core::errors::Result;
use rayyan_core::DayOffset;

/// Convert `date`, shifted by `offset` days, to its lunar date.
pub fn to_lunar(date: Date, offset: DayOffset) -> Result<LunarDate> {
    DEFAULT_ALGORITHM.calendar().to_lunar(date, offset)
}

/// Convert and classify `date`.
pub fn fasting_day(date: Date, offset: DayOffset) -> Result<FastingDay> {
    DEFAULT_ALGORITHM.calendar().fasting_day(date, offset)
}

/// The next `limit` fasting opportunities on or after `start`.
pub fn next_opportunities(start: Date, offset: DayOffset, limit: usize) -> Result<Vec<FastingDay>> {
    DEFAULT_ALGORITHM
        .calendar()
        .next_opportunities(start, offset, limit)
}

/// Civil date of lunar day 1 of the month containing `reference`.
pub fn month_start(reference: Date, offset: DayOffset) -> Result<Date> {
    DEFAULT_ALGORITHM.calendar().month_start(reference, offset)
}

/// Every day of the lunar month beginning on `start` (lunar day 1).
pub fn month_calendar(start: Date, offset: DayOffset) -> Result<MonthPage> {
    DEFAULT_ALGORITHM.calendar().month_calendar(start, offset)
}

/// The lunar month page containing `reference`.
pub fn month_page(reference: Date, offset: DayOffset) -> Result<MonthPage> {
    DEFAULT_ALGORITHM.calendar().month_page(reference, offset)
}
