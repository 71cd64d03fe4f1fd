//! `MonthPage`: every civil day of one lunar month.

use crate::calendar::LunarCalendar;
use crate::date::Date;
use crate::fasting_day::FastingDay;
use crate::hijri_month::HijriMonth;
use rayyan_core::ensure;
use rayyan_core::errors::Result;
use rayyan_core::DayOffset;

/// Bounds on the length of a lunar month, in days.
const MIN_MONTH_LENGTH: usize = 29;
const MAX_MONTH_LENGTH: usize = 30;

/// One lunar month, as consecutive classified civil days.
///
/// Invariants: non-empty; the first entry is lunar day 1; entries are
/// civil-contiguous and share one lunar month and year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthPage {
    days: Vec<FastingDay>,
}

impl MonthPage {
    /// All days, in civil order.
    pub fn days(&self) -> &[FastingDay] {
        &self.days
    }

    /// Number of days (29 or 30 for a real lunar month).
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Always `false`; a page holds at least lunar day 1.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Lunar day 1.
    pub fn first(&self) -> &FastingDay {
        &self.days[0]
    }

    /// The last day of the month.
    pub fn last(&self) -> &FastingDay {
        &self.days[self.days.len() - 1]
    }

    /// Civil date of lunar day 1.
    pub fn first_date(&self) -> Date {
        self.first().date()
    }

    /// Civil date of the last day.
    pub fn last_date(&self) -> Date {
        self.last().date()
    }

    /// The lunar month shown.
    pub fn lunar_month(&self) -> HijriMonth {
        self.first().lunar().hijri_month()
    }

    /// The lunar year shown.
    pub fn lunar_year(&self) -> u16 {
        self.first().lunar().year()
    }

    /// Empty cells before lunar day 1 in a Sunday-first week grid.
    pub fn leading_blanks(&self) -> u8 {
        self.first_date().weekday().days_from_sunday()
    }

    /// Days on this page worth fasting.
    pub fn opportunities(&self) -> impl Iterator<Item = &FastingDay> {
        self.days.iter().filter(|d| d.category().is_opportunity())
    }

    /// Civil date of lunar day 1 of the following month.
    pub fn next_month_start(&self) -> Result<Date> {
        self.last_date().succ()
    }

    /// Civil date of lunar day 1 of the preceding month.
    pub fn previous_month_start<C: LunarCalendar + ?Sized>(
        &self,
        calendar: &C,
        offset: DayOffset,
    ) -> Result<Date> {
        calendar.month_start(self.first_date().pred()?, offset)
    }

    /// Iterate over the days.
    pub fn iter(&self) -> std::slice::Iter<'_, FastingDay> {
        self.days.iter()
    }
}

impl<'a> IntoIterator for &'a MonthPage {
    type Item = &'a FastingDay;
    type IntoIter = std::slice::Iter<'a, FastingDay>;

    fn into_iter(self) -> Self::IntoIter {
        self.days.iter()
    }
}

/// Find the civil date of lunar day 1 for the month containing `reference`.
///
/// Jumps back `lunar_day - 1` days, then steps a day at a time until lunar
/// day 1 is reached. A jump that overshoots into the previous month is
/// walked forward again.
pub(crate) fn month_start<C: LunarCalendar + ?Sized>(
    calendar: &C,
    reference: Date,
    offset: DayOffset,
) -> Result<Date> {
    let target = calendar.to_lunar(reference, offset)?;
    let mut current = reference.add_days(1 - i32::from(target.day()))?;
    let mut check = calendar.to_lunar(current, offset)?;
    while check.day() > 1 {
        current = if check.same_month(&target) {
            current.pred()?
        } else {
            current.succ()?
        };
        check = calendar.to_lunar(current, offset)?;
    }
    Ok(current)
}

/// Classify every day from lunar day 1 at `start` until the month rolls over.
pub(crate) fn month_calendar<C: LunarCalendar + ?Sized>(
    calendar: &C,
    start: Date,
    offset: DayOffset,
) -> Result<MonthPage> {
    let first = calendar.fasting_day(start, offset)?;
    let opening = first.lunar();
    ensure!(
        opening.day() == 1,
        "{start} is lunar day {} of {}, not the first of a month",
        opening.day(),
        opening.hijri_month()
    );

    let mut days = vec![first];
    let mut current = start;
    loop {
        current = current.succ()?;
        let day = calendar.fasting_day(current, offset)?;
        if !day.lunar().same_month(&opening) {
            break;
        }
        ensure!(
            days.len() < MAX_MONTH_LENGTH,
            "{} {} runs past {MAX_MONTH_LENGTH} days",
            opening.hijri_month(),
            opening.year()
        );
        days.push(day);
    }
    ensure!(
        days.len() >= MIN_MONTH_LENGTH,
        "{} {} ends after {} days",
        opening.hijri_month(),
        opening.year(),
        days.len()
    );
    tracing::debug!(
        calendar = calendar.name(),
        month = %opening.hijri_month(),
        year = opening.year(),
        length = days.len(),
        "built lunar month page"
    );
    Ok(MonthPage { days })
}
