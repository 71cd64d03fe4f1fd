//! Civil (Gregorian) `Date`.
//!
//! A `Date` is a day count. Serial 1 is 1900-01-01 and the last supported
//! day is 2199-12-31; serial 0 is reserved as the null date. Adding the
//! fixed shift [`JDN_OF_SERIAL_ZERO`] gives the Julian Day Number, which is
//! what the lunar calendars in [`crate::calendars`] work from.

use crate::weekday::Weekday;
use chrono::{Datelike, NaiveDate};
use rayyan_core::errors::{Error, Result};

/// Julian Day Number of serial 0 (1899-12-31).
pub const JDN_OF_SERIAL_ZERO: i32 = 2_415_020;

/// First and last supported civil years.
const CIVIL_YEARS: std::ops::RangeInclusive<u16> = 1900..=2199;

/// 1899-12-31 counted from the Unix epoch.
const UNIX_DAYS_OF_SERIAL_ZERO: i32 = -25_568;

/// A civil day.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Date(i32);

impl Date {
    /// Null sentinel. Every conversion rejects it.
    pub const NULL: Date = Date(0);

    /// 1900-01-01.
    pub const MIN: Date = Date(1);

    /// 2199-12-31.
    pub const MAX: Date = Date(109_573);

    /// Wrap a day count, rejecting the sentinel and anything past [`MAX`](Self::MAX).
    pub fn from_serial(serial: i32) -> Result<Self> {
        if !(Self::MIN.0..=Self::MAX.0).contains(&serial) {
            return Err(Error::Date(format!(
                "serial {serial} is outside [{}, {}]",
                Self::MIN.0,
                Self::MAX.0
            )));
        }
        Ok(Date(serial))
    }

    /// Build from civil year, month and day.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        if !CIVIL_YEARS.contains(&year) {
            return Err(Error::Date(format!(
                "civil year {year} is not supported (1900..=2199)"
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("no month {month} in a civil year")));
        }
        let last = days_in_month(year, month);
        if !(1..=last).contains(&day) {
            return Err(Error::Date(format!(
                "{year}-{month:02} has no day {day} (it ends on {last})"
            )));
        }
        Ok(Date(serial_from_ymd(year, month, day)))
    }

    /// Convert a `chrono` date.
    pub fn from_naive(date: NaiveDate) -> Result<Self> {
        let year = u16::try_from(date.year())
            .map_err(|_| Error::Date(format!("civil year {} is not supported", date.year())))?;
        Self::from_ymd(year, date.month() as u8, date.day() as u8)
    }

    /// Today's date on the local clock.
    pub fn today() -> Result<Self> {
        Self::from_naive(chrono::Local::now().date_naive())
    }

    /// Day count since 1899-12-31.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// `true` for [`Date::NULL`].
    pub fn is_null(&self) -> bool {
        self.0 == 0
    }

    /// Julian Day Number.
    pub fn julian_day(&self) -> i32 {
        self.0 + JDN_OF_SERIAL_ZERO
    }

    /// Civil year.
    pub fn year(&self) -> u16 {
        ymd_from_serial(self.0).0
    }

    /// Civil month, 1 = January.
    pub fn month(&self) -> u8 {
        ymd_from_serial(self.0).1
    }

    /// Day within the civil month.
    pub fn day_of_month(&self) -> u8 {
        ymd_from_serial(self.0).2
    }

    /// Day of the week.
    pub fn weekday(&self) -> Weekday {
        // serial 0 (1899-12-31) was a Sunday
        Weekday::from_days_from_sunday(self.0.rem_euclid(7) as u8).unwrap_or(Weekday::Sunday)
    }

    /// The same day as a `chrono` date; `None` for the null date.
    pub fn to_naive(&self) -> Option<NaiveDate> {
        if self.is_null() {
            return None;
        }
        let (y, m, d) = ymd_from_serial(self.0);
        NaiveDate::from_ymd_opt(i32::from(y), u32::from(m), u32::from(d))
    }

    /// Move `n` days (backwards when negative).
    ///
    /// The null date cannot move, and the result must stay in
    /// [`MIN`](Self::MIN)..=[`MAX`](Self::MAX).
    pub fn add_days(self, n: i32) -> Result<Self> {
        if self.is_null() {
            return Err(Error::Date("cannot shift the null date".into()));
        }
        match self.0.checked_add(n) {
            Some(serial) if (Self::MIN.0..=Self::MAX.0).contains(&serial) => Ok(Date(serial)),
            _ => Err(Error::Date(format!(
                "{self} shifted by {n} days leaves 1900-01-01..=2199-12-31"
            ))),
        }
    }

    /// The next day.
    pub fn succ(self) -> Result<Self> {
        self.add_days(1)
    }

    /// The day before.
    pub fn pred(self) -> Result<Self> {
        self.add_days(-1)
    }

    /// Days from `self` to `other`; negative when `other` is earlier.
    pub fn days_between(self, other: Date) -> i32 {
        other.0 - self.0
    }
}

// Operators panic where `add_days` would fail. Use `add_days` on untrusted input.

impl std::ops::Add<i32> for Date {
    type Output = Self;
    fn add(self, days: i32) -> Self {
        match self.add_days(days) {
            Ok(d) => d,
            Err(e) => panic!("{e}"),
        }
    }
}

impl std::ops::Sub<i32> for Date {
    type Output = Self;
    fn sub(self, days: i32) -> Self {
        self + (-days)
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, earlier: Date) -> i32 {
        earlier.days_between(self)
    }
}

impl std::ops::AddAssign<i32> for Date {
    fn add_assign(&mut self, days: i32) {
        *self = *self + days;
    }
}

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_null() {
            return f.write_str("null date");
        }
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({self})")
    }
}

/// Gregorian leap-year rule.
pub fn is_leap_year(year: u16) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Length of a civil month.
pub fn days_in_month(year: u16, month: u8) -> u8 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

// Civil-from-days and days-from-civil over 400-year eras, with March as the
// first month of the computational year.

fn serial_from_ymd(year: u16, month: u8, day: u8) -> i32 {
    let (month, day) = (i32::from(month), i32::from(day));
    let y = i32::from(year) - i32::from(month <= 2);
    let era = y / 400;
    let yoe = y - era * 400;
    let mp = (month + 9) % 12;
    let doy = (153 * mp + 2) / 5 + day - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468 - UNIX_DAYS_OF_SERIAL_ZERO
}

fn ymd_from_serial(serial: i32) -> (u16, u8, u8) {
    let z = serial + UNIX_DAYS_OF_SERIAL_ZERO + 719_468;
    let era = z / 146_097;
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = (mp + 2) % 12 + 1;
    let year = era * 400 + yoe + i32::from(month <= 2);
    (year as u16, month as u8, day as u8)
}
