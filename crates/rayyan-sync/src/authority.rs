//! The source of official Hijri dates.
//!
//! A [`LunarAuthority`] reports the lunar date it recognizes for a civil
//! day. Offset detection compares that answer with a local calendar.

use async_trait::async_trait;

use rayyan_core::Result;
use rayyan_time::{Date, LunarDate};

/// An official Hijri date as published by an authority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OfficialLunarDate {
    /// Day of the lunar month.
    pub day: u8,
    /// Lunar month number, 1 = Muharram.
    pub month: u8,
    /// Hijri year.
    pub year: u16,
}

impl OfficialLunarDate {
    /// `true` if `lunar` names the same day, month and year.
    pub fn matches(&self, lunar: &LunarDate) -> bool {
        lunar.day() == self.day && lunar.month() == self.month && lunar.year() == self.year
    }
}

impl std::fmt::Display for OfficialLunarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}/{}", self.day, self.month, self.year)
    }
}

/// A source of the official lunar date for a civil day.
///
/// Implementations report every failure as `Error::Network`.
#[async_trait]
pub trait LunarAuthority: Send + Sync {
    /// The official lunar date for `today`.
    async fn official_date(&self, today: Date) -> Result<OfficialLunarDate>;

    /// Short name used in log events.
    fn name(&self) -> &str;
}
