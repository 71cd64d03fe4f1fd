//! `OccasionCategory` and the classification rules.

use serde::{Deserialize, Serialize};

use crate::date::Date;
use crate::details::FastingDetails;
use crate::hijri_month::HijriMonth;
use crate::lunar_date::LunarDate;
use crate::weekday::Weekday;

/// The fasting occasion a day belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OccasionCategory {
    /// A Monday or Thursday.
    MondayThursday,
    /// Lunar days 13, 14 and 15 (Ayyam al-Beed).
    WhiteDays,
    /// 10 Muharram.
    Ashura,
    /// 9 Muharram, the day before Ashura.
    Tasua,
    /// 9 Dhu al-Hijjah.
    Arafah,
    /// The first ten days of Dhu al-Hijjah.
    DhulHijjah,
    /// Any day of Shawwal; highlights the six-day window, not a daily fast.
    Shawwal,
    /// The month of Sha'ban.
    Shaban,
    /// No recommended fast.
    None,
    /// Fasting is prohibited (the two Eids and the days of Tashreeq).
    Forbidden,
}

impl OccasionCategory {
    /// Classify from the three facts the rules look at.
    ///
    /// First match wins:
    /// 1. 9 Dhu al-Hijjah → [`Arafah`](Self::Arafah)
    /// 2. 10 Muharram → [`Ashura`](Self::Ashura)
    /// 3. lunar day 13–15 → [`WhiteDays`](Self::WhiteDays)
    /// 4. Monday or Thursday → [`MondayThursday`](Self::MondayThursday)
    /// 5. Shawwal → [`Shawwal`](Self::Shawwal)
    /// 6. otherwise [`None`](Self::None)
    pub fn from_parts(weekday: Weekday, lunar_day: u8, lunar_month: u8) -> Self {
        let month = HijriMonth::from_number(lunar_month);
        match (month, lunar_day) {
            (Some(HijriMonth::DhuAlHijjah), 9) => OccasionCategory::Arafah,
            (Some(HijriMonth::Muharram), 10) => OccasionCategory::Ashura,
            (_, 13..=15) => OccasionCategory::WhiteDays,
            _ if weekday.is_sunnah_fast_day() => OccasionCategory::MondayThursday,
            (Some(HijriMonth::Shawwal), _) => OccasionCategory::Shawwal,
            _ => OccasionCategory::None,
        }
    }

    /// `true` for days worth listing as an upcoming fast: anything except
    /// [`None`](Self::None), the [`Shawwal`](Self::Shawwal) highlight and
    /// [`Forbidden`](Self::Forbidden).
    pub fn is_opportunity(&self) -> bool {
        !matches!(
            self,
            OccasionCategory::None | OccasionCategory::Shawwal | OccasionCategory::Forbidden
        )
    }

    /// `true` for the named once-a-year occasions.
    pub fn is_special(&self) -> bool {
        matches!(
            self,
            OccasionCategory::Ashura
                | OccasionCategory::Tasua
                | OccasionCategory::Arafah
                | OccasionCategory::DhulHijjah
        )
    }

    /// Intention text and reading link for this category, if any.
    pub fn details(&self) -> Option<&'static FastingDetails> {
        crate::details::details_for(*self)
    }
}

impl std::fmt::Display for OccasionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            OccasionCategory::MondayThursday => "Monday/Thursday",
            OccasionCategory::WhiteDays => "White Days",
            OccasionCategory::Ashura => "Ashura",
            OccasionCategory::Tasua => "Tasu'a",
            OccasionCategory::Arafah => "Day of Arafah",
            OccasionCategory::DhulHijjah => "First ten days of Dhu al-Hijjah",
            OccasionCategory::Shawwal => "Shawwal",
            OccasionCategory::Shaban => "Sha'ban",
            OccasionCategory::None => "None",
            OccasionCategory::Forbidden => "Forbidden",
        };
        write!(f, "{name}")
    }
}

/// Classify a civil date together with its lunar equivalent.
pub fn classify(date: Date, lunar: &LunarDate) -> OccasionCategory {
    OccasionCategory::from_parts(date.weekday(), lunar.day(), lunar.month())
}
