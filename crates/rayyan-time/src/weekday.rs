//! Days of the week.

use serde::{Deserialize, Serialize};

use crate::locale::Locale;

/// Day of the week, in Sunday-first order to match a month grid's columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    /// Sunday.
    Sunday,
    /// Monday.
    Monday,
    /// Tuesday.
    Tuesday,
    /// Wednesday.
    Wednesday,
    /// Thursday.
    Thursday,
    /// Friday.
    Friday,
    /// Saturday.
    Saturday,
}

const ENGLISH: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

const ARABIC: [&str; 7] = [
    "الأحد",
    "الاثنين",
    "الثلاثاء",
    "الأربعاء",
    "الخميس",
    "الجمعة",
    "السبت",
];

impl Weekday {
    /// Sunday through Saturday.
    pub const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// The weekday in grid column `n` (Sunday = 0); `None` past Saturday.
    pub fn from_days_from_sunday(n: u8) -> Option<Self> {
        Self::ALL.get(usize::from(n)).copied()
    }

    /// Grid column, Sunday = 0 … Saturday = 6.
    pub fn days_from_sunday(&self) -> u8 {
        *self as u8
    }

    /// Monday or Thursday, the two weekly voluntary fasts.
    pub fn is_sunnah_fast_day(&self) -> bool {
        matches!(self, Weekday::Monday | Weekday::Thursday)
    }

    /// Localized name.
    pub fn name(&self, locale: Locale) -> &'static str {
        let i = usize::from(self.days_from_sunday());
        match locale {
            Locale::English => ENGLISH[i],
            Locale::Arabic => ARABIC[i],
        }
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name(Locale::English))
    }
}
