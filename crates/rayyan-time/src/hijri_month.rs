//! Months of the Hijri year.

use crate::locale::Locale;

/// Month of the Hijri year.
///
/// Variants are numbered 1–12 (Muharram = 1, Dhu al-Hijjah = 12).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum HijriMonth {
    /// Muharram (1).
    Muharram = 1,
    /// Safar (2).
    Safar = 2,
    /// Rabi' al-Awwal (3).
    RabiAlAwwal = 3,
    /// Rabi' al-Thani (4).
    RabiAlThani = 4,
    /// Jumada al-Awwal (5).
    JumadaAlAwwal = 5,
    /// Jumada al-Thani (6).
    JumadaAlThani = 6,
    /// Rajab (7).
    Rajab = 7,
    /// Sha'ban (8).
    Shaban = 8,
    /// Ramadan (9).
    Ramadan = 9,
    /// Shawwal (10).
    Shawwal = 10,
    /// Dhu al-Qi'dah (11).
    DhuAlQidah = 11,
    /// Dhu al-Hijjah (12).
    DhuAlHijjah = 12,
}

const ENGLISH_NAMES: [&str; 12] = [
    "Muharram",
    "Safar",
    "Rabi' al-Awwal",
    "Rabi' al-Thani",
    "Jumada al-Awwal",
    "Jumada al-Thani",
    "Rajab",
    "Sha'ban",
    "Ramadan",
    "Shawwal",
    "Dhu al-Qi'dah",
    "Dhu al-Hijjah",
];

const ARABIC_NAMES: [&str; 12] = [
    "محرم",
    "صفر",
    "ربيع الأول",
    "ربيع الثاني",
    "جمادى الأولى",
    "جمادى الآخرة",
    "رجب",
    "شعبان",
    "رمضان",
    "شوال",
    "ذو القعدة",
    "ذو الحجة",
];

impl HijriMonth {
    /// All twelve months in order.
    pub const ALL: [HijriMonth; 12] = [
        HijriMonth::Muharram,
        HijriMonth::Safar,
        HijriMonth::RabiAlAwwal,
        HijriMonth::RabiAlThani,
        HijriMonth::JumadaAlAwwal,
        HijriMonth::JumadaAlThani,
        HijriMonth::Rajab,
        HijriMonth::Shaban,
        HijriMonth::Ramadan,
        HijriMonth::Shawwal,
        HijriMonth::DhuAlQidah,
        HijriMonth::DhuAlHijjah,
    ];

    /// Construct from a number (1 = Muharram … 12 = Dhu al-Hijjah).
    ///
    /// Returns `None` if the value is out of range.
    pub fn from_number(n: u8) -> Option<Self> {
        Self::ALL.get(usize::from(n).checked_sub(1)?).copied()
    }

    /// Return the 1-based month number.
    pub fn number(&self) -> u8 {
        *self as u8
    }

    /// Return the month name in `locale`.
    pub fn name(&self, locale: Locale) -> &'static str {
        let idx = usize::from(self.number() - 1);
        match locale {
            Locale::English => ENGLISH_NAMES[idx],
            Locale::Arabic => ARABIC_NAMES[idx],
        }
    }
}

impl std::fmt::Display for HijriMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name(Locale::English))
    }
}

impl From<HijriMonth> for u8 {
    fn from(m: HijriMonth) -> u8 {
        m as u8
    }
}
