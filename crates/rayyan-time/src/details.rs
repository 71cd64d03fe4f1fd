//! Supplementary content attached to fasting categories.

use crate::occasion::OccasionCategory;

/// Intention (niyyah) text and an optional further-reading link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FastingDetails {
    /// Intention in English.
    pub intention_en: &'static str,
    /// Intention in Arabic.
    pub intention_ar: &'static str,
    /// Link to an article about the occasion.
    pub resource_link: Option<&'static str>,
}

static MONDAY_THURSDAY: FastingDetails = FastingDetails {
    intention_en: "I intend to fast this day as a Sunnah of the Prophet Muhammad (peace be upon him).",
    intention_ar: "نويت صيام هذا اليوم سنة عن النبي محمد صلى الله عليه وسلم.",
    resource_link: Some(
        "https://islamqa.info/en/answers/69781/virtue-of-fasting-on-mondays-and-thursdays",
    ),
};

static WHITE_DAYS: FastingDetails = FastingDetails {
    intention_en: "I intend to fast the White Days (Ayyam al-Beed) following the Sunnah of the Prophet (peace be upon him).",
    intention_ar: "نويت صيام الأيام البيض اتباعاً لسنة النبي صلى الله عليه وسلم.",
    resource_link: Some(
        "https://islamqa.info/en/answers/49867/the-virtue-of-fasting-three-days-of-each-month",
    ),
};

static ASHURA: FastingDetails = FastingDetails {
    intention_en: "I intend to fast the day of Ashura, seeking Allah's forgiveness for the sins of the previous year.",
    intention_ar: "نويت صيام يوم عاشوراء، محتسباً على الله أن يكفر السنة التي قبله.",
    resource_link: Some("https://islamqa.info/en/answers/21775/virtues-of-fasting-ashura"),
};

static TASUA: FastingDetails = FastingDetails {
    intention_en: "I intend to fast the 9th of Muharram (Tasu'a) to differ from the Jews as the Prophet (peace be upon him) intended.",
    intention_ar: "نويت صيام يوم تاسوعاء مخالفة لليهود كما أراد النبي صلى الله عليه وسلم.",
    resource_link: Some(
        "https://islamqa.info/en/answers/21785/it-is-mustahabb-to-fast-tasua-with-ashura",
    ),
};

static ARAFAH: FastingDetails = FastingDetails {
    intention_en: "I intend to fast the Day of Arafah, hoping for the expiation of sins for the year before and the year after.",
    intention_ar: "نويت صيام يوم عرفة، طمعاً في مغفرة ذنوب السنة الماضية والسنة الباقية.",
    resource_link: Some("https://islamqa.info/en/answers/986/virtues-of-fasting-on-the-day-of-arafah"),
};

static SHAWWAL: FastingDetails = FastingDetails {
    intention_en: "I intend to fast one of the six days of Shawwal.",
    intention_ar: "نويت صيام يوم من الست من شوال.",
    resource_link: Some(
        "https://islamqa.info/en/answers/7859/virtues-of-fasting-six-days-of-shawwal",
    ),
};

static SHABAN: FastingDetails = FastingDetails {
    intention_en: "I intend to fast in Sha'ban as a preparation for Ramadan.",
    intention_ar: "نويت الصيام في شعبان استعداداً لرمضان واتباعاً للسنة.",
    resource_link: Some("https://islamqa.info/en/answers/13729/fasting-in-shaban"),
};

/// Look up the details for `category`.
pub(crate) fn details_for(category: OccasionCategory) -> Option<&'static FastingDetails> {
    match category {
        OccasionCategory::MondayThursday => Some(&MONDAY_THURSDAY),
        OccasionCategory::WhiteDays => Some(&WHITE_DAYS),
        OccasionCategory::Ashura => Some(&ASHURA),
        OccasionCategory::Tasua => Some(&TASUA),
        OccasionCategory::Arafah => Some(&ARAFAH),
        OccasionCategory::Shawwal => Some(&SHAWWAL),
        OccasionCategory::Shaban => Some(&SHABAN),
        OccasionCategory::DhulHijjah | OccasionCategory::None | OccasionCategory::Forbidden => {
            None
        }
    }
}
