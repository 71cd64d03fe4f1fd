//! A civil day together with its lunar date and fasting category.

use crate::date::Date;
use crate::details::FastingDetails;
use crate::lunar_date::LunarDate;
use crate::occasion::{classify, OccasionCategory};

/// A civil date, its lunar equivalent and its fasting category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FastingDay {
    date: Date,
    lunar: LunarDate,
    category: OccasionCategory,
}

impl FastingDay {
    /// Classify `date` given its (already offset-corrected) lunar date.
    pub fn new(date: Date, lunar: LunarDate) -> Self {
        Self {
            date,
            lunar,
            category: classify(date, &lunar),
        }
    }

    /// Civil date.
    pub fn date(&self) -> Date {
        self.date
    }

    /// Lunar date.
    pub fn lunar(&self) -> LunarDate {
        self.lunar
    }

    /// Fasting category.
    pub fn category(&self) -> OccasionCategory {
        self.category
    }

    /// Supplementary text for the category, if any.
    pub fn details(&self) -> Option<&'static FastingDetails> {
        self.category.details()
    }
}
