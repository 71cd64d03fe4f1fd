//! Concrete lunar calendar implementations.
//!
//! Tabular Hijri sources can disagree with each other (and with local moon
//! sighting) by a day; the day offset exists to absorb exactly that gap.
//! Which transform the engine uses is therefore pinned by
//! [`DEFAULT_ALGORITHM`] rather than left implicit.

use serde::{Deserialize, Serialize};

use crate::calendar::LunarCalendar;

/// Arithmetic (30-year cycle) Islamic calendar.
pub mod tabular;

/// Umm al-Qura calendar of Saudi Arabia.
pub mod umm_al_qura;

pub use tabular::TabularIslamic;
pub use umm_al_qura::UmmAlQura;

/// Selects the civil-to-Hijri transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HijriAlgorithm {
    /// [`UmmAlQura`].
    #[default]
    UmmAlQura,
    /// [`TabularIslamic`].
    Tabular,
}

/// The transform used by the default-calendar entry points.
pub const DEFAULT_ALGORITHM: HijriAlgorithm = HijriAlgorithm::UmmAlQura;

impl HijriAlgorithm {
    /// The calendar implementing this algorithm.
    pub fn calendar(self) -> &'static dyn LunarCalendar {
        match self {
            HijriAlgorithm::UmmAlQura => &UmmAlQura,
            HijriAlgorithm::Tabular => &TabularIslamic,
        }
    }
}
