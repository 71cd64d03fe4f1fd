//! Display language for month and weekday names.

use serde::{Deserialize, Serialize};

/// Language used when naming lunar months and weekdays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Transliterated English names (`"Muharram"`, …).
    #[default]
    English,
    /// Arabic names (`"محرم"`, …).
    Arabic,
}
