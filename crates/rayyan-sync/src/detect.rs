//! Day-offset detection.
//!
//! Finds the shift in [`OFFSET_SEARCH_RANGE`] that makes a local
//! calendar agree with a [`LunarAuthority`].

use std::ops::RangeInclusive;

use crate::authority::LunarAuthority;
use rayyan_core::{DayOffset, Result};
use rayyan_time::{Date, LunarCalendar, DEFAULT_ALGORITHM};

/// Offsets tried, in this order.
pub const OFFSET_SEARCH_RANGE: RangeInclusive<DayOffset> = -3..=3;

/// Find the day offset under which `calendar` agrees with `authority` on
/// `today`.
///
/// Offsets are tried in ascending order and the first match wins. When no
/// offset in [`OFFSET_SEARCH_RANGE`] matches, the answer is `0`. Failures
/// of the authority are returned as they are and never replaced by `0`.
pub async fn detect_offset<C: LunarCalendar + ?Sized>(
    authority: &dyn LunarAuthority,
    calendar: &C,
    today: Date,
) -> Result<DayOffset> {
    let official = match authority.official_date(today).await {
        Ok(official) => official,
        Err(e) => {
            tracing::warn!(authority = authority.name(), error = %e, "lunar authority unavailable");
            return Err(e);
        }
    };

    for offset in OFFSET_SEARCH_RANGE {
        let local = calendar.to_lunar(today, offset)?;
        if official.matches(&local) {
            tracing::info!(
                authority = authority.name(),
                calendar = calendar.name(),
                %today,
                %official,
                offset,
                "detected day offset"
            );
            return Ok(offset);
        }
    }

    tracing::warn!(
        authority = authority.name(),
        calendar = calendar.name(),
        %today,
        %official,
        "no offset within -3..=3 matches the authority; using 0"
    );
    Ok(0)
}

/// [`detect_offset`] for the current local day on the default calendar.
pub async fn detect_offset_today(authority: &dyn LunarAuthority) -> Result<DayOffset> {
    let today = Date::today()?;
    detect_offset(authority, DEFAULT_ALGORITHM.calendar(), today).await
}
