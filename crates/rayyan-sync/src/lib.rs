//! # rayyan-sync
//!
//! Aligns the local lunar calendar with an official source. A
//! [`LunarAuthority`] reports today's official Hijri date and
//! [`detect_offset`] finds the day offset under which the local calendar
//! agrees with it.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// HTTP authority backed by the Aladhan `gToH` endpoint.
pub mod aladhan;
/// The authority trait and its answer type.
pub mod authority;
/// Offset search.
pub mod detect;

pub use aladhan::{parse_gtoh_payload, AladhanAuthority, AuthorityConfig};
pub use authority::{LunarAuthority, OfficialLunarDate};
pub use detect::{detect_offset, detect_offset_today, OFFSET_SEARCH_RANGE};
