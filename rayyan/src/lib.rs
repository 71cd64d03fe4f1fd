//! # rayyan
//!
//! A Hijri fasting calendar: civil-to-lunar conversion with a user day
//! offset, classification of voluntary fasting days, upcoming opportunity
//! search, lunar month grids and day-offset detection against an official
//! source.
//!
//! This crate is a **façade** that re-exports the workspace crates.
//! Application code should depend on this crate rather than the individual
//! `rayyan-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! rayyan = "0.1"
//! ```
//!
//! ```rust
//! use rayyan::time::{Date, LunarCalendar, OccasionCategory, TabularIslamic};
//!
//! let day = TabularIslamic
//!     .fasting_day(Date::from_ymd(2024, 3, 23)?, 0)?;
//! assert_eq!(day.lunar().day(), 13);
//! assert_eq!(day.category(), OccasionCategory::WhiteDays);
//! # Ok::<(), rayyan::core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error definitions and the day-offset type.
pub use rayyan_core as core;

/// Dates, lunar calendars, classification, month pages and reminders.
pub use rayyan_time as time;

/// Day-offset detection against a remote authority.
pub use rayyan_sync as sync;
