//! # rayyan-core
//!
//! Core types and error definitions for rayyan.
//!
//! This crate holds the pieces shared by every other crate in the
//! workspace: the error type, the `ensure!` macro, and the primitive
//! aliases used in public signatures.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Signed day correction applied to a civil date before lunar conversion.
///
/// Conventionally in `-3..=3`; the engine never bounds it.
pub type DayOffset = i32;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
