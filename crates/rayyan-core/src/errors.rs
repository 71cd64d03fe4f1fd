//! Error types for rayyan.
//!
//! Every fallible operation in the workspace returns the single
//! `thiserror`-derived [`Error`] defined here. Pure calendar arithmetic only
//! fails on invalid input; the one networked collaborator reports its
//! failures through [`Error::Network`].

use thiserror::Error;

/// The top-level error type used throughout rayyan.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A civil date was null, malformed, or left the supported range.
    #[error("date error: {0}")]
    Date(String),

    /// The lunar calendar could not convert the given civil date.
    #[error("lunar conversion failed: {0}")]
    Conversion(String),

    /// Precondition violated (see [`ensure!`](crate::ensure)).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// The opportunity search gave up before collecting enough days.
    #[error("found {found} of {limit} fasting days after scanning {scanned} days")]
    LimitUnreachable {
        /// Number of days requested.
        limit: usize,
        /// Number of days found before giving up.
        found: usize,
        /// Number of civil days examined.
        scanned: u32,
    },

    /// The remote lunar-date authority could not be queried.
    #[error("offset detection failed: {0}")]
    Network(String),

    /// A configuration document could not be read.
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Shorthand `Result` type used throughout rayyan.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use rayyan_core::{ensure, errors::Error};
/// fn positive(days: u32) -> rayyan_core::errors::Result<u32> {
///     ensure!(days > 0, "days must be positive, got {days}");
///     Ok(days)
/// }
/// assert!(positive(1).is_ok());
/// assert_eq!(
///     positive(0),
///     Err(Error::Precondition("days must be positive, got 0".into()))
/// );
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_unreachable_message() {
        let e = Error::LimitUnreachable {
            limit: 5,
            found: 2,
            scanned: 3660,
        };
        assert_eq!(
            e.to_string(),
            "found 2 of 5 fasting days after scanning 3660 days"
        );
    }

    #[test]
    fn network_message() {
        let e = Error::Network("status 503".into());
        assert_eq!(e.to_string(), "offset detection failed: status 503");
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<Error>();
    }
}
