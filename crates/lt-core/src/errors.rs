//! Error types for leadtime-rs.
//!
//! Every fallible operation in the calculator crates returns a single
//! `thiserror`-derived enum. The `ensure!` macro keeps input validation
//! at the top of a function to a single line.

use thiserror::Error;

/// The top-level error type used by the calculator crates.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// An input was rejected before any computation took place.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The business-day search took more calendar steps than allowed.
    ///
    /// Only a holiday calendar that rejects (almost) every day can cause
    /// this; real calendars never come close to the cap.
    #[error(
        "holiday calendar '{calendar}' rejected every date for {steps} steps \
         while counting {count} business days from {start}"
    )]
    OracleExhaustion {
        /// Name of the calendar that was consulted.
        calendar: String,
        /// The date the search started from, in ISO form.
        start: String,
        /// The requested number of business days.
        count: i32,
        /// Calendar steps taken before giving up.
        steps: u32,
    },

    /// Date-related error (construction or arithmetic out of range).
    #[error("date error: {0}")]
    Date(String),

    /// Text could not be parsed into the requested value.
    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand `Result` type used throughout leadtime-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Reject invalid input.
///
/// Returns `Err(Error::InvalidInput(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use lt_core::{ensure, errors::Error};
/// fn non_negative(n: i32) -> lt_core::errors::Result<i32> {
///     ensure!(n >= 0, "count must be non-negative, got {n}");
///     Ok(n)
/// }
/// assert!(non_negative(1).is_ok());
/// assert!(matches!(non_negative(-1), Err(Error::InvalidInput(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidInput(
                format!($($msg)*)
            ).into());
        }
    };
}
