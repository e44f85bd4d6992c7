//! # lt-core
//!
//! Core types and error definitions for leadtime-rs.
//!
//! This crate provides the pieces shared by every other crate in the
//! workspace: the error enum, the `Result` alias, the `ensure!`
//! macro, and small text parsers used at the input boundary.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

/// Miscellaneous utilities.
pub mod utilities;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Signed count of business days. Negative values are rejected by the
/// calculator but representable so that callers can be told why.
pub type BusinessDays = i32;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
