//! # leadtime
//!
//! Application deadline calculator for fibre line installations.
//!
//! This crate is a **façade** that re-exports the public items of the
//! workspace crates and hosts the `leadtime` command-line front end.
//! Application code should depend on this crate rather than the individual
//! `lt-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use leadtime::leadtime::{compute_deadline, DeadlineRequest};
//! use leadtime::leadtime::{EquipmentArrangement, LineType, RegistrationChannel};
//! use leadtime::time::{Date, Japan};
//!
//! let target = Date::from_ymd(2026, 11, 30).unwrap();
//! let today = Date::from_ymd(2026, 10, 19).unwrap();
//! let request = DeadlineRequest::new(
//!     target,
//!     LineType::Flets1G,
//!     EquipmentArrangement::OwnedTerminal,
//!     RegistrationChannel::SelfWebEntry,
//! );
//! let result = compute_deadline(&request, today, &Japan).unwrap();
//! assert_eq!(result.deadline, Date::from_ymd(2026, 11, 20).unwrap());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error definitions and parsing helpers.
pub use lt_core as core;

/// Dates, holiday calendars, and business-day offsets.
pub use lt_time as time;

/// Lead-time rules and deadline resolution.
pub use lt_leadtime as leadtime;

/// Command-line arguments.
pub mod cli;

/// Text output.
pub mod report;
