//! # lt-leadtime
//!
//! Lead-time rules for fibre line applications, and the resolver that
//! turns a target construction date into an application deadline.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Deadline resolution (`compute_deadline`).
pub mod deadline;

/// `DeadlineError` and the crate `Result` alias.
pub mod errors;

/// The fixed lead-time table.
pub mod lead_time;

/// Form selections: equipment, channel, line type and the informational
/// fields.
pub mod selection;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use deadline::{
    check_compatibility, compute_deadline, Advisory, Deadline, DeadlineRequest,
    ACTIVATION_BUFFER_DAYS,
};
pub use errors::DeadlineError;
pub use lead_time::LeadTime;
pub use selection::{
    CafStatus, ConnectionSpeedClass, ContractStatus, EquipmentArrangement, LineType,
    RegistrationChannel, Selection,
};
