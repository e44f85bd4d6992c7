//! Errors raised while resolving an application deadline.

use thiserror::Error;

use crate::selection::{ConnectionSpeedClass, EquipmentArrangement};

/// Why no deadline could be produced.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DeadlineError {
    /// The equipment arrangement is not offered at the line's speed.
    #[error("{arrangement} is not available on {speed} lines; choose owned-terminal")]
    Incompatible {
        /// Speed class of the selected line.
        speed: ConnectionSpeedClass,
        /// The arrangement that was rejected.
        arrangement: EquipmentArrangement,
    },

    /// Invalid input or a business-day calculation failure.
    #[error(transparent)]
    Core(#[from] lt_core::Error),
}

impl DeadlineError {
    /// `true` if the input was rejected before any calculation.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, DeadlineError::Core(lt_core::Error::InvalidInput(_)))
    }
}

/// `Result` alias for deadline resolution.
pub type Result<T, E = DeadlineError> = std::result::Result<T, E>;
