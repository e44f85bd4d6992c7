//! The fixed lead-time table.

use lt_core::BusinessDays;
use serde::Serialize;

use crate::selection::{EquipmentArrangement, RegistrationChannel};

/// Business days the installation date needs to be cleared after the
/// application is received, broken down by what drives them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct LeadTime {
    /// Days needed to prepare the equipment.
    pub equipment: BusinessDays,
    /// Days needed to register the application.
    pub registration: BusinessDays,
}

impl LeadTime {
    /// Look up both components for a pair of selections.
    pub fn resolve(arrangement: EquipmentArrangement, channel: RegistrationChannel) -> Self {
        Self {
            equipment: arrangement.lead_time_days(),
            registration: channel.lead_time_days(),
        }
    }

    /// Total business days: equipment plus registration.
    pub fn total(&self) -> BusinessDays {
        self.equipment + self.registration
    }
}

impl EquipmentArrangement {
    /// Business days needed to prepare this arrangement.
    pub fn lead_time_days(&self) -> BusinessDays {
        match self {
            EquipmentArrangement::OnsiteRentalSetup => 14,
            EquipmentArrangement::CustomerRentalSetup => 10,
            EquipmentArrangement::OwnedTerminal => 4,
        }
    }
}

impl RegistrationChannel {
    /// Business days needed to register through this channel.
    pub fn lead_time_days(&self) -> BusinessDays {
        match self {
            RegistrationChannel::SelfWebEntry => 1,
            RegistrationChannel::AgentChannel => 3,
        }
    }
}
