//! Application deadline resolution.
//!
//! Given the selections from the application form and the target
//! construction date, work out the last business day on which the
//! application can be received, and the first day the line can be used.

use lt_core::{ensure, BusinessDays};
use lt_time::{offset, Date, Direction, HolidayCalendar};
use serde::{Deserialize, Serialize};

use crate::errors::{DeadlineError, Result};
use crate::lead_time::LeadTime;
use crate::selection::{
    CafStatus, ConnectionSpeedClass, ContractStatus, EquipmentArrangement, LineType,
    RegistrationChannel,
};

/// Business days between installation and the first day of service.
pub const ACTIVATION_BUFFER_DAYS: BusinessDays = 2;

/// Everything the form collects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeadlineRequest {
    /// Requested (or provisional) construction date.
    pub target_date: Date,
    /// Fibre line product.
    pub line_type: LineType,
    /// Router arrangement.
    pub arrangement: EquipmentArrangement,
    /// Who registers the application.
    pub channel: RegistrationChannel,
    /// Contract status. Informational.
    #[serde(default)]
    pub contract_status: ContractStatus,
    /// Whether the CAF number is known. Informational.
    #[serde(default)]
    pub caf_status: CafStatus,
}

impl DeadlineRequest {
    /// A request with the informational fields at their defaults.
    pub fn new(
        target_date: Date,
        line_type: LineType,
        arrangement: EquipmentArrangement,
        channel: RegistrationChannel,
    ) -> Self {
        Self {
            target_date,
            line_type,
            arrangement,
            channel,
            contract_status: ContractStatus::default(),
            caf_status: CafStatus::default(),
        }
    }

    /// Set the contract status.
    pub fn with_contract_status(mut self, status: ContractStatus) -> Self {
        self.contract_status = status;
        self
    }

    /// Set the CAF status.
    pub fn with_caf_status(mut self, status: CafStatus) -> Self {
        self.caf_status = status;
        self
    }
}

/// Non-fatal notes attached to a computed deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Advisory {
    /// The deadline is already in the past.
    DeadlinePassed {
        /// The computed deadline.
        deadline: Date,
        /// The evaluation date.
        today: Date,
    },
    /// The application cannot be filed until the CAF number is known.
    CafNumberRequired,
}

impl std::fmt::Display for Advisory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Advisory::DeadlinePassed { deadline, today } => {
                write!(f, "the application deadline {deadline} is before today ({today})")
            }
            Advisory::CafNumberRequired => write!(f, "a CAF number is required to apply"),
        }
    }
}

/// A resolved deadline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Deadline {
    /// The construction date the deadline was computed from.
    pub target_date: Date,
    /// Last business day on which the application must be received.
    pub deadline: Date,
    /// First business day the service can be used.
    pub earliest_usable: Date,
    /// Lead-time breakdown.
    pub lead_time: LeadTime,
    /// `lead_time.total()`.
    pub total_lead_time_days: BusinessDays,
    /// `true` if `deadline` is before the evaluation date.
    pub deadline_passed: bool,
    /// Warnings for the operator.
    pub advisories: Vec<Advisory>,
}

/// Reject arrangements that are not offered at the line's speed.
///
/// Rental routers are not offered on 10G lines.
pub fn check_compatibility(
    speed: ConnectionSpeedClass,
    arrangement: EquipmentArrangement,
) -> Result<()> {
    if speed == ConnectionSpeedClass::TenGig && arrangement.is_rental() {
        return Err(DeadlineError::Incompatible { speed, arrangement });
    }
    Ok(())
}

/// Resolve the application deadline for `request`, evaluated on `today`.
///
/// # Errors
/// * [`DeadlineError::Core`] wrapping `InvalidInput` if the target date is
///   before `today`.
/// * [`DeadlineError::Incompatible`] for a rental router on a 10G line.
/// * [`DeadlineError::Core`] if the business-day search fails.
///
/// # Example
/// ```
/// use lt_leadtime::{compute_deadline, DeadlineRequest};
/// use lt_leadtime::selection::{EquipmentArrangement, LineType, RegistrationChannel};
/// use lt_time::{Date, NoHolidays};
///
/// let monday = Date::from_ymd(2026, 11, 30).unwrap();
/// let request = DeadlineRequest::new(
///     monday,
///     LineType::Flets1G,
///     EquipmentArrangement::OwnedTerminal,
///     RegistrationChannel::SelfWebEntry,
/// );
/// let today = Date::from_ymd(2026, 10, 19).unwrap();
/// let result = compute_deadline(&request, today, &NoHolidays).unwrap();
/// assert_eq!(result.total_lead_time_days, 5);
/// assert_eq!(result.deadline, Date::from_ymd(2026, 11, 23).unwrap());
/// assert_eq!(result.earliest_usable, Date::from_ymd(2026, 12, 2).unwrap());
/// ```
pub fn compute_deadline(
    request: &DeadlineRequest,
    today: Date,
    calendar: &dyn HolidayCalendar,
) -> Result<Deadline> {
    let target = request.target_date;
    ensure!(
        target >= today,
        "target date {target} is before the evaluation date {today}"
    );
    check_compatibility(request.line_type.speed_class(), request.arrangement)?;

    let lead_time = LeadTime::resolve(request.arrangement, request.channel);
    let total = lead_time.total();
    let deadline = offset(target, total, Direction::Backward, calendar)?;
    let earliest_usable = offset(target, ACTIVATION_BUFFER_DAYS, Direction::Forward, calendar)?;

    let deadline_passed = deadline < today;
    let mut advisories = Vec::new();
    if deadline_passed {
        tracing::warn!(%deadline, %today, "application deadline has already passed");
        advisories.push(Advisory::DeadlinePassed { deadline, today });
    }
    if request.caf_status == CafStatus::Unknown {
        advisories.push(Advisory::CafNumberRequired);
    }

    tracing::debug!(
        calendar = calendar.name(),
        %target,
        arrangement = %request.arrangement,
        channel = %request.channel,
        contract = %request.contract_status,
        total,
        %deadline,
        %earliest_usable,
        "resolved application deadline"
    );

    Ok(Deadline {
        target_date: target,
        deadline,
        earliest_usable,
        lead_time,
        total_lead_time_days: total,
        deadline_passed,
        advisories,
    })
}
