//! The discrete selections an application form offers.
//!
//! Each selection parses from a stable kebab-case identifier (or the
//! Japanese label shown on the form) and serializes as that identifier.

use std::str::FromStr;

use lt_core::errors::{Error, Result};
use lt_core::utilities::data_parsers::normalize_identifier;
use serde::{Deserialize, Serialize};

/// Common behaviour of the selection enums.
pub trait Selection: Sized + Copy + 'static {
    /// Every variant, in form order.
    const ALL: &'static [Self];

    /// Human-readable kind, used in parse errors.
    const KIND: &'static str;

    /// Stable kebab-case identifier.
    fn id(&self) -> &'static str;

    /// Label as shown on the application form.
    fn label(&self) -> &'static str;

    /// Additional accepted spellings.
    fn aliases(&self) -> &'static [&'static str] {
        &[]
    }

    /// Look up a variant by identifier, alias, or form label.
    fn parse_selection(s: &str) -> Result<Self> {
        let wanted = normalize_identifier(s);
        let trimmed = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|v| {
                v.id() == wanted || v.label() == trimmed || v.aliases().contains(&wanted.as_str())
            })
            .ok_or_else(|| {
                let known: Vec<&str> = Self::ALL.iter().map(|v| v.id()).collect();
                Error::Parse(format!(
                    "unknown {} '{s}' (expected one of: {})",
                    Self::KIND,
                    known.join(", ")
                ))
            })
    }
}

macro_rules! selection_str_impls {
    ($ty:ty) => {
        impl FromStr for $ty {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                <$ty as Selection>::parse_selection(s)
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.id())
            }
        }
    };
}

// ── Equipment ─────────────────────────────────────────────────────────────────

/// How the router is supplied and installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EquipmentArrangement {
    /// Rental router installed on site by a technician.
    OnsiteRentalSetup,
    /// Rental router shipped to and installed by the customer.
    CustomerRentalSetup,
    /// Customer-owned IPoE-capable terminal.
    OwnedTerminal,
}

impl EquipmentArrangement {
    /// `true` for the two rental-router arrangements.
    pub fn is_rental(&self) -> bool {
        matches!(
            self,
            EquipmentArrangement::OnsiteRentalSetup | EquipmentArrangement::CustomerRentalSetup
        )
    }
}

impl Selection for EquipmentArrangement {
    const ALL: &'static [Self] = &[
        EquipmentArrangement::OnsiteRentalSetup,
        EquipmentArrangement::CustomerRentalSetup,
        EquipmentArrangement::OwnedTerminal,
    ];
    const KIND: &'static str = "equipment arrangement";

    fn id(&self) -> &'static str {
        match self {
            EquipmentArrangement::OnsiteRentalSetup => "onsite-rental-setup",
            EquipmentArrangement::CustomerRentalSetup => "customer-rental-setup",
            EquipmentArrangement::OwnedTerminal => "owned-terminal",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            EquipmentArrangement::OnsiteRentalSetup => "レンタルルーター02（オンサイト設置）",
            EquipmentArrangement::CustomerRentalSetup => "レンタルルーター02（お客様設置）",
            EquipmentArrangement::OwnedTerminal => "IPoE対応ルーター自営端末",
        }
    }

    fn aliases(&self) -> &'static [&'static str] {
        match self {
            EquipmentArrangement::OnsiteRentalSetup => &["onsite", "onsite-rental"],
            EquipmentArrangement::CustomerRentalSetup => &["customer", "customer-rental"],
            EquipmentArrangement::OwnedTerminal => &["owned", "own"],
        }
    }
}

selection_str_impls!(EquipmentArrangement);

// ── Registration ──────────────────────────────────────────────────────────────

/// Who enters the application into the ordering system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RegistrationChannel {
    /// The customer enters it through the web form.
    SelfWebEntry,
    /// A sales agent (relationship manager) enters it.
    AgentChannel,
}

impl Selection for RegistrationChannel {
    const ALL: &'static [Self] = &[RegistrationChannel::SelfWebEntry, RegistrationChannel::AgentChannel];
    const KIND: &'static str = "registration channel";

    fn id(&self) -> &'static str {
        match self {
            RegistrationChannel::SelfWebEntry => "self-web-entry",
            RegistrationChannel::AgentChannel => "agent-channel",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            RegistrationChannel::SelfWebEntry => "自身でWebエントリー",
            RegistrationChannel::AgentChannel => "RM経由",
        }
    }

    fn aliases(&self) -> &'static [&'static str] {
        match self {
            RegistrationChannel::SelfWebEntry => &["web", "self"],
            RegistrationChannel::AgentChannel => &["agent", "rm"],
        }
    }
}

selection_str_impls!(RegistrationChannel);

// ── Line type ─────────────────────────────────────────────────────────────────

/// Speed tier of the fibre line, as far as equipment compatibility cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConnectionSpeedClass {
    /// 1 Gbps class.
    #[serde(rename = "1g")]
    Standard,
    /// 10 Gbps class.
    #[serde(rename = "10g")]
    TenGig,
}

impl Selection for ConnectionSpeedClass {
    const ALL: &'static [Self] = &[
        ConnectionSpeedClass::Standard,
        ConnectionSpeedClass::TenGig,
    ];
    const KIND: &'static str = "speed class";

    fn id(&self) -> &'static str {
        match self {
            ConnectionSpeedClass::Standard => "1g",
            ConnectionSpeedClass::TenGig => "10g",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ConnectionSpeedClass::Standard => "1ギガ",
            ConnectionSpeedClass::TenGig => "10ギガ",
        }
    }

    fn aliases(&self) -> &'static [&'static str] {
        match self {
            ConnectionSpeedClass::Standard => &["standard"],
            ConnectionSpeedClass::TenGig => &["ten-gig"],
        }
    }
}

selection_str_impls!(ConnectionSpeedClass);

/// Fibre line product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineType {
    /// FLET'S Hikari, 1 Gbps.
    #[serde(rename = "flets-1g")]
    Flets1G,
    /// FLET'S Hikari, 10 Gbps.
    #[serde(rename = "flets-10g")]
    Flets10G,
    /// docomo Hikari, 1 Gbps.
    #[serde(rename = "docomo-1g")]
    Docomo1G,
    /// docomo Hikari, 10 Gbps.
    #[serde(rename = "docomo-10g")]
    Docomo10G,
}

impl LineType {
    /// Speed class used by the equipment compatibility check.
    pub fn speed_class(&self) -> ConnectionSpeedClass {
        match self {
            LineType::Flets1G | LineType::Docomo1G => ConnectionSpeedClass::Standard,
            LineType::Flets10G | LineType::Docomo10G => ConnectionSpeedClass::TenGig,
        }
    }
}

impl Selection for LineType {
    const ALL: &'static [Self] = &[
        LineType::Flets1G,
        LineType::Flets10G,
        LineType::Docomo1G,
        LineType::Docomo10G,
    ];
    const KIND: &'static str = "line type";

    fn id(&self) -> &'static str {
        match self {
            LineType::Flets1G => "flets-1g",
            LineType::Flets10G => "flets-10g",
            LineType::Docomo1G => "docomo-1g",
            LineType::Docomo10G => "docomo-10g",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            LineType::Flets1G => "フレッツ光1ギガ",
            LineType::Flets10G => "フレッツ光10ギガ",
            LineType::Docomo1G => "ドコモ光1ギガ",
            LineType::Docomo10G => "ドコモ光10ギガ",
        }
    }
}

selection_str_impls!(LineType);

// ── Informational selections ──────────────────────────────────────────────────

/// Where the customer's contract stands. Shown to the operator only; it
/// does not change the lead time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContractStatus {
    /// New contract or transfer from an existing line.
    #[default]
    NewOrTransfer,
    /// A contract already exists.
    ExistingContract,
    /// Applied, construction date fixed, not yet installed.
    AppliedDateFixed,
    /// Applied, construction date not fixed yet.
    AppliedDateUnfixed,
}

impl Selection for ContractStatus {
    const ALL: &'static [Self] = &[
        ContractStatus::NewOrTransfer,
        ContractStatus::ExistingContract,
        ContractStatus::AppliedDateFixed,
        ContractStatus::AppliedDateUnfixed,
    ];
    const KIND: &'static str = "contract status";

    fn id(&self) -> &'static str {
        match self {
            ContractStatus::NewOrTransfer => "new-or-transfer",
            ContractStatus::ExistingContract => "existing-contract",
            ContractStatus::AppliedDateFixed => "applied-date-fixed",
            ContractStatus::AppliedDateUnfixed => "applied-date-unfixed",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ContractStatus::NewOrTransfer => "新規および転用",
            ContractStatus::ExistingContract => "既存契約あり",
            ContractStatus::AppliedDateFixed => "申込済み（工事日確定、工事前）",
            ContractStatus::AppliedDateUnfixed => "申込済み（工事日未確定）",
        }
    }

    fn aliases(&self) -> &'static [&'static str] {
        match self {
            ContractStatus::NewOrTransfer => &["new", "transfer"],
            ContractStatus::ExistingContract => &["existing"],
            _ => &[],
        }
    }
}

selection_str_impls!(ContractStatus);

/// Whether the CAF number (line transfer reference) is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CafStatus {
    /// The CAF number is at hand.
    #[default]
    Known,
    /// The CAF number still has to be obtained.
    Unknown,
}

impl Selection for CafStatus {
    const ALL: &'static [Self] = &[CafStatus::Known, CafStatus::Unknown];
    const KIND: &'static str = "CAF status";

    fn id(&self) -> &'static str {
        match self {
            CafStatus::Known => "known",
            CafStatus::Unknown => "unknown",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            CafStatus::Known => "CAF番号あり",
            CafStatus::Unknown => "CAF番号不明",
        }
    }
}

selection_str_impls!(CafStatus);
