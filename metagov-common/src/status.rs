use std::fmt;

use serde::{Deserialize, Serialize};

use crate::proposal::ProposalStatus;

/// The single status shown for a proposal once the primary, off-chain and
/// federation states have been reconciled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DisplayStatus {
    Pending,
    Active,
    Succeeded,
    Executed,
    Defeated,
    Queued,
    Cancelled,
    Vetoed,
    Expired,
    MetagovActive,
    MetagovClosed,
    MetagovPending,
    MetagovAwaitingInitiation,
    MetagovAwaitingExecution,
    MetagovExpired,
    MetagovVetoed,
    Undetermined,
}

/// Visual weight of a status pill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusTone {
    Primary,
    ClosedMetagov,
    Success,
    Danger,
    Secondary,
}

/// Names used in user-facing copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaoNames {
    /// The DAO whose proposals are being voted on.
    #[serde(default = "DaoNames::default_primary")]
    pub primary: String,
    /// The community that votes first and casts its result into `primary`.
    #[serde(default = "DaoNames::default_metagov")]
    pub metagov: String,
}

impl DaoNames {
    fn default_primary() -> String {
        "Nouns".to_string()
    }

    fn default_metagov() -> String {
        "Lil Nouns".to_string()
    }
}

impl Default for DaoNames {
    fn default() -> Self {
        Self {
            primary: Self::default_primary(),
            metagov: Self::default_metagov(),
        }
    }
}

impl From<ProposalStatus> for DisplayStatus {
    fn from(status: ProposalStatus) -> Self {
        match status {
            ProposalStatus::Pending => DisplayStatus::Pending,
            ProposalStatus::Active => DisplayStatus::Active,
            ProposalStatus::Canceled => DisplayStatus::Cancelled,
            ProposalStatus::Defeated => DisplayStatus::Defeated,
            ProposalStatus::Succeeded => DisplayStatus::Succeeded,
            ProposalStatus::Queued => DisplayStatus::Queued,
            ProposalStatus::Expired => DisplayStatus::Expired,
            ProposalStatus::Executed => DisplayStatus::Executed,
            ProposalStatus::Vetoed => DisplayStatus::Vetoed,
            ProposalStatus::Undetermined => DisplayStatus::Undetermined,
        }
    }
}

impl DisplayStatus {
    /// Whether a countdown pill is shown next to the status.
    pub fn has_countdown(&self) -> bool {
        matches!(
            self,
            DisplayStatus::Pending
                | DisplayStatus::Active
                | DisplayStatus::Queued
                | DisplayStatus::MetagovActive
                | DisplayStatus::MetagovClosed
                | DisplayStatus::MetagovAwaitingExecution
        )
    }

    pub fn tone(&self) -> StatusTone {
        match self {
            DisplayStatus::Pending
            | DisplayStatus::Active
            | DisplayStatus::MetagovActive
            | DisplayStatus::MetagovPending => StatusTone::Primary,
            DisplayStatus::MetagovClosed => StatusTone::ClosedMetagov,
            DisplayStatus::Succeeded | DisplayStatus::Executed => StatusTone::Success,
            DisplayStatus::Defeated | DisplayStatus::Vetoed => StatusTone::Danger,
            _ => StatusTone::Secondary,
        }
    }

    /// Status pill copy.
    pub fn label(&self, names: &DaoNames) -> String {
        match self {
            DisplayStatus::Pending => "Pending".to_string(),
            DisplayStatus::Active => "Active".to_string(),
            DisplayStatus::Succeeded => "Succeeded".to_string(),
            DisplayStatus::Executed => "Executed".to_string(),
            DisplayStatus::Defeated => "Defeated".to_string(),
            DisplayStatus::Queued => "Queued".to_string(),
            DisplayStatus::Cancelled => "Canceled".to_string(),
            DisplayStatus::Vetoed => "Vetoed".to_string(),
            DisplayStatus::Expired => "Expired".to_string(),
            DisplayStatus::MetagovActive => format!("Active {} Vote", names.metagov),
            DisplayStatus::MetagovClosed => format!("Awaiting {} Vote", names.primary),
            DisplayStatus::MetagovPending => format!("Pending {} Vote", names.metagov),
            DisplayStatus::MetagovAwaitingInitiation => "Ready to start".to_string(),
            DisplayStatus::MetagovAwaitingExecution => "Ready to execute".to_string(),
            DisplayStatus::MetagovExpired => format!("Expired {} Vote", names.metagov),
            DisplayStatus::MetagovVetoed => format!("Vetoed {} Vote", names.metagov),
            DisplayStatus::Undetermined => "Undetermined".to_string(),
        }
    }
}

impl fmt::Display for DisplayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
