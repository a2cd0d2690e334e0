use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle state of a proposal as reported by the primary DAO contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProposalStatus {
    Pending,
    Active,
    #[serde(alias = "Cancelled")]
    Canceled,
    Defeated,
    Succeeded,
    Queued,
    Expired,
    Executed,
    Vetoed,
    #[serde(other)]
    Undetermined,
}

impl Default for ProposalStatus {
    fn default() -> Self {
        Self::Undetermined
    }
}

impl ProposalStatus {
    /// True while the primary vote has not closed yet.
    pub fn is_pending_or_active(&self) -> bool {
        matches!(self, Self::Pending | Self::Active)
    }
}

impl fmt::Display for ProposalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Pending => "Pending",
            Self::Active => "Active",
            Self::Canceled => "Canceled",
            Self::Defeated => "Defeated",
            Self::Succeeded => "Succeeded",
            Self::Queued => "Queued",
            Self::Expired => "Expired",
            Self::Executed => "Executed",
            Self::Vetoed => "Vetoed",
            Self::Undetermined => "Undetermined",
        };
        write!(f, "{}", s)
    }
}

/// A governance proposal on the primary DAO.
///
/// Records are read-only inputs: nothing in this workspace writes derived
/// values back onto them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Proposal {
    pub id: u64,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub proposer: String,

    #[serde(default)]
    pub start_block: u64,

    #[serde(default)]
    pub end_block: u64,

    #[serde(default)]
    pub created_block: u64,

    /// Earliest execution time once queued.
    #[serde(default)]
    pub eta: Option<DateTime<Utc>>,

    #[serde(default)]
    pub quorum_votes: u64,

    #[serde(default)]
    pub for_count: u64,

    #[serde(default)]
    pub against_count: u64,

    #[serde(default)]
    pub abstain_count: u64,

    #[serde(default)]
    pub status: ProposalStatus,

    /// Hash of the transaction that created the proposal. Off-chain votes
    /// reference it in their body text.
    #[serde(default)]
    pub transaction_hash: String,
}

impl Proposal {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_numeric_fields_default_to_zero() {
        let p = Proposal::from_json(r#"{"id": 7, "status": "Active"}"#).unwrap();
        assert_eq!(p.id, 7);
        assert_eq!(p.for_count, 0);
        assert_eq!(p.end_block, 0);
        assert_eq!(p.eta, None);
        assert_eq!(p.status, ProposalStatus::Active);
    }

    #[test]
    fn test_status_aliases_and_unknown_values() {
        let p = Proposal::from_json(r#"{"id": 1, "status": "Cancelled"}"#).unwrap();
        assert_eq!(p.status, ProposalStatus::Canceled);

        let p = Proposal::from_json(r#"{"id": 1, "status": "SomethingNew"}"#).unwrap();
        assert_eq!(p.status, ProposalStatus::Undetermined);
    }

    #[test]
    fn test_pending_or_active() {
        assert!(ProposalStatus::Pending.is_pending_or_active());
        assert!(ProposalStatus::Active.is_pending_or_active());
        assert!(!ProposalStatus::Queued.is_pending_or_active());
        assert!(!ProposalStatus::Executed.is_pending_or_active());
    }
}
