use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use metagov_common::{DaoNames, DisplayStatus, Proposal};

/// State transition a user can trigger from the proposal page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProposalAction {
    Queue,
    Execute,
    /// Create the federation proposal so delegates can vote.
    StartMetagovVote,
    /// Cast the federation result into the primary DAO.
    CastMetagovVote,
}

impl ProposalAction {
    pub fn button_label(&self, names: &DaoNames) -> String {
        match self {
            ProposalAction::Queue => "Queue".to_string(),
            ProposalAction::Execute => "Execute".to_string(),
            ProposalAction::StartMetagovVote => "Start Voting".to_string(),
            ProposalAction::CastMetagovVote => format!("Cast Vote into {} DAO", names.primary),
        }
    }
}

/// The action waiting on someone, if any. Queued proposals only become
/// executable once `eta` has passed.
pub fn next_action(
    proposal: &Proposal,
    status: DisplayStatus,
    now: DateTime<Utc>,
) -> Option<ProposalAction> {
    match status {
        DisplayStatus::Succeeded => Some(ProposalAction::Queue),
        DisplayStatus::Queued => proposal
            .eta
            .filter(|eta| now >= *eta)
            .map(|_| ProposalAction::Execute),
        DisplayStatus::MetagovAwaitingInitiation => Some(ProposalAction::StartMetagovVote),
        DisplayStatus::MetagovAwaitingExecution => Some(ProposalAction::CastMetagovVote),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_queued_waits_for_eta() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let mut p = Proposal { eta: Some(now + Duration::hours(1)), ..Default::default() };
        assert_eq!(next_action(&p, DisplayStatus::Queued, now), None);

        p.eta = Some(now);
        assert_eq!(next_action(&p, DisplayStatus::Queued, now), Some(ProposalAction::Execute));

        p.eta = None;
        assert_eq!(next_action(&p, DisplayStatus::Queued, now), None);
    }

    #[test]
    fn test_metagov_actions() {
        let now = Utc::now();
        let p = Proposal::default();
        assert_eq!(next_action(&p, DisplayStatus::Succeeded, now), Some(ProposalAction::Queue));
        assert_eq!(
            next_action(&p, DisplayStatus::MetagovAwaitingExecution, now),
            Some(ProposalAction::CastMetagovVote)
        );
        assert_eq!(next_action(&p, DisplayStatus::MetagovActive, now), None);
        assert_eq!(
            ProposalAction::CastMetagovVote.button_label(&DaoNames::default()),
            "Cast Vote into Nouns DAO"
        );
    }
}
