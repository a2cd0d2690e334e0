//! Resolving a whole proposal list at once.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use metagov_common::{
    ChainClock, Delegate, DelegateVote, DisplayStatus, FederationProposal, MetagovError, Proposal,
    Result, SnapshotProposal, SnapshotVote, StatusTone,
};

use crate::{
    actions::{next_action, ProposalAction},
    config::MetagovConfig,
    correlate::{federation_threshold, find_federation_for, find_snapshot_for},
    countdown::{compute_countdown_text, metagov_vote_time, primary_vote_time, VoteTime},
    format::RelativeTimeFormatter,
    status::{is_federation_managed, resolve_display_status},
    votes::{aggregate_snapshot_voters, attribute_delegate_votes, VoteBreakdown},
};

/// Everything fetched from the chain, the indexer and the off-chain vote
/// service for one render of the proposal list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BoardInput {
    pub current_block: u64,

    /// Wall-clock time matching `current_block`. Defaults to the system time.
    #[serde(default)]
    pub now: Option<DateTime<Utc>>,

    #[serde(default)]
    pub proposals: Vec<Proposal>,

    #[serde(default)]
    pub snapshot_proposals: Vec<SnapshotProposal>,

    #[serde(default)]
    pub federation_proposals: Vec<FederationProposal>,

    #[serde(default)]
    pub delegates: Vec<Delegate>,

    /// Primary DAO votes keyed by proposal id.
    #[serde(default)]
    pub proposal_votes: BTreeMap<u64, Vec<DelegateVote>>,

    /// Off-chain votes keyed by snapshot proposal id.
    #[serde(default)]
    pub snapshot_votes: BTreeMap<String, Vec<SnapshotVote>>,

    /// Federation votes keyed by federation proposal id.
    #[serde(default)]
    pub federation_votes: BTreeMap<u64, Vec<DelegateVote>>,
}

impl BoardInput {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load_from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        Self::from_json(&data)
    }

    pub fn clock(&self) -> ChainClock {
        ChainClock::new(self.current_block, self.now.unwrap_or_else(Utc::now))
    }
}

/// One row of the resolved proposal list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedProposal {
    pub id: u64,
    pub title: String,
    pub status: DisplayStatus,
    pub label: String,
    pub tone: StatusTone,
    pub countdown: Option<String>,
    /// Start or end time of the primary vote for the detail page.
    pub vote_time: VoteTime,
    pub metagov_vote_time: Option<VoteTime>,
    pub action: Option<ProposalAction>,
    pub snapshot_id: Option<String>,
    pub federation_id: Option<u64>,
    pub votes: VoteBreakdown,
    /// Tally of the metagovernance vote, when one exists.
    pub metagov_votes: Option<VoteBreakdown>,
}

/// Resolves every proposal, newest first.
pub fn resolve_board(
    input: &BoardInput,
    config: &MetagovConfig,
    formatter: &dyn RelativeTimeFormatter,
) -> Vec<ResolvedProposal> {
    let clock = input.clock();
    let config = MetagovConfig {
        federation_id_threshold: federation_threshold(config, &input.federation_proposals),
        ..config.clone()
    };

    let mut proposals: Vec<&Proposal> = input.proposals.iter().collect();
    proposals.sort_by(|a, b| b.id.cmp(&a.id));

    proposals
        .into_iter()
        .map(|p| resolve_row(p, input, &clock, &config, formatter))
        .collect()
}

/// Resolves a single proposal of the board by id.
pub fn resolve_one(
    input: &BoardInput,
    id: u64,
    config: &MetagovConfig,
    formatter: &dyn RelativeTimeFormatter,
) -> Result<ResolvedProposal> {
    let proposal = input
        .proposals
        .iter()
        .find(|p| p.id == id)
        .ok_or(MetagovError::ProposalNotFound(id))?;
    let config = MetagovConfig {
        federation_id_threshold: federation_threshold(config, &input.federation_proposals),
        ..config.clone()
    };
    Ok(resolve_row(proposal, input, &input.clock(), &config, formatter))
}

fn resolve_row(
    proposal: &Proposal,
    input: &BoardInput,
    clock: &ChainClock,
    config: &MetagovConfig,
    formatter: &dyn RelativeTimeFormatter,
) -> ResolvedProposal {
    let federation = find_federation_for(proposal, &input.federation_proposals);
    // federation-managed proposals never use an off-chain vote
    let snapshot = if is_federation_managed(proposal, config) {
        None
    } else {
        find_snapshot_for(proposal, &input.snapshot_proposals)
    };

    let status =
        resolve_display_status(proposal, clock.current_block, snapshot, federation, config);
    let countdown = if status.has_countdown() {
        compute_countdown_text(proposal, clock, status, snapshot, federation, config, formatter)
    } else {
        None
    };

    debug!(
        proposal = proposal.id,
        primary = %proposal.status,
        snapshot = snapshot.map(|s| s.id.as_str()),
        federation = federation.map(|f| f.id),
        %status,
        "resolved proposal status"
    );

    let primary_votes = input
        .proposal_votes
        .get(&proposal.id)
        .map(|v| attribute_delegate_votes(v, &input.delegates))
        .unwrap_or_default();

    let metagov_votes = match (federation, snapshot) {
        (Some(fed), _) => {
            let votes = input
                .federation_votes
                .get(&fed.id)
                .map(|v| attribute_delegate_votes(v, &input.delegates))
                .unwrap_or_default();
            Some(VoteBreakdown::for_federation(fed, &votes))
        }
        (None, Some(snap)) => {
            let voters = input
                .snapshot_votes
                .get(&snap.id)
                .map(|v| aggregate_snapshot_voters(v, &input.delegates))
                .unwrap_or_default();
            Some(VoteBreakdown::for_snapshot(snap, &voters))
        }
        (None, None) => None,
    };

    ResolvedProposal {
        id: proposal.id,
        title: proposal.title.clone(),
        status,
        label: status.label(&config.names),
        tone: status.tone(),
        countdown,
        vote_time: primary_vote_time(proposal, clock, config),
        metagov_vote_time: metagov_vote_time(clock, snapshot, federation, config),
        action: next_action(proposal, status, clock.now),
        snapshot_id: snapshot.map(|s| s.id.clone()),
        federation_id: federation.map(|f| f.id),
        votes: VoteBreakdown::for_proposal(proposal, &primary_votes),
        metagov_votes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::Humanized;
    use metagov_common::ProposalStatus;

    #[test]
    fn test_rows_are_newest_first() {
        let input = BoardInput {
            current_block: 100,
            proposals: vec![
                Proposal { id: 1, status: ProposalStatus::Executed, ..Default::default() },
                Proposal { id: 3, status: ProposalStatus::Defeated, ..Default::default() },
                Proposal { id: 2, status: ProposalStatus::Vetoed, ..Default::default() },
            ],
            ..Default::default()
        };
        let rows = resolve_board(&input, &MetagovConfig::default(), &Humanized);
        let ids: Vec<u64> = rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
        assert!(rows.iter().all(|r| r.countdown.is_none()));
    }

    #[test]
    fn test_missing_proposal_is_an_error() {
        let err = resolve_one(&BoardInput::default(), 9, &MetagovConfig::default(), &Humanized)
            .unwrap_err();
        assert!(matches!(err, MetagovError::ProposalNotFound(9)));
    }
}
