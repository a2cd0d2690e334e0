//! Vote tallies split by choice, with the token ids behind each choice.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use metagov_common::{
    AttributedVote, Delegate, DelegateVote, FederationProposal, Proposal, SnapshotProposal,
    SnapshotVote, SnapshotVoter, VoteChoice,
};

/// Token ids of every record whose choice equals `choice`, flattened in input
/// order. Duplicates are kept.
pub fn split_votes_by_choice(records: &[AttributedVote], choice: u8) -> Vec<String> {
    records
        .iter()
        .filter(|v| v.choice == choice)
        .flat_map(|v| v.represented_token_ids.iter().cloned())
        .collect()
}

/// Attaches to each delegate vote the tokens its voter represents.
/// A voter missing from `delegates` represents no tokens.
pub fn attribute_delegate_votes(
    votes: &[DelegateVote],
    delegates: &[Delegate],
) -> Vec<AttributedVote> {
    let by_id: BTreeMap<&str, &[String]> = delegates
        .iter()
        .map(|d| (d.id.as_str(), d.represented_token_ids.as_slice()))
        .collect();

    votes
        .iter()
        .map(|v| AttributedVote {
            choice: v.support_detailed,
            represented_token_ids: by_id
                .get(v.voter.as_str())
                .map(|ids| ids.to_vec())
                .unwrap_or_default(),
        })
        .collect()
}

/// Collapses off-chain votes to one entry per voter, keeping each voter's
/// first vote and the order voters first appear in.
///
/// Delegate ids are lower-case addresses, voter addresses may be checksummed.
pub fn aggregate_snapshot_voters(
    votes: &[SnapshotVote],
    delegates: &[Delegate],
) -> Vec<SnapshotVoter> {
    let mut seen = HashSet::new();
    votes
        .iter()
        .filter(|v| seen.insert(v.voter.as_str()))
        .map(|v| {
            let voter = v.voter.to_lowercase();
            let token_ids = delegates
                .iter()
                .filter(|d| d.id == voter)
                .flat_map(|d| d.represented_token_ids.iter().cloned())
                .collect();
            SnapshotVoter {
                voter: v.voter.clone(),
                vp: v.vp,
                choice: v.choice,
                token_ids,
            }
        })
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChoiceTally {
    pub count: f64,
    pub percentage: f64,
    pub token_ids: Vec<String>,
}

/// For, against and abstain tallies of one vote.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VoteBreakdown {
    pub for_votes: ChoiceTally,
    pub against_votes: ChoiceTally,
    pub abstain_votes: ChoiceTally,
}

impl VoteBreakdown {
    fn from_counts(counts: [f64; 3], token_ids: [Vec<String>; 3]) -> Self {
        let total: f64 = counts.iter().sum();
        let tally = |count: f64, token_ids: Vec<String>| ChoiceTally {
            count,
            percentage: if total > 0.0 { count * 100.0 / total } else { 0.0 },
            token_ids,
        };
        let [for_ids, against_ids, abstain_ids] = token_ids;
        Self {
            for_votes: tally(counts[0], for_ids),
            against_votes: tally(counts[1], against_ids),
            abstain_votes: tally(counts[2], abstain_ids),
        }
    }

    /// Primary DAO tally. `votes` carry `supportDetailed` choice codes.
    pub fn for_proposal(proposal: &Proposal, votes: &[AttributedVote]) -> Self {
        Self::from_counts(
            [
                proposal.for_count as f64,
                proposal.against_count as f64,
                proposal.abstain_count as f64,
            ],
            VoteChoice::ALL.map(|c| split_votes_by_choice(votes, c.support_code())),
        )
    }

    /// Off-chain tally from the service's scores.
    pub fn for_snapshot(snapshot: &SnapshotProposal, voters: &[SnapshotVoter]) -> Self {
        let ids = |choice: VoteChoice| -> Vec<String> {
            voters
                .iter()
                .filter(|v| v.choice == choice.snapshot_code())
                .flat_map(|v| v.token_ids.iter().cloned())
                .collect()
        };
        Self::from_counts(
            [snapshot.score(0), snapshot.score(1), snapshot.score(2)],
            VoteChoice::ALL.map(ids),
        )
    }

    /// Federation tally. `votes` carry `supportDetailed` choice codes.
    pub fn for_federation(federation: &FederationProposal, votes: &[AttributedVote]) -> Self {
        Self::from_counts(
            [
                federation.for_count as f64,
                federation.against_count as f64,
                federation.abstain_count as f64,
            ],
            VoteChoice::ALL.map(|c| split_votes_by_choice(votes, c.support_code())),
        )
    }
}
