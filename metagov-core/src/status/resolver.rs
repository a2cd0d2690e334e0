use metagov_common::{
    DisplayStatus, FederationProposal, FederationStatus, Proposal, ProposalStatus,
    SnapshotProposal, SnapshotState,
};

use super::window::{FederationPhase, FederationWindow};
use crate::config::MetagovConfig;

/// Reconciles the primary proposal status with its off-chain vote and its
/// federation proposal.
///
/// A federation record takes precedence over a snapshot record. A proposal
/// whose id is at or above `federation_id_threshold` but has no federation
/// record yet is waiting for its federation vote to be created. With no
/// auxiliary record at all, an Active proposal is shown as waiting for its
/// metagovernance vote.
///
/// A `current_block` of 0 means the chain has not been read yet. An Active
/// federation record then falls back to the primary status, since its
/// voting phase cannot be placed.
pub fn resolve_display_status(
    proposal: &Proposal,
    current_block: u64,
    snapshot: Option<&SnapshotProposal>,
    federation: Option<&FederationProposal>,
    config: &MetagovConfig,
) -> DisplayStatus {
    if let Some(federation) = federation {
        return resolve_federation(proposal.status, current_block, federation, config);
    }
    if is_federation_managed(proposal, config) {
        return when_open(proposal.status, DisplayStatus::MetagovAwaitingInitiation);
    }
    if let Some(snapshot) = snapshot {
        return resolve_snapshot(proposal.status, snapshot.state);
    }
    match proposal.status {
        ProposalStatus::Active => DisplayStatus::MetagovPending,
        other => other.into(),
    }
}

/// True when the proposal's metagovernance vote runs through the federation
/// contract rather than an off-chain vote.
pub fn is_federation_managed(proposal: &Proposal, config: &MetagovConfig) -> bool {
    config
        .federation_id_threshold
        .map_or(false, |threshold| proposal.id >= threshold)
}

fn when_open(primary: ProposalStatus, metagov: DisplayStatus) -> DisplayStatus {
    if primary.is_pending_or_active() {
        metagov
    } else {
        primary.into()
    }
}

fn when_active(primary: ProposalStatus, metagov: DisplayStatus) -> DisplayStatus {
    if primary == ProposalStatus::Active {
        metagov
    } else {
        primary.into()
    }
}

fn resolve_federation(
    primary: ProposalStatus,
    current_block: u64,
    federation: &FederationProposal,
    config: &MetagovConfig,
) -> DisplayStatus {
    match federation.effective_status() {
        FederationStatus::Active => {
            if !primary.is_pending_or_active() || current_block == 0 {
                return primary.into();
            }
            match FederationWindow::of(federation, config).phase(current_block) {
                FederationPhase::NotStarted | FederationPhase::Voting => {
                    DisplayStatus::MetagovActive
                }
                // voting stays open until end_block while quorum is unmet
                FederationPhase::ExecutionWindow if !federation.quorum_met() => {
                    DisplayStatus::MetagovActive
                }
                FederationPhase::ExecutionWindow => DisplayStatus::MetagovAwaitingExecution,
                FederationPhase::Ended => DisplayStatus::MetagovExpired,
            }
        }
        FederationStatus::Executed => when_active(primary, DisplayStatus::MetagovClosed),
        FederationStatus::Expired => when_open(primary, DisplayStatus::MetagovExpired),
        FederationStatus::Vetoed => when_open(primary, DisplayStatus::MetagovVetoed),
        FederationStatus::Undetermined => {
            when_open(primary, DisplayStatus::MetagovAwaitingInitiation)
        }
    }
}

fn resolve_snapshot(primary: ProposalStatus, state: SnapshotState) -> DisplayStatus {
    match state {
        SnapshotState::Active => when_open(primary, DisplayStatus::MetagovActive),
        SnapshotState::Closed => when_active(primary, DisplayStatus::MetagovClosed),
        SnapshotState::Pending => DisplayStatus::Pending,
        SnapshotState::Unknown => primary.into(),
    }
}
