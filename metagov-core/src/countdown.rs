//! Countdown pill: which instant to count towards and how to phrase it.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use metagov_common::{
    ChainClock, DaoNames, DisplayStatus, FederationProposal, FederationStatus, Proposal,
    SnapshotProposal,
};

use crate::config::MetagovConfig;
use crate::format::RelativeTimeFormatter;
use crate::status::{FederationPhase, FederationWindow};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CountdownKind {
    /// Primary vote has not started.
    Starts,
    /// Primary vote is open.
    Ends,
    /// Time left before the proposal can no longer be executed.
    Expires,
    MetagovStarts,
    MetagovEnds,
    /// Metagovernance is done, waiting on the primary vote.
    PrimaryEnds,
}

/// A selected countdown: a template and the instant it refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Countdown {
    pub kind: CountdownKind,
    pub at: DateTime<Utc>,
}

impl Countdown {
    fn new(kind: CountdownKind, at: Option<DateTime<Utc>>) -> Option<Self> {
        at.map(|at| Self { kind, at })
    }

    pub fn render(
        &self,
        names: &DaoNames,
        formatter: &dyn RelativeTimeFormatter,
        now: DateTime<Utc>,
    ) -> String {
        let rel = formatter.from_now(self.at, now);
        match self.kind {
            CountdownKind::Starts => format!("Starts {}", rel),
            CountdownKind::Ends => format!("Ends {}", rel),
            CountdownKind::Expires => format!("Expires {}", rel),
            CountdownKind::MetagovStarts => format!("{} Voting Starts {}", names.metagov, rel),
            CountdownKind::MetagovEnds => format!("{} Voting Ends {}", names.metagov, rel),
            CountdownKind::PrimaryEnds => format!("{} Voting Ends {}", names.primary, rel),
        }
    }
}

/// Picks the countdown for a proposal already resolved to `status`.
///
/// Returns `None` when the instant it would count towards is unknown, e.g.
/// the current block has not been read yet or a queued proposal has no eta.
pub fn select_countdown(
    proposal: &Proposal,
    clock: &ChainClock,
    status: DisplayStatus,
    snapshot: Option<&SnapshotProposal>,
    federation: Option<&FederationProposal>,
    config: &MetagovConfig,
) -> Option<Countdown> {
    let avg = config.average_block_time_secs;
    let now = clock.now;
    let end = clock.block_time(proposal.end_block, avg);

    if let (Some(snap), None) = (snapshot, federation) {
        if matches!(status, DisplayStatus::MetagovActive | DisplayStatus::MetagovClosed) {
            let snap_start = snap.start_time();
            let snap_end = snap.end_time();
            if is_before(snap_start, now) && is_after(snap_end, now) {
                return Countdown::new(CountdownKind::MetagovEnds, snap_end);
            }
            if is_before(snap_end, now) {
                return Countdown::new(CountdownKind::PrimaryEnds, end);
            }
            return Countdown::new(CountdownKind::MetagovStarts, snap_start);
        }
    }

    if let Some(fed) = federation {
        if matches!(
            status,
            DisplayStatus::MetagovActive
                | DisplayStatus::MetagovClosed
                | DisplayStatus::MetagovAwaitingExecution
        ) {
            return federation_countdown(fed, clock, end, config);
        }
    }

    let start = clock.block_time(proposal.start_block, avg);
    if is_before(start, now) && is_after(end, now) {
        return Countdown::new(CountdownKind::Ends, end);
    }
    if is_before(end, now) {
        let grace = Duration::try_days(config.expiry_grace_days)?;
        let expires = proposal.eta.and_then(|eta| eta.checked_add_signed(grace));
        return Countdown::new(CountdownKind::Expires, expires);
    }
    Countdown::new(CountdownKind::Starts, start)
}

fn federation_countdown(
    fed: &FederationProposal,
    clock: &ChainClock,
    primary_end: Option<DateTime<Utc>>,
    config: &MetagovConfig,
) -> Option<Countdown> {
    let avg = config.average_block_time_secs;
    let window = FederationWindow::of(fed, config);
    let status = fed.effective_status();

    if status == FederationStatus::Active {
        match window.phase(clock.current_block) {
            FederationPhase::Voting => {
                let at = clock.block_time(window.execution_start_block, avg);
                return Countdown::new(CountdownKind::MetagovEnds, at);
            }
            FederationPhase::ExecutionWindow if !fed.quorum_met() => {
                let at = clock.block_time(window.end_block, avg);
                return Countdown::new(CountdownKind::MetagovEnds, at);
            }
            FederationPhase::ExecutionWindow => {
                return Countdown::new(CountdownKind::Expires, primary_end);
            }
            FederationPhase::NotStarted | FederationPhase::Ended => {}
        }
    }

    let ended = window.phase(clock.current_block) == FederationPhase::Ended;
    let settled = match status {
        FederationStatus::Expired => ended,
        FederationStatus::Vetoed | FederationStatus::Executed | FederationStatus::Undetermined => {
            true
        }
        FederationStatus::Active => false,
    };
    if settled {
        return Countdown::new(CountdownKind::PrimaryEnds, primary_end);
    }

    let at = clock.block_time(window.start_block, avg);
    Countdown::new(CountdownKind::MetagovStarts, at)
}

/// Copy next to a vote's start or end time on the proposal page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VoteTimeKind {
    Starts,
    Ends,
    /// Off-chain vote is open.
    SnapshotEnds,
    Ended,
}

impl VoteTimeKind {
    pub fn copy(&self) -> &'static str {
        match self {
            VoteTimeKind::Starts => "Starts",
            VoteTimeKind::Ends => "Ends",
            VoteTimeKind::SnapshotEnds => "Snapshot Ends",
            VoteTimeKind::Ended => "Ended",
        }
    }
}

/// A vote's time line: the start instant until the vote opens, the end
/// instant from then on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteTime {
    pub kind: VoteTimeKind,
    pub at: Option<DateTime<Utc>>,
}

impl VoteTime {
    fn between(
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
        open: VoteTimeKind,
    ) -> Self {
        let kind = if is_before(start, now) && is_after(end, now) {
            open
        } else if is_before(end, now) {
            VoteTimeKind::Ended
        } else {
            VoteTimeKind::Starts
        };
        let at = if is_before(start, now) { end } else { start };
        Self { kind, at }
    }
}

/// Start or end time of the primary DAO vote.
pub fn primary_vote_time(
    proposal: &Proposal,
    clock: &ChainClock,
    config: &MetagovConfig,
) -> VoteTime {
    let avg = config.average_block_time_secs;
    VoteTime::between(
        clock.block_time(proposal.start_block, avg),
        clock.block_time(proposal.end_block, avg),
        clock.now,
        VoteTimeKind::Ends,
    )
}

/// Start or end time of the metagovernance vote, if there is one. A
/// federation record wins over an off-chain vote.
pub fn metagov_vote_time(
    clock: &ChainClock,
    snapshot: Option<&SnapshotProposal>,
    federation: Option<&FederationProposal>,
    config: &MetagovConfig,
) -> Option<VoteTime> {
    let avg = config.average_block_time_secs;
    match (federation, snapshot) {
        (Some(fed), _) => Some(VoteTime::between(
            clock.block_time(fed.start_block, avg),
            clock.block_time(fed.end_block, avg),
            clock.now,
            VoteTimeKind::Ends,
        )),
        (None, Some(snap)) => Some(VoteTime::between(
            snap.start_time(),
            snap.end_time(),
            clock.now,
            VoteTimeKind::SnapshotEnds,
        )),
        (None, None) => None,
    }
}

fn is_before(at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
    at.map_or(false, |t| t < now)
}

fn is_after(at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
    at.map_or(false, |t| t > now)
}

/// Countdown copy for a resolved proposal, e.g. "Lil Nouns Voting Ends in 3
/// hours".
pub fn compute_countdown_text(
    proposal: &Proposal,
    clock: &ChainClock,
    status: DisplayStatus,
    snapshot: Option<&SnapshotProposal>,
    federation: Option<&FederationProposal>,
    config: &MetagovConfig,
    formatter: &dyn RelativeTimeFormatter,
) -> Option<String> {
    select_countdown(proposal, clock, status, snapshot, federation, config)
        .map(|c| c.render(&config.names, formatter, clock.now))
}
