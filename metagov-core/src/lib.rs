//! Metagovernance status resolution.
//!
//! A primary DAO proposal can be mirrored by an off-chain vote or by a
//! federation (delegate voting) proposal. This crate reconciles the three
//! into one [`DisplayStatus`](metagov_common::DisplayStatus), picks the
//! countdown to show next to it and splits the votes by choice.

pub mod actions;
pub mod board;
pub mod cli;
pub mod config;
pub mod correlate;
pub mod countdown;
pub mod format;
pub mod status;
pub mod votes;

pub use actions::{next_action, ProposalAction};
pub use board::{resolve_board, resolve_one, BoardInput, ResolvedProposal};
pub use config::MetagovConfig;
pub use countdown::{
    compute_countdown_text, metagov_vote_time, primary_vote_time, select_countdown, Countdown,
    CountdownKind, VoteTime, VoteTimeKind,
};
pub use format::{Humanized, RelativeTimeFormatter};
pub use status::{is_federation_managed, resolve_display_status};
pub use votes::{split_votes_by_choice, VoteBreakdown};
