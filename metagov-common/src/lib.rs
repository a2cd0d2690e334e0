//! Shared records for metagovernance status resolution.
//!
//! Everything here is plain data: proposals from the primary DAO, off-chain
//! votes, delegate-voting (federation) proposals, vote receipts and the
//! reconciled [`DisplayStatus`].

pub mod error;
pub mod federation;
pub mod proposal;
pub mod snapshot;
pub mod status;
pub mod utils;
pub mod vote;

pub use error::{MetagovError, Result};
pub use federation::{FederationProposal, FederationProposalEntity, FederationStatus};
pub use proposal::{Proposal, ProposalStatus};
pub use snapshot::{SnapshotProposal, SnapshotState};
pub use status::{DaoNames, DisplayStatus, StatusTone};
pub use utils::ChainClock;
pub use vote::{AttributedVote, Delegate, DelegateVote, SnapshotVote, SnapshotVoter, VoteChoice};
