use std::fmt;

use serde::{Deserialize, Serialize};

/// A vote direction, independent of how each source encodes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VoteChoice {
    For,
    Against,
    Abstain,
}

impl VoteChoice {
    pub const ALL: [VoteChoice; 3] = [VoteChoice::For, VoteChoice::Against, VoteChoice::Abstain];

    /// `supportDetailed` code used by the DAO and delegate contracts.
    pub fn support_code(self) -> u8 {
        match self {
            VoteChoice::Against => 0,
            VoteChoice::For => 1,
            VoteChoice::Abstain => 2,
        }
    }

    /// Choice index used by the off-chain vote service (1-based).
    pub fn snapshot_code(self) -> u8 {
        match self {
            VoteChoice::For => 1,
            VoteChoice::Against => 2,
            VoteChoice::Abstain => 3,
        }
    }

    pub fn from_support_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(VoteChoice::Against),
            1 => Some(VoteChoice::For),
            2 => Some(VoteChoice::Abstain),
            _ => None,
        }
    }
}

impl fmt::Display for VoteChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            VoteChoice::For => "For",
            VoteChoice::Against => "Against",
            VoteChoice::Abstain => "Abstain",
        };
        write!(f, "{}", s)
    }
}

/// A vote with the token ids the voter represents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributedVote {
    /// Raw choice code as the source encodes it.
    pub choice: u8,
    #[serde(default)]
    pub represented_token_ids: Vec<String>,
}

/// A vote receipt from the DAO or delegate contract index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DelegateVote {
    pub voter: String,
    pub support_detailed: u8,
}

/// A delegate and the tokens delegated to it at some block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Delegate {
    pub id: String,
    #[serde(default)]
    pub represented_token_ids: Vec<String>,
}

/// A single vote from the off-chain vote service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotVote {
    pub voter: String,
    #[serde(default)]
    pub vp: f64,
    pub choice: u8,
}

/// One off-chain voter with the token ids they represent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotVoter {
    pub voter: String,
    pub vp: f64,
    pub choice: u8,
    pub token_ids: Vec<String>,
}
