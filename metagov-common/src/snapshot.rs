use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// State of an off-chain (gas-less) vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnapshotState {
    Pending,
    Active,
    Closed,
    #[serde(other)]
    Unknown,
}

impl Default for SnapshotState {
    fn default() -> Self {
        Self::Unknown
    }
}

/// An off-chain vote mirroring a primary proposal.
///
/// It is correlated to its proposal by finding the proposal's transaction hash
/// inside `body`; the proposal never owns it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SnapshotProposal {
    pub id: String,

    #[serde(default)]
    pub body: String,

    #[serde(default)]
    pub state: SnapshotState,

    /// Voting start, unix seconds.
    #[serde(default)]
    pub start: i64,

    /// Voting end, unix seconds.
    #[serde(default)]
    pub end: i64,

    /// Block at which voting power is measured.
    #[serde(default)]
    pub snapshot: u64,

    /// Score per choice: for, against, abstain.
    #[serde(default)]
    pub scores: Vec<f64>,

    #[serde(default)]
    pub scores_total: f64,
}

impl SnapshotProposal {
    pub fn start_time(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.start, 0).single()
    }

    pub fn end_time(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.end, 0).single()
    }

    /// Score for the choice at `index`, 0 when the service omitted it.
    pub fn score(&self, index: usize) -> f64 {
        self.scores.get(index).copied().unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_state_deserializes() {
        let json = r#"{"id": "0xabc", "state": "archived"}"#;
        let sp: SnapshotProposal = serde_json::from_str(json).unwrap();
        assert_eq!(sp.state, SnapshotState::Unknown);
        assert_eq!(sp.score(0), 0.0);
    }

    #[test]
    fn test_times_from_unix_seconds() {
        let sp = SnapshotProposal {
            id: "s".into(),
            start: 1_700_000_000,
            end: 1_700_086_400,
            scores: vec![10.0, 2.5],
            ..Default::default()
        };
        assert_eq!(sp.start_time().unwrap().timestamp(), 1_700_000_000);
        assert_eq!((sp.end_time().unwrap() - sp.start_time().unwrap()).num_hours(), 24);
        assert_eq!(sp.score(1), 2.5);
        assert_eq!(sp.score(2), 0.0);
    }
}
