use metagov_common::FederationProposal;

use crate::config::MetagovConfig;

/// Where the chain currently sits relative to a federation proposal's blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FederationPhase {
    /// Before `start_block`.
    NotStarted,
    /// Voting open, execution not yet possible.
    Voting,
    /// Inside the last `execution_window` blocks before `end_block`.
    ExecutionWindow,
    /// At or after `end_block`.
    Ended,
}

/// Block boundaries of a federation vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FederationWindow {
    pub start_block: u64,
    pub execution_start_block: u64,
    pub end_block: u64,
}

impl FederationWindow {
    pub fn of(proposal: &FederationProposal, config: &MetagovConfig) -> Self {
        let window = proposal
            .execution_window
            .unwrap_or(config.execution_window_blocks);
        Self {
            start_block: proposal.start_block,
            execution_start_block: proposal.end_block.saturating_sub(window),
            end_block: proposal.end_block,
        }
    }

    pub fn phase(&self, current_block: u64) -> FederationPhase {
        if current_block >= self.end_block {
            FederationPhase::Ended
        } else if current_block >= self.execution_start_block {
            FederationPhase::ExecutionWindow
        } else if current_block < self.start_block {
            FederationPhase::NotStarted
        } else {
            FederationPhase::Voting
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fed(start: u64, end: u64, window: Option<u64>) -> FederationProposal {
        FederationProposal {
            start_block: start,
            end_block: end,
            execution_window: window,
            ..Default::default()
        }
    }

    #[test]
    fn test_default_window_from_config() {
        let w = FederationWindow::of(&fed(1_000, 10_000, None), &MetagovConfig::default());
        assert_eq!(w.execution_start_block, 7_500);
    }

    #[test]
    fn test_record_window_overrides_default() {
        let w = FederationWindow::of(&fed(1_000, 10_000, Some(100)), &MetagovConfig::default());
        assert_eq!(w.execution_start_block, 9_900);
    }

    #[test]
    fn test_window_saturates_at_zero() {
        let w = FederationWindow::of(&fed(0, 1_000, None), &MetagovConfig::default());
        assert_eq!(w.execution_start_block, 0);
        assert_eq!(w.phase(0), FederationPhase::ExecutionWindow);
    }

    #[test]
    fn test_phases() {
        let w = FederationWindow::of(&fed(1_000, 10_000, None), &MetagovConfig::default());
        assert_eq!(w.phase(999), FederationPhase::NotStarted);
        assert_eq!(w.phase(1_000), FederationPhase::Voting);
        assert_eq!(w.phase(7_499), FederationPhase::Voting);
        assert_eq!(w.phase(7_500), FederationPhase::ExecutionWindow);
        assert_eq!(w.phase(9_999), FederationPhase::ExecutionWindow);
        assert_eq!(w.phase(10_000), FederationPhase::Ended);
    }
}
