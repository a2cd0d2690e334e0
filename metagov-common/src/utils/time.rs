use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// The latest observed block paired with the wall-clock instant it was seen.
///
/// Future and past blocks are mapped onto wall-clock time by assuming a
/// constant average block time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainClock {
    /// Latest block number. 0 means the chain has not been read yet.
    pub current_block: u64,
    pub now: DateTime<Utc>,
}

impl ChainClock {
    pub fn new(current_block: u64, now: DateTime<Utc>) -> Self {
        Self { current_block, now }
    }

    pub fn is_loaded(&self) -> bool {
        self.current_block > 0
    }

    /// Estimated wall-clock time of `target_block`:
    /// `now + avg_block_secs * (target_block - current_block)`.
    ///
    /// Returns `None` while the current block is unknown.
    pub fn block_time(&self, target_block: u64, avg_block_secs: u64) -> Option<DateTime<Utc>> {
        if !self.is_loaded() {
            return None;
        }
        let delta_blocks = i64::try_from(target_block).ok()?
            .checked_sub(i64::try_from(self.current_block).ok()?)?;
        let secs = delta_blocks.checked_mul(i64::try_from(avg_block_secs).ok()?)?;
        self.now.checked_add_signed(Duration::try_seconds(secs)?)
    }
}
