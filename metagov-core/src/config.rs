use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use metagov_common::{DaoNames, MetagovError, Result};

pub const DEFAULT_EXECUTION_WINDOW_BLOCKS: u64 = 2500;
pub const DEFAULT_AVERAGE_BLOCK_TIME_SECS: u64 = 12;
pub const DEFAULT_EXPIRY_GRACE_DAYS: i64 = 14;

/// Constants the resolver needs, passed explicitly instead of read from
/// globals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetagovConfig {
    /// Fallback execution window for federation proposals that do not carry
    /// their own.
    #[serde(default = "default_execution_window")]
    pub execution_window_blocks: u64,

    #[serde(default = "default_block_time")]
    pub average_block_time_secs: u64,

    /// First primary proposal id handled through the federation contract.
    /// When unset it is taken from the earliest federation proposal.
    #[serde(default)]
    pub federation_id_threshold: Option<u64>,

    /// Days after `eta` at which a queued proposal expires.
    #[serde(default = "default_grace_days")]
    pub expiry_grace_days: i64,

    #[serde(default)]
    pub names: DaoNames,
}

fn default_execution_window() -> u64 {
    DEFAULT_EXECUTION_WINDOW_BLOCKS
}

fn default_block_time() -> u64 {
    DEFAULT_AVERAGE_BLOCK_TIME_SECS
}

fn default_grace_days() -> i64 {
    DEFAULT_EXPIRY_GRACE_DAYS
}

impl Default for MetagovConfig {
    fn default() -> Self {
        Self {
            execution_window_blocks: DEFAULT_EXECUTION_WINDOW_BLOCKS,
            average_block_time_secs: DEFAULT_AVERAGE_BLOCK_TIME_SECS,
            federation_id_threshold: None,
            expiry_grace_days: DEFAULT_EXPIRY_GRACE_DAYS,
            names: DaoNames::default(),
        }
    }
}

impl MetagovConfig {
    pub fn validate(&self) -> Result<()> {
        if self.average_block_time_secs == 0 {
            return Err(MetagovError::InvalidConfig(
                "average_block_time_secs must be greater than zero".to_string(),
            ));
        }
        if self.expiry_grace_days < 0 {
            return Err(MetagovError::InvalidConfig(
                "expiry_grace_days cannot be negative".to_string(),
            ));
        }
        Ok(())
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = fs::read_to_string(path)?;
        let parsed = serde_json::from_str::<MetagovConfig>(&data)?;
        parsed.validate()?;
        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_uses_defaults() {
        let cfg: MetagovConfig =
            serde_json::from_str(r#"{"federation_id_threshold": 179}"#).unwrap();
        assert_eq!(cfg.federation_id_threshold, Some(179));
        assert_eq!(cfg.execution_window_blocks, 2500);
        assert_eq!(cfg.average_block_time_secs, 12);
        assert_eq!(cfg.expiry_grace_days, 14);
        assert_eq!(cfg.names.metagov, "Lil Nouns");
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("metagov.json");

        let cfg = MetagovConfig {
            execution_window_blocks: 100,
            federation_id_threshold: Some(42),
            ..Default::default()
        };
        cfg.save_to_file(&path).unwrap();

        let loaded = MetagovConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded, cfg);
    }

    #[test]
    fn test_zero_block_time_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, r#"{"average_block_time_secs": 0}"#).unwrap();

        let err = MetagovConfig::load_from_file(&path).unwrap_err();
        assert!(matches!(err, MetagovError::InvalidConfig(_)), "got {err}");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = MetagovConfig::load_from_file("/nonexistent/metagov.json").unwrap_err();
        assert!(matches!(err, MetagovError::Io(_)));
    }
}
