//! Matching auxiliary records to the primary proposal they mirror.

use metagov_common::{FederationProposal, Proposal, SnapshotProposal};

use crate::config::MetagovConfig;

/// First off-chain vote whose body mentions the proposal's creation
/// transaction hash.
pub fn find_snapshot_for<'a>(
    proposal: &Proposal,
    snapshots: &'a [SnapshotProposal],
) -> Option<&'a SnapshotProposal> {
    let hash = proposal.transaction_hash.trim();
    if hash.is_empty() {
        return None;
    }
    snapshots.iter().find(|s| s.body.contains(hash))
}

/// Federation proposal mirroring `proposal`.
pub fn find_federation_for<'a>(
    proposal: &Proposal,
    federations: &'a [FederationProposal],
) -> Option<&'a FederationProposal> {
    federations.iter().find(|f| f.e_id == Some(proposal.id))
}

/// First primary proposal id managed through the federation contract.
///
/// The configured value wins; otherwise the proposal mirrored by the earliest
/// federation proposal marks the start of the range.
pub fn federation_threshold(
    config: &MetagovConfig,
    federations: &[FederationProposal],
) -> Option<u64> {
    config.federation_id_threshold.or_else(|| {
        federations
            .iter()
            .filter(|f| f.e_id.is_some())
            .min_by_key(|f| f.id)
            .and_then(|f| f.e_id)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snap(id: &str, body: &str) -> SnapshotProposal {
        SnapshotProposal { id: id.into(), body: body.into(), ..Default::default() }
    }

    fn fed(id: u64, e_id: Option<u64>) -> FederationProposal {
        FederationProposal { id, e_id, ..Default::default() }
    }

    #[test]
    fn test_snapshot_matched_by_hash_substring() {
        let p = Proposal { id: 1, transaction_hash: "0xfeed".into(), ..Default::default() };
        let snaps = vec![
            snap("a", "unrelated"),
            snap("b", "see https://example.org/tx/0xfeed for details"),
            snap("c", "0xfeed again"),
        ];
        assert_eq!(find_snapshot_for(&p, &snaps).map(|s| s.id.as_str()), Some("b"));
    }

    #[test]
    fn test_empty_hash_never_matches() {
        let p = Proposal { id: 1, ..Default::default() };
        assert!(find_snapshot_for(&p, &[snap("a", "anything")]).is_none());
    }

    #[test]
    fn test_federation_matched_by_external_id() {
        let p = Proposal { id: 190, ..Default::default() };
        let feds = vec![fed(1, Some(180)), fed(2, Some(190)), fed(3, None)];
        assert_eq!(find_federation_for(&p, &feds).map(|f| f.id), Some(2));

        let p = Proposal { id: 5, ..Default::default() };
        assert!(find_federation_for(&p, &feds).is_none());
    }

    #[test]
    fn test_threshold_from_config_or_earliest_record() {
        let feds = vec![fed(4, Some(200)), fed(2, Some(185)), fed(1, None)];
        assert_eq!(federation_threshold(&MetagovConfig::default(), &feds), Some(185));

        let cfg = MetagovConfig { federation_id_threshold: Some(179), ..Default::default() };
        assert_eq!(federation_threshold(&cfg, &feds), Some(179));

        assert_eq!(federation_threshold(&MetagovConfig::default(), &[]), None);
    }
}
