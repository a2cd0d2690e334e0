use serde::{Deserialize, Serialize};

/// State of a proposal in the delegate-voting (federation) contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FederationStatus {
    Active,
    Expired,
    Executed,
    Vetoed,
    #[serde(other)]
    Undetermined,
}

impl Default for FederationStatus {
    fn default() -> Self {
        Self::Undetermined
    }
}

/// A secondary proposal that lets a second token population vote before the
/// result is cast into the primary DAO.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FederationProposal {
    pub id: u64,

    #[serde(default)]
    pub proposer: String,

    /// Address of the external DAO the vote is cast into.
    #[serde(default, rename = "eDAO")]
    pub e_dao: String,

    /// Id of the mirrored proposal on the external DAO.
    #[serde(default, rename = "eID")]
    pub e_id: Option<u64>,

    #[serde(default)]
    pub quorum_votes: u64,

    #[serde(default)]
    pub start_block: u64,

    #[serde(default)]
    pub end_block: u64,

    #[serde(default)]
    pub for_count: u64,

    #[serde(default)]
    pub against_count: u64,

    #[serde(default)]
    pub abstain_count: u64,

    #[serde(default)]
    pub vetoed: bool,

    #[serde(default)]
    pub executed: bool,

    #[serde(default)]
    pub status: FederationStatus,

    /// Blocks before `end_block` from which a proposal that met quorum may be
    /// executed. `None` means the configured default applies.
    #[serde(default)]
    pub execution_window: Option<u64>,
}

impl FederationProposal {
    /// Status with the contract's terminal flags applied: a vetoed proposal is
    /// Vetoed and an executed one Executed, whatever `status` says.
    pub fn effective_status(&self) -> FederationStatus {
        if self.vetoed {
            FederationStatus::Vetoed
        } else if self.executed {
            FederationStatus::Executed
        } else {
            self.status
        }
    }

    pub fn quorum_met(&self) -> bool {
        self.for_count >= self.quorum_votes
    }
}

/// Federation proposal as returned by the indexing service, with numbers
/// encoded as decimal strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FederationProposalEntity {
    pub id: String,
    #[serde(default)]
    pub proposer: Option<EntityRef>,
    #[serde(default, rename = "eDAO")]
    pub e_dao: String,
    #[serde(default, rename = "eID")]
    pub e_id: String,
    #[serde(default)]
    pub quorum_votes: String,
    #[serde(default)]
    pub start_block: String,
    #[serde(default)]
    pub end_block: String,
    #[serde(default)]
    pub for_votes: String,
    #[serde(default)]
    pub against_votes: String,
    #[serde(default)]
    pub abstain_votes: String,
    #[serde(default)]
    pub vetoed: bool,
    #[serde(default)]
    pub executed: bool,
    #[serde(default)]
    pub status: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntityRef {
    pub id: String,
}

fn parse_count(raw: &str) -> u64 {
    raw.trim().parse().unwrap_or(0)
}

impl FederationProposalEntity {
    fn derived_status(&self) -> FederationStatus {
        if self.vetoed {
            FederationStatus::Vetoed
        } else if self.executed {
            FederationStatus::Executed
        } else {
            match self.status.as_str() {
                "EXPIRED" => FederationStatus::Expired,
                "ACTIVE" => FederationStatus::Active,
                _ => FederationStatus::Undetermined,
            }
        }
    }
}

impl From<FederationProposalEntity> for FederationProposal {
    fn from(entity: FederationProposalEntity) -> Self {
        let status = entity.derived_status();
        Self {
            id: parse_count(&entity.id),
            proposer: entity.proposer.map(|p| p.id).unwrap_or_default(),
            e_dao: entity.e_dao,
            e_id: entity.e_id.trim().parse().ok(),
            quorum_votes: parse_count(&entity.quorum_votes),
            start_block: parse_count(&entity.start_block),
            end_block: parse_count(&entity.end_block),
            for_count: parse_count(&entity.for_votes),
            against_count: parse_count(&entity.against_votes),
            abstain_count: parse_count(&entity.abstain_votes),
            vetoed: entity.vetoed,
            executed: entity.executed,
            status,
            execution_window: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_status() {
        let mut fp = FederationProposal {
            status: FederationStatus::Active,
            executed: true,
            ..Default::default()
        };
        assert_eq!(fp.effective_status(), FederationStatus::Executed);

        fp.vetoed = true;
        assert_eq!(fp.effective_status(), FederationStatus::Vetoed);
    }

    #[test]
    fn test_entity_conversion_parses_counts() {
        let json = r#"{
            "id": "3",
            "proposer": {"id": "0xdead"},
            "eDAO": "0xdao",
            "eID": "181",
            "quorumVotes": "20",
            "startBlock": "100",
            "endBlock": "5100",
            "forVotes": "12",
            "againstVotes": "not-a-number",
            "status": "ACTIVE"
        }"#;
        let entity: FederationProposalEntity = serde_json::from_str(json).unwrap();
        let fp = FederationProposal::from(entity);

        assert_eq!(fp.id, 3);
        assert_eq!(fp.proposer, "0xdead");
        assert_eq!(fp.e_id, Some(181));
        assert_eq!(fp.quorum_votes, 20);
        assert_eq!(fp.end_block, 5100);
        assert_eq!(fp.for_count, 12);
        assert_eq!(fp.against_count, 0, "unparseable counts fall back to 0");
        assert_eq!(fp.abstain_count, 0);
        assert_eq!(fp.status, FederationStatus::Active);
    }

    #[test]
    fn test_entity_status_derivation() {
        let mut entity = FederationProposalEntity {
            id: "1".into(),
            status: "EXPIRED".into(),
            ..Default::default()
        };
        assert_eq!(FederationProposal::from(entity.clone()).status, FederationStatus::Expired);

        entity.status = "".into();
        assert_eq!(FederationProposal::from(entity.clone()).status, FederationStatus::Undetermined);

        entity.executed = true;
        assert_eq!(FederationProposal::from(entity.clone()).status, FederationStatus::Executed);

        entity.vetoed = true;
        assert_eq!(FederationProposal::from(entity).status, FederationStatus::Vetoed);
    }

    #[test]
    fn test_camel_case_record_json() {
        let json = r#"{
            "id": 2, "eID": 190, "quorumVotes": 5, "endBlock": 900,
            "status": "Active", "executionWindow": 100
        }"#;
        let fp: FederationProposal = serde_json::from_str(json).unwrap();
        assert_eq!(fp.e_id, Some(190));
        assert_eq!(fp.execution_window, Some(100));
        assert!(!fp.quorum_met());
    }
}
