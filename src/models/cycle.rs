//! Payment cycle model.
//!
//! A cycle is one rotation period of a group. It stays open while
//! contributions are collected and closes once its payout is distributed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Whether a cycle is still collecting or has paid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CycleStatus {
    /// Contributions are still being collected.
    Open,
    /// The payout for this cycle has been distributed.
    Closed,
}

impl CycleStatus {
    /// Returns the lowercase name used in exports.
    pub fn as_str(&self) -> &'static str {
        match self {
            CycleStatus::Open => "open",
            CycleStatus::Closed => "closed",
        }
    }
}

/// A single payment cycle belonging to a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cycle {
    /// Unique identifier for the cycle.
    pub id: String,
    /// The group this cycle belongs to.
    pub group_id: String,
    /// Date by which contributions are due.
    pub due_date: NaiveDate,
    /// Current status of the cycle.
    pub status: CycleStatus,
}

impl Cycle {
    /// Returns true if the cycle has paid out.
    pub fn is_closed(&self) -> bool {
        self.status == CycleStatus::Closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_cycle() {
        let json = r#"{
            "id": "cyc_001",
            "group_id": "grp_001",
            "due_date": "2026-03-01",
            "status": "closed"
        }"#;

        let cycle: Cycle = serde_json::from_str(json).unwrap();
        assert_eq!(cycle.due_date, NaiveDate::from_ymd_opt(2026, 3, 1).unwrap());
        assert_eq!(cycle.status, CycleStatus::Closed);
        assert!(cycle.is_closed());
    }

    #[test]
    fn test_cycle_status_serialization() {
        assert_eq!(serde_json::to_string(&CycleStatus::Open).unwrap(), "\"open\"");
        assert_eq!(
            serde_json::to_string(&CycleStatus::Closed).unwrap(),
            "\"closed\""
        );
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let json = r#"{
            "id": "cyc_001",
            "group_id": "grp_001",
            "due_date": "2026-03-01",
            "status": "paused"
        }"#;

        assert!(serde_json::from_str::<Cycle>(json).is_err());
    }
}
