//! In-memory store backed by a loaded dataset snapshot.

use std::collections::HashSet;

use async_trait::async_trait;

use crate::config::Dataset;
use crate::error::EngineResult;
use crate::models::{Cycle, Group, Member, PaymentLog, Profile};

use super::GroupStore;

/// A [`GroupStore`] answering queries from a [`Dataset`] held in memory.
///
/// # Example
///
/// ```
/// use susu_engine::config::Dataset;
/// use susu_engine::store::{GroupStore, InMemoryStore};
///
/// # #[tokio::main]
/// # async fn main() {
/// let store = InMemoryStore::new(Dataset::default());
/// let group = store.fetch_group("grp_001").await.unwrap();
/// assert!(group.is_none());
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    dataset: Dataset,
}

impl InMemoryStore {
    /// Creates a store over the given dataset.
    ///
    /// Cycles are kept ordered by due date descending so queries return
    /// them the way a relational store would with `ORDER BY due_date DESC`.
    pub fn new(mut dataset: Dataset) -> Self {
        dataset
            .cycles
            .sort_by(|a, b| b.due_date.cmp(&a.due_date));
        Self { dataset }
    }

    /// Returns the underlying dataset.
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }
}

#[async_trait]
impl GroupStore for InMemoryStore {
    async fn fetch_group(&self, group_id: &str) -> EngineResult<Option<Group>> {
        Ok(self
            .dataset
            .groups
            .iter()
            .find(|g| g.id == group_id)
            .cloned())
    }

    async fn fetch_cycles(&self, group_id: &str) -> EngineResult<Vec<Cycle>> {
        Ok(self
            .dataset
            .cycles
            .iter()
            .filter(|c| c.group_id == group_id)
            .cloned()
            .collect())
    }

    async fn fetch_members(&self, group_id: &str) -> EngineResult<Vec<Member>> {
        Ok(self
            .dataset
            .members
            .iter()
            .filter(|m| m.group_id == group_id)
            .cloned()
            .collect())
    }

    async fn fetch_profiles(&self, user_ids: &[String]) -> EngineResult<Vec<Profile>> {
        let wanted: HashSet<&str> = user_ids.iter().map(String::as_str).collect();
        Ok(self
            .dataset
            .profiles
            .iter()
            .filter(|p| wanted.contains(p.id.as_str()))
            .cloned()
            .collect())
    }

    async fn fetch_logs_for_cycles(&self, cycle_ids: &[String]) -> EngineResult<Vec<PaymentLog>> {
        let wanted: HashSet<&str> = cycle_ids.iter().map(String::as_str).collect();
        Ok(self
            .dataset
            .payment_logs
            .iter()
            .filter(|l| wanted.contains(l.cycle_id.as_str()))
            .cloned()
            .collect())
    }

    async fn fetch_logs_for_member(&self, member_id: &str) -> EngineResult<Vec<PaymentLog>> {
        Ok(self
            .dataset
            .payment_logs
            .iter()
            .filter(|l| l.member_id == member_id)
            .cloned()
            .collect())
    }
}
