//! Store boundary for the savings-group engine.
//!
//! The engine never owns persistence. Views read snapshots through the
//! [`GroupStore`] trait and hand the rows to the pure builders.

mod memory;

use async_trait::async_trait;

use crate::error::EngineResult;
use crate::models::{Cycle, Group, Member, PaymentLog, Profile};

pub use memory::InMemoryStore;

/// Read queries a view issues against the relational store.
///
/// Implementations report network or backend failures as
/// [`EngineError::Store`](crate::error::EngineError::Store).
#[async_trait]
pub trait GroupStore: Send + Sync {
    /// Fetches a group by id.
    async fn fetch_group(&self, group_id: &str) -> EngineResult<Option<Group>>;

    /// Fetches a group's cycles, newest due date first.
    async fn fetch_cycles(&self, group_id: &str) -> EngineResult<Vec<Cycle>>;

    /// Fetches a group's members.
    async fn fetch_members(&self, group_id: &str) -> EngineResult<Vec<Member>>;

    /// Fetches the profiles with the given user ids.
    async fn fetch_profiles(&self, user_ids: &[String]) -> EngineResult<Vec<Profile>>;

    /// Fetches every payment log belonging to one of the given cycles.
    async fn fetch_logs_for_cycles(&self, cycle_ids: &[String]) -> EngineResult<Vec<PaymentLog>>;

    /// Fetches every payment log of one member.
    async fn fetch_logs_for_member(&self, member_id: &str) -> EngineResult<Vec<PaymentLog>>;
}
