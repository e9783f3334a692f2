//! Member and profile models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user's membership in a group.
///
/// The queue position is fixed once assigned and decides the order in
/// which members receive the payout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Unique identifier for the membership.
    pub id: String,
    /// The group this membership belongs to.
    pub group_id: String,
    /// The profile of the user holding this membership.
    pub user_id: String,
    /// Rank in the payout rotation, unique within the group.
    pub queue_position: u32,
    /// When the user joined the group.
    pub created_at: DateTime<Utc>,
}

/// Identity details for a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Unique identifier for the user.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
}
