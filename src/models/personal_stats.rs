//! Personal statistics view models.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{PaymentStatus, StatusCounts};

/// One row of a member's payment history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentHistoryEntry {
    /// The cycle the payment belongs to.
    pub cycle_id: String,
    /// Due date of that cycle.
    pub due_date: NaiveDate,
    /// Verification state of the payment.
    pub status: PaymentStatus,
    /// When the payment was verified, if it was.
    pub verified_at: Option<DateTime<Utc>>,
}

/// One slice of the status breakdown chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusBreakdownEntry {
    /// Status label.
    pub name: String,
    /// Number of payments in this status, never zero.
    pub value: u32,
    /// Display color for the status.
    pub color: String,
}

impl StatusBreakdownEntry {
    /// Creates a breakdown entry labelled and colored for `status`.
    pub fn new(status: PaymentStatus, value: u32) -> Self {
        Self {
            name: status.label().to_string(),
            value,
            color: status.color().to_string(),
        }
    }
}

/// A member's lifetime contribution statistics within one group.
///
/// `total_contributed` always equals `total_verified_payments` times
/// `contribution_amount`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalStatsData {
    /// Number of verified payments.
    pub total_verified_payments: u32,
    /// Amount contributed through verified payments.
    pub total_contributed: Decimal,
    /// The group's per-cycle contribution.
    pub contribution_amount: Decimal,
    /// Payments joined to their cycles, newest due date first.
    pub payment_history: Vec<PaymentHistoryEntry>,
    /// Non-empty status slices in breakdown order.
    pub status_breakdown: Vec<StatusBreakdownEntry>,
    /// Full per-status tally, zeros included.
    pub status_counts: StatusCounts,
    /// When the member joined the group.
    pub member_since: DateTime<Utc>,
    /// The member's rank in the payout rotation.
    pub queue_position: u32,
}
