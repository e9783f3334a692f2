//! Payment log model and the payment status enumeration.
//!
//! [`PaymentStatus`] is the single source for status labels and colors so
//! every report, breakdown and export renders a status the same way.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The verification state of one member's contribution for one cycle.
///
/// # Example
///
/// ```
/// use susu_engine::models::PaymentStatus;
///
/// assert_eq!(PaymentStatus::Verified.label(), "Verified");
/// assert_eq!(PaymentStatus::Verified.color(), "#22c55e");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    /// No payment has been submitted.
    Unpaid,
    /// A payment was submitted and awaits verification.
    Pending,
    /// The payment was confirmed.
    Verified,
    /// The submitted payment was refused.
    Rejected,
}

impl PaymentStatus {
    /// All statuses in breakdown order.
    pub const ALL: [PaymentStatus; 4] = [
        PaymentStatus::Verified,
        PaymentStatus::Pending,
        PaymentStatus::Unpaid,
        PaymentStatus::Rejected,
    ];

    /// Returns the snake_case wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Unpaid => "unpaid",
            PaymentStatus::Pending => "pending",
            PaymentStatus::Verified => "verified",
            PaymentStatus::Rejected => "rejected",
        }
    }

    /// Returns the human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            PaymentStatus::Unpaid => "Unpaid",
            PaymentStatus::Pending => "Pending",
            PaymentStatus::Verified => "Verified",
            PaymentStatus::Rejected => "Rejected",
        }
    }

    /// Returns the display color: green, amber, gray or red.
    pub fn color(&self) -> &'static str {
        match self {
            PaymentStatus::Verified => "#22c55e",
            PaymentStatus::Pending => "#f59e0b",
            PaymentStatus::Unpaid => "#9ca3af",
            PaymentStatus::Rejected => "#ef4444",
        }
    }
}

/// One member's contribution record for one cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentLog {
    /// The cycle this payment belongs to.
    pub cycle_id: String,
    /// The member who owes the payment.
    pub member_id: String,
    /// Verification state.
    pub status: PaymentStatus,
    /// Set only when the status is verified.
    #[serde(default)]
    pub verified_at: Option<DateTime<Utc>>,
}
