//! Cycle report view models.
//!
//! This module contains the [`CycleReport`] produced for every payment cycle
//! and the [`ReportTotals`] aggregated across a full report sequence.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::CycleStatus;

/// Financial summary of a single payment cycle.
///
/// The four status counts always add up to the number of payment logs
/// recorded for the cycle.
///
/// # Example
///
/// ```
/// use susu_engine::models::{CycleReport, CycleStatus};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let report = CycleReport {
///     cycle_id: "cyc_001".to_string(),
///     due_date: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
///     status: CycleStatus::Closed,
///     recipient_name: "Ama Mensah".to_string(),
///     recipient_email: "ama@example.com".to_string(),
///     total_expected: Decimal::new(1200, 0),
///     total_collected: Decimal::new(900, 0),
///     verified_count: 3,
///     pending_count: 1,
///     unpaid_count: 0,
///     rejected_count: 0,
///     contribution_amount: Decimal::new(300, 0),
/// };
/// assert_eq!(report.log_count(), 4);
/// assert_eq!(report.outstanding(), Decimal::new(300, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleReport {
    /// The cycle this report summarizes.
    pub cycle_id: String,
    /// Date by which contributions were due.
    pub due_date: NaiveDate,
    /// Status of the cycle.
    pub status: CycleStatus,
    /// Name of the payout recipient, "Unknown" if unresolved.
    pub recipient_name: String,
    /// Email of the payout recipient, empty if unresolved.
    pub recipient_email: String,
    /// Contributions owed for this cycle.
    pub total_expected: Decimal,
    /// Contributions verified for this cycle.
    pub total_collected: Decimal,
    /// Number of verified logs.
    pub verified_count: u32,
    /// Number of pending logs.
    pub pending_count: u32,
    /// Number of unpaid logs.
    pub unpaid_count: u32,
    /// Number of rejected logs.
    pub rejected_count: u32,
    /// The per-member contribution used for the totals.
    pub contribution_amount: Decimal,
}

impl CycleReport {
    /// Returns the number of payment logs behind this report.
    pub fn log_count(&self) -> u32 {
        self.verified_count + self.pending_count + self.unpaid_count + self.rejected_count
    }

    /// Returns the amount still to be collected.
    pub fn outstanding(&self) -> Decimal {
        self.total_expected - self.total_collected
    }
}

/// Totals across a sequence of cycle reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportTotals {
    /// Sum of expected contributions.
    pub total_expected: Decimal,
    /// Sum of verified contributions.
    pub total_collected: Decimal,
    /// Expected minus collected.
    pub outstanding: Decimal,
    /// Collected as a whole percentage of expected.
    pub collection_rate: u32,
    /// Number of cycles still open.
    pub open_cycles: u32,
    /// Number of cycles that have paid out.
    pub closed_cycles: u32,
}
