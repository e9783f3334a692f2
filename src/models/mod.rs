//! Core data models for the savings-group engine.
//!
//! This module contains the row snapshots fetched from the store and the
//! view models the builders produce from them.

mod cycle;
mod cycle_report;
mod group;
mod member;
mod payment_log;
mod personal_stats;
mod status_counts;

pub use cycle::{Cycle, CycleStatus};
pub use cycle_report::{CycleReport, ReportTotals};
pub use group::Group;
pub use member::{Member, Profile};
pub use payment_log::{PaymentLog, PaymentStatus};
pub use personal_stats::{PaymentHistoryEntry, PersonalStatsData, StatusBreakdownEntry};
pub use status_counts::StatusCounts;
