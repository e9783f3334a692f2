//! Aggregation logic for the savings-group engine.
//!
//! This module contains the pure builders that turn flat store rows into
//! view models: payout rotation, per-cycle reports, collection totals and
//! per-member statistics. None of them fetch data or fail on data gaps;
//! the only error they raise is a missing membership.

mod collection;
mod cycle_report;
mod personal_stats;
mod rotation;

pub use collection::{collection_rate, summarize_reports};
pub use cycle_report::{UNKNOWN_RECIPIENT, build_cycle_reports};
pub use personal_stats::{build_personal_stats, resolve_member, status_breakdown};
pub use rotation::{closed_count_from, closed_counts, recipient_for_closed_count};
