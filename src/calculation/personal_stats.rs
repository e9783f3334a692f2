//! Personal statistics building.
//!
//! This module computes one member's contribution history and status
//! breakdown within a single group.

use std::collections::HashMap;

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{
    Cycle, Member, PaymentHistoryEntry, PaymentLog, PaymentStatus, PersonalStatsData,
    StatusBreakdownEntry, StatusCounts,
};

/// Finds the membership of `user_id` in `group_id`.
///
/// # Errors
///
/// Returns [`EngineError::MemberNotFound`] when the user has no membership
/// in the group. Callers treat this as fatal for the view.
pub fn resolve_member<'a>(
    members: &'a [Member],
    group_id: &str,
    user_id: &str,
) -> EngineResult<&'a Member> {
    members
        .iter()
        .find(|m| m.group_id == group_id && m.user_id == user_id)
        .ok_or_else(|| EngineError::MemberNotFound {
            group_id: group_id.to_string(),
            user_id: user_id.to_string(),
        })
}

/// Builds the status breakdown, skipping statuses with no payments.
pub fn status_breakdown(counts: &StatusCounts) -> Vec<StatusBreakdownEntry> {
    PaymentStatus::ALL
        .iter()
        .filter_map(|status| {
            let value = counts.get(*status);
            (value > 0).then(|| StatusBreakdownEntry::new(*status, value))
        })
        .collect()
}

/// Builds a member's lifetime statistics for one group.
///
/// Every log belonging to the member is counted. The payment history only
/// keeps logs whose cycle is present in `cycles`, sorted by due date with
/// the newest first; ties keep their input order.
///
/// # Examples
///
/// ```
/// use susu_engine::calculation::build_personal_stats;
/// use susu_engine::models::Member;
/// use chrono::{TimeZone, Utc};
/// use rust_decimal::Decimal;
///
/// let member = Member {
///     id: "mem_001".to_string(),
///     group_id: "grp_001".to_string(),
///     user_id: "usr_001".to_string(),
///     queue_position: 0,
///     created_at: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
/// };
///
/// let stats = build_personal_stats(Decimal::new(300, 0), &member, &[], &[]);
/// assert_eq!(stats.total_contributed, Decimal::ZERO);
/// assert!(stats.payment_history.is_empty());
/// assert!(stats.status_breakdown.is_empty());
/// ```
pub fn build_personal_stats(
    contribution_amount: Decimal,
    member: &Member,
    cycles: &[Cycle],
    payment_logs: &[PaymentLog],
) -> PersonalStatsData {
    let cycles_by_id: HashMap<&str, &Cycle> = cycles.iter().map(|c| (c.id.as_str(), c)).collect();

    let member_logs: Vec<&PaymentLog> = payment_logs
        .iter()
        .filter(|log| log.member_id == member.id)
        .collect();

    let mut payment_history: Vec<PaymentHistoryEntry> = member_logs
        .iter()
        .filter_map(|log| match cycles_by_id.get(log.cycle_id.as_str()) {
            Some(cycle) => Some(PaymentHistoryEntry {
                cycle_id: cycle.id.clone(),
                due_date: cycle.due_date,
                status: log.status,
                verified_at: log.verified_at,
            }),
            None => {
                debug!(
                    member_id = %member.id,
                    cycle_id = %log.cycle_id,
                    "Dropping payment log without a matching cycle"
                );
                None
            }
        })
        .collect();
    payment_history.sort_by(|a, b| b.due_date.cmp(&a.due_date));

    let status_counts = StatusCounts::tally(member_logs.iter().copied());
    let total_verified_payments = status_counts.verified;

    PersonalStatsData {
        total_verified_payments,
        total_contributed: Decimal::from(total_verified_payments) * contribution_amount,
        contribution_amount,
        payment_history,
        status_breakdown: status_breakdown(&status_counts),
        status_counts,
        member_since: member.created_at,
        queue_position: member.queue_position,
    }
}
