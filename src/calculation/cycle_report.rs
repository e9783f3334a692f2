//! Per-cycle report building.
//!
//! This module rebuilds, from flat cycle, member, profile and payment-log
//! rows, one auditable financial summary per payment cycle.

use std::collections::HashMap;

use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{Cycle, CycleReport, Member, PaymentLog, Profile, StatusCounts};

use super::rotation::{closed_counts, recipient_for_closed_count};

/// Recipient name shown when no member holds the rotation position.
pub const UNKNOWN_RECIPIENT: &str = "Unknown";

/// Builds one [`CycleReport`] per cycle, in the same order as `cycles`.
///
/// `cycles` must be ordered newest due date first, as the store returns
/// them. For the cycle at index `i`, the recipient is the member whose queue
/// position equals the number of closed cycles in `cycles[i..]`. An
/// unresolved recipient is reported as "Unknown" with an empty email; a
/// resolved recipient without a profile gets empty name and email.
///
/// # Examples
///
/// ```
/// use susu_engine::calculation::build_cycle_reports;
/// use rust_decimal::Decimal;
///
/// let reports = build_cycle_reports(Decimal::new(300, 0), &[], &[], &[], &[]);
/// assert!(reports.is_empty());
/// ```
pub fn build_cycle_reports(
    contribution_amount: Decimal,
    cycles: &[Cycle],
    members: &[Member],
    profiles: &[Profile],
    payment_logs: &[PaymentLog],
) -> Vec<CycleReport> {
    let mut logs_by_cycle: HashMap<&str, Vec<&PaymentLog>> = HashMap::new();
    for log in payment_logs {
        logs_by_cycle
            .entry(log.cycle_id.as_str())
            .or_default()
            .push(log);
    }

    let profiles_by_id: HashMap<&str, &Profile> =
        profiles.iter().map(|p| (p.id.as_str(), p)).collect();

    let closed = closed_counts(cycles);

    cycles
        .iter()
        .zip(closed)
        .map(|(cycle, closed_count)| {
            let counts = logs_by_cycle
                .get(cycle.id.as_str())
                .map(|logs| StatusCounts::tally(logs.iter().copied()))
                .unwrap_or_default();

            let (recipient_name, recipient_email) =
                match recipient_for_closed_count(closed_count, members) {
                    Some(member) => match profiles_by_id.get(member.user_id.as_str()) {
                        Some(profile) => (profile.name.clone(), profile.email.clone()),
                        None => {
                            debug!(
                                cycle_id = %cycle.id,
                                member_id = %member.id,
                                "Recipient has no profile"
                            );
                            (String::new(), String::new())
                        }
                    },
                    None => {
                        debug!(
                            cycle_id = %cycle.id,
                            queue_position = closed_count,
                            "No member at rotation position"
                        );
                        (UNKNOWN_RECIPIENT.to_string(), String::new())
                    }
                };

            CycleReport {
                cycle_id: cycle.id.clone(),
                due_date: cycle.due_date,
                status: cycle.status,
                recipient_name,
                recipient_email,
                total_expected: Decimal::from(counts.total()) * contribution_amount,
                total_collected: Decimal::from(counts.verified) * contribution_amount,
                verified_count: counts.verified,
                pending_count: counts.pending,
                unpaid_count: counts.unpaid,
                rejected_count: counts.rejected,
                contribution_amount,
            }
        })
        .collect()
}
