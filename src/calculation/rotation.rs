//! Payout rotation.
//!
//! Recipients are not stored per cycle. The rotation advances one queue
//! position every time a cycle closes, so a cycle's recipient is the member
//! whose queue position equals the number of closed cycles from that cycle
//! back to the oldest one. Queue positions must never change once assigned.

use crate::models::{Cycle, Member};

/// Counts the closed cycles in `cycles[index..]`.
///
/// Cycles are ordered newest first, so the suffix is the cycle at `index`
/// and everything older. An index past the end yields zero.
///
/// # Examples
///
/// ```
/// use susu_engine::calculation::closed_count_from;
/// use susu_engine::models::{Cycle, CycleStatus};
/// use chrono::NaiveDate;
///
/// let cycle = |id: &str, status| Cycle {
///     id: id.to_string(),
///     group_id: "grp_001".to_string(),
///     due_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
///     status,
/// };
/// let cycles = vec![
///     cycle("c3", CycleStatus::Open),
///     cycle("c2", CycleStatus::Closed),
///     cycle("c1", CycleStatus::Closed),
/// ];
///
/// assert_eq!(closed_count_from(&cycles, 0), 2);
/// assert_eq!(closed_count_from(&cycles, 2), 1);
/// assert_eq!(closed_count_from(&cycles, 3), 0);
/// ```
pub fn closed_count_from(cycles: &[Cycle], index: usize) -> u32 {
    cycles
        .get(index..)
        .map(|suffix| suffix.iter().filter(|c| c.is_closed()).count() as u32)
        .unwrap_or(0)
}

/// Computes [`closed_count_from`] for every index in a single backward pass.
pub fn closed_counts(cycles: &[Cycle]) -> Vec<u32> {
    let mut counts = vec![0; cycles.len()];
    let mut running = 0;
    for (index, cycle) in cycles.iter().enumerate().rev() {
        if cycle.is_closed() {
            running += 1;
        }
        counts[index] = running;
    }
    counts
}

/// Finds the member due the payout after `closed_count` closed cycles.
///
/// Returns `None` when nobody holds that queue position. That is a normal
/// outcome (a rotation that ran past the last member, or a gap in the
/// queue), not an error.
pub fn recipient_for_closed_count(closed_count: u32, members: &[Member]) -> Option<&Member> {
    members.iter().find(|m| m.queue_position == closed_count)
}
