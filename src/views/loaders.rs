//! Fetch-then-build loaders for the report and statistics views.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculation::{
    build_cycle_reports, build_personal_stats, resolve_member, summarize_reports,
};
use crate::error::{EngineError, EngineResult};
use crate::models::{CycleReport, Group, PersonalStatsData, ReportTotals};
use crate::store::GroupStore;

/// Everything the cycle report screen shows for one group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleReportsView {
    /// The group being reported on.
    pub group: Group,
    /// One report per cycle, newest due date first.
    pub reports: Vec<CycleReport>,
    /// Totals across all reports.
    pub totals: ReportTotals,
}

async fn fetch_group<S>(store: &S, group_id: &str) -> EngineResult<Group>
where
    S: GroupStore + ?Sized,
{
    store
        .fetch_group(group_id)
        .await?
        .ok_or_else(|| EngineError::GroupNotFound {
            group_id: group_id.to_string(),
        })
}

/// Loads and builds the cycle reports of a group.
///
/// # Errors
///
/// Returns `GroupNotFound` for an unknown group and propagates store
/// failures unchanged.
pub async fn load_cycle_reports<S>(store: &S, group_id: &str) -> EngineResult<CycleReportsView>
where
    S: GroupStore + ?Sized,
{
    let group = fetch_group(store, group_id).await?;
    let cycles = store.fetch_cycles(group_id).await?;
    let members = store.fetch_members(group_id).await?;

    let user_ids: Vec<String> = members.iter().map(|m| m.user_id.clone()).collect();
    let profiles = store.fetch_profiles(&user_ids).await?;

    let cycle_ids: Vec<String> = cycles.iter().map(|c| c.id.clone()).collect();
    let payment_logs = if cycle_ids.is_empty() {
        Vec::new()
    } else {
        store.fetch_logs_for_cycles(&cycle_ids).await?
    };

    debug!(
        group_id,
        cycles = cycles.len(),
        members = members.len(),
        payment_logs = payment_logs.len(),
        "Building cycle reports"
    );

    let reports = build_cycle_reports(
        group.contribution_amount,
        &cycles,
        &members,
        &profiles,
        &payment_logs,
    );
    let totals = summarize_reports(&reports);

    Ok(CycleReportsView {
        group,
        reports,
        totals,
    })
}

/// Loads and builds one user's statistics within a group.
///
/// # Errors
///
/// Returns `GroupNotFound` for an unknown group, `MemberNotFound` when the
/// user has no membership in it, and propagates store failures.
pub async fn load_personal_stats<S>(
    store: &S,
    group_id: &str,
    user_id: &str,
) -> EngineResult<PersonalStatsData>
where
    S: GroupStore + ?Sized,
{
    let group = fetch_group(store, group_id).await?;
    let members = store.fetch_members(group_id).await?;
    let member = resolve_member(&members, group_id, user_id)?;

    let cycles = store.fetch_cycles(group_id).await?;
    let payment_logs = store.fetch_logs_for_member(&member.id).await?;

    Ok(build_personal_stats(
        group.contribution_amount,
        member,
        &cycles,
        &payment_logs,
    ))
}
