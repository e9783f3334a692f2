//! Screens pairing a store with a guarded view slot.

use std::sync::Arc;

use tracing::info;

use crate::models::PersonalStatsData;
use crate::store::GroupStore;

use super::loaders::{CycleReportsView, load_cycle_reports, load_personal_stats};
use super::slot::{ViewSlot, ViewState};

/// The cycle report screen of one group.
pub struct ReportScreen {
    store: Arc<dyn GroupStore>,
    slot: ViewSlot<String, CycleReportsView>,
}

impl ReportScreen {
    /// Creates an idle screen reading from `store`.
    pub fn new(store: Arc<dyn GroupStore>) -> Self {
        Self {
            store,
            slot: ViewSlot::new(),
        }
    }

    /// Loads the reports of `group_id` into the screen.
    ///
    /// Returns false if a later call switched groups before this load
    /// finished, in which case its result was discarded.
    pub async fn show(&self, group_id: &str) -> bool {
        let token = self.slot.begin(group_id.to_string());
        info!(group_id, generation = token.generation(), "Loading cycle reports");
        let result = load_cycle_reports(self.store.as_ref(), group_id).await;
        self.slot.complete(token, result)
    }

    /// The group currently selected.
    pub fn group_id(&self) -> Option<String> {
        self.slot.params()
    }

    /// What the screen currently displays.
    pub fn state(&self) -> ViewState<CycleReportsView> {
        self.slot.state()
    }
}

/// The personal statistics screen of one user in one group.
pub struct StatsScreen {
    store: Arc<dyn GroupStore>,
    slot: ViewSlot<(String, String), PersonalStatsData>,
}

impl StatsScreen {
    /// Creates an idle screen reading from `store`.
    pub fn new(store: Arc<dyn GroupStore>) -> Self {
        Self {
            store,
            slot: ViewSlot::new(),
        }
    }

    /// Loads the statistics of `user_id` in `group_id` into the screen.
    ///
    /// Returns false if the group or user changed before this load finished.
    pub async fn show(&self, group_id: &str, user_id: &str) -> bool {
        let token = self
            .slot
            .begin((group_id.to_string(), user_id.to_string()));
        info!(
            group_id,
            user_id,
            generation = token.generation(),
            "Loading personal stats"
        );
        let result = load_personal_stats(self.store.as_ref(), group_id, user_id).await;
        self.slot.complete(token, result)
    }

    /// What the screen currently displays.
    pub fn state(&self) -> ViewState<PersonalStatsData> {
        self.slot.state()
    }
}
