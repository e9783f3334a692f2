//! View loaders for the savings-group engine.
//!
//! A view fetches its rows from a [`GroupStore`](crate::store::GroupStore),
//! runs the pure builders and publishes the result into a [`ViewSlot`]. The
//! slot tags every fetch with a request generation so a response that
//! arrives after the view's parameters changed is discarded.

mod loaders;
mod screen;
mod slot;

pub use loaders::{CycleReportsView, load_cycle_reports, load_personal_stats};
pub use screen::{ReportScreen, StatsScreen};
pub use slot::{RequestToken, ViewSlot, ViewState};
