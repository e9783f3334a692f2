//! Savings-group reporting engine.
//!
//! This crate rebuilds rotating savings group ("susu") statistics from flat
//! store rows: one financial report per payment cycle, with the payout
//! recipient resolved from the rotation queue, and per-member contribution
//! histories. It also provides CSV export, a store boundary, guarded view
//! loaders and an HTTP API over them.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod store;
pub mod views;
