//! HTTP API module for the savings-group engine.
//!
//! This module provides the REST endpoints serving cycle reports, personal
//! statistics and their CSV exports.

mod handlers;
mod response;
mod state;

pub use handlers::create_router;
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
