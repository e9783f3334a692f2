//! Application state for the savings-group API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::store::GroupStore;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers,
/// such as the store the views read from.
#[derive(Clone)]
pub struct AppState {
    /// The store backing every view.
    store: Arc<dyn GroupStore>,
}

impl AppState {
    /// Creates a new application state reading from the given store.
    pub fn new<S: GroupStore + 'static>(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Creates a new application state sharing an existing store.
    pub fn from_shared(store: Arc<dyn GroupStore>) -> Self {
        Self { store }
    }

    /// Returns a reference to the store.
    pub fn store(&self) -> &dyn GroupStore {
        self.store.as_ref()
    }
}
