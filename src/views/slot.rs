//! Request-generation guarded view state.

use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{debug, warn};

use crate::error::EngineResult;

/// What a view currently displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState<T> {
    /// Nothing has been requested yet.
    Idle,
    /// A fetch for the current parameters is in flight.
    Loading,
    /// The latest fetch succeeded.
    Ready(T),
    /// The latest fetch failed; holds the error message.
    Failed(String),
}

/// Ticket handed out by [`ViewSlot::begin`] for one fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestToken<P> {
    generation: u64,
    params: P,
}

impl<P> RequestToken<P> {
    /// The generation this fetch was started under.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The parameters this fetch was started with.
    pub fn params(&self) -> &P {
        &self.params
    }
}

#[derive(Debug)]
struct SlotInner<P, T> {
    generation: u64,
    params: Option<P>,
    state: ViewState<T>,
}

/// Holds a view's parameters and state, accepting only current responses.
///
/// Each [`begin`](ViewSlot::begin) bumps the generation. A response whose
/// token carries an older generation was fetched for parameters the view
/// has since left, and [`complete`](ViewSlot::complete) drops it.
///
/// # Example
///
/// ```
/// use susu_engine::views::{ViewSlot, ViewState};
///
/// let slot: ViewSlot<String, u32> = ViewSlot::new();
/// let first = slot.begin("grp_001".to_string());
/// let second = slot.begin("grp_002".to_string());
///
/// assert!(slot.complete(second, Ok(2)));
/// assert!(!slot.complete(first, Ok(1)));
/// assert_eq!(slot.state(), ViewState::Ready(2));
/// ```
#[derive(Debug)]
pub struct ViewSlot<P, T> {
    inner: Mutex<SlotInner<P, T>>,
}

impl<P, T> Default for ViewSlot<P, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P, T> ViewSlot<P, T> {
    /// Creates an idle slot.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(SlotInner {
                generation: 0,
                params: None,
                state: ViewState::Idle,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, SlotInner<P, T>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Starts a fetch for `params`, superseding any fetch in flight.
    pub fn begin(&self, params: P) -> RequestToken<P>
    where
        P: Clone,
    {
        let mut inner = self.lock();
        inner.generation += 1;
        inner.params = Some(params.clone());
        inner.state = ViewState::Loading;
        RequestToken {
            generation: inner.generation,
            params,
        }
    }

    /// Returns true if `token` belongs to the latest fetch.
    pub fn is_current(&self, token: &RequestToken<P>) -> bool {
        self.lock().generation == token.generation
    }

    /// Publishes the outcome of a fetch.
    ///
    /// Returns false, leaving the state untouched, when the token is stale.
    /// Errors are stored as [`ViewState::Failed`]; nothing is retried.
    pub fn complete(&self, token: RequestToken<P>, result: EngineResult<T>) -> bool {
        let mut inner = self.lock();
        if inner.generation != token.generation {
            debug!(
                generation = token.generation,
                current = inner.generation,
                "Discarding stale view response"
            );
            return false;
        }

        inner.state = match result {
            Ok(value) => ViewState::Ready(value),
            Err(err) => {
                warn!(error = %err, "View load failed");
                ViewState::Failed(err.to_string())
            }
        };
        true
    }

    /// Returns the current parameters, if any fetch was started.
    pub fn params(&self) -> Option<P>
    where
        P: Clone,
    {
        self.lock().params.clone()
    }

    /// Returns a snapshot of the current state.
    pub fn state(&self) -> ViewState<T>
    where
        T: Clone,
    {
        self.lock().state.clone()
    }
}
