//! Resource State
//!
//! Browser-independent state containers behind the hooks. Each load is tagged
//! with a generation number; a response whose generation is no longer the
//! latest is dropped, so a slow earlier request can never overwrite a newer one.
//!
//! Drivers are generic over `StateCell`, so the same code runs against Leptos
//! signals in the app and plain `RefCell`s in tests.

pub mod comments;
pub mod feed;
pub mod optimistic;

use std::future::Future;

use leptos::prelude::*;

use crate::error::ApiResult;

/// Somewhere a piece of resource state lives
pub trait StateCell<T> {
    /// Mutate in place and notify subscribers. `None` once the owner is gone.
    fn update_with<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R>;

    /// Read without subscribing or notifying
    fn peek<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R>;
}

impl<T: Send + Sync + 'static> StateCell<T> for RwSignal<T> {
    fn update_with<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        self.try_update(f)
    }

    fn peek<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        self.try_with_untracked(f)
    }
}

#[cfg(test)]
impl<T> StateCell<T> for std::cell::RefCell<T> {
    fn update_with<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }

    fn peek<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        Some(f(&self.borrow()))
    }
}

/// What happened to a load request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// No request was issued
    Skipped,
    /// Response was written to state (success or error)
    Applied,
    /// A newer load started meanwhile; response dropped
    Discarded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// A single fetched value plus its loading/error status
#[derive(Debug, Clone, PartialEq)]
pub struct Loadable<T> {
    value: Option<T>,
    loading: bool,
    error: Option<String>,
    generation: u64,
    /// Bumped each time a load writes a fresh value
    version: u64,
}

impl<T> Default for Loadable<T> {
    fn default() -> Self {
        Self {
            value: None,
            loading: false,
            error: None,
            generation: 0,
            version: 0,
        }
    }
}

impl<T> Loadable<T> {
    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn value_mut(&mut self) -> Option<&mut T> {
        self.value.as_mut()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Changes only when a load replaces the value, not when one starts or fails
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Report a failure that did not come from a load (e.g. a reverted toggle)
    pub fn set_error(&mut self, message: String) {
        self.error = Some(message);
    }

    /// Start a load that keeps the current value visible until it settles
    pub fn begin(&mut self) -> LoadTicket {
        self.generation += 1;
        self.loading = true;
        self.error = None;
        LoadTicket(self.generation)
    }

    /// Start a load for a different key; the old value is dropped immediately
    pub fn restart(&mut self) -> LoadTicket {
        self.value = None;
        self.version += 1;
        self.begin()
    }

    /// Apply a response. Errors leave the cached value untouched.
    pub fn settle(&mut self, ticket: LoadTicket, result: ApiResult<T>) -> LoadOutcome {
        if ticket.0 != self.generation {
            log::debug!("[RESOURCE] Dropping stale response (gen {} < {})", ticket.0, self.generation);
            return LoadOutcome::Discarded;
        }
        self.loading = false;
        match result {
            Ok(value) => {
                self.value = Some(value);
                self.version += 1;
                self.error = None;
            }
            Err(e) => self.error = Some(e.to_string()),
        }
        LoadOutcome::Applied
    }
}

/// Run `fetch` as the newest load of `cell`
pub async fn load<T, C, F>(cell: &C, restart: bool, fetch: F) -> LoadOutcome
where
    C: StateCell<Loadable<T>>,
    F: Future<Output = ApiResult<T>>,
{
    let Some(ticket) = cell.update_with(|s| if restart { s.restart() } else { s.begin() }) else {
        return LoadOutcome::Skipped;
    };
    let result = fetch.await;
    cell.update_with(|s| s.settle(ticket, result))
        .unwrap_or(LoadOutcome::Discarded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use std::cell::RefCell;

    #[test]
    fn test_error_keeps_cached_value() {
        let mut state = Loadable::<u32>::default();
        let ticket = state.begin();
        assert!(state.is_loading());
        assert_eq!(state.settle(ticket, Ok(5)), LoadOutcome::Applied);

        let ticket = state.begin();
        assert_eq!(state.settle(ticket, Err(ApiError::Network)), LoadOutcome::Applied);
        assert_eq!(state.value(), Some(&5));
        assert!(!state.is_loading());
        assert_eq!(state.error(), Some(crate::error::NETWORK_ERROR));
    }

    #[test]
    fn test_stale_ticket_is_discarded() {
        let mut state = Loadable::<u32>::default();
        let first = state.begin();
        let second = state.begin();

        assert_eq!(state.settle(second, Ok(2)), LoadOutcome::Applied);
        assert_eq!(state.settle(first, Ok(1)), LoadOutcome::Discarded);
        assert_eq!(state.value(), Some(&2));
    }

    #[test]
    fn test_restart_clears_previous_value() {
        let mut state = Loadable::<u32>::default();
        let ticket = state.begin();
        state.settle(ticket, Ok(1));

        state.restart();
        assert_eq!(state.value(), None);
        assert!(state.is_loading());
    }

    #[test]
    fn test_version_moves_only_when_value_replaced() {
        let mut state = Loadable::<u32>::default();
        let ticket = state.begin();
        state.settle(ticket, Ok(1));
        let version = state.version();

        let ticket = state.begin();
        assert_eq!(state.version(), version);
        state.settle(ticket, Err(ApiError::Network));
        assert_eq!(state.version(), version);

        let ticket = state.begin();
        state.settle(ticket, Ok(2));
        assert_eq!(state.version(), version + 1);
    }

    #[tokio::test]
    async fn test_load_driver_applies_result() {
        let cell = RefCell::new(Loadable::<String>::default());
        let outcome = load(&cell, false, async { Ok("done".to_string()) }).await;
        assert_eq!(outcome, LoadOutcome::Applied);
        assert_eq!(cell.borrow().value().map(String::as_str), Some("done"));
    }
}
