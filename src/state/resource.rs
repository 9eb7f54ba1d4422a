//! Reducer-backed resource state
//!
//! Each container holds one [`ResourceState`] snapshot and mutates it only
//! through [`reduce`], driven by [`ResourceAction`] values. Actions are a
//! sum type so a missing match arm is a compile error, not a silent no-op.

use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

/// The state a container exposes to its consumers
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceState<T> {
    /// The cached data, `None` until the first successful fetch
    pub data: Option<T>,

    /// Whether a fetch is in flight
    pub loading: bool,

    /// The last failure, `None` while things are healthy
    pub error: Option<String>,

    /// When `data` was last committed
    pub last_updated: Option<DateTime<Utc>>,
}

impl<T> Default for ResourceState<T> {
    fn default() -> Self {
        Self {
            data: None,
            loading: false,
            error: None,
            last_updated: None,
        }
    }
}

/// An action dispatched against a [`ResourceState`]
#[derive(Debug, Clone)]
pub enum ResourceAction<T> {
    /// A fetch started
    Loading,

    /// A fetch succeeded with fresh data
    Loaded(T),

    /// A fetch failed with a human-readable message
    Failed(String),
}

/// Apply an action to a state snapshot
///
/// `Loading` clears the previous error on entry; `Failed` leaves any cached
/// data in place so the consumer can keep rendering it alongside the error.
pub fn reduce<T>(state: &mut ResourceState<T>, action: ResourceAction<T>) {
    match action {
        ResourceAction::Loading => {
            state.loading = true;
            state.error = None;
        }
        ResourceAction::Loaded(data) => {
            state.data = Some(data);
            state.loading = false;
            state.error = None;
            state.last_updated = Some(Utc::now());
        }
        ResourceAction::Failed(message) => {
            state.loading = false;
            state.error = Some(message);
        }
    }
}

/// Shared store behind a container handle
///
/// Carries the monotonic request ticket: [`Store::begin`] stamps each fetch
/// and [`Store::settle`] commits a response only while its ticket is still
/// the latest, so an overlapping earlier request can never clobber a later
/// one.
pub(crate) struct Store<T> {
    state: Mutex<ResourceState<T>>,
    ticket: AtomicU64,
}

impl<T: Clone> Store<T> {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(ResourceState::default()),
            ticket: AtomicU64::new(0),
        }
    }

    /// Start a fetch: dispatch `Loading` and hand out its ticket
    pub fn begin(&self) -> u64 {
        let ticket = self.ticket.fetch_add(1, Ordering::SeqCst) + 1;
        self.dispatch(ResourceAction::Loading);
        ticket
    }

    /// Commit a fetch outcome, unless a newer fetch has started since
    ///
    /// Returns whether the outcome was committed.
    pub fn settle(&self, ticket: u64, outcome: Result<T, String>) -> bool {
        if self.ticket.load(Ordering::SeqCst) != ticket {
            log::debug!("dropping response for superseded request {}", ticket);
            return false;
        }

        match outcome {
            Ok(data) => self.dispatch(ResourceAction::Loaded(data)),
            Err(message) => self.dispatch(ResourceAction::Failed(message)),
        }
        true
    }

    pub fn dispatch(&self, action: ResourceAction<T>) {
        let mut state = self.state.lock().unwrap();
        reduce(&mut state, action);
    }

    /// Point mutation outside the reducer, for committing a single saved
    /// record into a cached list
    pub fn mutate<F: FnOnce(&mut ResourceState<T>)>(&self, apply: F) {
        let mut state = self.state.lock().unwrap();
        apply(&mut state);
    }

    pub fn snapshot(&self) -> ResourceState<T> {
        self.state.lock().unwrap().clone()
    }
}
