//! The employee page's view state and its single load cycle.
//!
//! The source page kept `rows`/`loading`/`errorMsg` in reactive state
//! variables and let the framework re-render on assignment. Here the state
//! is explicit: every mutation goes through [`EmployeeView`] and triggers
//! exactly one notification pass to the subscribed renderers before the
//! next observable event.

mod render;

pub use render::render_page;

use crate::model::EmployeeRecord;
use crate::store::RecordSource;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::task::JoinHandle;
use tracing::warn;

/// The three pieces of page state. `loading` and `error_message` are
/// mutually exclusive with the table/empty states by construction: the
/// renderer checks `loading` first and `error_message` only once loading
/// is false.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub rows: Vec<EmployeeRecord>,
    pub loading: bool,
    pub error_message: Option<String>,
}

type Subscriber = Box<dyn FnMut(&ViewState) + Send>;

struct Inner {
    state: ViewState,
    subscribers: Vec<Subscriber>,
    /// Cleared by `unmount`; a fetch that settles afterwards must not write.
    alive: bool,
    mounted: bool,
}

impl Inner {
    /// Applies one mutation and runs one notification pass.
    fn mutate(&mut self, f: impl FnOnce(&mut ViewState)) {
        f(&mut self.state);
        for sub in self.subscribers.iter_mut() {
            sub(&self.state);
        }
    }
}

/// Owner of the page state. One writer (the fetch's completion) and any
/// number of snapshot readers, all on the state lock.
pub struct EmployeeView {
    inner: Arc<Mutex<Inner>>,
}

impl EmployeeView {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                state: ViewState::default(),
                subscribers: Vec::new(),
                alive: true,
                mounted: false,
            })),
        }
    }

    fn lock(inner: &Arc<Mutex<Inner>>) -> MutexGuard<'_, Inner> {
        inner.lock().expect("view state lock poisoned")
    }

    /// Registers a renderer called once per state mutation.
    pub fn subscribe(&self, f: impl FnMut(&ViewState) + Send + 'static) {
        Self::lock(&self.inner).subscribers.push(Box::new(f));
    }

    /// A snapshot of the current state.
    pub fn state(&self) -> ViewState {
        Self::lock(&self.inner).state.clone()
    }

    /// Tears the view down. State stops changing from this point on, even
    /// if a fetch is still in flight.
    pub fn unmount(&self) {
        Self::lock(&self.inner).alive = false;
    }

    /// Starts the page's single load cycle: flip into the loading state
    /// (one render), issue the fetch, and settle with rows or an error
    /// message (one render). Returns the fetch task's handle so callers can
    /// await settlement. A second mount on the same view is a no-op.
    pub fn mount(&self, source: Arc<dyn RecordSource>) -> JoinHandle<()> {
        {
            let mut inner = Self::lock(&self.inner);
            if inner.mounted {
                warn!("Employee view mounted twice; ignoring");
                return tokio::spawn(async {});
            }
            inner.mounted = true;
            inner.mutate(|state| {
                state.loading = true;
                state.error_message = None;
            });
        }

        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move {
            let result = source.fetch_employees().await;

            let mut inner = Self::lock(&inner);
            if !inner.alive {
                // The page is gone; drop the result on the floor.
                return;
            }
            inner.mutate(|state| {
                match result {
                    Ok(rows) => state.rows = rows,
                    Err(e) => state.error_message = Some(e.to_string()),
                }
                state.loading = false;
            });
        })
    }
}

impl Default for EmployeeView {
    fn default() -> Self {
        Self::new()
    }
}
