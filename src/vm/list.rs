//! State container for the employee list screen.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::api::EmployeeApi;
use crate::model::Employee;
use crate::vm::observe::{Listeners, Subscription};

/// Coarse lifecycle of the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListPhase {
    #[default]
    Loading,
    Loaded,
    Error,
}

/// Everything the list view needs to render.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListState {
    pub phase: ListPhase,
    pub employees: Vec<Employee>,
    pub error: Option<String>,
}

/// Observable container behind the employee list.
///
/// The collection is always refetched in full after any mutation; there
/// is no incremental patching.
pub struct ListViewModel {
    api: Arc<EmployeeApi>,
    state: Mutex<ListState>,
    listeners: Listeners,
}

impl ListViewModel {
    pub fn new(api: Arc<EmployeeApi>) -> Self {
        Self {
            api,
            state: Mutex::new(ListState::default()),
            listeners: Listeners::new(),
        }
    }

    pub fn subscribe(&self, listener: impl Fn() + Send + Sync + 'static) -> Subscription {
        self.listeners.subscribe(listener)
    }

    /// Clone of the current state for rendering.
    pub fn snapshot(&self) -> ListState {
        self.state.lock().clone()
    }

    /// Fetch the full collection.
    ///
    /// Notifies once when entering the loading phase and exactly once
    /// when the result lands. On failure the collection is cleared and a
    /// human-readable error stored.
    pub async fn load(&self) {
        {
            let mut state = self.state.lock();
            state.phase = ListPhase::Loading;
            state.error = None;
        }
        self.listeners.notify();

        let result = self.api.list().await;
        {
            let mut state = self.state.lock();
            match result {
                Ok(employees) => {
                    tracing::debug!(count = employees.len(), "employee list loaded");
                    state.employees = employees;
                    state.phase = ListPhase::Loaded;
                    state.error = None;
                }
                Err(err) => {
                    tracing::warn!(error = %err, "employee list load failed");
                    state.employees.clear();
                    state.error = Some(err.to_string());
                    state.phase = ListPhase::Error;
                }
            }
        }
        self.listeners.notify();
    }

    /// Delete one employee, then reload the whole collection.
    ///
    /// On failure the existing collection and phase are left untouched;
    /// only the error message is stored. Returns whether the delete
    /// succeeded.
    pub async fn delete(&self, id: &str) -> bool {
        match self.api.delete(id).await {
            Ok(()) => {
                self.load().await;
                true
            }
            Err(err) => {
                tracing::warn!(id, error = %err, "employee delete failed");
                self.state.lock().error = Some(err.to_string());
                self.listeners.notify();
                false
            }
        }
    }
}
