//! State container for the add/edit employee form.

use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::Mutex;
use uuid::Uuid;

use crate::api::EmployeeApi;
use crate::model::{Employee, EmployeeDraft, Field};
use crate::validate;
use crate::vm::observe::{Listeners, Subscription};

/// Coarse lifecycle of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// Whether a submit creates a new record or updates an existing one.
/// Captured at initialization and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Add,
    Edit {
        id: String,
    },
}

/// Everything the form view needs to render.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormState {
    pub mode: FormMode,
    pub draft: EmployeeDraft,
    pub errors: BTreeMap<Field, String>,
    pub general_error: Option<String>,
    pub phase: FormPhase,
}

/// Observable container behind the add/edit form.
///
/// The draft stays decoupled from any persisted employee until a submit
/// succeeds.
pub struct FormViewModel {
    api: Arc<EmployeeApi>,
    state: Mutex<FormState>,
    listeners: Listeners,
}

impl FormViewModel {
    pub fn new(api: Arc<EmployeeApi>) -> Self {
        Self {
            api,
            state: Mutex::new(FormState::default()),
            listeners: Listeners::new(),
        }
    }

    pub fn subscribe(&self, listener: impl Fn() + Send + Sync + 'static) -> Subscription {
        self.listeners.subscribe(listener)
    }

    /// Clone of the current state for rendering.
    pub fn snapshot(&self) -> FormState {
        self.state.lock().clone()
    }

    /// Reset to an empty draft (`active = true`) in add mode.
    pub fn initialize_for_add(&self) {
        {
            let mut state = self.state.lock();
            *state = FormState::default();
        }
        self.listeners.notify();
    }

    /// Load an existing employee into the draft for editing.
    pub async fn initialize_for_edit(&self, id: &str) {
        {
            let mut state = self.state.lock();
            *state = FormState {
                mode: FormMode::Edit { id: id.to_string() },
                phase: FormPhase::Loading,
                ..FormState::default()
            };
        }
        self.listeners.notify();

        let result = self.api.get(id).await;
        {
            let mut state = self.state.lock();
            match result {
                Ok(employee) => {
                    state.draft = EmployeeDraft::from(&employee);
                    state.phase = FormPhase::Idle;
                }
                Err(err) => {
                    tracing::warn!(id, error = %err, "loading employee for edit failed");
                    state.general_error = Some(err.to_string());
                    state.phase = FormPhase::Error;
                }
            }
        }
        self.listeners.notify();
    }

    /// Overwrite one draft field and clear any existing error for exactly
    /// that field. No validation happens here.
    pub fn update_field(&self, field: Field, value: String) {
        {
            let mut state = self.state.lock();
            match field {
                Field::Ssn => state.draft.ssn = value,
                Field::FirstName => state.draft.first_name = value,
                Field::LastName => state.draft.last_name = value,
                Field::EmployeeNo => state.draft.employee_no = value,
            }
            state.errors.remove(&field);
        }
        self.listeners.notify();
    }

    /// Toggle the active flag on the draft.
    pub fn set_active(&self, active: bool) {
        self.state.lock().draft.active = active;
        self.listeners.notify();
    }

    /// Re-derive the full error map from the validators. Returns whether
    /// the draft is valid; notifies either way so the view can show or
    /// clear errors.
    pub fn validate(&self) -> bool {
        let valid = {
            let mut state = self.state.lock();
            state.errors = check_draft(&state.draft);
            state.errors.is_empty()
        };
        self.listeners.notify();
        valid
    }

    /// Validate, then create or update depending on the mode captured at
    /// initialization. Returns whether the submit succeeded.
    ///
    /// An invalid draft returns failure without any network call and
    /// without changing the phase.
    pub async fn submit(&self) -> bool {
        if !self.validate() {
            return false;
        }

        let (mode, draft) = {
            let mut state = self.state.lock();
            state.draft.ssn = state.draft.ssn.trim().to_string();
            state.draft.first_name = state.draft.first_name.trim().to_string();
            state.draft.last_name = state.draft.last_name.trim().to_string();
            state.draft.employee_no = state.draft.employee_no.trim().to_string();
            state.phase = FormPhase::Loading;
            state.general_error = None;
            (state.mode.clone(), state.draft.clone())
        };
        self.listeners.notify();

        let result = match &mode {
            FormMode::Add => {
                // Ids are assigned client-side before first creation.
                let employee = draft_to_employee(Uuid::new_v4().to_string(), &draft);
                self.api.create(&employee).await
            }
            FormMode::Edit { id } => {
                let employee = draft_to_employee(id.clone(), &draft);
                self.api.update(&employee).await
            }
        };

        let ok = result.is_ok();
        {
            let mut state = self.state.lock();
            match result {
                Ok(saved) => {
                    tracing::debug!(id = %saved.id, "employee saved");
                    state.errors.clear();
                    state.general_error = None;
                    state.phase = FormPhase::Success;
                }
                Err(err) => {
                    tracing::warn!(error = %err, "employee save failed");
                    state.general_error = Some(err.to_string());
                    state.phase = FormPhase::Error;
                }
            }
        }
        self.listeners.notify();
        ok
    }
}

fn check_draft(draft: &EmployeeDraft) -> BTreeMap<Field, String> {
    let mut errors = BTreeMap::new();
    if let Err(msg) = validate::validate_name("First name", &draft.first_name) {
        errors.insert(Field::FirstName, msg);
    }
    if let Err(msg) = validate::validate_name("Last name", &draft.last_name) {
        errors.insert(Field::LastName, msg);
    }
    if let Err(msg) = validate::validate_ssn(&draft.ssn) {
        errors.insert(Field::Ssn, msg);
    }
    if let Err(msg) = validate::validate_employee_no(&draft.employee_no) {
        errors.insert(Field::EmployeeNo, msg);
    }
    errors
}

fn draft_to_employee(id: String, draft: &EmployeeDraft) -> Employee {
    Employee {
        id,
        ssn: draft.ssn.clone(),
        first_name: draft.first_name.clone(),
        last_name: draft.last_name.clone(),
        employee_no: if draft.employee_no.is_empty() {
            None
        } else {
            Some(draft.employee_no.clone())
        },
        active: draft.active,
    }
}
