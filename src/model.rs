//! Internal employee representation.
//!
//! These are the shapes the UI works with. The JSON exchanged with the
//! remote service looks different; see [`crate::api::wire`] for the
//! mapping.

/// An employee record as the UI sees it.
///
/// `id` is opaque and immutable once assigned. `active` is derived from
/// the remote status code on read and re-encoded on write; it has no
/// independent wire representation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub id: String,
    /// Canonical display format `XXX-XX-XXXX`.
    pub ssn: String,
    pub first_name: String,
    pub last_name: String,
    pub employee_no: Option<String>,
    pub active: bool,
}

impl Employee {
    /// Display name in "Last, First" order for list rendering.
    pub fn display_name(&self) -> String {
        format!("{}, {}", self.last_name, self.first_name)
    }
}

/// Editable draft of an employee, decoupled from any persisted record
/// until a submit succeeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeDraft {
    pub ssn: String,
    pub first_name: String,
    pub last_name: String,
    pub employee_no: String,
    pub active: bool,
}

impl Default for EmployeeDraft {
    fn default() -> Self {
        Self {
            ssn: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            employee_no: String::new(),
            active: true,
        }
    }
}

impl From<&Employee> for EmployeeDraft {
    fn from(employee: &Employee) -> Self {
        Self {
            ssn: employee.ssn.clone(),
            first_name: employee.first_name.clone(),
            last_name: employee.last_name.clone(),
            employee_no: employee.employee_no.clone().unwrap_or_default(),
            active: employee.active,
        }
    }
}

/// The editable form fields, used as keys of the per-field error map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Ssn,
    FirstName,
    LastName,
    EmployeeNo,
}

impl Field {
    /// All fields in form display order.
    pub const ALL: [Field; 4] = [
        Field::FirstName,
        Field::LastName,
        Field::Ssn,
        Field::EmployeeNo,
    ];

    /// Human-readable label for form rendering and error messages.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Ssn => "SSN",
            Field::FirstName => "First name",
            Field::LastName => "Last name",
            Field::EmployeeNo => "Employee number",
        }
    }
}
