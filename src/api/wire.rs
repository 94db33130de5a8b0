//! Wire representation of an employee and its mapping to the internal
//! model.
//!
//! The remote service speaks a different dialect than the UI: PascalCase
//! field names, an integer status code instead of a boolean, and a few
//! audit fields the client passes through on write but never displays.

use serde::{Deserialize, Serialize};

use crate::model::Employee;

/// Status code meaning "active" on the wire.
pub const STATUS_ACTIVE: i64 = 0;
/// Status code written for any inactive employee. The service may hand
/// out other non-zero codes; they all decode to inactive and re-encode
/// as this single value.
pub const STATUS_INACTIVE: i64 = 1;

/// The JSON shape exchanged with the remote service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireEmployee {
    #[serde(rename = "Id")]
    pub id: String,
    #[serde(rename = "FirstName")]
    pub first_name: String,
    #[serde(rename = "LastName")]
    pub last_name: String,
    #[serde(rename = "SSN")]
    pub ssn: String,
    #[serde(rename = "EmployeeNumber", default, skip_serializing_if = "Option::is_none")]
    pub employee_no: Option<String>,
    #[serde(rename = "Status")]
    pub status: i64,
    #[serde(rename = "StartDate", default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(rename = "EndDate", default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(rename = "LastUpdatedBy", default, skip_serializing_if = "Option::is_none")]
    pub last_updated_by: Option<String>,
    #[serde(rename = "LastUpdatedDate", default, skip_serializing_if = "Option::is_none")]
    pub last_updated_date: Option<String>,
}

impl WireEmployee {
    /// Decode into the internal representation. `active` is derived from
    /// the status code: 0 means active, anything else inactive.
    pub fn into_model(self) -> Employee {
        Employee {
            id: self.id,
            ssn: self.ssn,
            first_name: self.first_name,
            last_name: self.last_name,
            employee_no: self.employee_no.filter(|s| !s.is_empty()),
            active: self.status == STATUS_ACTIVE,
        }
    }

    /// Encode an internal employee for a create or update payload.
    ///
    /// Lossy by design: any non-zero status the record originally carried
    /// collapses to [`STATUS_INACTIVE`]. Timestamps and audit fields are
    /// left for the service to fill in.
    pub fn from_model(employee: &Employee) -> Self {
        Self {
            id: employee.id.clone(),
            first_name: employee.first_name.clone(),
            last_name: employee.last_name.clone(),
            ssn: employee.ssn.clone(),
            employee_no: employee.employee_no.clone(),
            status: if employee.active {
                STATUS_ACTIVE
            } else {
                STATUS_INACTIVE
            },
            start_date: None,
            end_date: None,
            last_updated_by: None,
            last_updated_date: None,
        }
    }
}
