// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use roster::InitReport;
use roster_domain::{Employee, EmployeeForm};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// API representation of a roster record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeInfo {
    /// The record identifier.
    pub id: i64,
    /// Full name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Department display name, if any.
    pub department: Option<String>,
    /// Job title.
    pub designation: String,
}

impl From<&Employee> for EmployeeInfo {
    fn from(employee: &Employee) -> Self {
        Self {
            id: employee.id.value(),
            name: employee.name.clone(),
            email: employee.email.clone(),
            department: employee
                .department
                .as_ref()
                .map(|department| department.as_str().to_string()),
            designation: employee.designation.clone(),
        }
    }
}

/// API response for `initialize`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitializeResponse {
    /// Where the roster came from: `cache`, `seed` or `empty`.
    pub source: String,
    /// Number of records in the roster.
    pub record_count: usize,
    /// Human-readable non-fatal notices raised while loading.
    pub notices: Vec<String>,
}

impl From<&InitReport> for InitializeResponse {
    fn from(report: &InitReport) -> Self {
        Self {
            source: report.source.as_str().to_string(),
            record_count: report.record_count,
            notices: report.notices.iter().map(ToString::to_string).collect(),
        }
    }
}

/// API response listing roster records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListEmployeesResponse {
    /// The listed records, in roster order.
    pub employees: Vec<EmployeeInfo>,
    /// Size of the full roster.
    pub total_count: usize,
    /// Size of the filtered view.
    pub visible_count: usize,
    /// The active search text.
    pub search_text: String,
    /// The active department filter, if any.
    pub department: Option<String>,
}

/// API request to change the search text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetSearchTextRequest {
    /// The new search text. Empty matches every record.
    #[serde(default)]
    pub search_text: String,
}

/// API request to change the department filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetDepartmentFilterRequest {
    /// One of the enumerated department names. Absent or empty clears the filter.
    #[serde(default)]
    pub department: Option<String>,
}

/// API request to add a new employee.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitEmployeeRequest {
    /// The employee name.
    #[serde(default)]
    pub name: String,
    /// The email address.
    #[serde(default)]
    pub email: String,
    /// The department name; empty when nothing was chosen.
    #[serde(default)]
    pub department: String,
    /// The job title.
    #[serde(default)]
    pub designation: String,
}

impl From<SubmitEmployeeRequest> for EmployeeForm {
    fn from(request: SubmitEmployeeRequest) -> Self {
        Self {
            name: request.name,
            email: request.email,
            department: request.department,
            designation: request.designation,
        }
    }
}

/// API response for a submitted employee form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitEmployeeResponse {
    /// Whether the record was added.
    pub success: bool,
    /// Per-field validation messages, keyed by field name.
    pub field_errors: BTreeMap<String, String>,
    /// The stored record on success.
    pub employee: Option<EmployeeInfo>,
    /// A human-readable summary.
    pub message: String,
}
