// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use roster::{InitReport, RecordStore, RosterController, SeedSource};
use roster_domain::{Department, Employee, EmployeeForm, FormField, NewEmployee};
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

use crate::error::{ApiError, translate_core_error};
use crate::request_response::{
    EmployeeInfo, InitializeResponse, ListEmployeesResponse, SetDepartmentFilterRequest,
    SetSearchTextRequest, SubmitEmployeeRequest, SubmitEmployeeResponse,
};

/// Hydrates the roster and reports where it came from.
///
/// Never fails: store and seed problems are reported as notices.
pub async fn initialize<S: RecordStore, L: SeedSource>(
    controller: &mut RosterController<S, L>,
) -> InitializeResponse {
    let report: InitReport = controller.initialize().await;
    for notice in &report.notices {
        warn!(%notice, "Initialization notice");
    }
    InitializeResponse::from(&report)
}

/// Lists the records matching the current filter criteria.
///
/// # Errors
///
/// Returns [`ApiError::NotReady`] if the roster has not been initialized.
pub fn visible_records<S: RecordStore, L: SeedSource>(
    controller: &RosterController<S, L>,
) -> Result<ListEmployeesResponse, ApiError> {
    ensure_ready(controller)?;
    Ok(build_listing(controller, controller.visible()))
}

/// Lists the full roster, ignoring the filter criteria.
///
/// # Errors
///
/// Returns [`ApiError::NotReady`] if the roster has not been initialized.
pub fn all_records<S: RecordStore, L: SeedSource>(
    controller: &RosterController<S, L>,
) -> Result<ListEmployeesResponse, ApiError> {
    ensure_ready(controller)?;
    Ok(build_listing(controller, controller.roster()))
}

/// Changes the search text and returns the recomputed view.
///
/// # Errors
///
/// Returns [`ApiError::NotReady`] if the roster has not been initialized.
pub fn set_search_text<S: RecordStore, L: SeedSource>(
    controller: &mut RosterController<S, L>,
    request: SetSearchTextRequest,
) -> Result<ListEmployeesResponse, ApiError> {
    ensure_ready(controller)?;
    controller.set_search_text(request.search_text);
    debug!(search_text = %controller.criteria().search_text, "Search text changed");
    visible_records(controller)
}

/// Changes the department filter and returns the recomputed view.
///
/// An absent or blank department clears the filter.
///
/// # Errors
///
/// Returns an error if:
/// - The roster has not been initialized
/// - The department is not one of the enumerated departments
pub fn set_department_filter<S: RecordStore, L: SeedSource>(
    controller: &mut RosterController<S, L>,
    request: SetDepartmentFilterRequest,
) -> Result<ListEmployeesResponse, ApiError> {
    ensure_ready(controller)?;
    let department: Option<Department> = match request.department.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(name) => Some(name.parse::<Department>().map_err(|e| ApiError::InvalidInput {
            field: String::from("department"),
            message: e.to_string(),
        })?),
    };

    debug!(department = ?department, "Department filter changed");
    controller.set_department_filter(department);
    visible_records(controller)
}

/// Validates a submitted form and, if it is valid, adds the record.
///
/// Validation failures are not errors: they produce a response with
/// `success = false` and per-field messages, and the roster is untouched.
///
/// # Errors
///
/// Returns an error if:
/// - The roster has not been initialized
/// - The roster could not be persisted (the record is not added)
pub fn submit_new_record<S: RecordStore, L: SeedSource>(
    controller: &mut RosterController<S, L>,
    request: SubmitEmployeeRequest,
) -> Result<SubmitEmployeeResponse, ApiError> {
    let form: EmployeeForm = EmployeeForm::from(request);

    let candidate: NewEmployee = match NewEmployee::from_form(&form) {
        Ok(candidate) => candidate,
        Err(report) => {
            let field_errors: BTreeMap<String, String> = report
                .into_field_errors()
                .into_iter()
                .map(|(field, message): (FormField, String)| (field.as_str().to_string(), message))
                .collect();
            debug!(error_count = field_errors.len(), "Employee form rejected");
            return Ok(SubmitEmployeeResponse {
                success: false,
                field_errors,
                employee: None,
                message: String::from("Please correct the highlighted fields"),
            });
        }
    };

    let employee: Employee = controller.add(candidate).map_err(translate_core_error)?;
    info!(id = %employee.id, name = %employee.name, "Employee added");

    Ok(SubmitEmployeeResponse {
        success: true,
        field_errors: BTreeMap::new(),
        employee: Some(EmployeeInfo::from(&employee)),
        message: String::from("Employee added successfully"),
    })
}

fn ensure_ready<S: RecordStore, L: SeedSource>(
    controller: &RosterController<S, L>,
) -> Result<(), ApiError> {
    if controller.is_ready() {
        Ok(())
    } else {
        Err(ApiError::NotReady {
            message: String::from("The roster is still loading"),
        })
    }
}

fn build_listing<S: RecordStore, L: SeedSource>(
    controller: &RosterController<S, L>,
    records: &[Employee],
) -> ListEmployeesResponse {
    ListEmployeesResponse {
        employees: records.iter().map(EmployeeInfo::from).collect(),
        total_count: controller.roster().len(),
        visible_count: controller.visible().len(),
        search_text: controller.criteria().search_text.clone(),
        department: controller
            .criteria()
            .department
            .as_ref()
            .map(|department| department.as_str().to_string()),
    }
}
