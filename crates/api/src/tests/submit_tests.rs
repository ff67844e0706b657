// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    MemoryStore, TestController, create_alice_and_bob_controller, create_valid_request,
    failing_seed,
};
use crate::{
    ApiError, EmployeeInfo, SubmitEmployeeRequest, SubmitEmployeeResponse, initialize,
    submit_new_record, visible_records,
};
use roster::RosterController;
use roster_domain::Employee;

async fn create_ready_controller() -> TestController {
    let mut controller: TestController = create_alice_and_bob_controller();
    initialize(&mut controller).await;
    controller
}

#[tokio::test]
async fn test_valid_submission_adds_record() {
    let mut controller: TestController = create_ready_controller().await;

    let response: SubmitEmployeeResponse =
        submit_new_record(&mut controller, create_valid_request("Ann", "Finance")).unwrap();

    assert!(response.success);
    assert!(response.field_errors.is_empty());
    assert_eq!(response.message, "Employee added successfully");
    let employee: EmployeeInfo = response.employee.unwrap();
    assert_eq!(employee.name, "Ann");
    assert_eq!(employee.department.as_deref(), Some("Finance"));

    let names: Vec<String> = visible_records(&controller)
        .unwrap()
        .employees
        .into_iter()
        .map(|e| e.name)
        .collect();
    assert_eq!(names, vec!["Alice", "Bob", "Ann"]);
    assert_eq!(controller.into_store().records.len(), 3);
}

#[tokio::test]
async fn test_invalid_submission_reports_field_errors() {
    let mut controller: TestController = create_ready_controller().await;
    let request: SubmitEmployeeRequest = SubmitEmployeeRequest {
        name: String::from("Ann"),
        email: String::from("ann@"),
        department: String::from("HR"),
        designation: String::from("Engineer"),
    };

    let response: SubmitEmployeeResponse = submit_new_record(&mut controller, request).unwrap();

    assert!(!response.success);
    assert!(response.employee.is_none());
    assert_eq!(
        response.field_errors.get("email").map(String::as_str),
        Some("Email is invalid")
    );
    assert_eq!(response.field_errors.len(), 1);
    assert_eq!(controller.roster().len(), 2);
}

#[tokio::test]
async fn test_empty_submission_reports_every_field() {
    let mut controller: TestController = create_ready_controller().await;

    let response: SubmitEmployeeResponse =
        submit_new_record(&mut controller, SubmitEmployeeRequest::default()).unwrap();

    let fields: Vec<&str> = response.field_errors.keys().map(String::as_str).collect();
    assert_eq!(fields, vec!["department", "designation", "email", "name"]);
    assert!(!response.success);
}

#[tokio::test]
async fn test_failed_save_is_reported_and_not_applied() {
    let store: MemoryStore = MemoryStore {
        records: Vec::new(),
        fail_writes: true,
    };
    let mut controller: TestController = RosterController::new(store, failing_seed());
    initialize(&mut controller).await;

    let result: Result<SubmitEmployeeResponse, ApiError> =
        submit_new_record(&mut controller, create_valid_request("Ann", "HR"));

    assert_eq!(
        result,
        Err(ApiError::PersistenceFailed {
            message: String::from(
                "Failed to add employee: Failed to write roster: disk full"
            ),
        })
    );
    assert!(controller.roster().is_empty());
}

#[test]
fn test_submission_before_initialize_is_not_ready() {
    let mut controller: TestController = create_alice_and_bob_controller();

    let result: Result<SubmitEmployeeResponse, ApiError> =
        submit_new_record(&mut controller, create_valid_request("Ann", "HR"));

    assert!(matches!(result, Err(ApiError::NotReady { .. })));
    let roster: &[Employee] = controller.roster();
    assert!(roster.is_empty());
}
