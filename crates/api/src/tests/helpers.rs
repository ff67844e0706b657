// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::SubmitEmployeeRequest;
use roster::{FetchError, RecordStore, RosterController, SeedSource, StoreError};
use roster_domain::{Department, Employee, EmployeeId, SeedCompany, SeedUser, StoredEmployee};

/// In-memory store with a switchable write failure.
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub records: Vec<Employee>,
    pub fail_writes: bool,
}

impl RecordStore for MemoryStore {
    fn load(&mut self) -> Result<Vec<StoredEmployee>, StoreError> {
        Ok(self.records.iter().cloned().map(StoredEmployee::from).collect())
    }

    fn save(&mut self, roster: &[Employee]) -> Result<(), StoreError> {
        if self.fail_writes {
            return Err(StoreError::WriteFailed(String::from("disk full")));
        }
        self.records = roster.to_vec();
        Ok(())
    }
}

/// Seed source returning a canned result.
#[derive(Debug, Clone)]
pub struct StubSeed {
    pub result: Result<Vec<SeedUser>, FetchError>,
}

impl SeedSource for StubSeed {
    async fn fetch_seed(&self) -> Result<Vec<SeedUser>, FetchError> {
        self.result.clone()
    }
}

pub type TestController = RosterController<MemoryStore, StubSeed>;

pub fn failing_seed() -> StubSeed {
    StubSeed {
        result: Err(FetchError::Transport(String::from("connection refused"))),
    }
}

pub fn create_seed_user(id: i64, name: &str, company: &str) -> SeedUser {
    SeedUser {
        id: Some(id),
        name: Some(String::from(name)),
        email: Some(format!("{}@example.net", name.to_lowercase())),
        company: Some(SeedCompany {
            name: Some(String::from(company)),
        }),
    }
}

pub fn create_test_employee(id: i64, name: &str, department: Department) -> Employee {
    Employee::new(
        EmployeeId::new(id),
        String::from(name),
        format!("{}@example.com", name.to_lowercase()),
        Some(department),
        String::from("Analyst"),
    )
}

/// Controller over Alice (HR) and Bob (IT), not yet initialized.
pub fn create_alice_and_bob_controller() -> TestController {
    let store: MemoryStore = MemoryStore {
        records: vec![
            create_test_employee(1, "Alice", Department::Hr),
            create_test_employee(2, "Bob", Department::It),
        ],
        fail_writes: false,
    };
    RosterController::new(store, failing_seed())
}

pub fn create_valid_request(name: &str, department: &str) -> SubmitEmployeeRequest {
    SubmitEmployeeRequest {
        name: String::from(name),
        email: format!("{}@example.com", name.to_lowercase()),
        department: String::from(department),
        designation: String::from("Engineer"),
    }
}
