// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{FetchError, IdAllocator, RecordStore, RosterController, SeedSource, StoreError};
use roster_domain::{
    Department, Employee, EmployeeForm, EmployeeId, NewEmployee, SeedCompany, SeedUser,
    StoredEmployee,
};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// In-memory store with switchable failures.
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub records: Option<Vec<StoredEmployee>>,
    pub fail_reads: bool,
    pub transient_read_failures: usize,
    pub fail_writes: bool,
    pub saves: usize,
}

impl MemoryStore {
    pub fn with_records(records: Vec<Employee>) -> Self {
        Self::with_stored(records.into_iter().map(StoredEmployee::from).collect())
    }

    pub fn with_stored(records: Vec<StoredEmployee>) -> Self {
        Self {
            records: Some(records),
            ..Self::default()
        }
    }

    pub fn stored_names(&self) -> Vec<String> {
        self.records
            .iter()
            .flatten()
            .map(|record| record.name.clone())
            .collect()
    }
}

impl RecordStore for MemoryStore {
    fn load(&mut self) -> Result<Vec<StoredEmployee>, StoreError> {
        if self.fail_reads {
            return Err(StoreError::ReadFailed(String::from("disk unavailable")));
        }
        if self.transient_read_failures > 0 {
            self.transient_read_failures -= 1;
            return Err(StoreError::ReadFailed(String::from("database is locked")));
        }
        Ok(self.records.clone().unwrap_or_default())
    }

    fn save(&mut self, roster: &[Employee]) -> Result<(), StoreError> {
        if self.fail_writes {
            return Err(StoreError::WriteFailed(String::from("quota exceeded")));
        }
        self.records = Some(roster.iter().cloned().map(StoredEmployee::from).collect());
        self.saves += 1;
        Ok(())
    }
}

/// Seed source returning a canned result and counting fetches.
#[derive(Debug, Clone)]
pub struct StubSeed {
    result: Result<Vec<SeedUser>, FetchError>,
    fetches: Arc<AtomicUsize>,
}

impl StubSeed {
    pub fn with_users(users: Vec<SeedUser>) -> Self {
        Self {
            result: Ok(users),
            fetches: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn failing() -> Self {
        Self {
            result: Err(FetchError::Transport(String::from("connection refused"))),
            fetches: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

impl SeedSource for StubSeed {
    async fn fetch_seed(&self) -> Result<Vec<SeedUser>, FetchError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }
}

pub fn create_seed_user(id: Option<i64>, name: &str, company: Option<&str>) -> SeedUser {
    SeedUser {
        id,
        name: Some(String::from(name)),
        email: Some(format!("{}@example.net", name.to_lowercase())),
        company: company.map(|company_name| SeedCompany {
            name: Some(String::from(company_name)),
        }),
    }
}

pub fn create_unkeyed_record(name: &str) -> StoredEmployee {
    StoredEmployee {
        id: None,
        name: String::from(name),
        email: format!("{}@example.com", name.to_lowercase()),
        department: None,
        designation: String::from("Analyst"),
    }
}

pub fn create_test_employee(id: i64, name: &str, department: Option<Department>) -> Employee {
    Employee::new(
        EmployeeId::new(id),
        String::from(name),
        format!("{}@example.com", name.to_lowercase()),
        department,
        String::from("Analyst"),
    )
}

pub fn create_new_employee(name: &str, department: &str) -> NewEmployee {
    let form: EmployeeForm = EmployeeForm {
        name: String::from(name),
        email: format!("{}@example.com", name.to_lowercase()),
        department: String::from(department),
        designation: String::from("Engineer"),
    };
    NewEmployee::from_form(&form).expect("test form is valid")
}

pub const fn frozen_clock() -> i64 {
    1_000
}

pub fn create_controller(
    store: MemoryStore,
    seed: StubSeed,
) -> RosterController<MemoryStore, StubSeed> {
    RosterController::with_id_allocator(store, seed, IdAllocator::with_clock(frozen_clock))
}
