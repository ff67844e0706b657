// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]


use crate::SqliteRecordStore;
use roster_domain::{Department, Employee, EmployeeId, StoredEmployee};

pub fn create_test_store() -> SqliteRecordStore {
    SqliteRecordStore::new_in_memory().expect("Failed to create in-memory store")
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

pub fn as_stored(roster: &[Employee]) -> Vec<StoredEmployee> {
    roster.iter().cloned().map(StoredEmployee::from).collect()
}

/// Writes a raw slot value, bypassing the encoder.
pub fn write_raw_roster(store: &mut SqliteRecordStore, raw: &str, format_version: i32) {
    crate::mutations::write_slot(&mut store.conn, crate::EMPLOYEES_KEY, raw, format_version)
        .expect("Failed to write raw slot");
}
