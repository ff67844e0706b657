// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod filter;

use crate::{Department, Employee, EmployeeId};

pub fn create_test_employee(id: i64, name: &str, department: Option<Department>) -> Employee {
    Employee::new(
        EmployeeId::new(id),
        String::from(name),
        format!("{}@example.com", name.to_lowercase()),
        department,
        String::from("Analyst"),
    )
}
