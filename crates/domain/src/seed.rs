// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{Department, Employee, EmployeeId};
use serde::{Deserialize, Serialize};

/// Designation given to every imported record.
pub const SEED_DESIGNATION: &str = "Software Engineer";

/// A user object as returned by the remote seed source.
///
/// Only the fields the import needs are modelled; everything else in the
/// remote payload is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedUser {
    /// Remote identifier, reused as the record id when it is free.
    #[serde(default)]
    pub id: Option<i64>,
    /// Full name.
    #[serde(default)]
    pub name: Option<String>,
    /// Email address.
    #[serde(default)]
    pub email: Option<String>,
    /// Employer details.
    #[serde(default)]
    pub company: Option<SeedCompany>,
}

/// Nested company object of a [`SeedUser`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedCompany {
    /// Company name.
    #[serde(default)]
    pub name: Option<String>,
}

impl SeedUser {
    /// Returns the department this user maps to.
    ///
    /// The company name is used when present and non-empty, otherwise the
    /// user lands in Engineering.
    #[must_use]
    pub fn department(&self) -> Department {
        self.company
            .as_ref()
            .and_then(|company| company.name.as_deref())
            .filter(|name| !name.is_empty())
            .map_or(Department::Engineering, |name| {
                Department::from(name.to_string())
            })
    }

    /// Maps the remote user onto a roster record carrying `id`.
    #[must_use]
    pub fn into_employee(self, id: EmployeeId) -> Employee {
        let department: Department = self.department();
        Employee::new(
            id,
            self.name.unwrap_or_default(),
            self.email.unwrap_or_default(),
            Some(department),
            SEED_DESIGNATION.to_string(),
        )
    }
}
