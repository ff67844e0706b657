// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

/// Identifier of an employee record.
///
/// Ids are assigned when a record enters the roster and are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(i64);

impl EmployeeId {
    /// Wraps a raw identifier value.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw identifier value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The department an employee belongs to.
///
/// New records are restricted to the five enumerated departments. Records
/// imported from the seed source carry the remote company name instead,
/// which is kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Department {
    /// Human resources.
    Hr,
    /// Engineering.
    Engineering,
    /// Information technology.
    It,
    /// Marketing.
    Marketing,
    /// Finance.
    Finance,
    /// Any department name outside the enumerated set.
    Other(String),
}

impl Department {
    /// The enumerated departments, in display order.
    pub const KNOWN: [Self; 5] = [
        Self::Hr,
        Self::Engineering,
        Self::It,
        Self::Marketing,
        Self::Finance,
    ];

    /// Returns the display name of the department.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Hr => "HR",
            Self::Engineering => "Engineering",
            Self::It => "IT",
            Self::Marketing => "Marketing",
            Self::Finance => "Finance",
            Self::Other(name) => name,
        }
    }

    /// Returns whether this is one of the enumerated departments.
    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl FromStr for Department {
    type Err = DomainError;

    /// Parses one of the enumerated department names (exact match).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "HR" => Ok(Self::Hr),
            "Engineering" => Ok(Self::Engineering),
            "IT" => Ok(Self::It),
            "Marketing" => Ok(Self::Marketing),
            "Finance" => Ok(Self::Finance),
            _ => Err(DomainError::InvalidDepartment(s.to_string())),
        }
    }
}

impl From<String> for Department {
    fn from(value: String) -> Self {
        value.parse().unwrap_or(Self::Other(value))
    }
}

impl From<Department> for String {
    fn from(value: Department) -> Self {
        match value {
            Department::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for Department {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single employee record in the roster.
///
/// Only `id` is mandatory when decoding; the remaining fields tolerate
/// absence so that older or partially written data still loads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier within the roster.
    pub id: EmployeeId,
    /// Full name.
    #[serde(default)]
    pub name: String,
    /// Email address.
    #[serde(default)]
    pub email: String,
    /// Department, if any.
    #[serde(default, deserialize_with = "deserialize_department")]
    pub department: Option<Department>,
    /// Job title.
    #[serde(default)]
    pub designation: String,
}

impl Employee {
    /// Creates a new `Employee`.
    #[must_use]
    pub const fn new(
        id: EmployeeId,
        name: String,
        email: String,
        department: Option<Department>,
        designation: String,
    ) -> Self {
        Self {
            id,
            name,
            email,
            department,
            designation,
        }
    }
}

/// A record as read back from storage, before its id has been checked.
///
/// Stored data may predate id assignment or carry an explicit `null` id.
/// Such records keep their fields and receive an id when they rejoin the
/// roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredEmployee {
    /// Stored identifier, if any.
    #[serde(default)]
    pub id: Option<EmployeeId>,
    /// Full name.
    #[serde(default)]
    pub name: String,
    /// Email address.
    #[serde(default)]
    pub email: String,
    /// Department, if any.
    #[serde(default, deserialize_with = "deserialize_department")]
    pub department: Option<Department>,
    /// Job title.
    #[serde(default)]
    pub designation: String,
}

impl StoredEmployee {
    /// Turns the stored record into a roster record carrying `id`.
    #[must_use]
    pub fn into_employee(self, id: EmployeeId) -> Employee {
        Employee::new(id, self.name, self.email, self.department, self.designation)
    }
}

impl From<Employee> for StoredEmployee {
    fn from(employee: Employee) -> Self {
        Self {
            id: Some(employee.id),
            name: employee.name,
            email: employee.email,
            department: employee.department,
            designation: employee.designation,
        }
    }
}

/// Decodes a department, treating `null` and the empty string as unset.
fn deserialize_department<'de, D>(deserializer: D) -> Result<Option<Department>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw
        .filter(|name| !name.is_empty())
        .map(Department::from))
}
