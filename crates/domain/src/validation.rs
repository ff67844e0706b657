// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{Department, Employee, EmployeeId};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Basic address shape: `<non-space>@<non-space>.<non-space>`, unanchored.
#[allow(clippy::expect_used)]
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is a valid literal"));

/// A field of the new-employee form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormField {
    /// The employee name.
    Name,
    /// The email address.
    Email,
    /// The department selection.
    Department,
    /// The job title.
    Designation,
}

impl FormField {
    /// Returns the wire name of the field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Department => "department",
            Self::Designation => "designation",
        }
    }
}

impl std::fmt::Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Raw, unvalidated input of the new-employee form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeForm {
    /// The employee name.
    #[serde(default)]
    pub name: String,
    /// The email address.
    #[serde(default)]
    pub email: String,
    /// The selected department name; empty when nothing was chosen.
    #[serde(default)]
    pub department: String,
    /// The job title.
    #[serde(default)]
    pub designation: String,
}

/// Outcome of validating an [`EmployeeForm`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    field_errors: BTreeMap<FormField, String>,
}

impl ValidationReport {
    /// Returns whether no field produced an error.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.field_errors.is_empty()
    }

    /// Returns the error message for a field, if any.
    #[must_use]
    pub fn error(&self, field: FormField) -> Option<&str> {
        self.field_errors.get(&field).map(String::as_str)
    }

    /// Returns all field errors, ordered by field.
    #[must_use]
    pub const fn field_errors(&self) -> &BTreeMap<FormField, String> {
        &self.field_errors
    }

    /// Consumes the report and returns the field errors.
    #[must_use]
    pub fn into_field_errors(self) -> BTreeMap<FormField, String> {
        self.field_errors
    }

    fn reject(&mut self, field: FormField, message: &str) {
        self.field_errors.insert(field, message.to_string());
    }
}

/// Returns whether `email` has the basic `<x>@<y>.<z>` shape.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Validates a new-employee form.
///
/// Every rule is evaluated and all errors are reported together. This
/// function is pure and has no side effects.
///
/// Department and designation are only required when the email is empty.
/// A supplied department must always be one of the enumerated departments.
#[must_use]
pub fn validate(form: &EmployeeForm) -> ValidationReport {
    let mut report: ValidationReport = ValidationReport::default();

    if form.name.trim().is_empty() {
        report.reject(FormField::Name, "Name is required");
    }

    if form.email.is_empty() {
        report.reject(FormField::Email, "Email is required");
        if form.department.trim().is_empty() {
            report.reject(FormField::Department, "Department is required");
        }
        if form.designation.trim().is_empty() {
            report.reject(FormField::Designation, "Designation is required");
        }
    } else if !is_valid_email(&form.email) {
        report.reject(FormField::Email, "Email is invalid");
    }

    let department: &str = form.department.trim();
    if !department.is_empty() && department.parse::<Department>().is_err() {
        report.reject(FormField::Department, "Department is invalid");
    }

    report
}

/// A candidate record that has passed validation.
///
/// The only way to obtain one is [`NewEmployee::from_form`], so holding a
/// `NewEmployee` proves the form was valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
    name: String,
    email: String,
    department: Option<Department>,
    designation: String,
}

impl NewEmployee {
    /// Validates `form` and builds a candidate record from it.
    ///
    /// Text fields are trimmed.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationReport`] when any field is invalid.
    pub fn from_form(form: &EmployeeForm) -> Result<Self, ValidationReport> {
        let report: ValidationReport = validate(form);
        if !report.is_valid() {
            return Err(report);
        }

        Ok(Self {
            name: form.name.trim().to_string(),
            email: form.email.trim().to_string(),
            department: form.department.trim().parse::<Department>().ok(),
            designation: form.designation.trim().to_string(),
        })
    }

    /// Returns the validated name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the validated email.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the department, if one was chosen.
    #[must_use]
    pub const fn department(&self) -> Option<&Department> {
        self.department.as_ref()
    }

    /// Returns the designation.
    #[must_use]
    pub fn designation(&self) -> &str {
        &self.designation
    }

    /// Turns the candidate into a roster record with the given id.
    #[must_use]
    pub fn into_employee(self, id: EmployeeId) -> Employee {
        Employee::new(id, self.name, self.email, self.department, self.designation)
    }
}
