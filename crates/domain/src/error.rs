// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur while constructing domain values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The department name is not one of the enumerated departments.
    InvalidDepartment(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDepartment(name) => write!(
                f,
                "Invalid department '{name}': must be one of HR, Engineering, IT, Marketing, Finance"
            ),
        }
    }
}

impl std::error::Error for DomainError {}
