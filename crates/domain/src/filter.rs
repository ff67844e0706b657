// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{Department, Employee};
use serde::{Deserialize, Serialize};

/// Criteria that select the visible subset of the roster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Case-insensitive substring matched against the employee name.
    /// Empty matches every record.
    pub search_text: String,
    /// Exact department match. `None` matches every record.
    pub department: Option<Department>,
}

impl FilterCriteria {
    /// Creates criteria from a search text and an optional department.
    #[must_use]
    pub const fn new(search_text: String, department: Option<Department>) -> Self {
        Self {
            search_text,
            department,
        }
    }

    /// Returns whether these criteria select every record.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.search_text.is_empty() && self.department.is_none()
    }

    /// Returns whether a single record satisfies the criteria.
    #[must_use]
    pub fn matches(&self, employee: &Employee) -> bool {
        Self::matches_with(&self.search_text.to_lowercase(), self.department.as_ref(), employee)
    }

    fn matches_with(needle: &str, department: Option<&Department>, employee: &Employee) -> bool {
        let name_match: bool = employee.name.to_lowercase().contains(needle);
        let department_match: bool =
            department.is_none_or(|wanted| employee.department.as_ref() == Some(wanted));
        name_match && department_match
    }
}

/// Computes the visible subset of `roster` for `criteria`.
///
/// The result preserves roster order. This function is pure and
/// deterministic, so it can be re-run on every keystroke.
#[must_use]
pub fn compute_visible(roster: &[Employee], criteria: &FilterCriteria) -> Vec<Employee> {
    let needle: String = criteria.search_text.to_lowercase();
    roster
        .iter()
        .filter(|employee| {
            FilterCriteria::matches_with(&needle, criteria.department.as_ref(), employee)
        })
        .cloned()
        .collect()
}
