// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod filter;
mod seed;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use filter::{FilterCriteria, compute_visible};
pub use seed::{SEED_DESIGNATION, SeedCompany, SeedUser};
pub use types::{Department, Employee, EmployeeId, StoredEmployee};
pub use validation::{
    EmployeeForm, FormField, NewEmployee, ValidationReport, is_valid_email, validate,
};
