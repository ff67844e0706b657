// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary for the employee roster.
//!
//! Every operation takes the [`RosterController`](roster::RosterController)
//! explicitly, translates request DTOs into domain types, and translates
//! results and errors back into the API contract. Nothing here is global.

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
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use error::{ApiError, translate_core_error};
pub use handlers::{
    all_records, initialize, set_department_filter, set_search_text, submit_new_record,
    visible_records,
};
pub use request_response::{
    EmployeeInfo, InitializeResponse, ListEmployeesResponse, SetDepartmentFilterRequest,
    SetSearchTextRequest, SubmitEmployeeRequest, SubmitEmployeeResponse,
};
