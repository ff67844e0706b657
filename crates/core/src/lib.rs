// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The roster state machine.
//!
//! [`RosterController`] owns the in-memory roster for one session. It
//! hydrates from a [`RecordStore`] (with a one-time import from a
//! [`SeedSource`] when the store is empty), accepts validated additions, and keeps the filtered view
//! in step with the roster and the active [`FilterCriteria`].
//!
//! [`FilterCriteria`]: roster_domain::FilterCriteria

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

mod controller;
mod error;
mod ids;
mod ports;
mod state;

#[cfg(test)]
mod tests;

pub use controller::RosterController;
pub use error::{CoreError, FetchError, StoreError};
pub use ids::IdAllocator;
pub use ports::{RecordStore, SeedSource};
pub use state::{InitReport, Notice, RosterSource};
