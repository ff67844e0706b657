// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Remote seed source.
//!
//! [`HttpSeedSource`] fetches a JSON array of user objects once, when the
//! durable roster is empty. The payload is decoded leniently: elements that
//! are not user objects are skipped, everything else is mapped by the
//! controller.

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
#![allow(clippy::multiple_crate_versions)]

mod client;
mod error;
mod payload;

#[cfg(test)]
mod tests;

pub use client::{DEFAULT_SEED_URL, DEFAULT_TIMEOUT, HttpSeedSource};
pub use error::SeedError;
pub use payload::decode_seed_payload;
