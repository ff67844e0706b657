// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use roster_domain::EmployeeId;
use time::OffsetDateTime;
use tracing::debug;

/// Allocates record ids from a millisecond clock.
///
/// Consecutive ids are strictly increasing even when the clock does not
/// advance, and a candidate that is already taken is skipped. Collisions are
/// therefore resolved here and never reach the caller.
#[derive(Debug, Clone)]
pub struct IdAllocator {
    clock: fn() -> i64,
    last: Option<i64>,
}

impl IdAllocator {
    /// Creates an allocator reading the system clock.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_clock(unix_millis)
    }

    /// Creates an allocator reading `clock`, in milliseconds.
    #[must_use]
    pub const fn with_clock(clock: fn() -> i64) -> Self {
        Self { clock, last: None }
    }

    /// Returns a fresh id for which `is_taken` is false.
    pub fn allocate(&mut self, is_taken: impl Fn(EmployeeId) -> bool) -> EmployeeId {
        let now: i64 = (self.clock)();
        let mut candidate: i64 = self
            .last
            .map_or(now, |last| now.max(last.saturating_add(1)));

        while is_taken(EmployeeId::new(candidate)) {
            debug!(candidate, "Id already in use, retrying");
            candidate = candidate.saturating_add(1);
        }

        self.last = Some(candidate);
        EmployeeId::new(candidate)
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

fn unix_millis() -> i64 {
    let millis: i128 = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
    i64::try_from(millis).unwrap_or(i64::MAX)
}
