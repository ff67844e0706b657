// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Where the active roster came from during initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterSource {
    /// Loaded from the durable store.
    Cache,
    /// Imported from the seed source.
    Seed,
    /// Neither the store nor the seed source produced a roster.
    Empty,
}

impl RosterSource {
    /// Returns a stable lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cache => "cache",
            Self::Seed => "seed",
            Self::Empty => "empty",
        }
    }
}

impl std::fmt::Display for RosterSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A non-fatal condition raised during initialization.
///
/// Notices never abort initialization. The boundary layer logs them and may
/// show them to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// The store could not be read; the roster starts empty and the stored
    /// value is left untouched.
    CacheUnavailable {
        /// Why the read failed.
        reason: String,
    },
    /// The seed fetch failed; the roster starts empty.
    SeedFetchFailed {
        /// Why the fetch failed.
        reason: String,
    },
    /// The imported roster is active but could not be written to the store.
    SeedNotPersisted {
        /// Why the write failed.
        reason: String,
    },
    /// Stored records with a missing or duplicate id were given fresh ids.
    RecordsRekeyed {
        /// How many records received a new id.
        count: usize,
    },
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CacheUnavailable { reason } => {
                write!(f, "Stored employees could not be read: {reason}")
            }
            Self::SeedFetchFailed { reason } => {
                write!(f, "Error fetching employees: {reason}")
            }
            Self::SeedNotPersisted { reason } => {
                write!(f, "Imported employees were not saved: {reason}")
            }
            Self::RecordsRekeyed { count } => {
                write!(f, "{count} employee record(s) had missing or duplicate ids and were re-keyed")
            }
        }
    }
}

/// Summary of an `initialize()` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitReport {
    /// Where the roster came from.
    pub source: RosterSource,
    /// Number of records in the active roster.
    pub record_count: usize,
    /// Non-fatal conditions encountered along the way.
    pub notices: Vec<Notice>,
}
