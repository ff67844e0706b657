// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::{FetchError, StoreError};
use roster_domain::{Employee, SeedUser, StoredEmployee};

/// Durable storage of the roster.
///
/// Implementations decode stored data into [`StoredEmployee`] records and
/// treat corrupt data as an empty roster. Records without an id are returned
/// as they are; the controller gives them one.
pub trait RecordStore {
    /// Loads the stored roster. An absent roster is an empty `Vec`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage cannot be read.
    fn load(&mut self) -> Result<Vec<StoredEmployee>, StoreError>;

    /// Replaces the stored roster with `roster`.
    ///
    /// Either the whole roster is written or the previous value is kept.
    ///
    /// # Errors
    ///
    /// Returns an error if the write did not happen.
    fn save(&mut self, roster: &[Employee]) -> Result<(), StoreError>;
}

/// Remote source consulted once to populate an empty store.
pub trait SeedSource {
    /// Fetches the raw seed users. There is no local fallback.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails or the payload cannot be parsed.
    fn fetch_seed(&self) -> impl Future<Output = Result<Vec<SeedUser>, FetchError>> + Send;
}
