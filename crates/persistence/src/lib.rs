// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Durable roster storage.
//!
//! The roster is kept as a single JSON array in the `employees` slot of a
//! small key/value table, next to the format version it was written with.
//! Reads fail closed: anything that does not decode is treated as an empty
//! roster so the controller imports its seed source. Records without an id
//! are returned as they are and given one by the controller.
//!
//! ## Database
//!
//! `SQLite` via Diesel. The schema is embedded and migrated on open.
//!
//! - In-memory databases use a uniquely named shared-cache URI per store,
//!   so tests are isolated from each other.
//! - File databases run in WAL mode.

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

use diesel::SqliteConnection;
use roster::{RecordStore, StoreError};
use roster_domain::{Employee, StoredEmployee};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, info};

mod backend;
mod codec;
mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;

#[cfg(test)]
mod tests;

pub use codec::{CURRENT_FORMAT_VERSION, decode_roster, encode_roster};
pub use error::PersistenceError;

/// Key of the slot holding the roster.
pub const EMPLOYEES_KEY: &str = "employees";

/// Atomic counter for generating unique in-memory database names.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// `SQLite`-backed [`RecordStore`].
pub struct SqliteRecordStore {
    pub(crate) conn: SqliteConnection,
}

impl SqliteRecordStore {
    /// Creates a store over a fresh, uniquely named in-memory database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let shared_memory_url: String = format!("file:memdb_{db_id}?mode=memory&cache=shared");

        let conn: SqliteConnection = backend::sqlite::initialize_database(&shared_memory_url)?;

        Ok(Self { conn })
    }

    /// Creates a store over a file-based database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str: &str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(path_str)?;
        backend::sqlite::enable_wal_mode(&mut conn)?;

        Ok(Self { conn })
    }

    /// Loads the stored roster. An absent or unreadable value is empty.
    ///
    /// # Errors
    ///
    /// Returns an error only if the database itself cannot be queried.
    pub fn load_roster(&mut self) -> Result<Vec<StoredEmployee>, PersistenceError> {
        let Some(row) = queries::read_slot(&mut self.conn, EMPLOYEES_KEY)? else {
            debug!("No stored roster");
            return Ok(Vec::new());
        };

        let roster: Vec<StoredEmployee> = decode_roster(&row.slot_value, row.format_version);
        debug!(record_count = roster.len(), "Loaded stored roster");
        Ok(roster)
    }

    /// Replaces the stored roster.
    ///
    /// # Errors
    ///
    /// Returns an error if the roster cannot be serialized or written. The
    /// previously stored value is kept in that case.
    pub fn save_roster(&mut self, roster: &[Employee]) -> Result<(), PersistenceError> {
        let raw: String = encode_roster(roster)?;
        mutations::write_slot(&mut self.conn, EMPLOYEES_KEY, &raw, CURRENT_FORMAT_VERSION)?;
        debug!(record_count = roster.len(), "Saved roster");
        Ok(())
    }

    /// Removes the stored roster so the next session imports the seed again.
    ///
    /// Returns whether a stored roster existed.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn clear(&mut self) -> Result<bool, PersistenceError> {
        let removed: bool = mutations::delete_slot(&mut self.conn, EMPLOYEES_KEY)?;
        info!(removed, "Cleared stored roster");
        Ok(removed)
    }
}

impl RecordStore for SqliteRecordStore {
    fn load(&mut self) -> Result<Vec<StoredEmployee>, StoreError> {
        self.load_roster().map_err(PersistenceError::into_read_failure)
    }

    fn save(&mut self, roster: &[Employee]) -> Result<(), StoreError> {
        self.save_roster(roster)
            .map_err(PersistenceError::into_write_failure)
    }
}
