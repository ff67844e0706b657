// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use diesel::SqliteConnection;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tracing::debug;

use crate::data_models::NewSlot;
use crate::diesel_schema::kv_slots;
use crate::error::PersistenceError;

/// Replaces the value of one slot inside a transaction.
///
/// The write is all-or-nothing: on failure the previous value is kept.
///
/// # Errors
///
/// Returns an error if the timestamp cannot be formatted or the write fails.
pub fn write_slot(
    conn: &mut SqliteConnection,
    slot_key: &str,
    slot_value: &str,
    format_version: i32,
) -> Result<(), PersistenceError> {
    let updated_at: String = OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .map_err(|e| PersistenceError::SerializationError(e.to_string()))?;

    conn.transaction::<(), PersistenceError, _>(|conn| {
        diesel::replace_into(kv_slots::table)
            .values(&NewSlot {
                slot_key,
                slot_value,
                format_version,
                updated_at: Some(updated_at),
            })
            .execute(conn)?;
        Ok(())
    })?;

    debug!(slot_key, bytes = slot_value.len(), "Wrote slot");
    Ok(())
}

/// Deletes one slot. Returns whether a row was removed.
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_slot(conn: &mut SqliteConnection, slot_key: &str) -> Result<bool, PersistenceError> {
    let removed: usize =
        diesel::delete(kv_slots::table.filter(kv_slots::slot_key.eq(slot_key))).execute(conn)?;
    Ok(removed > 0)
}
