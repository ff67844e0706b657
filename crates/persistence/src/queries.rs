// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::debug;

use crate::data_models::SlotRow;
use crate::diesel_schema::kv_slots;
use crate::error::PersistenceError;

/// Reads one slot. An absent slot is `None`.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn read_slot(
    conn: &mut SqliteConnection,
    slot_key: &str,
) -> Result<Option<SlotRow>, PersistenceError> {
    let row: Option<SlotRow> = kv_slots::table
        .filter(kv_slots::slot_key.eq(slot_key))
        .select(SlotRow::as_select())
        .first::<SlotRow>(conn)
        .optional()?;

    debug!(slot_key, found = row.is_some(), "Read slot");
    Ok(row)
}
