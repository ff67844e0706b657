// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Row types for the `kv_slots` table.

use diesel::prelude::*;

use crate::diesel_schema::kv_slots;

/// The stored value of a slot together with its format version.
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable)]
#[diesel(table_name = kv_slots)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct SlotRow {
    pub slot_value: String,
    pub format_version: i32,
}

/// A full slot row written with `REPLACE INTO`.
#[derive(Debug, Insertable)]
#[diesel(table_name = kv_slots)]
pub struct NewSlot<'a> {
    pub slot_key: &'a str,
    pub slot_value: &'a str,
    pub format_version: i32,
    pub updated_at: Option<String>,
}
