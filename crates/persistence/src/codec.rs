// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Conversion between the stored JSON array and roster records.

use roster_domain::{Employee, StoredEmployee};
use serde_json::Value;
use tracing::warn;

use crate::error::PersistenceError;

/// Format version written with every save.
pub const CURRENT_FORMAT_VERSION: i32 = 1;

/// Serializes the roster as a bare JSON array.
///
/// # Errors
///
/// Returns an error if a record cannot be serialized.
pub fn encode_roster(roster: &[Employee]) -> Result<String, PersistenceError> {
    Ok(serde_json::to_string(roster)?)
}

/// Decodes a stored roster, failing closed.
///
/// A value written by a newer format, a value that is not JSON, or a value
/// that is not an array decodes to an empty roster. Elements that are not
/// records (or carry a non-integer id) are dropped; the rest are kept in
/// stored order. A missing or `null` id is kept as `None`.
#[must_use]
pub fn decode_roster(raw: &str, format_version: i32) -> Vec<StoredEmployee> {
    if format_version > CURRENT_FORMAT_VERSION {
        warn!(
            format_version,
            supported = CURRENT_FORMAT_VERSION,
            "Stored roster uses a newer format, ignoring it"
        );
        return Vec::new();
    }

    let value: Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(err) => {
            warn!(error = %err, "Stored roster is not valid JSON, ignoring it");
            return Vec::new();
        }
    };

    let Value::Array(elements) = value else {
        warn!("Stored roster is not an array, ignoring it");
        return Vec::new();
    };

    let total: usize = elements.len();
    let roster: Vec<StoredEmployee> = elements
        .into_iter()
        .enumerate()
        .filter_map(|(index, element)| match serde_json::from_value::<StoredEmployee>(element) {
            Ok(employee) => Some(employee),
            Err(err) => {
                warn!(index, error = %err, "Skipping unreadable stored record");
                None
            }
        })
        .collect();

    if roster.len() < total {
        warn!(
            kept = roster.len(),
            dropped = total - roster.len(),
            "Stored roster contained unreadable records"
        );
    }

    roster
}
