// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use roster_domain::SeedUser;
use serde_json::Value;
use tracing::warn;

use crate::error::SeedError;

/// Decodes a seed response body.
///
/// The body must be a JSON array. Elements that do not decode as a user
/// object are skipped.
///
/// # Errors
///
/// Returns [`SeedError::InvalidPayload`] if the body is not JSON or not an
/// array.
pub fn decode_seed_payload(body: &str) -> Result<Vec<SeedUser>, SeedError> {
    let value: Value =
        serde_json::from_str(body).map_err(|e| SeedError::InvalidPayload(e.to_string()))?;

    let Value::Array(elements) = value else {
        return Err(SeedError::InvalidPayload(String::from(
            "expected a JSON array of users",
        )));
    };

    let users: Vec<SeedUser> = elements
        .into_iter()
        .enumerate()
        .filter_map(|(index, element)| match serde_json::from_value::<SeedUser>(element) {
            Ok(user) => Some(user),
            Err(err) => {
                warn!(index, error = %err, "Skipping malformed seed user");
                None
            }
        })
        .collect();

    Ok(users)
}
