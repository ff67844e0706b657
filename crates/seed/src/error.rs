// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use roster::FetchError;
use thiserror::Error;

/// Seed fetch errors.
#[derive(Debug, Error)]
pub enum SeedError {
    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),

    /// The request failed before a response arrived (connect, timeout, body read).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The remote answered with a non-success status.
    #[error("Seed source returned status {0}")]
    Status(u16),

    /// The body was not a JSON array.
    #[error("Invalid seed payload: {0}")]
    InvalidPayload(String),
}

impl From<SeedError> for FetchError {
    fn from(err: SeedError) -> Self {
        match err {
            SeedError::ClientBuild(_) | SeedError::Network(_) => Self::Transport(err.to_string()),
            SeedError::Status(code) => Self::Status(code),
            SeedError::InvalidPayload(msg) => Self::InvalidPayload(msg),
        }
    }
}
