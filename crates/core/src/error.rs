// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Failure reported by a [`RecordStore`](crate::RecordStore).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The durable roster could not be read.
    ReadFailed(String),
    /// The durable roster could not be written. The previous value is retained.
    WriteFailed(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ReadFailed(msg) => write!(f, "Failed to read stored roster: {msg}"),
            Self::WriteFailed(msg) => write!(f, "Failed to write roster: {msg}"),
        }
    }
}

impl std::error::Error for StoreError {}

/// Failure reported by a [`SeedSource`](crate::SeedSource).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The request could not be sent or the connection failed.
    Transport(String),
    /// The remote answered with a non-success status.
    Status(u16),
    /// The response body was not a list of users.
    InvalidPayload(String),
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport(msg) => write!(f, "Seed request failed: {msg}"),
            Self::Status(code) => write!(f, "Seed source returned status {code}"),
            Self::InvalidPayload(msg) => write!(f, "Seed payload could not be parsed: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

/// Errors returned by roster operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// An add was attempted before `initialize()` resolved.
    NotInitialized,
    /// The store could not be read or written; the in-memory roster is unchanged.
    Persistence(StoreError),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotInitialized => write!(f, "Roster has not been initialized"),
            Self::Persistence(err) => write!(f, "Persistence error: {err}"),
        }
    }
}

impl std::error::Error for CoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotInitialized => None,
            Self::Persistence(err) => Some(err),
        }
    }
}

impl From<StoreError> for CoreError {
    fn from(err: StoreError) -> Self {
        Self::Persistence(err)
    }
}
