// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use roster::CoreError;

/// API-level errors.
///
/// These are distinct from core errors and represent the API contract.
/// Form validation failures are not errors; they are reported in a
/// successful [`SubmitEmployeeResponse`](crate::SubmitEmployeeResponse).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The roster has not finished initializing.
    NotReady {
        /// A human-readable description of the error.
        message: String,
    },
    /// The roster could not be written to durable storage.
    PersistenceFailed {
        /// A human-readable description of the error.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotReady { message } => write!(f, "Not ready: {message}"),
            Self::PersistenceFailed { message } => write!(f, "Persistence failed: {message}"),
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::NotInitialized => ApiError::NotReady {
            message: String::from("The roster is still loading"),
        },
        CoreError::Persistence(store_err) => ApiError::PersistenceFailed {
            message: format!("Failed to add employee: {store_err}"),
        },
    }
}
