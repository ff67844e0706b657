// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use reqwest::StatusCode;
use roster::{FetchError, SeedSource};
use roster_domain::SeedUser;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::error::SeedError;
use crate::payload::decode_seed_payload;

/// Public sample user directory used when no seed URL is configured.
pub const DEFAULT_SEED_URL: &str = "https://jsonplaceholder.typicode.com/users";

/// Request timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const USER_AGENT: &str = concat!("roster/", env!("CARGO_PKG_VERSION"));

/// [`SeedSource`] backed by a single HTTP GET.
#[derive(Debug, Clone)]
pub struct HttpSeedSource {
    client: reqwest::Client,
    url: String,
}

impl HttpSeedSource {
    /// Creates a seed source for `url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, SeedError> {
        let client: reqwest::Client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| SeedError::ClientBuild(e.to_string()))?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    /// Returns the URL this source fetches.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetches and decodes the seed users.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the status is not a success,
    /// or the body is not a JSON array.
    pub async fn fetch_users(&self) -> Result<Vec<SeedUser>, SeedError> {
        info!(url = %self.url, "Fetching seed roster");

        let response: reqwest::Response = self.client.get(&self.url).send().await?;
        let status: StatusCode = response.status();
        if !status.is_success() {
            warn!(url = %self.url, status = status.as_u16(), "Seed source rejected request");
            return Err(SeedError::Status(status.as_u16()));
        }

        let body: String = response.text().await?;
        let users: Vec<SeedUser> = decode_seed_payload(&body)?;
        debug!(user_count = users.len(), "Decoded seed payload");

        Ok(users)
    }
}

impl SeedSource for HttpSeedSource {
    async fn fetch_seed(&self) -> Result<Vec<SeedUser>, FetchError> {
        self.fetch_users().await.map_err(FetchError::from)
    }
}
