//! Provides the remote, read-only source the store is seeded from

use derive_builder::Builder;
#[cfg(test)]
use mockall::automock;
use std::time::Duration;

use crate::{error::Result, user::User};

/// Public demo endpoint returning a JSON array of users
pub const DEFAULT_USERS_URL: &str = "https://jsonplaceholder.typicode.com/users";

/// Anything able to produce the initial list of users
#[cfg_attr(test, automock)]
pub trait UserSource: Send + Sync {
    /// Fetches every user the source knows about, in the order it reports
    /// them
    fn fetch_users(&self) -> Result<Vec<User>>;
}

/// Data structure representing an HTTP seed source. Performs a single GET
/// with no query parameters and no authentication.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct HttpUserSource {
    /// Endpoint returning a JSON array of users
    #[builder(default = "DEFAULT_USERS_URL.to_string()")]
    url: String,
    /// Overall request timeout, none means wait indefinitely
    #[builder(default)]
    timeout: Option<Duration>,
}

impl HttpUserSource {
    /// Returns builder for HttpUserSource
    pub fn builder() -> HttpUserSourceBuilder {
        HttpUserSourceBuilder::default()
    }

    /// Returns the configured endpoint
    pub fn url(&self) -> &str {
        &self.url
    }

    fn agent(&self) -> ureq::Agent {
        ureq::Agent::config_builder()
            .timeout_global(self.timeout)
            .build()
            .into()
    }
}

impl Default for HttpUserSource {
    fn default() -> Self {
        Self {
            url: DEFAULT_USERS_URL.to_string(),
            timeout: None,
        }
    }
}

impl UserSource for HttpUserSource {
    fn fetch_users(&self) -> Result<Vec<User>> {
        log::debug!("fetching users from {}", self.url);

        let mut response = self.agent().get(&self.url).call()?;
        let users: Vec<User> = response.body_mut().read_json()?;

        log::debug!("fetched {} users", users.len());

        Ok(users)
    }
}

#[cfg(test)]
#[path = "./source_tests.rs"]
mod tests;
