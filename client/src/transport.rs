//! Shared HTTP transport for the dashboard API.
//!
//! # Design
//! One `ureq::Agent` configured once (global timeout from [`ApiConfig`])
//! and shared by every resource module. [`Transport::get`] returns the
//! agent's raw result: success responses come back whole, and non-2xx
//! statuses or network failures come back as [`ureq::Error`] without
//! translation. Nothing is retried or intercepted.

use std::fmt;

use tracing::debug;
use ureq::http::Response;
use ureq::{Agent, Body};

use crate::config::ApiConfig;

/// Shared request-issuing object. Read-only configuration after
/// construction.
#[derive(Clone)]
pub struct Transport {
    agent: Agent,
    base_url: String,
}

impl Transport {
    pub fn new(config: &ApiConfig) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(config.timeout()))
            .build()
            .new_agent();
        Self {
            agent,
            base_url: config.base_url().trim_end_matches('/').to_string(),
        }
    }

    /// Absolute URL for an endpoint path relative to the configured base
    /// URL. Exactly one slash at the seam, whatever the inputs carry.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Issue one GET request for `path` and return the raw outcome.
    pub fn get(&self, path: &str) -> Result<Response<Body>, ureq::Error> {
        let url = self.url_for(path);
        debug!(%url, "GET");
        self.agent.get(&url).call()
    }
}

impl fmt::Debug for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transport")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
