//! Deployment targets and transport configuration.
//!
//! # Design
//! The deployments differ only in where the backend lives: a
//! container-networked host for the composed stack, localhost for local
//! development. Both share the `/api/` prefix and the same request timeout,
//! so the target is a two-variant enum and everything else derives from it.

use std::str::FromStr;
use std::time::Duration;

use crate::error::ConfigError;

/// Timeout applied to every request issued through the shared transport.
pub const REQUEST_TIMEOUT: Duration = Duration::from_millis(10_000);

/// Environment variable consulted by [`ApiConfig::from_env`].
pub const DEPLOYMENT_VAR: &str = "DASHBOARD_DEPLOYMENT";

const CONTAINER_BASE_URL: &str = "http://backend:5000/api/";
const LOCAL_BASE_URL: &str = "http://localhost:8000/api/";

/// Where the backend is reachable from the running frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deployment {
    /// Backend reachable by container network name, port 5000.
    Container,
    /// Backend on the developer's machine, port 8000.
    Local,
}

impl Deployment {
    /// Base URL for this target, `/api/` prefix included.
    pub fn base_url(self) -> &'static str {
        match self {
            Deployment::Container => CONTAINER_BASE_URL,
            Deployment::Local => LOCAL_BASE_URL,
        }
    }
}

impl FromStr for Deployment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "container" => Ok(Deployment::Container),
            "local" => Ok(Deployment::Local),
            other => Err(ConfigError::UnknownDeployment(other.to_string())),
        }
    }
}

/// Transport configuration: base URL plus request timeout. Fixed for the
/// lifetime of the client built from it.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: String,
    timeout: Duration,
}

impl ApiConfig {
    /// Configuration for a known deployment target.
    pub fn for_deployment(deployment: Deployment) -> Self {
        Self::with_base_url(deployment.base_url())
    }

    /// Configuration for an arbitrary base URL (tests, staging hosts).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: REQUEST_TIMEOUT,
        }
    }

    /// Read the deployment target from [`DEPLOYMENT_VAR`].
    ///
    /// An unset variable means [`Deployment::Local`]; an unrecognized value
    /// is a [`ConfigError`].
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var(DEPLOYMENT_VAR) {
            Ok(raw) => Ok(Self::for_deployment(raw.parse()?)),
            Err(_) => Ok(Self::for_deployment(Deployment::Local)),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn container_points_at_the_container_host() {
        let config = ApiConfig::for_deployment(Deployment::Container);
        assert_eq!(config.base_url(), "http://backend:5000/api/");
    }

    #[test]
    fn local_points_at_the_local_host() {
        let config = ApiConfig::for_deployment(Deployment::Local);
        assert_eq!(config.base_url(), "http://localhost:8000/api/");
    }

    #[test]
    fn timeout_is_ten_seconds_for_every_target() {
        for deployment in [Deployment::Container, Deployment::Local] {
            let config = ApiConfig::for_deployment(deployment);
            assert_eq!(config.timeout(), Duration::from_millis(10_000));
        }
    }

    #[test]
    fn deployment_parses_from_its_name() {
        assert_eq!("container".parse::<Deployment>().unwrap(), Deployment::Container);
        assert_eq!("local".parse::<Deployment>().unwrap(), Deployment::Local);
    }

    #[test]
    fn unknown_deployment_is_rejected() {
        let err = "staging".parse::<Deployment>().unwrap_err();
        assert!(err.to_string().contains("staging"));
    }

    #[test]
    fn custom_base_url_keeps_the_default_timeout() {
        let config = ApiConfig::with_base_url("http://127.0.0.1:9999/api/");
        assert_eq!(config.base_url(), "http://127.0.0.1:9999/api/");
        assert_eq!(config.timeout(), REQUEST_TIMEOUT);
    }
}
