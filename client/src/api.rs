//! Entry point tying the resource modules to one shared transport.

use ureq::http::Response;
use ureq::Body;

use crate::config::ApiConfig;
use crate::error::ConfigError;
use crate::resources::{Geographie, Logistique, Roles, Saisonnalite};
use crate::transport::Transport;

/// Dashboard API client: one transport, one accessor per backend resource
/// category.
#[derive(Debug, Clone)]
pub struct Api {
    transport: Transport,
}

impl Api {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            transport: Transport::new(config),
        }
    }

    /// Client for the deployment target named in the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::new(&ApiConfig::from_env()?))
    }

    pub fn roles(&self) -> Roles<'_> {
        Roles::new(&self.transport)
    }

    pub fn geographie(&self) -> Geographie<'_> {
        Geographie::new(&self.transport)
    }

    pub fn saisonnalite(&self) -> Saisonnalite<'_> {
        Saisonnalite::new(&self.transport)
    }

    pub fn logistique(&self) -> Logistique<'_> {
        Logistique::new(&self.transport)
    }

    /// Backend liveness probe.
    pub fn health(&self) -> Result<Response<Body>, ureq::Error> {
        self.transport.get("health")
    }
}
