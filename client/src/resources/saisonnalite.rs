//! Endpoints under the `saisonnalite` resource: weather series used to
//! study the seasonality of the flu.

use ureq::http::Response;
use ureq::Body;

use crate::transport::Transport;

const RESOURCE: &str = "saisonnalite";

/// Accessor for the seasonality endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Saisonnalite<'a> {
    transport: &'a Transport,
}

impl<'a> Saisonnalite<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Weather station series (temperatures, flu incidence).
    pub fn donnees_meteo(&self) -> Result<Response<Body>, ureq::Error> {
        self.transport.get(&format!("{RESOURCE}/donnees-meteo"))
    }

    /// Weather vs flu-case correlation.
    pub fn correlation_meteo_grippe(&self) -> Result<Response<Body>, ureq::Error> {
        self.transport.get(&format!("{RESOURCE}/correlation-meteo-grippe"))
    }
}
