//! Endpoints under the `logistique` resource: vaccine distribution and
//! pharmacy activity.

use ureq::http::Response;
use ureq::Body;

use crate::transport::Transport;

const RESOURCE: &str = "logistique";

/// Accessor for the logistics endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Logistique<'a> {
    transport: &'a Transport,
}

impl<'a> Logistique<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Vaccination acts vs distributed doses, per region.
    pub fn actes_doses_region(&self) -> Result<Response<Body>, ureq::Error> {
        self.transport.get(&format!("{RESOURCE}/actes-doses-region"))
    }

    /// Active pharmacy counts over a campaign period.
    pub fn nombre_pharmacies_periode(&self) -> Result<Response<Body>, ureq::Error> {
        self.transport.get(&format!("{RESOURCE}/nombre-pharmacies-periode"))
    }
}
