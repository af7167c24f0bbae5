//! Endpoints under the `geographie` resource: care access and regional
//! vaccination series.

use ureq::http::Response;
use ureq::Body;

use crate::transport::Transport;

const RESOURCE: &str = "geographie";

/// Accessor for the geography endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Geographie<'a> {
    transport: &'a Transport,
}

impl<'a> Geographie<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Pharmacy coverage relative to population, by postal code.
    pub fn accessibilite_pharmacies(&self) -> Result<Response<Body>, ureq::Error> {
        self.transport.get(&format!("{RESOURCE}/accessibilite-pharmacies"))
    }

    /// Vaccination acts by age bracket and region, 2021 to 2024.
    pub fn evolution_actes_age(&self) -> Result<Response<Body>, ureq::Error> {
        self.transport.get(&format!("{RESOURCE}/evolution-actes-age"))
    }

    /// Distributed doses by age bracket and region, 2021 to 2024.
    pub fn evolution_doses_age(&self) -> Result<Response<Body>, ureq::Error> {
        self.transport.get(&format!("{RESOURCE}/evolution-doses-age"))
    }

    /// Vaccination acts per region, 2021 to 2024.
    pub fn evolution_actes_region(&self) -> Result<Response<Body>, ureq::Error> {
        self.transport.get(&format!("{RESOURCE}/evolution-actes-region"))
    }

    /// Distributed doses per region, 2021 to 2024.
    pub fn evolution_doses_region(&self) -> Result<Response<Body>, ureq::Error> {
        self.transport.get(&format!("{RESOURCE}/evolution-doses-region"))
    }

    /// Vaccination venue split by age bracket.
    pub fn repartition_lieu_vaccination(&self) -> Result<Response<Body>, ureq::Error> {
        self.transport.get(&format!("{RESOURCE}/repartition-lieu-vaccination"))
    }
}
