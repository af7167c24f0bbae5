//! Endpoints under the `roles` resource.

use ureq::http::Response;
use ureq::Body;

use crate::transport::Transport;

const RESOURCE: &str = "roles";

/// Accessor for dashboard user roles.
#[derive(Debug, Clone, Copy)]
pub struct Roles<'a> {
    transport: &'a Transport,
}

impl<'a> Roles<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Every role known to the backend.
    pub fn list(&self) -> Result<Response<Body>, ureq::Error> {
        self.transport.get(RESOURCE)
    }
}
