//! Client access layer for the flu-vaccination dashboard API.
//!
//! # Overview
//! One shared [`Transport`] (base URL + fixed timeout) issues every request;
//! one module per backend resource category exposes a function per GET
//! endpoint. Functions hand back the transport's raw result with no
//! retries and no response transformation.
//!
//! # Design
//! - [`ApiConfig`] makes the deployment target an explicit input instead of
//!   per-environment source copies.
//! - Resource accessors borrow the transport; nothing in the crate holds
//!   mutable state after construction.
//! - Failures (connect errors, timeouts, non-2xx statuses) surface as
//!   [`ureq::Error`] exactly as the transport produced them.

pub mod api;
pub mod config;
pub mod error;
pub mod resources;
pub mod transport;

pub use api::Api;
pub use config::{ApiConfig, Deployment, REQUEST_TIMEOUT};
pub use error::ConfigError;
pub use resources::{Geographie, Logistique, Roles, Saisonnalite};
pub use transport::Transport;
