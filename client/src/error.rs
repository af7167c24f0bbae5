//! Error types for the client configuration layer.
//!
//! # Design
//! Transport failures are deliberately not represented here: requests
//! return [`ureq::Error`] untouched, so callers see exactly what the HTTP
//! stack reported. The only error this crate adds is configuration
//! resolution.

use std::fmt;

/// Errors produced while resolving client configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// The deployment target name is not one of the known targets.
    UnknownDeployment(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnknownDeployment(name) => {
                write!(f, "unknown deployment target {name:?} (expected \"container\" or \"local\")")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_deployment_names_the_offending_value() {
        let err = ConfigError::UnknownDeployment("prod".to_string());
        assert_eq!(
            err.to_string(),
            "unknown deployment target \"prod\" (expected \"container\" or \"local\")"
        );
    }
}
