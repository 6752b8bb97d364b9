//! crates/maktab_portal/src/error.rs
//!
//! Defines the primary error type for the portal layer.

use crate::config::ConfigError;
use maktab_core::error::{AuthError, DomainError};
use maktab_core::ports::PortError;

/// The primary error type for the portal layer.
#[derive(Debug, thiserror::Error)]
pub enum PortalError {
    /// Represents an error that occurred during configuration loading.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Represents an error that propagated up from one of the core service ports.
    #[error("Service Port Error: {0}")]
    Port(#[from] PortError),

    /// A credential check came back negative.
    #[error("Authentication error: {0}")]
    Auth(#[from] AuthError),

    /// A mutation on the working copy failed.
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// A mutation or read was attempted with no session established.
    #[error("No authenticated session")]
    NotAuthenticated,
}
