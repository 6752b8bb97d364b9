//! crates/maktab_core/src/ports.rs
//!
//! Defines the service contracts (traits) for the portal core.
//! These traits form the boundary of the hexagonal architecture, allowing the core
//! to be independent of the concrete session-flag storage and of whatever service
//! ends up answering credential checks.

use async_trait::async_trait;

use crate::domain::Realm;

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// A generic error type for all port operations.
/// This abstracts away the specific errors from external services (storage, network).
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

//=========================================================================================
// Service Ports (Traits)
//=========================================================================================

/// Boolean flag persistence, one key per realm. Models the browser's
/// key-value store: presence of the key is the only signal, there is no
/// schema and no versioning.
#[async_trait]
pub trait FlagStore: Send + Sync {
    async fn get(&self, key: &str) -> PortResult<bool>;

    async fn set(&self, key: &str) -> PortResult<()>;

    /// Removing an absent key is not an error; logout relies on this for
    /// idempotence.
    async fn clear(&self, key: &str) -> PortResult<()>;
}

/// Credential verification for one realm's allow-list. The mock adapter
/// answers from a fixed table behind an artificial delay; a real network
/// client can implement this without the session store changing shape.
#[async_trait]
pub trait CredentialService: Send + Sync {
    /// Returns `Ok(true)` when the identifier/secret pair is on the
    /// realm's allow-list, `Ok(false)` when it is not.
    async fn verify(&self, realm: Realm, identifier: &str, secret: &str) -> PortResult<bool>;
}
