//! crates/maktab_portal/src/adapters/directory.rs
//!
//! Mock implementation of the `CredentialService` port: a fixed allow-list
//! behind an artificial delay. The delay models the network round-trip a
//! real identity service would cost, so callers already treat `verify` as
//! suspending.

use std::time::Duration;

use async_trait::async_trait;
use maktab_core::domain::Realm;
use maktab_core::fixture;
use maktab_core::ports::{CredentialService, PortResult};
use tracing::debug;

pub struct FixtureDirectory {
    entries: Vec<(Realm, String, String)>,
    delay: Duration,
}

impl FixtureDirectory {
    /// A directory answering from the fixture allow-list.
    pub fn new(delay: Duration) -> Self {
        let entries = fixture::allow_list()
            .iter()
            .map(|(realm, identifier, secret)| {
                (*realm, identifier.to_string(), secret.to_string())
            })
            .collect();
        Self { entries, delay }
    }

}

#[async_trait]
impl CredentialService for FixtureDirectory {
    async fn verify(&self, realm: Realm, identifier: &str, secret: &str) -> PortResult<bool> {
        tokio::time::sleep(self.delay).await;
        let matched = self
            .entries
            .iter()
            .any(|(r, id, s)| *r == realm && id == identifier && s == secret);
        debug!(realm = realm.as_str(), identifier, matched, "credential check");
        Ok(matched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn accepts_only_exact_realm_and_pair() {
        let directory = FixtureDirectory::new(Duration::ZERO);
        assert!(directory
            .verify(Realm::Admin, "admin@example.com", "admin123")
            .await
            .unwrap());
        assert!(!directory
            .verify(Realm::Instructor, "admin@example.com", "admin123")
            .await
            .unwrap());
        assert!(!directory
            .verify(Realm::Admin, "admin@example.com", "wrong")
            .await
            .unwrap());
    }
}
