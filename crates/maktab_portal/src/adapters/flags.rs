//! crates/maktab_portal/src/adapters/flags.rs
//!
//! In-memory implementation of the `FlagStore` port. Presence of a key is
//! the only state there is; there is no value schema and no versioning,
//! matching the browser storage it models.

use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;
use maktab_core::ports::{FlagStore, PortError, PortResult};
use tracing::debug;

/// A flag store backed by a mutex-guarded set of keys.
#[derive(Debug, Default)]
pub struct MemoryFlagStore {
    keys: Mutex<HashSet<String>>,
}

impl MemoryFlagStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn keys(&self) -> PortResult<std::sync::MutexGuard<'_, HashSet<String>>> {
        self.keys
            .lock()
            .map_err(|_| PortError::Unexpected("flag store mutex poisoned".to_string()))
    }
}

#[async_trait]
impl FlagStore for MemoryFlagStore {
    async fn get(&self, key: &str) -> PortResult<bool> {
        Ok(self.keys()?.contains(key))
    }

    async fn set(&self, key: &str) -> PortResult<()> {
        debug!(key, "setting session flag");
        self.keys()?.insert(key.to_string());
        Ok(())
    }

    async fn clear(&self, key: &str) -> PortResult<()> {
        debug!(key, "clearing session flag");
        self.keys()?.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn set_get_clear_round_trip() {
        let store = MemoryFlagStore::new();
        assert!(!store.get("maktab_admin_auth").await.unwrap());
        store.set("maktab_admin_auth").await.unwrap();
        assert!(store.get("maktab_admin_auth").await.unwrap());
        store.clear("maktab_admin_auth").await.unwrap();
        assert!(!store.get("maktab_admin_auth").await.unwrap());
    }

    #[tokio::test]
    async fn clearing_an_absent_key_is_not_an_error() {
        let store = MemoryFlagStore::new();
        store.clear("never_set").await.unwrap();
        store.clear("never_set").await.unwrap();
    }
}
