//! In-memory secret store

use std::collections::HashMap;
use std::sync::RwLock;

use super::traits::{SecretStore, SecretStoreResult};

/// In-memory secret store for testing and ephemeral use
///
/// Fully read-write; secrets are lost when the store is dropped.
#[derive(Debug, Default)]
pub struct MemorySecretStore {
    secrets: RwLock<HashMap<String, String>>,
}

impl MemorySecretStore {
    /// Create a new empty memory store
    pub fn new() -> Self {
        Self {
            secrets: RwLock::new(HashMap::new()),
        }
    }

    /// Create a memory store with initial values
    pub fn with_secrets(initial: HashMap<String, String>) -> Self {
        Self {
            secrets: RwLock::new(initial),
        }
    }

    /// Get the number of secrets in the store
    pub fn len(&self) -> usize {
        self.secrets.read().unwrap().len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SecretStore for MemorySecretStore {
    fn name(&self) -> &str {
        "memory"
    }

    fn get(&self, key: &str) -> Option<String> {
        self.secrets.read().unwrap().get(key).cloned()
    }

    fn store(&self, key: &str, value: &str) -> SecretStoreResult<()> {
        self.secrets
            .write()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemorySecretStore::new();
        assert!(store.is_empty());

        store.store("gemini", "test-key").unwrap();
        assert_eq!(store.get("gemini"), Some("test-key".to_string()));
        assert_eq!(store.len(), 1);
        assert!(store.has("gemini"));
        assert!(!store.has("openai"));
    }

    #[test]
    fn test_memory_store_with_secrets() {
        let mut initial = HashMap::new();
        initial.insert("gemini".to_string(), "seeded".to_string());

        let store = MemorySecretStore::with_secrets(initial);
        assert_eq!(store.get("gemini"), Some("seeded".to_string()));
    }
}
