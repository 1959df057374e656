//! Core traits and types for secret storage

use thiserror::Error;

/// Errors that can occur during secret store operations
#[derive(Error, Debug)]
pub enum SecretStoreError {
    #[error("Store is read-only")]
    ReadOnly,

    #[error("Secret not found: {0}")]
    NotFound(String),

    #[error("Store error: {0}")]
    Other(String),
}

pub type SecretStoreResult<T> = Result<T, SecretStoreError>;

/// Trait for secret storage implementations
///
/// Implementations:
/// - Environment variables (`EnvSecretStore`)
/// - In-memory for testing (`MemorySecretStore`)
///
/// # Example
///
/// ```
/// use mcpchat_core::secrets::{SecretStore, EnvSecretStore};
///
/// let store = EnvSecretStore::new();
/// // store.get("gemini") will check GEMINI_API_KEY then GOOGLE_API_KEY
/// ```
pub trait SecretStore: Send + Sync {
    /// Human-readable name of this store
    fn name(&self) -> &str;

    /// Retrieve a secret by key
    ///
    /// The key can be a provider name (e.g., "gemini") mapped to the
    /// appropriate env var, or a direct key (e.g., "GEMINI_API_KEY").
    fn get(&self, key: &str) -> Option<String>;

    /// Store a secret
    ///
    /// Returns `Err(SecretStoreError::ReadOnly)` if the store doesn't support writing.
    fn store(&self, key: &str, value: &str) -> SecretStoreResult<()>;

    /// Check if a secret exists
    fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}
