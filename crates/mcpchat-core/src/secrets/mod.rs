//! Secret storage abstractions and implementations
//!
//! - `SecretStore` trait for implementing custom stores
//! - Built-in implementations: `EnvSecretStore`, `MemorySecretStore`

mod env_store;
mod memory_store;
mod traits;

pub use env_store::EnvSecretStore;
pub use memory_store::MemorySecretStore;
pub use traits::{SecretStore, SecretStoreError, SecretStoreResult};
