//! Environment variable secret store

use std::collections::HashMap;
use std::env;

use once_cell::sync::Lazy;

use super::traits::{SecretStore, SecretStoreError, SecretStoreResult};

/// Mapping from provider names to environment variable names
static ENV_VAR_MAP: Lazy<HashMap<&'static str, Vec<&'static str>>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert("gemini", vec!["GEMINI_API_KEY", "GOOGLE_API_KEY"]);
    m.insert("google", vec!["GEMINI_API_KEY", "GOOGLE_API_KEY"]);
    m.insert("openai", vec!["OPENAI_API_KEY"]);
    m.insert("anthropic", vec!["ANTHROPIC_API_KEY"]);
    m.insert("groq", vec!["GROQ_API_KEY"]);
    m.insert("ollama", vec![]); // Ollama doesn't need an API key
    m
});

/// Secret store that reads from environment variables
///
/// This store is read-only. Use it for API keys set in the shell or in a
/// `.env` file loaded at startup.
///
/// # Provider Mapping
///
/// Provider names map to their conventional environment variables:
/// - `gemini` → `GEMINI_API_KEY` or `GOOGLE_API_KEY`
/// - `openai` → `OPENAI_API_KEY`
/// - etc.
///
/// Environment variables can also be read directly by their full name.
#[derive(Debug, Default)]
pub struct EnvSecretStore {
    _private: (), // Prevent direct construction, use new()
}

impl EnvSecretStore {
    /// Create a new environment variable secret store
    pub fn new() -> Self {
        Self { _private: () }
    }

    /// Get the environment variable names for a provider
    pub fn env_vars_for_provider(provider: &str) -> Option<&'static [&'static str]> {
        ENV_VAR_MAP
            .get(provider.to_lowercase().as_str())
            .map(|v| v.as_slice())
    }
}

impl SecretStore for EnvSecretStore {
    fn name(&self) -> &str {
        "env"
    }

    fn get(&self, key: &str) -> Option<String> {
        // First, try the key as-is (for direct env var access)
        if let Ok(value) = env::var(key) {
            if !value.is_empty() {
                return Some(value);
            }
        }

        // Then, try mapping from provider name to env var
        let lower_key = key.to_lowercase();
        if let Some(env_vars) = ENV_VAR_MAP.get(lower_key.as_str()) {
            for env_var in env_vars {
                if let Ok(value) = env::var(env_var) {
                    if !value.is_empty() {
                        return Some(value);
                    }
                }
            }
        }

        // Finally, try the uppercase version with _API_KEY suffix
        let auto_key = format!("{}_API_KEY", key.to_uppercase());
        if let Ok(value) = env::var(&auto_key) {
            if !value.is_empty() {
                return Some(value);
            }
        }

        None
    }

    fn store(&self, _key: &str, _value: &str) -> SecretStoreResult<()> {
        Err(SecretStoreError::ReadOnly)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_store_name() {
        let store = EnvSecretStore::new();
        assert_eq!(store.name(), "env");
    }

    #[test]
    fn test_env_store_read_only() {
        let store = EnvSecretStore::new();
        assert!(matches!(
            store.store("test", "value"),
            Err(SecretStoreError::ReadOnly)
        ));
    }

    #[test]
    fn test_env_store_get_direct() {
        env::set_var("MCPCHAT_TEST_SECRET", "test_value");

        let store = EnvSecretStore::new();
        assert_eq!(
            store.get("MCPCHAT_TEST_SECRET"),
            Some("test_value".to_string())
        );

        env::remove_var("MCPCHAT_TEST_SECRET");
    }

    #[test]
    fn test_env_store_get_mapped() {
        env::set_var("GEMINI_API_KEY", "test-gemini-key");

        let store = EnvSecretStore::new();

        // Should find via provider name, case insensitive
        assert_eq!(store.get("gemini"), Some("test-gemini-key".to_string()));
        assert_eq!(store.get("Gemini"), Some("test-gemini-key".to_string()));

        // Should also find via direct name
        assert_eq!(
            store.get("GEMINI_API_KEY"),
            Some("test-gemini-key".to_string())
        );

        env::remove_var("GEMINI_API_KEY");
    }

    #[test]
    fn test_env_store_get_not_found() {
        let store = EnvSecretStore::new();
        assert_eq!(store.get("nonexistent_provider_xyz"), None);
        assert!(!store.has("nonexistent_provider_xyz"));
    }

    #[test]
    fn test_env_vars_for_provider() {
        assert_eq!(
            EnvSecretStore::env_vars_for_provider("gemini"),
            Some(["GEMINI_API_KEY", "GOOGLE_API_KEY"].as_slice())
        );
        assert!(EnvSecretStore::env_vars_for_provider("unknown").is_none());
    }
}
