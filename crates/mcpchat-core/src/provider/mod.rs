//! Model provider abstraction
//!
//! The `Provider` trait is the boundary to the language-model API. The real
//! implementation is `GenaiProvider`; `MockProvider` replaces it in tests.

mod error;
mod genai_adapter;
mod genai_provider;
mod mock;
mod traits;

pub use error::{ProviderError, ProviderResult};
pub use genai_provider::GenaiProvider;
pub use mock::{MockProvider, MockReply, MockRequest};
pub use traits::{ChatOptions, ModelReply, Provider, ProviderModelConfig};
