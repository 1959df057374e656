//! GenaiProvider - Unified provider using the genai crate
//!
//! Handles all genai-supported model APIs (Gemini, OpenAI, Anthropic, ...)
//! behind the `Provider` trait. Model strings may carry a provider prefix
//! ("gemini/gemini-2.0-flash"); a bare model name is passed through as-is.

use std::sync::Arc;

use async_trait::async_trait;
use genai::chat::ChatRequest;

use crate::logging::Logger;
use crate::types::ChatMessage;

use super::error::{ProviderError, ProviderResult};
use super::genai_adapter::{
    create_client, from_genai_response, to_genai_messages, to_genai_options, to_genai_tools,
};
use super::traits::{ChatOptions, ModelReply, Provider, ProviderModelConfig};

/// Unified provider using genai for all supported LLM APIs
pub struct GenaiProvider {
    /// Provider identifier
    provider_id: String,
    /// Logger for debug output
    logger: Arc<dyn Logger>,
}

impl GenaiProvider {
    /// Create a new GenaiProvider
    pub fn new(provider_id: impl Into<String>, logger: Arc<dyn Logger>) -> Self {
        Self {
            provider_id: provider_id.into(),
            logger,
        }
    }

    /// Extract provider ID from a model string (e.g., "gemini/gemini-2.0-flash" -> "gemini")
    pub fn extract_provider(model: &str) -> Option<&str> {
        model.split('/').next()
    }

    /// Extract model name from a model string (e.g., "gemini/gemini-2.0-flash" -> "gemini-2.0-flash")
    pub fn extract_model_name(model: &str) -> &str {
        model.split('/').nth(1).unwrap_or(model)
    }
}

#[async_trait]
impl Provider for GenaiProvider {
    fn name(&self) -> &str {
        &self.provider_id
    }

    async fn complete(
        &self,
        messages: Vec<ChatMessage>,
        model_config: ProviderModelConfig,
        options: ChatOptions,
    ) -> ProviderResult<ModelReply> {
        self.logger.debug(&format!(
            "[GenaiProvider] complete called: provider={}, model={}, messages={}",
            self.provider_id,
            model_config.model,
            messages.len()
        ));

        // Create genai client with our auth resolution
        let client = create_client(model_config.api_key.clone());

        // Convert messages to genai format
        let genai_messages = to_genai_messages(messages);

        // Build the chat request
        let mut chat_req = ChatRequest::new(genai_messages);

        // Add tools if provided
        if let Some(tools) = &options.tools {
            if !tools.is_empty() {
                let genai_tools = to_genai_tools(tools.clone());
                chat_req = chat_req.with_tools(genai_tools);
            }
        }

        // Convert options
        let genai_options = to_genai_options(&options);

        // Extract model name (remove provider prefix if present)
        let model_name = Self::extract_model_name(&model_config.model);

        let response = client
            .exec_chat(model_name, chat_req, Some(&genai_options))
            .await
            .map_err(|e| ProviderError::api(self.provider_id.clone(), e.to_string()))?;

        let reply = from_genai_response(response);

        self.logger.debug(&format!(
            "[GenaiProvider] reply: text={}, tool_calls={}",
            reply.text.is_some(),
            reply.tool_calls.len()
        ));

        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::NoOpLogger;

    #[test]
    fn test_extract_provider() {
        assert_eq!(
            GenaiProvider::extract_provider("gemini/gemini-2.0-flash"),
            Some("gemini")
        );
        assert_eq!(
            GenaiProvider::extract_provider("openai/gpt-4o"),
            Some("openai")
        );
        assert_eq!(
            GenaiProvider::extract_provider("gemini-2.0-flash"),
            Some("gemini-2.0-flash")
        );
    }

    #[test]
    fn test_extract_model_name() {
        assert_eq!(
            GenaiProvider::extract_model_name("gemini/gemini-2.0-flash"),
            "gemini-2.0-flash"
        );
        assert_eq!(GenaiProvider::extract_model_name("gpt-4o"), "gpt-4o");
    }

    #[test]
    fn test_provider_name() {
        let provider = GenaiProvider::new("gemini", Arc::new(NoOpLogger));
        assert_eq!(provider.name(), "gemini");
    }
}
