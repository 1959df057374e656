//! Provider trait definition

use async_trait::async_trait;

use super::error::ProviderResult;
use crate::types::{ChatMessage, Tool, ToolCall};

/// Model configuration for provider requests
#[derive(Debug, Clone)]
pub struct ProviderModelConfig {
    /// Model identifier as used by the provider's API
    pub model: String,
    /// API key for authentication
    pub api_key: Option<String>,
}

impl ProviderModelConfig {
    /// Create a new model config
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            api_key: None,
        }
    }

    /// Set the API key
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }
}

/// Options for chat requests
#[derive(Debug, Clone, Default)]
pub struct ChatOptions {
    /// Temperature for response generation (0.0 - 2.0)
    pub temperature: Option<f32>,
    /// Maximum tokens to generate
    pub max_tokens: Option<u32>,
    /// Tools available for the model to use
    pub tools: Option<Vec<Tool>>,
}

impl ChatOptions {
    /// Create new options with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set temperature
    pub fn with_temperature(mut self, temp: f32) -> Self {
        self.temperature = Some(temp);
        self
    }

    /// Set max tokens
    pub fn with_max_tokens(mut self, tokens: u32) -> Self {
        self.max_tokens = Some(tokens);
        self
    }

    /// Set tools
    pub fn with_tools(mut self, tools: Vec<Tool>) -> Self {
        self.tools = Some(tools);
        self
    }
}

/// One complete model reply
///
/// Either or both of `text` and `tool_calls` may be present; a reply with
/// neither is a valid no-op turn.
#[derive(Debug, Clone, Default)]
pub struct ModelReply {
    /// Text content of the reply, if any
    pub text: Option<String>,
    /// Tool calls requested by the model, in response order
    pub tool_calls: Vec<ToolCall>,
}

impl ModelReply {
    /// Create a text-only reply
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            tool_calls: Vec::new(),
        }
    }

    /// Create a tool-call reply
    pub fn tool_calls(calls: Vec<ToolCall>) -> Self {
        Self {
            text: None,
            tool_calls: calls,
        }
    }

    /// Create an empty reply
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether the model asked for any tools
    pub fn has_tool_calls(&self) -> bool {
        !self.tool_calls.is_empty()
    }

    /// Whether the reply carries neither text nor tool calls
    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.tool_calls.is_empty()
    }
}

/// Provider trait for LLM implementations
#[async_trait]
pub trait Provider: Send + Sync {
    /// Get the provider name (e.g., "gemini", "openai")
    fn name(&self) -> &str;

    /// Run one chat completion over the full conversation
    async fn complete(
        &self,
        messages: Vec<ChatMessage>,
        model: ProviderModelConfig,
        options: ChatOptions,
    ) -> ProviderResult<ModelReply>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_model_reply_shapes() {
        let text = ModelReply::text("hello");
        assert!(!text.has_tool_calls());
        assert!(!text.is_empty());

        let calls = ModelReply::tool_calls(vec![ToolCall::new("c1", "add", json!({}))]);
        assert!(calls.has_tool_calls());
        assert!(!calls.is_empty());

        assert!(ModelReply::empty().is_empty());
    }

    #[test]
    fn test_options_builder() {
        let options = ChatOptions::new()
            .with_temperature(0.2)
            .with_max_tokens(1024)
            .with_tools(vec![Tool::new("add", "Add two numbers")]);

        assert_eq!(options.temperature, Some(0.2));
        assert_eq!(options.max_tokens, Some(1024));
        assert_eq!(options.tools.as_ref().map(|t| t.len()), Some(1));
    }
}
