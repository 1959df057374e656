//! Mock provider for testing
//!
//! Plays back a script of replies without network dependencies and records
//! every request it receives, so tests can assert on what the session sent.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::error::{ProviderError, ProviderResult};
use super::traits::{ChatOptions, ModelReply, Provider, ProviderModelConfig};
use crate::logging::Logger;
use crate::types::{ChatMessage, Tool, ToolCall};

/// One scripted reply
#[derive(Debug, Clone)]
pub enum MockReply {
    /// Plain text response
    Text(String),
    /// Tool-call response
    ToolCalls(Vec<ToolCall>),
    /// Response with neither text nor tool calls
    Empty,
    /// Simulated provider failure
    Error(String),
}

/// One recorded request
#[derive(Debug, Clone)]
pub struct MockRequest {
    /// Messages the session sent
    pub messages: Vec<ChatMessage>,
    /// Tool declarations the session sent
    pub tools: Option<Vec<Tool>>,
}

/// Mock LLM provider for testing
pub struct MockProvider {
    script: Mutex<VecDeque<MockReply>>,
    requests: Mutex<Vec<MockRequest>>,
    logger: Arc<dyn Logger>,
}

impl MockProvider {
    /// Create a provider that plays back the given script in order
    ///
    /// Once the script is exhausted, further requests get empty replies.
    pub fn scripted(script: Vec<MockReply>, logger: Arc<dyn Logger>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            requests: Mutex::new(Vec::new()),
            logger,
        }
    }

    /// Create a provider that always answers with the same text once
    pub fn text(text: impl Into<String>, logger: Arc<dyn Logger>) -> Self {
        Self::scripted(vec![MockReply::Text(text.into())], logger)
    }

    /// Requests received so far
    pub fn requests(&self) -> Vec<MockRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of requests received so far
    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl Provider for MockProvider {
    fn name(&self) -> &str {
        "mock"
    }

    async fn complete(
        &self,
        messages: Vec<ChatMessage>,
        _model: ProviderModelConfig,
        options: ChatOptions,
    ) -> ProviderResult<ModelReply> {
        self.requests.lock().unwrap().push(MockRequest {
            messages,
            tools: options.tools,
        });

        let next = self.script.lock().unwrap().pop_front();
        match next {
            Some(MockReply::Text(text)) => {
                self.logger.debug("[MockProvider] scripted text reply");
                Ok(ModelReply::text(text))
            }
            Some(MockReply::ToolCalls(calls)) => {
                self.logger.debug("[MockProvider] scripted tool-call reply");
                Ok(ModelReply::tool_calls(calls))
            }
            Some(MockReply::Empty) | None => Ok(ModelReply::empty()),
            Some(MockReply::Error(message)) => Err(ProviderError::Other(message)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::NoOpLogger;
    use serde_json::json;

    fn test_logger() -> Arc<dyn Logger> {
        Arc::new(NoOpLogger::new())
    }

    #[tokio::test]
    async fn test_scripted_playback() {
        let provider = MockProvider::scripted(
            vec![
                MockReply::ToolCalls(vec![ToolCall::new("c1", "add", json!({"a": 1}))]),
                MockReply::Text("done".to_string()),
            ],
            test_logger(),
        );

        let first = provider
            .complete(
                vec![ChatMessage::user("hi")],
                ProviderModelConfig::new("mock"),
                ChatOptions::default(),
            )
            .await
            .unwrap();
        assert!(first.has_tool_calls());

        let second = provider
            .complete(
                vec![ChatMessage::user("hi")],
                ProviderModelConfig::new("mock"),
                ChatOptions::default(),
            )
            .await
            .unwrap();
        assert_eq!(second.text.as_deref(), Some("done"));

        // Script exhausted: empty replies from here on
        let third = provider
            .complete(
                vec![ChatMessage::user("hi")],
                ProviderModelConfig::new("mock"),
                ChatOptions::default(),
            )
            .await
            .unwrap();
        assert!(third.is_empty());

        assert_eq!(provider.request_count(), 3);
    }

    #[tokio::test]
    async fn test_scripted_error() {
        let provider =
            MockProvider::scripted(vec![MockReply::Error("boom".to_string())], test_logger());

        let result = provider
            .complete(
                vec![ChatMessage::user("hi")],
                ProviderModelConfig::new("mock"),
                ChatOptions::default(),
            )
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_records_tools() {
        let provider = MockProvider::text("ok", test_logger());
        let tools = vec![Tool::new("add", "Add two numbers")];

        provider
            .complete(
                vec![ChatMessage::user("hi")],
                ProviderModelConfig::new("mock"),
                ChatOptions::new().with_tools(tools.clone()),
            )
            .await
            .unwrap();

        let requests = provider.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].tools.as_ref().unwrap()[0].name, "add");
    }
}
