//! Tool execution seam
//!
//! The session talks to tools through the `ToolExecutor` trait so that the
//! loop can be tested without a live server. Failures are folded into error
//! results rather than raised: the transcript always gets a result turn for
//! every marker turn, and the model gets to see what went wrong.

use std::sync::Arc;

use async_trait::async_trait;

use crate::logging::Logger;
use crate::mcp::{first_text_content, McpClient};
use crate::types::{ToolCall, ToolResult};

/// Executes tool calls requested by the model
#[async_trait]
pub trait ToolExecutor: Send + Sync {
    /// Execute a single tool call
    async fn execute(&self, call: &ToolCall) -> ToolResult;

    /// Execute tool calls in order
    ///
    /// Sequential on purpose: results are appended in call order and the
    /// remote session handles one request at a time.
    async fn execute_all(&self, calls: &[ToolCall]) -> Vec<ToolResult> {
        let mut results = Vec::with_capacity(calls.len());
        for call in calls {
            results.push(self.execute(call).await);
        }
        results
    }
}

/// `ToolExecutor` backed by the remote MCP session
pub struct McpToolExecutor {
    client: Arc<McpClient>,
    logger: Arc<dyn Logger>,
}

impl McpToolExecutor {
    /// Create an executor over an established MCP session
    pub fn new(client: Arc<McpClient>, logger: Arc<dyn Logger>) -> Self {
        Self { client, logger }
    }
}

#[async_trait]
impl ToolExecutor for McpToolExecutor {
    async fn execute(&self, call: &ToolCall) -> ToolResult {
        match self.client.call_tool(&call.name, call.input.clone()).await {
            Ok(result) => {
                let text = first_text_content(&result);
                if result.is_error.unwrap_or(false) {
                    self.logger.warn(&format!(
                        "[McpToolExecutor] Tool {} reported an error",
                        call.name
                    ));
                    ToolResult::error(&call.id, text)
                } else {
                    ToolResult::success(&call.id, text)
                }
            }
            Err(e) => {
                self.logger
                    .error(&format!("[McpToolExecutor] Tool {} failed: {}", call.name, e));
                ToolResult::error(&call.id, format!("Error: {}", e))
            }
        }
    }
}
