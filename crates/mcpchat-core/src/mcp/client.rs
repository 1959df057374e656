//! MCP client using the official rmcp SDK
//!
//! Connects to the remote tool server over streamable HTTP. The session is
//! established once at startup and held open for the lifetime of the process.

use std::sync::Arc;

use rmcp::{
    model::{CallToolRequestParams, CallToolResult, ClientCapabilities, ClientInfo, Implementation, RawContent, Tool},
    service::RunningService,
    RoleClient, ServiceExt,
};
use serde_json::Value;
use thiserror::Error;

use crate::logging::Logger;

/// MCP client errors
#[derive(Error, Debug)]
pub enum McpError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Initialization failed: {0}")]
    InitializationFailed(String),

    #[error("Tool call failed: {0}")]
    ToolCallFailed(String),

    #[error("Protocol error: {0}")]
    Protocol(String),
}

pub type McpResult<T> = Result<T, McpError>;

/// Client for the remote tool server
pub struct McpClient {
    /// The underlying rmcp running service
    client: RunningService<RoleClient, ClientInfo>,
    /// Logger
    logger: Arc<dyn Logger>,
}

impl McpClient {
    /// Connect to an MCP server over streamable HTTP
    pub async fn connect(url: &str, logger: Arc<dyn Logger>) -> McpResult<Self> {
        use rmcp::transport::StreamableHttpClientTransport;

        logger.info(&format!("[McpClient] Connecting to {}", url));

        let transport = StreamableHttpClientTransport::from_uri(url);

        let client_info = ClientInfo {
            meta: None,
            protocol_version: Default::default(),
            capabilities: ClientCapabilities::default(),
            client_info: Implementation {
                name: "mcpchat".to_string(),
                title: Some("mcpchat".to_string()),
                version: env!("CARGO_PKG_VERSION").to_string(),
                website_url: None,
                icons: None,
            },
        };

        let client = client_info
            .serve(transport)
            .await
            .map_err(|e| McpError::InitializationFailed(e.to_string()))?;

        logger.info("[McpClient] Connected and initialized");

        Ok(Self { client, logger })
    }

    /// List all tools the server offers
    pub async fn list_tools(&self) -> McpResult<Vec<Tool>> {
        let result = self
            .client
            .list_tools(Default::default())
            .await
            .map_err(|e| McpError::Protocol(e.to_string()))?;

        self.logger
            .info(&format!("[McpClient] Listed {} tools", result.tools.len()));

        Ok(result.tools)
    }

    /// Call a tool by name
    ///
    /// Name validation happens on the server; a rejection surfaces as
    /// `McpError::ToolCallFailed`.
    pub async fn call_tool(&self, name: &str, arguments: Value) -> McpResult<CallToolResult> {
        self.logger.debug(&format!("[McpClient] Calling tool: {}", name));

        let params = CallToolRequestParams {
            meta: None,
            name: name.to_owned().into(),
            arguments: arguments.as_object().cloned(),
            task: None,
        };

        let result = self
            .client
            .call_tool(params)
            .await
            .map_err(|e| McpError::ToolCallFailed(e.to_string()))?;

        Ok(result)
    }

    /// Get server info
    pub fn server_info(&self) -> Option<&Implementation> {
        self.client.peer_info().map(|info| &info.server_info)
    }

    /// Close the connection
    pub async fn close(self) -> McpResult<()> {
        self.logger.info("[McpClient] Closing connection");
        self.client
            .cancel()
            .await
            .map_err(|e| McpError::Protocol(e.to_string()))?;
        Ok(())
    }
}

/// Extract the first textual content element of a tool call result
///
/// Empty string when the result has no text content at all.
pub fn first_text_content(result: &CallToolResult) -> String {
    result
        .content
        .iter()
        .find_map(|c| match &c.raw {
            RawContent::Text(t) => Some(t.text.clone()),
            _ => None,
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::Content;

    #[test]
    fn test_first_text_content() {
        let result = CallToolResult::success(vec![Content::text("4"), Content::text("ignored")]);
        assert_eq!(first_text_content(&result), "4");
    }

    #[test]
    fn test_first_text_content_empty() {
        let result = CallToolResult::success(vec![]);
        assert_eq!(first_text_content(&result), "");
    }
}
