//! MCP (Model Context Protocol) client module
//!
//! Uses the official rmcp SDK to talk to the remote tool server over
//! streamable HTTP.
//!
//! # Example
//!
//! ```rust,ignore
//! use mcpchat_core::mcp::McpClient;
//! use std::sync::Arc;
//!
//! let logger: Arc<dyn Logger> = Arc::new(NoOpLogger::new());
//! let client = McpClient::connect("http://localhost:8000/mcp", logger).await?;
//!
//! let tools = client.list_tools().await?;
//! let result = client.call_tool("add", json!({ "a": 2, "b": 2 })).await?;
//! ```

mod client;

pub use client::{first_text_content, McpClient, McpError, McpResult};

// Re-export rmcp types that consumers might need
pub use rmcp::model::{CallToolResult as McpToolResult, Tool as McpTool};
