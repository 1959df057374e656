//! mcpchat core
//!
//! Session engine for a terminal chat client that bridges a language-model
//! API with a remote MCP tool server. The model advertises the server's
//! tools; when it asks for one, the session executes it remotely and feeds
//! the result back into the conversation.
//!
//! ```rust,ignore
//! use mcpchat_core::{ChatSession, GenaiProvider, McpClient, McpToolExecutor, ToolCatalog};
//!
//! let mcp = Arc::new(McpClient::connect(url, logger.clone()).await?);
//! let catalog = ToolCatalog::discover(&mcp).await?;
//! let executor = Arc::new(McpToolExecutor::new(mcp, logger.clone()));
//! let provider = Arc::new(GenaiProvider::new("gemini", logger.clone()));
//!
//! let mut session = ChatSession::new(provider, executor, catalog, model, logger);
//! let reply = session.send("What is 2+2?").await?;
//! ```

pub mod logging;
pub mod mcp;
pub mod provider;
pub mod secrets;
pub mod session;
pub mod tools;
pub mod transcript;
pub mod types;

// Re-export commonly used types
pub use types::{ChatMessage, ContentPart, MessageContent, MessageRole, Tool, ToolCall, ToolResult};

pub use logging::{ConsoleLogger, Logger, NoOpLogger};

pub use secrets::{EnvSecretStore, MemorySecretStore, SecretStore};

pub use mcp::{McpClient, McpError, McpResult};

pub use tools::{McpToolExecutor, ToolCatalog, ToolExecutor};

pub use provider::{
    ChatOptions, GenaiProvider, MockProvider, ModelReply, Provider, ProviderError,
    ProviderModelConfig,
};

pub use session::{ChatSession, SessionError, SessionResult, DEFAULT_MAX_TOOL_ROUNDS};

pub use transcript::Transcript;
