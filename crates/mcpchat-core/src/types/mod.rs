//! Core types for the chat transcript and tool calling

mod message;
mod tool;

pub use message::{ChatMessage, ContentPart, MessageContent, MessageRole};
pub use tool::{Tool, ToolCall, ToolResult};
