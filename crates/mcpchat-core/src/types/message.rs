//! Conversation turn types

use serde::{Deserialize, Serialize};

/// Role of a conversation turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

impl std::fmt::Display for MessageRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MessageRole::System => write!(f, "system"),
            MessageRole::User => write!(f, "user"),
            MessageRole::Assistant => write!(f, "assistant"),
        }
    }
}

/// One turn of the conversation transcript
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// The role of the turn's author
    pub role: MessageRole,
    /// The content of the turn (string or structured parts)
    pub content: MessageContent,
}

impl ChatMessage {
    /// Create a system message
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: MessageContent::Text(content.into()),
        }
    }

    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: MessageContent::Text(content.into()),
        }
    }

    /// Create an assistant message
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: MessageContent::Text(content.into()),
        }
    }

    /// Create a message with structured content parts
    pub fn with_parts(role: MessageRole, parts: Vec<ContentPart>) -> Self {
        Self {
            role,
            content: MessageContent::Parts(parts),
        }
    }

    /// Get the text content if this is a simple text message
    pub fn text(&self) -> Option<&str> {
        match &self.content {
            MessageContent::Text(s) => Some(s),
            MessageContent::Parts(_) => None,
        }
    }

    /// Get the structured parts if this is a parts message
    pub fn parts(&self) -> Option<&[ContentPart]> {
        match &self.content {
            MessageContent::Text(_) => None,
            MessageContent::Parts(parts) => Some(parts),
        }
    }
}

/// Message content - either simple text or structured parts
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    /// Simple text content
    Text(String),
    /// Structured content with multiple parts
    Parts(Vec<ContentPart>),
}

impl From<String> for MessageContent {
    fn from(s: String) -> Self {
        MessageContent::Text(s)
    }
}

impl From<&str> for MessageContent {
    fn from(s: &str) -> Self {
        MessageContent::Text(s.to_string())
    }
}

impl From<Vec<ContentPart>> for MessageContent {
    fn from(parts: Vec<ContentPart>) -> Self {
        MessageContent::Parts(parts)
    }
}

/// Content part for tool-call bookkeeping within a turn
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    /// Text content
    Text {
        text: String,
    },
    /// Tool invocation marker (assistant asking for a tool)
    ToolUse {
        name: String,
        input: serde_json::Value,
    },
    /// Tool result (what the tool returned)
    ToolResult {
        name: String,
        content: String,
        #[serde(rename = "isError", default, skip_serializing_if = "std::ops::Not::not")]
        is_error: bool,
    },
}

impl ContentPart {
    /// Create a text content part
    pub fn text(text: impl Into<String>) -> Self {
        ContentPart::Text { text: text.into() }
    }

    /// Create a tool invocation marker part
    pub fn tool_use(name: impl Into<String>, input: serde_json::Value) -> Self {
        ContentPart::ToolUse {
            name: name.into(),
            input,
        }
    }

    /// Create a tool result part
    pub fn tool_result(name: impl Into<String>, content: impl Into<String>) -> Self {
        ContentPart::ToolResult {
            name: name.into(),
            content: content.into(),
            is_error: false,
        }
    }

    /// Create an error tool result part
    pub fn tool_error(name: impl Into<String>, content: impl Into<String>) -> Self {
        ContentPart::ToolResult {
            name: name.into(),
            content: content.into(),
            is_error: true,
        }
    }

    /// Check if this part is a tool invocation marker
    pub fn is_tool_use(&self) -> bool {
        matches!(self, ContentPart::ToolUse { .. })
    }

    /// Check if this part is a tool result
    pub fn is_tool_result(&self) -> bool {
        matches!(self, ContentPart::ToolResult { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_chat_message_creation() {
        let sys = ChatMessage::system("You are helpful");
        assert_eq!(sys.role, MessageRole::System);
        assert_eq!(sys.text(), Some("You are helpful"));

        let user = ChatMessage::user("Hello");
        assert_eq!(user.role, MessageRole::User);

        let asst = ChatMessage::assistant("Hi there!");
        assert_eq!(asst.role, MessageRole::Assistant);
    }

    #[test]
    fn test_message_serialization() {
        let msg = ChatMessage::user("Hello");
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("\"role\":\"user\""));
        assert!(json.contains("\"content\":\"Hello\""));
    }

    #[test]
    fn test_parts_message() {
        let msg = ChatMessage::with_parts(
            MessageRole::Assistant,
            vec![ContentPart::tool_use("add", json!({"a": 2, "b": 2}))],
        );
        assert_eq!(msg.text(), None);
        let parts = msg.parts().unwrap();
        assert_eq!(parts.len(), 1);
        assert!(parts[0].is_tool_use());
    }

    #[test]
    fn test_content_part_serialization() {
        let part = ContentPart::text("Hello");
        let json = serde_json::to_string(&part).unwrap();
        assert!(json.contains("\"type\":\"text\""));

        let result = ContentPart::tool_error("add", "boom");
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"isError\":true"));
    }
}
