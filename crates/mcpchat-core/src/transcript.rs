//! Append-only conversation state
//!
//! The transcript is resent in full on every model request, so ordering is
//! conversation ordering and turns are never mutated or removed once pushed.

use crate::types::{ChatMessage, ContentPart, MessageRole, ToolCall, ToolResult};

/// Ordered log of conversation turns
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    /// Create an empty transcript
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a transcript seeded with a system prompt
    pub fn with_system(prompt: impl Into<String>) -> Self {
        Self {
            messages: vec![ChatMessage::system(prompt)],
        }
    }

    /// Append a user turn
    pub fn push_user(&mut self, content: impl Into<String>) {
        self.messages.push(ChatMessage::user(content));
    }

    /// Append an assistant text turn
    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.messages.push(ChatMessage::assistant(content));
    }

    /// Append an assistant turn marking which tools are being called
    pub fn push_tool_markers(&mut self, calls: &[ToolCall]) {
        let parts = calls
            .iter()
            .map(|call| ContentPart::tool_use(&call.name, call.input.clone()))
            .collect();
        self.messages
            .push(ChatMessage::with_parts(MessageRole::Assistant, parts));
    }

    /// Append a user turn carrying the results for the previous marker turn
    ///
    /// Results are labeled by tool name; errors keep their flag so the model
    /// can see that a call failed.
    pub fn push_tool_results(&mut self, calls: &[ToolCall], results: &[ToolResult]) {
        let parts = calls
            .iter()
            .zip(results.iter())
            .map(|(call, result)| {
                if result.is_error {
                    ContentPart::tool_error(&call.name, &result.content)
                } else {
                    ContentPart::tool_result(&call.name, &result.content)
                }
            })
            .collect();
        self.messages
            .push(ChatMessage::with_parts(MessageRole::User, parts));
    }

    /// All turns, in conversation order
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Number of turns
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the transcript has no turns
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Role of the last turn, if any
    pub fn last_role(&self) -> Option<MessageRole> {
        self.messages.last().map(|m| m.role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_turns_append_in_order() {
        let mut transcript = Transcript::new();
        assert!(transcript.is_empty());

        transcript.push_user("What is 2+2?");
        transcript.push_assistant("4");

        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript.messages()[0].role, MessageRole::User);
        assert_eq!(transcript.messages()[1].role, MessageRole::Assistant);
        assert_eq!(transcript.last_role(), Some(MessageRole::Assistant));
    }

    #[test]
    fn test_system_seed_comes_first() {
        let mut transcript = Transcript::with_system("You are terse.");
        transcript.push_user("hi");

        assert_eq!(transcript.messages()[0].role, MessageRole::System);
        assert_eq!(transcript.messages()[0].text(), Some("You are terse."));
    }

    #[test]
    fn test_marker_and_result_turns_pair_up() {
        let mut transcript = Transcript::new();
        let calls = vec![ToolCall::new("c1", "add", json!({"a": 2, "b": 2}))];
        let results = vec![ToolResult::success("c1", "4")];

        transcript.push_user("add 2 and 2");
        transcript.push_tool_markers(&calls);
        transcript.push_tool_results(&calls, &results);

        assert_eq!(transcript.len(), 3);
        let marker = &transcript.messages()[1];
        assert_eq!(marker.role, MessageRole::Assistant);
        assert!(marker.parts().unwrap()[0].is_tool_use());

        let result = &transcript.messages()[2];
        assert_eq!(result.role, MessageRole::User);
        assert!(result.parts().unwrap()[0].is_tool_result());
    }

    #[test]
    fn test_error_result_keeps_flag() {
        let mut transcript = Transcript::new();
        let calls = vec![ToolCall::new("c1", "add", json!({}))];
        let results = vec![ToolResult::error("c1", "connection reset")];

        transcript.push_tool_markers(&calls);
        transcript.push_tool_results(&calls, &results);

        match &transcript.messages()[1].parts().unwrap()[0] {
            ContentPart::ToolResult { is_error, content, .. } => {
                assert!(is_error);
                assert_eq!(content, "connection reset");
            }
            other => panic!("expected tool result part, got {:?}", other),
        }
    }
}
