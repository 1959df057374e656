//! Adapter between mcpchat types and genai types
//!
//! Conversion functions between our transcript/tool types and genai's,
//! letting genai handle provider protocols and quirks.
//!
//! Auth flows through our `EnvSecretStore` (or an explicit key from the
//! config) rather than genai's default env var lookup, so key resolution
//! matches the rest of the program.

use genai::chat::{
    ChatMessage as GenaiMessage, ChatOptions as GenaiOptions, ChatResponse,
    Tool as GenaiTool, ToolCall as GenaiToolCall,
};
use genai::resolver::{AuthData, AuthResolver};
use genai::{adapter::AdapterKind, Client, ModelIden};

use crate::secrets::{EnvSecretStore, SecretStore};
use crate::types::{ChatMessage, ContentPart, MessageContent, MessageRole, Tool, ToolCall};

use super::traits::{ChatOptions, ModelReply};

// ============================================================================
// Message Conversion: mcpchat -> genai
// ============================================================================

/// Flatten structured parts into wire text
///
/// Tool markers and results live in the transcript as structured parts; on
/// the wire they become labeled text, which is how the original transcript
/// format carried them.
fn flatten_parts(parts: Vec<ContentPart>) -> String {
    parts
        .into_iter()
        .map(|p| match p {
            ContentPart::Text { text } => text,
            ContentPart::ToolUse { name, input } => {
                format!("Calling tool {} with arguments {}", name, input)
            }
            ContentPart::ToolResult {
                name,
                content,
                is_error: false,
            } => format!("[Tool result for {}]: {}", name, content),
            ContentPart::ToolResult { name, content, .. } => {
                format!("[Tool error for {}]: {}", name, content)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Convert a mcpchat ChatMessage to a genai ChatMessage
pub fn to_genai_message(msg: ChatMessage) -> GenaiMessage {
    let content = match msg.content {
        MessageContent::Text(text) => text,
        MessageContent::Parts(parts) => flatten_parts(parts),
    };

    match msg.role {
        MessageRole::System => GenaiMessage::system(content),
        MessageRole::User => GenaiMessage::user(content),
        MessageRole::Assistant => GenaiMessage::assistant(content),
    }
}

/// Convert a vector of mcpchat messages to genai messages
pub fn to_genai_messages(messages: Vec<ChatMessage>) -> Vec<GenaiMessage> {
    messages.into_iter().map(to_genai_message).collect()
}

// ============================================================================
// Tool Conversion: mcpchat -> genai
// ============================================================================

/// Convert a mcpchat Tool to a genai Tool
///
/// `input_schema` lands in the genai tool's schema slot, which each provider
/// adapter serializes as its `parameters` field.
pub fn to_genai_tool(tool: Tool) -> GenaiTool {
    let mut genai_tool = GenaiTool::new(&tool.name).with_description(&tool.description);

    if let Some(schema) = tool.input_schema {
        genai_tool = genai_tool.with_schema(schema);
    }

    genai_tool
}

/// Convert mcpchat tools to genai tools
pub fn to_genai_tools(tools: Vec<Tool>) -> Vec<GenaiTool> {
    tools.into_iter().map(to_genai_tool).collect()
}

// ============================================================================
// Options Conversion: mcpchat -> genai
// ============================================================================

/// Convert mcpchat ChatOptions to genai ChatOptions
pub fn to_genai_options(options: &ChatOptions) -> GenaiOptions {
    let mut genai_opts = GenaiOptions::default();

    if let Some(temp) = options.temperature {
        genai_opts = genai_opts.with_temperature(temp as f64);
    }

    if let Some(max_tokens) = options.max_tokens {
        genai_opts = genai_opts.with_max_tokens(max_tokens);
    }

    genai_opts
}

// ============================================================================
// Response Conversion: genai -> mcpchat
// ============================================================================

/// Convert a genai ToolCall to a mcpchat ToolCall
pub fn from_genai_tool_call(tc: &GenaiToolCall) -> ToolCall {
    // fn_arguments is already a serde_json::Value
    ToolCall {
        id: tc.call_id.clone(),
        name: tc.fn_name.clone(),
        input: tc.fn_arguments.clone(),
    }
}

/// Convert a complete genai response into a ModelReply
pub fn from_genai_response(response: ChatResponse) -> ModelReply {
    let tool_calls = response
        .tool_calls()
        .into_iter()
        .map(from_genai_tool_call)
        .collect();

    ModelReply {
        text: response.into_first_text().filter(|t| !t.is_empty()),
        tool_calls,
    }
}

// ============================================================================
// Client Creation with Custom Auth
// ============================================================================

/// Map a genai AdapterKind to the env store's provider name
fn adapter_kind_to_provider(adapter: AdapterKind) -> String {
    match adapter {
        AdapterKind::Gemini => "gemini".to_string(),
        AdapterKind::OpenAI => "openai".to_string(),
        AdapterKind::Anthropic => "anthropic".to_string(),
        AdapterKind::Groq => "groq".to_string(),
        AdapterKind::Ollama => "ollama".to_string(),
        other => format!("{:?}", other).to_lowercase(),
    }
}

/// Create a genai Client with custom auth resolution
///
/// An explicit key from the model config wins; otherwise the environment
/// secret store is consulted for the adapter's provider.
pub fn create_client(explicit_api_key: Option<String>) -> Client {
    let auth_resolver = AuthResolver::from_resolver_fn(
        move |model_iden: ModelIden| -> Result<Option<AuthData>, genai::resolver::Error> {
            if let Some(key) = explicit_api_key.clone() {
                return Ok(Some(AuthData::from_single(key)));
            }

            let provider = adapter_kind_to_provider(model_iden.adapter_kind);
            let store = EnvSecretStore::new();
            Ok(store.get(&provider).map(AuthData::from_single))
        },
    );

    Client::builder().with_auth_resolver(auth_resolver).build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_message_conversion() {
        let msg = ChatMessage::user("Hello, world!");
        let genai_msg = to_genai_message(msg);
        assert!(matches!(genai_msg.role, genai::chat::ChatRole::User));
    }

    #[test]
    fn test_parts_flatten_to_labeled_text() {
        let marker = flatten_parts(vec![ContentPart::tool_use("add", json!({"a": 2}))]);
        assert!(marker.starts_with("Calling tool add"));

        let result = flatten_parts(vec![ContentPart::tool_result("add", "4")]);
        assert_eq!(result, "[Tool result for add]: 4");

        let error = flatten_parts(vec![ContentPart::tool_error("add", "boom")]);
        assert_eq!(error, "[Tool error for add]: boom");
    }

    #[test]
    fn test_tool_conversion() {
        let tool = Tool::new("get_weather", "Get weather for a location").with_schema(json!({
            "type": "object",
            "properties": {
                "location": { "type": "string" }
            }
        }));

        let genai_tool = to_genai_tool(tool);
        assert_eq!(genai_tool.name, "get_weather");
    }

    #[test]
    fn test_adapter_kind_mapping() {
        assert_eq!(adapter_kind_to_provider(AdapterKind::Gemini), "gemini");
        assert_eq!(adapter_kind_to_provider(AdapterKind::OpenAI), "openai");
    }
}
