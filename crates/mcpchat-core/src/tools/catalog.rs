//! Frozen tool catalog
//!
//! Discovered from the MCP server exactly once at startup and read-only for
//! the rest of the session, so every model request advertises the identical
//! tool list.

use crate::mcp::{McpClient, McpResult, McpTool};
use crate::types::Tool;

/// Check if a tool name is server-internal (hidden from the model)
pub fn is_internal_tool(name: &str) -> bool {
    name.starts_with('_')
}

/// Convert an MCP tool descriptor into the model-facing shape
///
/// The schema's `type`/`properties`/`required` pass through verbatim; only
/// the field name changes (`inputSchema` on the wire, `parameters` once the
/// provider adapter hands it to the model API).
fn from_mcp_tool(tool: McpTool) -> Tool {
    Tool {
        name: tool.name.to_string(),
        description: tool.description.map(|s| s.to_string()).unwrap_or_default(),
        input_schema: serde_json::to_value(tool.input_schema.as_ref()).ok(),
    }
}

/// Ordered, immutable set of tools advertised to the model
#[derive(Debug, Clone, Default)]
pub struct ToolCatalog {
    tools: Vec<Tool>,
}

impl ToolCatalog {
    /// Discover the catalog from the server's tool listing
    ///
    /// This is the only listing call of the session; a failure here is fatal
    /// to startup.
    pub async fn discover(client: &McpClient) -> McpResult<Self> {
        let listed = client.list_tools().await?;
        Ok(Self::from_listing(listed))
    }

    /// Build a catalog from an already-fetched listing
    pub fn from_listing(listed: Vec<McpTool>) -> Self {
        let tools = listed
            .into_iter()
            .map(from_mcp_tool)
            .filter(|t| !is_internal_tool(&t.name))
            .collect();
        Self { tools }
    }

    /// Build a catalog directly from tool definitions (tests, fixtures)
    pub fn from_tools(tools: Vec<Tool>) -> Self {
        Self { tools }
    }

    /// The tools, in listing order
    pub fn tools(&self) -> &[Tool] {
        &self.tools
    }

    /// Look up a tool by name
    pub fn get(&self, name: &str) -> Option<&Tool> {
        self.tools.iter().find(|t| t.name == name)
    }

    /// Number of advertised tools
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_internal_tool() {
        assert!(is_internal_tool("_diagnostics"));
        assert!(!is_internal_tool("add"));
        assert!(!is_internal_tool("read_file"));
    }

    #[test]
    fn test_catalog_lookup() {
        let catalog = ToolCatalog::from_tools(vec![
            Tool::new("add", "Add two numbers").with_schema(json!({
                "type": "object",
                "properties": { "a": { "type": "number" }, "b": { "type": "number" } },
                "required": ["a", "b"]
            })),
            Tool::new("echo", "Echo the input"),
        ]);

        assert_eq!(catalog.len(), 2);
        assert!(!catalog.is_empty());
        assert!(catalog.get("add").is_some());
        assert!(catalog.get("subtract").is_none());
        assert_eq!(catalog.tools()[0].name, "add");
    }
}
