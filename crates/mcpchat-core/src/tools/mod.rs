//! Tool catalog and execution
//!
//! - `ToolCatalog`: the frozen, model-visible tool list
//! - `ToolExecutor`: the seam between the session loop and the remote server

mod catalog;
mod executor;

pub use catalog::{is_internal_tool, ToolCatalog};
pub use executor::{McpToolExecutor, ToolExecutor};
