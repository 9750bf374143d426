//! MCP (Model Context Protocol) server for exemplar
//!
//! This module implements an MCP server using stdio transport, exposing
//! coding standards and code examples to AI agents.
//!
//! ## Tools Exposed
//!
//! - `get_project_structure` - Project structure standards
//! - `get_api_communication` - API communication standards
//! - `get_component_design` - Component design standards
//! - `get_state_management` - State management standards
//! - `get_component_example` - Look up a component example by name
//! - `get_hook_example` - Look up a hook example by name
//! - `get_service_example` - Look up a service example by name
//! - `get_screen_example` - Look up a screen example by name
//! - `get_theme_example` - Look up a theme example by name
//! - `list_available_examples` - List every example, grouped by category
//!
//! ## Usage
//!
//! ```rust,ignore
//! use exemplar::config::ResourceConfig;
//! use exemplar::mcp::McpServer;
//!
//! fn main() {
//!     let config = ResourceConfig::new(".");
//!     McpServer::new(config).run().unwrap();
//! }
//! ```

mod protocol;
mod server;
pub mod tools;

pub use protocol::{JsonRpcError, JsonRpcRequest, JsonRpcResponse, ToolDefinition, ToolResult};
pub use server::McpServer;
