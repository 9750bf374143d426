//! MCP tool handlers for exemplar
//!
//! Each tool handler processes a specific tool call and returns results.
//! Standards tools return the raw document; example tools resolve a name
//! through the [`Resolver`]; the listing tool renders the catalog.

use serde_json::{json, Value};

use super::protocol::{JsonRpcError, ToolDefinition, ToolResult};
use crate::catalog::CatalogBuilder;
use crate::category::Category;
use crate::config::ResourceConfig;
use crate::error::Error;
use crate::resolver::Resolver;
use crate::standards::{self, Standard};

/// Tool-name prefix some MCP clients prepend; stripped before dispatch.
const CLIENT_TOOL_PREFIX: &str = "mcp0_";

/// Get all tool definitions
pub fn get_tool_definitions() -> Vec<ToolDefinition> {
    let mut tools = Vec::new();

    for (name, description) in [
        (
            "get_project_structure",
            "Get project structure standards for React Native development",
        ),
        (
            "get_api_communication",
            "Get API communication standards for React Native development",
        ),
        (
            "get_component_design",
            "Get component design standards for React Native development",
        ),
        (
            "get_state_management",
            "Get state management standards for React Native development",
        ),
    ] {
        tools.push(ToolDefinition {
            name: name.to_string(),
            description: description.to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {},
                "required": []
            }),
        });
    }

    for (name, description, param, title) in [
        (
            "get_component_example",
            "Get a React Native component example",
            "component_name",
            "Component Name",
        ),
        (
            "get_hook_example",
            "Get a React Native hook example",
            "hook_name",
            "Hook Name",
        ),
        (
            "get_service_example",
            "Get a React Native service example",
            "service_name",
            "Service Name",
        ),
        (
            "get_screen_example",
            "Get a React Native screen example",
            "screen_name",
            "Screen Name",
        ),
        (
            "get_theme_example",
            "Get a React Native theme example",
            "theme_name",
            "Theme Name",
        ),
    ] {
        tools.push(ToolDefinition {
            name: name.to_string(),
            description: description.to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    param: {
                        "title": title,
                        "type": "string",
                        "description": "Name to look up; partial names match by substring"
                    }
                },
                "required": [param]
            }),
        });
    }

    tools.push(ToolDefinition {
        name: "list_available_examples".to_string(),
        description: "List all available code examples by category".to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "category": {
                    "type": "string",
                    "enum": ["components", "hooks", "services", "screens", "themes"],
                    "description": "Restrict the listing to one category"
                },
                "format": {
                    "type": "string",
                    "enum": ["json", "text"],
                    "description": "Output shape (default: json)",
                    "default": "json"
                }
            },
            "required": []
        }),
    });

    tools
}

/// Handle tool call dispatch
pub fn handle_tool_call(
    config: &ResourceConfig,
    tool_name: &str,
    arguments: &Value,
) -> Result<ToolResult, JsonRpcError> {
    let tool_name = tool_name
        .strip_prefix(CLIENT_TOOL_PREFIX)
        .unwrap_or(tool_name);

    match tool_name {
        "get_project_structure" => tool_standard(config, Standard::ProjectStructure),
        "get_api_communication" => tool_standard(config, Standard::ApiCommunication),
        "get_component_design" => tool_standard(config, Standard::ComponentDesign),
        "get_state_management" => tool_standard(config, Standard::StateManagement),
        "get_component_example" => {
            tool_example(config, arguments, Category::Components, "component_name")
        }
        "get_hook_example" => tool_example(config, arguments, Category::Hooks, "hook_name"),
        "get_service_example" => {
            tool_example(config, arguments, Category::Services, "service_name")
        }
        "get_screen_example" => tool_example(config, arguments, Category::Screens, "screen_name"),
        "get_theme_example" => tool_example(config, arguments, Category::Themes, "theme_name"),
        "list_available_examples" => tool_list(config, arguments),
        _ => Err(JsonRpcError::invalid_params(format!(
            "Unknown tool: {}",
            tool_name
        ))),
    }
}

/// Serve one of the fixed standards documents
fn tool_standard(
    config: &ResourceConfig,
    standard: Standard,
) -> Result<ToolResult, JsonRpcError> {
    match standards::load(config, standard) {
        Ok(content) => ToolResult::json(&json!({ "content": content })),
        Err(Error::StandardNotFound(id)) => {
            ToolResult::json(&json!({ "error": format!("Standard {} not found", id) }))
        }
        Err(err) => {
            tracing::error!("Failed to serve standard {}: {}", standard, err);
            ToolResult::json(&json!({
                "error": format!("Standard {} is unavailable", standard)
            }))
        }
    }
}

/// Resolve and serve a code example
fn tool_example(
    config: &ResourceConfig,
    args: &Value,
    category: Category,
    param: &str,
) -> Result<ToolResult, JsonRpcError> {
    let name = args
        .get(param)
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| JsonRpcError::invalid_params(format!("Missing {} parameter", param)))?;

    match Resolver::new(config).resolve(category, name) {
        Ok(resolved) => ToolResult::json(&json!({
            "content": resolved.content,
            "path": resolved.relative_path
        })),
        Err(Error::ExampleNotFound { category, name }) => ToolResult::json(&json!({
            "error": format!("No {} example matching '{}'", category, name)
        })),
        Err(err @ Error::DirectoryMissing(_)) => {
            // Deployment defect; callers still get a plain not-found body.
            tracing::error!("{}", err);
            ToolResult::json(&json!({
                "error": format!("No {} example matching '{}'", category, name)
            }))
        }
        Err(err @ Error::ReadFailure { .. }) => {
            tracing::error!("{}", err);
            ToolResult::json(&json!({
                "error": format!("Example '{}' in {} is unavailable", name, category)
            }))
        }
        Err(err) => Err(JsonRpcError::server_error(err.to_string())),
    }
}

/// List available examples, optionally filtered to one category
fn tool_list(config: &ResourceConfig, args: &Value) -> Result<ToolResult, JsonRpcError> {
    let builder = CatalogBuilder::new(config);

    let catalog = match args.get("category").and_then(|v| v.as_str()) {
        Some(raw) => {
            let category: Category = raw
                .parse()
                .map_err(|e: Error| JsonRpcError::invalid_params(e.to_string()))?;
            crate::catalog::Catalog {
                categories: vec![builder.build_category(category)],
            }
        }
        None => builder.build(),
    };

    let format = args.get("format").and_then(|v| v.as_str()).unwrap_or("json");
    match format {
        "json" => {
            let value = serde_json::to_value(&catalog)
                .map_err(|e| JsonRpcError::internal_error(e.to_string()))?;
            ToolResult::json(&value)
        }
        "text" => Ok(ToolResult::text(catalog.to_text())),
        other => Err(JsonRpcError::invalid_params(format!(
            "Unknown format: {}",
            other
        ))),
    }
}
