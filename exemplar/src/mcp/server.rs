//! MCP server implementation
//!
//! Implements the stdio transport for the Model Context Protocol. Requests
//! are newline-delimited JSON-RPC 2.0 on stdin; responses are written to
//! stdout. Logging goes to stderr so it never interleaves with the
//! protocol stream.

use std::io::{BufRead, BufReader, Write};

use serde_json::{json, Value};

use super::protocol::{
    JsonRpcError, JsonRpcRequest, JsonRpcResponse, ServerCapabilities, ServerInfo,
    ToolResult, MCP_PROTOCOL_VERSION,
};
use super::tools::{get_tool_definitions, handle_tool_call};
use crate::config::ResourceConfig;

/// MCP server for exemplar
///
/// Serves coding standards and code examples to AI agents over stdio. Each
/// request runs to completion before the next is read; the only shared
/// state is the immutable resource configuration.
pub struct McpServer {
    config: ResourceConfig,
}

impl McpServer {
    /// Create a server over the given resource tree.
    pub fn new(config: ResourceConfig) -> Self {
        Self { config }
    }

    /// Run the MCP server on stdio
    ///
    /// Blocks and handles requests until EOF is received or a write error
    /// occurs.
    pub fn run(&self) -> crate::Result<()> {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        let mut reader = BufReader::new(stdin.lock());
        let mut writer = stdout.lock();

        tracing::info!(
            "Exemplar MCP server started (protocol version {})",
            MCP_PROTOCOL_VERSION
        );

        loop {
            let mut line = String::new();
            match reader.read_line(&mut line) {
                Ok(0) => {
                    tracing::info!("EOF received, shutting down");
                    break;
                }
                Ok(_) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }

                    tracing::debug!("Received: {}", line);

                    let response = match serde_json::from_str::<JsonRpcRequest>(line) {
                        Ok(request) => self.handle_request(request),
                        Err(e) => Some(JsonRpcResponse::error(
                            None,
                            JsonRpcError::parse_error(format!("Parse error: {}", e)),
                        )),
                    };

                    if let Some(response) = response {
                        let response_json = serde_json::to_string(&response)?;
                        writeln!(writer, "{}", response_json)?;
                        writer.flush()?;
                        tracing::debug!("Sent: {}", response_json);
                    }
                }
                Err(e) => {
                    tracing::error!("Read error: {}", e);
                    break;
                }
            }
        }

        Ok(())
    }

    /// Handle a single JSON-RPC request. Returns `None` for notifications,
    /// which must not be answered.
    fn handle_request(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        if request.method.starts_with("notifications/") {
            return None;
        }

        let result = match request.method.as_str() {
            "initialize" => self.handle_initialize(&request.params),
            "tools/list" => self.handle_tools_list(),
            "tools/call" => self.handle_tools_call(&request.params),
            "ping" => Ok(json!({})),
            _ => Err(JsonRpcError::method_not_found(&request.method)),
        };

        Some(match result {
            Ok(value) => JsonRpcResponse::success(request.id, value),
            Err(error) => JsonRpcResponse::error(request.id, error),
        })
    }

    /// Handle initialize request
    fn handle_initialize(&self, _params: &Option<Value>) -> Result<Value, JsonRpcError> {
        let capabilities = ServerCapabilities::default();
        let server_info = ServerInfo::default();

        Ok(json!({
            "protocolVersion": MCP_PROTOCOL_VERSION,
            "capabilities": capabilities,
            "serverInfo": server_info
        }))
    }

    /// Handle tools/list request
    fn handle_tools_list(&self) -> Result<Value, JsonRpcError> {
        let tools = get_tool_definitions();
        Ok(json!({ "tools": tools }))
    }

    /// Handle tools/call request
    fn handle_tools_call(&self, params: &Option<Value>) -> Result<Value, JsonRpcError> {
        let params = params
            .as_ref()
            .ok_or_else(|| JsonRpcError::invalid_params("Missing params"))?;

        let tool_name = params
            .get("name")
            .and_then(|v| v.as_str())
            .ok_or_else(|| JsonRpcError::invalid_params("Missing tool name"))?;

        let arguments = params.get("arguments").cloned().unwrap_or(json!({}));

        let result: ToolResult = handle_tool_call(&self.config, tool_name, &arguments)?;

        serde_json::to_value(result).map_err(|e| JsonRpcError::server_error(e.to_string()))
    }
}
