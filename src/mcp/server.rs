//! MCP Server Implementation
//!
//! This module provides the request dispatcher and the line-oriented stdio
//! transport loop. Requests are handled strictly one at a time: a response
//! is written and flushed before the next line is read.

use crate::mcp::errors::{McpError, McpResult};
use crate::mcp::protocol::*;
use crate::mcp::tools::ToolRegistry;
use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;
use tokio::io::{self, AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, error, info};

/// MCP Server state and configuration
pub struct McpServer {
    /// Server implementation information
    pub server_info: Implementation,
    /// Server capabilities
    pub capabilities: ServerCapabilities,
    /// Registered tools
    pub tools: ToolRegistry,
}

impl McpServer {
    /// Create a new MCP server serving the given tools
    #[inline]
    pub fn new(name: String, version: String, tools: ToolRegistry) -> Self {
        Self {
            server_info: Implementation { name, version },
            capabilities: ServerCapabilities {
                tools: ToolsCapability::default(),
            },
            tools,
        }
    }

    /// Start the server using stdio transport
    #[inline]
    pub async fn serve_stdio(&self) -> Result<()> {
        info!(
            "Starting MCP server {} {} with stdio transport",
            self.server_info.name, self.server_info.version
        );

        let reader = BufReader::new(io::stdin());
        let mut stdout = io::stdout();
        self.serve(reader, &mut stdout).await
    }

    /// Run the transport loop until `reader` reaches end of input
    #[inline]
    pub async fn serve<R, W>(&self, mut reader: R, writer: &mut W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            match reader.read_until(b'\n', &mut buf).await {
                Ok(0) => {
                    info!("EOF reached, closing connection");
                    break;
                }
                Ok(_) => {
                    // Invalid UTF-8 becomes U+FFFD and fails to decode like any other bad line
                    let line = String::from_utf8_lossy(&buf);
                    let response = self.handle_line(line.trim_end_matches(['\r', '\n']));
                    self.send_message(writer, &response).await?;
                }
                Err(e) => {
                    error!("Error reading from stdin: {}", e);
                    break;
                }
            }
        }

        info!("MCP server stopped");
        Ok(())
    }

    /// Decode one input line and dispatch it
    #[inline]
    pub fn handle_line(&self, line: &str) -> Response {
        match serde_json::from_str::<Request>(line) {
            Ok(request) => self.handle_request(&request),
            Err(e) => {
                let error = McpError::from(e);
                error.log();
                error.to_response(None)
            }
        }
    }

    /// Route a request to its handler; every failure becomes an error response
    #[inline]
    pub fn handle_request(&self, request: &Request) -> Response {
        debug!("Processing method: {}", request.method);

        let result = match request.method.as_str() {
            "initialize" => self.handle_initialize(),
            "tools/list" => self.handle_list_tools(),
            "tools/call" => self.handle_call_tool(request.params.as_ref()),
            _ => Err(McpError::MethodNotFound {
                method: request.method.clone(),
            }),
        };

        let id = request.id().cloned();
        match result {
            Ok(value) => Response::success(id, value),
            Err(e) => {
                e.log();
                e.to_response(id)
            }
        }
    }

    /// Handle initialize request
    #[inline]
    pub fn handle_initialize(&self) -> McpResult<Value> {
        let result = InitializeResult {
            protocol_version: MCP_VERSION.to_string(),
            capabilities: self.capabilities.clone(),
            server_info: self.server_info.clone(),
        };

        info!("Initializing server with protocol version {}", MCP_VERSION);
        Ok(serde_json::to_value(result)?)
    }

    /// Handle list tools request
    #[inline]
    pub fn handle_list_tools(&self) -> McpResult<Value> {
        let result = ListToolsResult {
            tools: self.tools.list_tools(),
        };
        Ok(serde_json::to_value(result)?)
    }

    /// Handle call tool request
    #[inline]
    pub fn handle_call_tool(&self, params: Option<&Value>) -> McpResult<Value> {
        let params = params.ok_or_else(|| McpError::InvalidParams {
            message: "Invalid parameters".to_string(),
        })?;
        let params = CallToolParams::deserialize(params).map_err(|e| McpError::InvalidParams {
            message: e.to_string(),
        })?;

        let result = self.tools.invoke(&params.name, &params.arguments);
        Ok(serde_json::to_value(result)?)
    }

    /// Send a message to the client as a single flushed line
    async fn send_message<W>(&self, writer: &mut W, message: &Response) -> Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        let json = serde_json::to_string(message).context("Failed to encode response")?;
        writer.write_all(json.as_bytes()).await?;
        writer.write_all(b"\n").await?;
        writer.flush().await?;
        Ok(())
    }
}
