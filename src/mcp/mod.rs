//! MCP (Model Context Protocol) Server Implementation
//!
//! This module provides a JSON-RPC 2.0 server over stdio following MCP
//! protocol version 2024-11-05, serving the character analysis tools.


pub mod arguments;
pub mod errors;
pub mod protocol;
pub mod server;
pub mod tools;

pub use errors::{McpError, McpResult};
pub use protocol::{
    CallToolParams, CallToolResult, JsonRpcError, ListToolsResult, Request, Response, Tool,
    ToolContent,
};
pub use server::McpServer;
pub use tools::{ToolError, ToolHandler, ToolRegistry};
