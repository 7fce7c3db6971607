//! MCP Error Handling
//!
//! Protocol-level failures and their mapping onto JSON-RPC error objects.
//! Tool-level failures never reach this module; they travel inside an
//! `isError` tool result instead.

use crate::mcp::protocol::*;
use serde_json::Value;
use thiserror::Error;
use tracing::{error, warn};

/// Failures that surface to the client as a JSON-RPC error object
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum McpError {
    #[error("Method not found: {method}")]
    MethodNotFound { method: String },

    #[error("{message}")]
    InvalidParams { message: String },

    #[error("Internal server error: {message}")]
    InternalError { message: String },
}

impl McpError {
    /// JSON-RPC error code for this failure
    #[inline]
    pub fn code(&self) -> i32 {
        match self {
            Self::MethodNotFound { .. } => error_codes::METHOD_NOT_FOUND,
            Self::InvalidParams { .. } => error_codes::INVALID_PARAMS,
            Self::InternalError { .. } => error_codes::INTERNAL_ERROR,
        }
    }

    /// Convert MCP error to JSON-RPC error
    #[inline]
    pub fn to_jsonrpc_error(&self) -> JsonRpcError {
        JsonRpcError::new(self.code(), self.to_string(), None)
    }

    /// Create error response message
    #[inline]
    pub fn to_response(&self, id: Option<Value>) -> Response {
        Response::error(id, self.to_jsonrpc_error())
    }

    /// Log the error with appropriate level
    #[inline]
    pub fn log(&self) {
        match self {
            Self::MethodNotFound { .. } | Self::InvalidParams { .. } => {
                warn!("Client error: {}", self);
            }
            Self::InternalError { .. } => {
                error!("Server error: {}", self);
            }
        }
    }
}

/// Result type for MCP operations
pub type McpResult<T> = Result<T, McpError>;

/// Undecodable input and unserializable output are both internal errors
impl From<serde_json::Error> for McpError {
    #[inline]
    fn from(error: serde_json::Error) -> Self {
        Self::InternalError {
            message: error.to_string(),
        }
    }
}
