//! MCP Protocol Types and Messages
//!
//! This module defines the JSON-RPC 2.0 envelope and the subset of Model
//! Context Protocol messages served over stdio: `initialize`, `tools/list`
//! and `tools/call`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// MCP Protocol Version
pub const MCP_VERSION: &str = "2024-11-05";

/// JSON-RPC 2.0 version identifier
pub const JSONRPC_VERSION: &str = "2.0";

/// Fields shared by every JSON-RPC message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    #[serde(default = "default_jsonrpc")]
    pub jsonrpc: String,
    /// Opaque correlation token; `None` encodes as `null`
    #[serde(default)]
    pub id: Option<Value>,
}

fn default_jsonrpc() -> String {
    JSONRPC_VERSION.to_string()
}

/// JSON-RPC 2.0 Request message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

/// JSON-RPC 2.0 Response message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    #[serde(flatten)]
    pub envelope: Envelope,
    #[serde(flatten)]
    pub outcome: Outcome,
}

/// Payload of a response: a result or an error, never both
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Outcome {
    #[serde(rename = "result")]
    Result(Value),
    #[serde(rename = "error")]
    Error(JsonRpcError),
}

/// JSON-RPC 2.0 Error object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

/// MCP Initialize Response result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InitializeResult {
    #[serde(rename = "protocolVersion")]
    pub protocol_version: String,
    pub capabilities: ServerCapabilities,
    #[serde(rename = "serverInfo")]
    pub server_info: Implementation,
}

/// Server capabilities
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerCapabilities {
    pub tools: ToolsCapability,
}

/// Tools capability; serialized as an empty object
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolsCapability {}

/// Implementation information
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Implementation {
    pub name: String,
    pub version: String,
}

/// Tool definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tool {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// List tools response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListToolsResult {
    pub tools: Vec<Tool>,
}

/// Tool call request parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallToolParams {
    pub name: String,
    pub arguments: Map<String, Value>,
}

/// Tool call result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallToolResult {
    pub content: Vec<ToolContent>,
    #[serde(rename = "isError")]
    pub is_error: bool,
}

/// Tool content types
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ToolContent {
    #[serde(rename = "text")]
    Text { text: String },
}

/// Standard JSON-RPC error codes
pub mod error_codes {
    pub const METHOD_NOT_FOUND: i32 = -32601;
    pub const INVALID_PARAMS: i32 = -32602;
    pub const INTERNAL_ERROR: i32 = -32603;
}

impl Envelope {
    /// Create an envelope carrying `id`
    #[inline]
    pub fn new(id: Option<Value>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
        }
    }
}

impl Request {
    /// Create a new JSON-RPC request
    #[inline]
    pub fn new(method: impl Into<String>, params: Option<Value>, id: Option<Value>) -> Self {
        Self {
            envelope: Envelope::new(id),
            method: method.into(),
            params,
        }
    }

    /// Correlation id of this request
    #[inline]
    pub fn id(&self) -> Option<&Value> {
        self.envelope.id.as_ref()
    }
}

impl Response {
    /// Create a successful response
    #[inline]
    pub fn success(id: Option<Value>, result: Value) -> Self {
        Self {
            envelope: Envelope::new(id),
            outcome: Outcome::Result(result),
        }
    }

    /// Create an error response
    #[inline]
    pub fn error(id: Option<Value>, error: JsonRpcError) -> Self {
        Self {
            envelope: Envelope::new(id),
            outcome: Outcome::Error(error),
        }
    }

    /// Correlation id echoed from the request
    #[inline]
    pub fn id(&self) -> Option<&Value> {
        self.envelope.id.as_ref()
    }

    /// The result value, if this is a success response
    #[inline]
    pub fn result(&self) -> Option<&Value> {
        match &self.outcome {
            Outcome::Result(value) => Some(value),
            Outcome::Error(_) => None,
        }
    }

    /// The error object, if this is an error response
    #[inline]
    pub fn error_object(&self) -> Option<&JsonRpcError> {
        match &self.outcome {
            Outcome::Result(_) => None,
            Outcome::Error(error) => Some(error),
        }
    }
}

impl JsonRpcError {
    /// Create a new JSON-RPC error
    #[inline]
    pub fn new(code: i32, message: String, data: Option<Value>) -> Self {
        Self {
            code,
            message,
            data,
        }
    }
}

impl CallToolResult {
    /// Successful result carrying a single text item
    #[inline]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent::Text { text: text.into() }],
            is_error: false,
        }
    }

    /// Error-flagged result carrying a single diagnostic text item
    #[inline]
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent::Text { text: text.into() }],
            is_error: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_round_trip_keeps_null_id() {
        let line = r#"{"jsonrpc":"2.0","id":null,"method":"tools/list"}"#;
        let request: Request = serde_json::from_str(line).expect("valid request");
        assert_eq!(request.id(), None);
        assert_eq!(request.params, None);

        let encoded = serde_json::to_value(&request).expect("serializable");
        assert_eq!(encoded, json!({"jsonrpc": "2.0", "id": null, "method": "tools/list"}));

        let decoded: Request = serde_json::from_value(encoded).expect("valid request");
        assert_eq!(decoded, request);
    }

    #[test]
    fn request_round_trip_keeps_all_fields() {
        let request = Request::new(
            "tools/call",
            Some(json!({"name": "count_characters", "arguments": {"text": "x"}})),
            Some(json!("abc-1")),
        );

        let line = serde_json::to_string(&request).expect("serializable");
        let decoded: Request = serde_json::from_str(&line).expect("valid request");
        assert_eq!(decoded, request);
        assert_eq!(decoded.id(), Some(&json!("abc-1")));
    }

    #[test]
    fn request_defaults_missing_jsonrpc_and_id() {
        let request: Request = serde_json::from_str(r#"{"method":"initialize"}"#)
            .expect("method alone is enough");
        assert_eq!(request.envelope.jsonrpc, JSONRPC_VERSION);
        assert_eq!(request.id(), None);
    }

    #[test]
    fn request_without_method_is_rejected() {
        let result: Result<Request, _> = serde_json::from_str(r#"{"jsonrpc":"2.0","id":1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn success_response_shape() {
        let response = Response::success(Some(json!(7)), json!({"ok": true}));
        let value = serde_json::to_value(&response).expect("serializable");
        assert_eq!(value, json!({"jsonrpc": "2.0", "id": 7, "result": {"ok": true}}));
        assert!(value.get("error").is_none());
    }

    #[test]
    fn error_response_shape() {
        let response = Response::error(
            None,
            JsonRpcError::new(error_codes::INTERNAL_ERROR, "boom".to_string(), None),
        );
        let value = serde_json::to_value(&response).expect("serializable");
        assert_eq!(
            value,
            json!({"jsonrpc": "2.0", "id": null, "error": {"code": -32603, "message": "boom"}})
        );
        assert!(value.get("result").is_none());
    }

    #[test]
    fn response_round_trip() {
        let responses = [
            Response::success(None, json!(null)),
            Response::success(Some(json!("id")), json!({"tools": []})),
            Response::error(
                Some(json!(3)),
                JsonRpcError::new(
                    error_codes::INVALID_PARAMS,
                    "bad".to_string(),
                    Some(json!({"field": "name"})),
                ),
            ),
        ];

        for response in responses {
            let line = serde_json::to_string(&response).expect("serializable");
            let decoded: Response = serde_json::from_str(&line).expect("valid response");
            assert_eq!(decoded, response, "line={line}");
        }
    }

    #[test]
    fn call_tool_result_serializes_content_type() {
        let value = serde_json::to_value(CallToolResult::error("nope")).expect("serializable");
        assert_eq!(
            value,
            json!({"content": [{"type": "text", "text": "nope"}], "isError": true})
        );
    }
}
