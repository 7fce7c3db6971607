//! Tool argument extraction
//!
//! `tools/call` arguments arrive as a loosely typed JSON map before the
//! target tool is known. Each tool pulls the values it needs through
//! [`Arguments`], which applies one fixed coercion table.

use serde_json::{Map, Value};

use crate::mcp::tools::ToolError;

/// Borrowed view over a `tools/call` argument map
#[derive(Debug, Clone, Copy)]
pub struct Arguments<'a> {
    map: &'a Map<String, Value>,
}

impl<'a> Arguments<'a> {
    #[inline]
    pub fn new(map: &'a Map<String, Value>) -> Self {
        Self { map }
    }

    /// Fetch a required argument as a string.
    ///
    /// Strings pass through, numbers and booleans use their JSON text,
    /// anything else is rejected.
    #[inline]
    pub fn required_string(&self, key: &str) -> Result<String, ToolError> {
        let value = self.map.get(key).ok_or_else(|| ToolError::MissingArgument {
            key: key.to_string(),
        })?;

        coerce_to_string(value).ok_or_else(|| ToolError::InvalidArgumentType {
            key: key.to_string(),
        })
    }
}

/// String form of an argument value, if it has one
#[inline]
pub fn coerce_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
