//! MCP Tools Implementation
//!
//! This module provides the tool registry and the three character analysis
//! tools it serves.

use crate::analysis::{self, AnalysisError};
use crate::mcp::arguments::Arguments;
use crate::mcp::protocol::*;
use serde::Serialize;
use serde_json::{Map, Value, json};
use thiserror::Error;
use tracing::{debug, warn};

/// Failures reported to the client as an `isError` tool result
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ToolError {
    #[error("Unknown tool: {name}")]
    UnknownTool { name: String },

    #[error("Missing required argument: {key}")]
    MissingArgument { key: String },

    #[error("Invalid argument type for {key}")]
    InvalidArgumentType { key: String },

    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error("Failed to serialize tool output: {message}")]
    Output { message: String },
}

/// Tool handler trait for implementing tool execution
pub trait ToolHandler: Send + Sync {
    /// Descriptor published through `tools/list`
    fn tool_definition(&self) -> Tool;

    /// Run the tool, returning its structured output
    fn handle(&self, args: Arguments<'_>) -> Result<Value, ToolError>;
}

/// Case-sensitive character counting tool
pub struct CountCharactersHandler;

/// Case-insensitive character counting tool
pub struct CountCharactersIgnoreCaseHandler;

/// Character frequency statistics tool
pub struct CharacterStatsHandler;

fn text_and_character_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "text": {
                "type": "string",
                "description": "The text to analyze"
            },
            "character": {
                "type": "string",
                "description": "The character to count (single character)"
            }
        },
        "required": ["text", "character"]
    })
}

fn to_output<T: Serialize>(output: &T) -> Result<Value, ToolError> {
    serde_json::to_value(output).map_err(|e| ToolError::Output {
        message: e.to_string(),
    })
}

impl ToolHandler for CountCharactersHandler {
    #[inline]
    fn tool_definition(&self) -> Tool {
        Tool {
            name: "count_characters".to_string(),
            description: "Count occurrences of a specific character in text (case-sensitive). Perfect for counting 'r' in 'strawberry'!".to_string(),
            input_schema: text_and_character_schema(),
        }
    }

    #[inline]
    fn handle(&self, args: Arguments<'_>) -> Result<Value, ToolError> {
        let text = args.required_string("text")?;
        let character = args.required_string("character")?;

        let count = analysis::count_characters(&text, &character)?;
        to_output(&count)
    }
}

impl ToolHandler for CountCharactersIgnoreCaseHandler {
    #[inline]
    fn tool_definition(&self) -> Tool {
        Tool {
            name: "count_characters_ignore_case".to_string(),
            description: "Count occurrences of a character in text, ignoring case differences"
                .to_string(),
            input_schema: text_and_character_schema(),
        }
    }

    #[inline]
    fn handle(&self, args: Arguments<'_>) -> Result<Value, ToolError> {
        let text = args.required_string("text")?;
        let character = args.required_string("character")?;

        let count = analysis::count_characters_ignore_case(&text, &character)?;
        to_output(&count)
    }
}

impl ToolHandler for CharacterStatsHandler {
    #[inline]
    fn tool_definition(&self) -> Tool {
        Tool {
            name: "get_character_stats".to_string(),
            description: "Get detailed statistics about all characters in the text".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "text": {
                        "type": "string",
                        "description": "The text to analyze"
                    }
                },
                "required": ["text"]
            }),
        }
    }

    #[inline]
    fn handle(&self, args: Arguments<'_>) -> Result<Value, ToolError> {
        let text = args.required_string("text")?;
        to_output(&analysis::character_stats(&text))
    }
}

struct RegisteredTool {
    tool: Tool,
    handler: Box<dyn ToolHandler>,
}

/// Fixed, ordered table of tools built once at startup
pub struct ToolRegistry {
    tools: Vec<RegisteredTool>,
    pretty: bool,
}

impl ToolRegistry {
    /// Create an empty tool registry
    #[inline]
    pub fn new() -> Self {
        Self {
            tools: Vec::new(),
            pretty: true,
        }
    }

    /// Choose between pretty-printed and compact JSON in tool output
    #[inline]
    #[must_use]
    pub fn with_pretty_output(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Register a tool; a later registration under the same name replaces
    /// the earlier one in place
    #[inline]
    pub fn register<H>(&mut self, handler: H)
    where
        H: ToolHandler + 'static,
    {
        let tool = handler.tool_definition();
        let entry = RegisteredTool {
            tool,
            handler: Box::new(handler),
        };

        match self.tools.iter_mut().find(|t| t.tool.name == entry.tool.name) {
            Some(existing) => *existing = entry,
            None => self.tools.push(entry),
        }
    }

    /// Get all registered tools in registration order
    #[inline]
    pub fn list_tools(&self) -> Vec<Tool> {
        self.tools.iter().map(|t| t.tool.clone()).collect()
    }

    /// Get a specific tool by name
    #[inline]
    pub fn get_tool(&self, name: &str) -> Option<&Tool> {
        self.find(name).map(|t| &t.tool)
    }

    /// Number of registered tools
    #[inline]
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Invoke a tool by name, returning its raw structured output
    #[inline]
    pub fn try_invoke(
        &self,
        name: &str,
        arguments: &Map<String, Value>,
    ) -> Result<Value, ToolError> {
        let registered = self.find(name).ok_or_else(|| ToolError::UnknownTool {
            name: name.to_string(),
        })?;

        registered.handler.handle(Arguments::new(arguments))
    }

    /// Invoke a tool by name.
    ///
    /// Every failure, including an unknown tool name, is folded into an
    /// `isError` result so the caller always gets exactly one content item.
    #[inline]
    pub fn invoke(&self, name: &str, arguments: &Map<String, Value>) -> CallToolResult {
        debug!("Executing tool {} with {} argument(s)", name, arguments.len());

        let rendered = self
            .try_invoke(name, arguments)
            .and_then(|output| self.render(&output));

        match rendered {
            Ok(text) => CallToolResult::text(text),
            Err(e) => {
                warn!("Tool '{}' failed: {}", name, e);
                CallToolResult::error(format!("Error executing tool '{}': {}", name, e))
            }
        }
    }

    /// Create the default registry with the character analysis tools
    #[inline]
    pub fn create_default() -> Self {
        let mut registry = Self::new();

        registry.register(CountCharactersHandler);
        registry.register(CountCharactersIgnoreCaseHandler);
        registry.register(CharacterStatsHandler);

        registry
    }

    fn find(&self, name: &str) -> Option<&RegisteredTool> {
        self.tools.iter().find(|t| t.tool.name == name)
    }

    fn render(&self, output: &Value) -> Result<String, ToolError> {
        let text = if self.pretty {
            serde_json::to_string_pretty(output)
        } else {
            serde_json::to_string(output)
        };
        text.map_err(|e| ToolError::Output {
            message: e.to_string(),
        })
    }
}

impl Default for ToolRegistry {
    #[inline]
    fn default() -> Self {
        Self::create_default()
    }
}
