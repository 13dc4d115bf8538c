//! Error taxonomy for tool invocations.
//!
//! None of these escape the registry as a fault; every variant ends up as
//! a failed [`crate::ToolResult`].

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolError {
    /// A required setting (e.g. an API credential) is missing
    #[error("{0}")]
    Configuration(String),

    #[error("Unknown tool: {name}. Valid tools: {}", .valid.join(", "))]
    UnknownTool {
        name: String,
        valid: Vec<&'static str>,
    },

    /// The external completion provider failed or replied with garbage
    #[error("{0}")]
    Collaborator(String),

    #[error("Invalid arguments: {0}")]
    MalformedArguments(String),
}
