// ABOUTME: Defines ToolResult, the value returned by tool execution
// ABOUTME: Converts tool output into the MCP text content block with an error flag
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HowToCook MCP Contributors

//! # Tool Result Types
//!
//! Bridges tool implementations with the MCP `tools/call` response format.

use serde_json::Value;

use crate::errors::AppResult;
use crate::mcp::schema::{Content, ToolResponse};

/// Result returned by tool execution
#[derive(Debug, Clone, PartialEq)]
pub struct ToolResult {
    /// The payload returned to the client
    pub content: Value,
    /// Whether this result represents a structured failure
    pub is_error: bool,
}

impl ToolResult {
    /// Create a successful result
    #[must_use]
    pub const fn ok(content: Value) -> Self {
        Self {
            content,
            is_error: false,
        }
    }

    /// Create a structured failure result
    #[must_use]
    pub const fn error(content: Value) -> Self {
        Self {
            content,
            is_error: true,
        }
    }

    /// Render as an MCP tool response with one pretty-printed text block
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the payload cannot be rendered
    pub fn into_response(self) -> AppResult<ToolResponse> {
        let text = serde_json::to_string_pretty(&self.content)?;
        Ok(ToolResponse {
            content: vec![Content::Text { text }],
            is_error: self.is_error,
        })
    }
}

impl Default for ToolResult {
    fn default() -> Self {
        Self::ok(Value::Null)
    }
}
