// ABOUTME: Defines the McpTool trait and ToolCapabilities for the recipe tools
// ABOUTME: Tools implement this trait to be registered and executed via the ToolRegistry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HowToCook MCP Contributors

//! # MCP Tool Trait and Capabilities
//!
//! Every tool implements [`McpTool`]:
//! - metadata (name, description, input schema)
//! - capability flags for discovery and logging
//! - async execution against a [`ToolExecutionContext`]

use async_trait::async_trait;
use bitflags::bitflags;
use serde_json::Value;

use crate::errors::AppResult;
use crate::mcp::schema::JsonSchema;

use super::context::ToolExecutionContext;
use super::result::ToolResult;

bitflags! {
    /// Capabilities that tools declare for discovery and logging
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ToolCapabilities: u16 {
        /// Tool reads the recipe corpus snapshot
        const READS_CORPUS = 0b0000_0001;
        /// Tool output depends on the random source
        const RANDOMIZED = 0b0000_0010;
        /// Tool runs the meal planning engine
        const PLANNING = 0b0000_0100;
        /// Tool is a direct lookup or listing
        const LOOKUP = 0b0000_1000;
        /// Tool validates typed arguments
        const VALIDATES_INPUT = 0b0001_0000;
    }
}

impl ToolCapabilities {
    /// Get a description of all enabled capabilities for logging
    #[must_use]
    pub fn describe(&self) -> String {
        let parts: Vec<&str> = [
            (Self::READS_CORPUS, "reads_corpus"),
            (Self::RANDOMIZED, "randomized"),
            (Self::PLANNING, "planning"),
            (Self::LOOKUP, "lookup"),
            (Self::VALIDATES_INPUT, "validates_input"),
        ]
        .into_iter()
        .filter(|(flag, _)| self.contains(*flag))
        .map(|(_, label)| label)
        .collect();

        if parts.is_empty() {
            "none".to_owned()
        } else {
            parts.join(", ")
        }
    }
}

/// The trait all MCP tools implement
///
/// # Example
///
/// ```rust,no_run
/// use async_trait::async_trait;
/// use howtocook_mcp_server::tools::{McpTool, ToolCapabilities, ToolResult, ToolExecutionContext};
/// use howtocook_mcp_server::mcp::schema::JsonSchema;
/// use howtocook_mcp_server::errors::AppResult;
/// use serde_json::Value;
///
/// struct CountRecipesTool;
///
/// #[async_trait]
/// impl McpTool for CountRecipesTool {
///     fn name(&self) -> &'static str {
///         "countRecipes"
///     }
///
///     fn description(&self) -> &'static str {
///         "Count recipes in the corpus"
///     }
///
///     fn input_schema(&self) -> JsonSchema {
///         JsonSchema::empty()
///     }
///
///     fn capabilities(&self) -> ToolCapabilities {
///         ToolCapabilities::READS_CORPUS | ToolCapabilities::LOOKUP
///     }
///
///     async fn execute(&self, _args: Value, context: &ToolExecutionContext) -> AppResult<ToolResult> {
///         let recipes = context.recipes().await;
///         Ok(ToolResult::ok(serde_json::json!({"count": recipes.len()})))
///     }
/// }
/// ```
#[async_trait]
pub trait McpTool: Send + Sync {
    /// Unique identifier used for lookup and `tools/call`
    fn name(&self) -> &'static str;

    /// Human-readable description for LLM consumption
    fn description(&self) -> &'static str;

    /// JSON Schema for input parameters, returned by `tools/list`
    fn input_schema(&self) -> JsonSchema;

    /// Capability flags
    fn capabilities(&self) -> ToolCapabilities;

    /// Execute the tool with given arguments and context
    ///
    /// Expected failures (bad arguments, nothing found, not enough recipes) are
    /// returned as `Ok` results flagged with `is_error`.
    ///
    /// # Errors
    ///
    /// Returns `AppError` only for unexpected internal failures
    async fn execute(&self, args: Value, context: &ToolExecutionContext) -> AppResult<ToolResult>;
}
