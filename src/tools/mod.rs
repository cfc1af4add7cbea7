// ABOUTME: MCP tool layer: trait, registry, execution context, typed parameters
// ABOUTME: Hosts the five recipe tools exposed over tools/list and tools/call
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HowToCook MCP Contributors

//! Tool layer for the HowToCook MCP server
//!
//! Each tool is a unit struct implementing [`McpTool`]. The [`ToolRegistry`] is
//! built once at startup and shared with the request processor.

/// Execution context handed to every tool
pub mod context;
/// Tool implementations grouped by purpose
pub mod implementations;
/// Typed argument structs and validation
pub mod params;
/// Name-keyed tool registry
pub mod registry;
/// Tool result type
pub mod result;
/// `McpTool` trait and capability flags
pub mod traits;

pub use context::ToolExecutionContext;
pub use registry::ToolRegistry;
pub use result::ToolResult;
pub use traits::{McpTool, ToolCapabilities};
