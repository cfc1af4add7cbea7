// ABOUTME: Model Context Protocol (MCP) implementation for the recipe server
// ABOUTME: Request processing, shared resources, protocol schema, and the stdio transport
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HowToCook MCP Contributors

/// JSON-RPC method routing and tools/call dispatch
pub mod mcp_request_processor;
/// Shared server resources
pub mod resources;
/// MCP schema types
pub mod schema;
/// Stdio transport
pub mod transport_manager;

pub use mcp_request_processor::McpRequestProcessor;
pub use resources::ServerResources;
pub use transport_manager::StdioTransport;
