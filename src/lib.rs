// ABOUTME: Main library entry point for the HowToCook recipe MCP server
// ABOUTME: Serves recipe lookup and meal-planning tools over MCP stdio
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HowToCook MCP Contributors

#![deny(unsafe_code)]

//! # HowToCook MCP Server
//!
//! A Model Context Protocol (MCP) server over a public Chinese home-cooking
//! recipe corpus. It lists and looks up recipes, recommends a week of meals
//! with a consolidated shopping list, and suggests dishes for a meal today.
//!
//! ## Architecture
//!
//! - **Providers**: fetch the corpus document (HTTP or local file) and normalize records
//! - **Cache**: time-bounded snapshot of the corpus with stale fallback
//! - **Tools**: the five MCP tools, their parameters, registry, and results
//! - **MCP**: JSON-RPC request processing and the stdio transport
//! - **Config**: environment-only configuration
//!
//! The planning engine lives in `howtocook-intelligence`; shared types and
//! constants live in `howtocook-core`.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use howtocook_mcp_server::config::ServerConfig;
//! use howtocook_mcp_server::mcp::{ServerResources, StdioTransport};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     let resources = Arc::new(ServerResources::from_config(&config));
//!     StdioTransport::new(resources).run().await?;
//!     Ok(())
//! }
//! ```

/// Time-bounded recipe corpus cache
pub mod cache;

/// Environment configuration
pub mod config;

/// Application constants
pub mod constants;

/// Unified error handling
pub mod errors;

/// JSON-RPC 2.0 message types
pub mod jsonrpc;

/// Structured logging setup
pub mod logging;

/// MCP protocol processing and stdio transport
pub mod mcp;

/// Recipe and plan data models
pub mod models;

/// Recipe corpus sources
pub mod providers;

/// MCP tools for recipe lookup and meal planning
pub mod tools;

/// Shared utilities
pub mod utils;
