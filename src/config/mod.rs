// ABOUTME: Configuration management module for server settings
// ABOUTME: Environment-only configuration with command-line overrides applied by the binary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HowToCook MCP Contributors

//! Configuration module for the HowToCook MCP server
//!
//! - **Environment**: Server configuration from environment variables

/// Environment and server configuration
pub mod environment;

pub use environment::{env_keys, ServerConfig};
