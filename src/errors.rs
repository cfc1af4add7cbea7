// ABOUTME: Error handling for the server crate, re-exported from howtocook-core
// ABOUTME: AppError, ErrorCode, ToolError, and the AppResult alias
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HowToCook MCP Contributors

//! # Unified Error Handling
//!
//! The error types live in `howtocook-core` so the engine crate and the server
//! share one vocabulary. They map to JSON-RPC codes through
//! [`ErrorCode::jsonrpc_code`].

pub use howtocook_core::errors::{AppError, AppResult, ErrorCode, ToolError};
