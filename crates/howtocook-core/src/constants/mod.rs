// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for caching, protocol, tools, categories, and planning
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HowToCook MCP Contributors

//! Constants module
//!
//! Constants are grouped into logical domains rather than a single large file.

/// Corpus cache and fetch constants (TTL, timeouts, source URL)
pub mod cache;
/// Recipe category labels used by the planning heuristics
pub mod categories;
/// Meal planning thresholds and day labels
pub mod planning;
/// Protocol-specific constants for MCP and JSON-RPC
pub mod protocol;
/// Tool identifiers
pub mod tools;

/// Tool-related constants re-export
pub use tools::*;
