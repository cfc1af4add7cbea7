// ABOUTME: Small shared utilities for the server crate
// ABOUTME: Currently the pooled HTTP client used by corpus providers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HowToCook MCP Contributors

/// Shared HTTP client construction
pub mod http_client;
