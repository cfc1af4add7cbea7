// ABOUTME: System-wide constants for the server crate, re-exported from howtocook-core
// ABOUTME: Cache defaults, category names, planning limits, protocol values, and tool names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HowToCook MCP Contributors

//! # Constants Module

pub use howtocook_core::constants::*;
