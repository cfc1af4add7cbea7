// ABOUTME: Core types and constants for the HowToCook recipe MCP server
// ABOUTME: Foundation crate with error handling, recipe models, and domain constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HowToCook MCP Contributors

#![deny(unsafe_code)]

//! # HowToCook Core
//!
//! Foundation crate providing shared types and constants for the recipe server.
//! The meal-planning engine and the MCP server crate both build on it, so it is
//! kept free of I/O and async runtime dependencies.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `ToolError`
//! - **constants**: Constants organized by domain (cache, protocol, tools, planning)
//! - **models**: Recipe corpus records and the plan/recommendation output shapes

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Recipe, meal plan, and recommendation data models
pub mod models;
