// ABOUTME: Data models for the server crate, re-exported from howtocook-core
// ABOUTME: Recipe corpus records plus meal plan and recommendation output shapes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HowToCook MCP Contributors

//! # Data Models

pub use howtocook_core::models::*;
