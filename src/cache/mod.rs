// ABOUTME: Time-bounded in-memory cache of the recipe corpus
// ABOUTME: Injectable clock so expiry can be driven deterministically in tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HowToCook MCP Contributors

/// Clock abstraction for TTL checks
pub mod clock;
/// Recipe snapshot cache
pub mod recipes;

pub use clock::{Clock, ManualClock, SystemClock};
pub use recipes::RecipeCache;
