// ABOUTME: Meal planning thresholds, party-size bounds, and day labels
// ABOUTME: Shared by the plan builder, the dish recommender, and parameter validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HowToCook MCP Contributors

/// Smallest safe pool a weekly plan will be built from
pub const MIN_SAFE_RECIPES: usize = 10;

/// Smallest accepted party size
pub const MIN_PEOPLE: u32 = 1;

/// Largest accepted party size
pub const MAX_PEOPLE: u32 = 10;

/// Party size from which the ad-hoc recommender adds a seafood dish
pub const FISH_DISH_MIN_PEOPLE: u32 = 8;

/// Weekday labels, Monday first
pub const WEEKDAY_LABELS: [&str; 5] = ["周一", "周二", "周三", "周四", "周五"];

/// Weekend labels, Saturday first
pub const WEEKEND_LABELS: [&str; 2] = ["周六", "周日"];
