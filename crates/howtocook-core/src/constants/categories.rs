// ABOUTME: Recipe category labels referenced by the planning and recommendation logic
// ABOUTME: Categories are free-form strings in the corpus; these are the ones with meaning
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HowToCook MCP Contributors

/// Seafood dishes
pub const SEAFOOD: &str = "水产";
/// Breakfast dishes
pub const BREAKFAST: &str = "早餐";
/// Meat dishes
pub const MEAT: &str = "荤菜";
/// Staple foods
pub const STAPLE: &str = "主食";
/// Vegetable dishes
pub const VEGETABLE: &str = "素菜";
/// Assigned to records without a category
pub const DEFAULT_CATEGORY: &str = "其他";

/// Categories breakfast slots draw from
pub const BREAKFAST_CATEGORIES: &[&str] = &[BREAKFAST];

/// Categories lunch and dinner slots draw from, in preference order
pub const MAIN_MEAL_CATEGORIES: &[&str] = &[MEAT, STAPLE, SEAFOOD];
