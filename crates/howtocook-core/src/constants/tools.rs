// ABOUTME: Tool identifier constants for the recipe MCP tools
// ABOUTME: Single source of truth for names used by registration and dispatch
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HowToCook MCP Contributors

/// List every recipe's name and description
pub const GET_ALL_RECIPES: &str = "getAllRecipes";
/// Filter recipes by exact category
pub const GET_RECIPES_BY_CATEGORY: &str = "getRecipesByCategory";
/// Look up one recipe by name
pub const GET_RECIPE_BY_ID: &str = "getRecipeById";
/// Build a weekly meal plan and grocery list
pub const RECOMMEND_MEALS: &str = "recommendMeals";
/// Recommend a set of dishes for one meal
pub const WHAT_TO_EAT: &str = "whatToEat";
