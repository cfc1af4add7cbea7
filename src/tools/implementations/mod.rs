// ABOUTME: Module containing the MCP tool implementations organized by category
// ABOUTME: Recipe lookups and meal planning
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HowToCook MCP Contributors

//! # Tool Implementations
//!
//! - `recipes` - corpus lookups (all, by category, by name)
//! - `meal_planning` - weekly plans and same-day dish recommendations

// Recipe tools: getAllRecipes, getRecipesByCategory, getRecipeById
pub mod recipes;

// Planning tools: recommendMeals, whatToEat
pub mod meal_planning;
