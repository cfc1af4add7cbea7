// ABOUTME: Data models for the recipe corpus and the planning engine outputs
// ABOUTME: Serialized field names follow the JSON shapes returned by the tools
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HowToCook MCP Contributors

//! Core data models
//!
//! `recipe` holds corpus records; `plan` holds the per-request structures built by
//! the meal-planning engine. All of them are constructed per request and never
//! mutated afterwards.

/// Meal plan, grocery list, and dish recommendation models
pub mod plan;
/// Recipe corpus records and projections
pub mod recipe;

pub use plan::{
    DayPlan, DishRecommendation, GroceryList, MealPlan, MealSlot, PlanStats, ShoppingPlan,
    SlotShortfall,
};
pub use recipe::{all_categories, Ingredient, NameOnlyRecipe, Recipe, SimpleRecipe, Step};
