// ABOUTME: Meal-planning engine: classification, selection, weekly plans, dish picks
// ABOUTME: Pure synchronous logic over an in-memory recipe snapshot, no I/O
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HowToCook MCP Contributors

#![deny(unsafe_code)]

//! # HowToCook Intelligence
//!
//! The recommendation engine behind `recommendMeals` and `whatToEat`.
//!
//! Control flow for a weekly plan:
//! constraint filtering, grouping by category, per-slot selection, grocery
//! aggregation, ingredient classification.
//!
//! Randomness is injected through [`random::RandomSource`] so selection policy can
//! be exercised with deterministic sequences. Keyword heuristics are ordered rule
//! lists ([`keywords::KeywordRuleSet`]) that can be replaced without touching the
//! selection code.

/// Ingredient classification into shopping sections
pub mod classifier;
/// Same-day dish recommendation by party size
pub mod dish_recommender;
/// Ingredient deduplication and grocery list assembly
pub mod grocery;
/// Keyword tables and ordered keyword rule sets
pub mod keywords;
/// Category-balanced dish selection for a single slot
pub mod meal_selector;
/// Injectable randomness and sampling primitives
pub mod random;
/// Seven-day plan construction over a constraint-filtered pool
pub mod weekly_plan;

pub use classifier::{IngredientCategory, IngredientClassifier};
pub use dish_recommender::{DishCounts, DishRecommender};
pub use grocery::GroceryAggregator;
pub use keywords::{KeywordRule, KeywordRuleSet};
pub use meal_selector::{MealSelector, RecipeGroups};
pub use random::{pick_n, shuffle, RandomSource, SeededRandom, SequenceRandom, ThreadRandom};
pub use weekly_plan::{
    filter_safe_recipes, AvoidList, PlanError, SlotTargets, WeeklyPlan, WeeklyPlanBuilder,
};
