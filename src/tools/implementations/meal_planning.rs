// ABOUTME: Meal recommendation tools backed by the planning engine
// ABOUTME: Implements recommendMeals (weekly plan + groceries) and whatToEat (same-day dishes)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HowToCook MCP Contributors

//! # Meal Planning Tools
//!
//! - `RecommendMealsTool` - filters the corpus by allergies and avoided items,
//!   then builds a seven-day plan with a categorized shopping list
//! - `WhatToEatTool` - picks a balanced set of dishes for one meal
//!
//! Both draw randomness from the context so seeded runs are reproducible.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use howtocook_intelligence::{
    filter_safe_recipes, AvoidList, DishRecommender, PlanError, WeeklyPlanBuilder,
};
use serde_json::{json, Value};
use tracing::{debug, info};

use crate::constants::planning::{MAX_PEOPLE, MIN_PEOPLE};
use crate::constants::tools::{RECOMMEND_MEALS, WHAT_TO_EAT};
use crate::errors::AppResult;
use crate::mcp::schema::{JsonSchema, PropertySchema};
use crate::tools::context::ToolExecutionContext;
use crate::tools::params::{parse_params, RecommendMealsParams, WhatToEatParams};
use crate::tools::result::ToolResult;
use crate::tools::traits::{McpTool, ToolCapabilities};

fn people_count_schema() -> PropertySchema {
    PropertySchema::bounded_number("用餐人数", i64::from(MIN_PEOPLE), i64::from(MAX_PEOPLE))
}

// ============================================================================
// RecommendMealsTool
// ============================================================================

/// Builds a weekly meal plan and grocery list
pub struct RecommendMealsTool;

#[async_trait]
impl McpTool for RecommendMealsTool {
    fn name(&self) -> &'static str {
        RECOMMEND_MEALS
    }

    fn description(&self) -> &'static str {
        "根据用户的忌口、过敏原、人数智能推荐菜谱，创建一周的膳食计划以及大致的购物清单"
    }

    fn input_schema(&self) -> JsonSchema {
        let mut properties = HashMap::new();
        properties.insert(
            "allergies".to_owned(),
            PropertySchema::string_array("过敏原列表"),
        );
        properties.insert(
            "avoidItems".to_owned(),
            PropertySchema::string_array("忌口食材列表"),
        );
        properties.insert("peopleCount".to_owned(), people_count_schema());
        JsonSchema::object(properties, &["peopleCount"])
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::READS_CORPUS
            | ToolCapabilities::RANDOMIZED
            | ToolCapabilities::PLANNING
            | ToolCapabilities::VALIDATES_INPUT
    }

    async fn execute(&self, args: Value, context: &ToolExecutionContext) -> AppResult<ToolResult> {
        let params: RecommendMealsParams = match parse_params(args) {
            Ok(params) => params,
            Err(failure) => return Ok(failure.into_result()),
        };
        let people_count = params.people();
        let recipes = context.recipes().await;

        let avoid = AvoidList::from_constraints(&params.allergies, &params.avoid_items);
        let safe = filter_safe_recipes(&recipes, &avoid);
        debug!(
            corpus = recipes.len(),
            safe_pool = safe.len(),
            "Filtered recipes by allergies and avoided items"
        );

        let plan = match WeeklyPlanBuilder::new(context.random()).build(&safe, people_count) {
            Ok(plan) => plan,
            Err(PlanError::InsufficientRecipes { available, minimum }) => {
                info!(available, minimum, "Not enough safe recipes for a weekly plan");
                return Ok(ToolResult::error(json!({
                    "success": false,
                    "message": "根据您的忌口要求，可用菜谱太少，无法制定完整的膳食计划",
                    "availableRecipes": available,
                    "suggestion": "请减少忌口限制或联系管理员添加更多菜谱",
                })));
            }
        };

        let mut payload = json!({
            "success": true,
            "peopleCount": people_count,
            "allergies": params.allergies,
            "avoidItems": params.avoid_items,
            "mealPlan": plan.meal_plan,
            "stats": plan.stats,
            "message": format!(
                "成功为 {people_count} 人制定了一周膳食计划，包含 {} 道菜和购物清单",
                plan.stats.total_recipes_used
            ),
        });

        if !plan.shortfalls.is_empty() {
            let warnings: Vec<String> = plan.shortfalls.iter().map(ToString::to_string).collect();
            info!(count = warnings.len(), "Weekly plan has under-filled slots");
            payload["warnings"] = json!(warnings);
        }

        Ok(ToolResult::ok(payload))
    }
}

// ============================================================================
// WhatToEatTool
// ============================================================================

/// Recommends dishes for a single meal by party size
pub struct WhatToEatTool;

#[async_trait]
impl McpTool for WhatToEatTool {
    fn name(&self) -> &'static str {
        WHAT_TO_EAT
    }

    fn description(&self) -> &'static str {
        "不知道吃什么？根据人数直接推荐适合的菜品组合"
    }

    fn input_schema(&self) -> JsonSchema {
        let mut properties = HashMap::new();
        properties.insert("peopleCount".to_owned(), people_count_schema());
        JsonSchema::object(properties, &["peopleCount"])
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::READS_CORPUS
            | ToolCapabilities::RANDOMIZED
            | ToolCapabilities::VALIDATES_INPUT
    }

    async fn execute(&self, args: Value, context: &ToolExecutionContext) -> AppResult<ToolResult> {
        let params: WhatToEatParams = match parse_params(args) {
            Ok(params) => params,
            Err(failure) => return Ok(failure.into_result()),
        };
        let people_count = params.people();
        let recipes = context.recipes().await;

        let recommendation = DishRecommender::new(context.random()).recommend(&recipes, people_count);
        let dish_count = recommendation.dishes.len();

        Ok(ToolResult::ok(json!({
            "success": true,
            "recommendation": recommendation,
            "message": format!("为 {people_count} 人推荐了 {dish_count} 道菜"),
        })))
    }
}

// ============================================================================
// Tool Registration Helper
// ============================================================================

/// Create all meal planning tools for registration
#[must_use]
pub fn create_meal_planning_tools() -> Vec<Arc<dyn McpTool>> {
    vec![Arc::new(RecommendMealsTool), Arc::new(WhatToEatTool)]
}
