// ABOUTME: Recipe lookup tools over the cached corpus snapshot
// ABOUTME: Implements getAllRecipes, getRecipesByCategory, getRecipeById
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HowToCook MCP Contributors

//! # Recipe Lookup Tools
//!
//! Direct filters and maps over the corpus:
//! - `GetAllRecipesTool` - every recipe as name and description
//! - `GetRecipesByCategoryTool` - exact category filter
//! - `GetRecipeByIdTool` - name lookup with suggestions on a miss
//!
//! Names are the lookup key; when two recipes share a name the first one wins.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::debug;

use crate::constants::tools::{GET_ALL_RECIPES, GET_RECIPES_BY_CATEGORY, GET_RECIPE_BY_ID};
use crate::errors::AppResult;
use crate::mcp::schema::{JsonSchema, PropertySchema};
use crate::models::{all_categories, NameOnlyRecipe, Recipe, SimpleRecipe};
use crate::tools::context::ToolExecutionContext;
use crate::tools::params::{parse_params, CategoryParams, RecipeNameParams};
use crate::tools::result::ToolResult;
use crate::tools::traits::{McpTool, ToolCapabilities};

/// Most suggestions returned for a name that matched nothing
const MAX_SUGGESTIONS: usize = 5;

// ============================================================================
// Lookup helpers
// ============================================================================

/// Outcome of a name lookup
#[derive(Debug, Clone, PartialEq)]
pub enum RecipeLookup<'a> {
    /// A recipe matched exactly or by substring
    Found(&'a Recipe),
    /// Nothing matched; up to five similar names
    Missing {
        /// Names sharing a two-character prefix with the query
        suggestions: Vec<String>,
    },
}

/// Find a recipe by name
///
/// Case-insensitive exact match first, then the first name containing the
/// query, then suggestions where either string contains the other's first two
/// characters.
#[must_use]
pub fn find_recipe<'a>(recipes: &'a [Recipe], query: &str) -> RecipeLookup<'a> {
    let needle = query.to_lowercase();

    let found = recipes
        .iter()
        .find(|r| r.name.to_lowercase() == needle)
        .or_else(|| recipes.iter().find(|r| r.name.to_lowercase().contains(&needle)));

    if let Some(recipe) = found {
        return RecipeLookup::Found(recipe);
    }

    let needle_prefix = prefix(&needle);
    let suggestions = recipes
        .iter()
        .filter(|r| !r.name.is_empty())
        .filter(|r| {
            let name = r.name.to_lowercase();
            name.contains(&needle_prefix) || needle.contains(&prefix(&name))
        })
        .take(MAX_SUGGESTIONS)
        .map(|r| r.name.clone())
        .collect();

    RecipeLookup::Missing { suggestions }
}

fn prefix(text: &str) -> String {
    text.chars().take(2).collect()
}

// ============================================================================
// GetAllRecipesTool
// ============================================================================

/// Lists every recipe by name and description
pub struct GetAllRecipesTool;

#[async_trait]
impl McpTool for GetAllRecipesTool {
    fn name(&self) -> &'static str {
        GET_ALL_RECIPES
    }

    fn description(&self) -> &'static str {
        "获取所有可用菜谱数据，做菜百科全书 -- 慎用这个--上下文太大"
    }

    fn input_schema(&self) -> JsonSchema {
        JsonSchema::empty()
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::READS_CORPUS | ToolCapabilities::LOOKUP
    }

    async fn execute(&self, _args: Value, context: &ToolExecutionContext) -> AppResult<ToolResult> {
        let recipes = context.recipes().await;
        let listed: Vec<NameOnlyRecipe> = recipes.iter().map(NameOnlyRecipe::from).collect();

        Ok(ToolResult::ok(json!({
            "success": true,
            "count": listed.len(),
            "recipes": listed,
            "message": format!("成功获取 {} 个菜谱的基本信息", listed.len()),
        })))
    }
}

// ============================================================================
// GetRecipesByCategoryTool
// ============================================================================

/// Filters recipes by exact category
pub struct GetRecipesByCategoryTool;

#[async_trait]
impl McpTool for GetRecipesByCategoryTool {
    fn name(&self) -> &'static str {
        GET_RECIPES_BY_CATEGORY
    }

    fn description(&self) -> &'static str {
        "按照分类筛选菜谱，想吃水产？早餐？荤菜？主食？一键搞定！"
    }

    fn input_schema(&self) -> JsonSchema {
        let mut properties = HashMap::new();
        properties.insert("category".to_owned(), PropertySchema::string("菜谱分类"));
        JsonSchema::object(properties, &["category"])
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::READS_CORPUS | ToolCapabilities::LOOKUP | ToolCapabilities::VALIDATES_INPUT
    }

    async fn execute(&self, args: Value, context: &ToolExecutionContext) -> AppResult<ToolResult> {
        let params: CategoryParams = match parse_params(args) {
            Ok(params) => params,
            Err(failure) => return Ok(failure.into_result()),
        };
        let category = params.category;
        let recipes = context.recipes().await;

        let matches: Vec<SimpleRecipe> = recipes
            .iter()
            .filter(|r| r.category == category)
            .map(SimpleRecipe::from)
            .collect();

        if matches.is_empty() {
            debug!(category = %category, "No recipes in category");
            return Ok(ToolResult::error(json!({
                "success": false,
                "message": format!("未找到分类为 \"{category}\" 的菜谱"),
                "availableCategories": all_categories(&recipes),
                "suggestion": "请检查分类名称是否正确，或从可用分类中选择",
            })));
        }

        Ok(ToolResult::ok(json!({
            "success": true,
            "category": category,
            "count": matches.len(),
            "message": format!("找到 {} 个 \"{category}\" 分类的菜谱", matches.len()),
            "recipes": matches,
        })))
    }
}

// ============================================================================
// GetRecipeByIdTool
// ============================================================================

/// Returns one full recipe looked up by name
pub struct GetRecipeByIdTool;

#[async_trait]
impl McpTool for GetRecipeByIdTool {
    fn name(&self) -> &'static str {
        GET_RECIPE_BY_ID
    }

    fn description(&self) -> &'static str {
        "根据菜谱名称查询特定菜谱的完整详情，包括食材、步骤等"
    }

    fn input_schema(&self) -> JsonSchema {
        let mut properties = HashMap::new();
        properties.insert("recipeName".to_owned(), PropertySchema::string("菜谱名称"));
        JsonSchema::object(properties, &["recipeName"])
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::READS_CORPUS | ToolCapabilities::LOOKUP | ToolCapabilities::VALIDATES_INPUT
    }

    async fn execute(&self, args: Value, context: &ToolExecutionContext) -> AppResult<ToolResult> {
        let params: RecipeNameParams = match parse_params(args) {
            Ok(params) => params,
            Err(failure) => return Ok(failure.into_result()),
        };
        let recipe_name = params.recipe_name;
        let recipes = context.recipes().await;

        match find_recipe(&recipes, &recipe_name) {
            RecipeLookup::Found(recipe) => Ok(ToolResult::ok(json!({
                "success": true,
                "recipe": recipe,
                "message": format!("成功找到菜谱: {}", recipe.name),
            }))),
            RecipeLookup::Missing { suggestions } => {
                let mut payload = json!({
                    "success": false,
                    "message": format!("未找到名称为 \"{recipe_name}\" 的菜谱"),
                    "tip": "请检查菜谱名称是否正确，或尝试使用部分关键词搜索",
                });
                if !suggestions.is_empty() {
                    payload["suggestions"] = json!(suggestions);
                }
                Ok(ToolResult::error(payload))
            }
        }
    }
}

// ============================================================================
// Tool Registration Helper
// ============================================================================

/// Create all recipe lookup tools for registration
#[must_use]
pub fn create_recipe_tools() -> Vec<Arc<dyn McpTool>> {
    vec![
        Arc::new(GetAllRecipesTool),
        Arc::new(GetRecipesByCategoryTool),
        Arc::new(GetRecipeByIdTool),
    ]
}
