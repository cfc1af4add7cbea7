// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides a sample corpus, in-memory server resources, and tool call helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HowToCook MCP Contributors
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `howtocook_mcp_server`

use std::env;
use std::sync::{Arc, Once};

use howtocook_intelligence::{RandomSource, SeededRandom};
use howtocook_mcp_server::{
    cache::RecipeCache,
    mcp::ServerResources,
    models::Recipe,
    providers::StaticRecipeSource,
    tools::{ToolExecutionContext, ToolResult},
};
use serde_json::Value;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Thirteen recipes across the five planning categories, distinct names
pub fn sample_corpus() -> Vec<Recipe> {
    vec![
        Recipe::new("豆浆油条", "早餐", &["黄豆", "面粉"]),
        Recipe::new("鸡蛋饼", "早餐", &["鸡蛋", "面粉", "葱"]),
        Recipe::new("小米粥", "早餐", &["小米"]),
        Recipe::new("红烧肉", "荤菜", &["猪肉", "酱油", "冰糖"]),
        Recipe::new("宫保鸡丁", "荤菜", &["鸡肉", "花生", "干辣椒"]),
        Recipe::new("土豆炖牛肉", "荤菜", &["牛肉", "土豆"]),
        Recipe::new("扬州炒饭", "主食", &["米饭", "鸡蛋", "火腿"]),
        Recipe::new("葱油拌面", "主食", &["面条", "葱"]),
        Recipe::new("清蒸鲈鱼", "水产", &["鲈鱼", "姜", "葱"]),
        Recipe::new("油焖大虾", "水产", &["虾", "酱油"]),
        Recipe::new("西红柿炒鸡蛋", "素菜", &["西红柿", "鸡蛋"]),
        Recipe::new("清炒白菜", "素菜", &["白菜", "蒜"]),
        Recipe::new("地三鲜", "素菜", &["茄子", "土豆", "青椒"]),
    ]
}

/// Server resources over an in-memory source with a seeded random source
pub fn create_test_resources(recipes: Vec<Recipe>) -> (Arc<ServerResources>, Arc<StaticRecipeSource>) {
    create_seeded_resources(recipes, 42)
}

/// Server resources with an explicit seed
pub fn create_seeded_resources(
    recipes: Vec<Recipe>,
    seed: u64,
) -> (Arc<ServerResources>, Arc<StaticRecipeSource>) {
    init_test_logging();
    let source = Arc::new(StaticRecipeSource::new(recipes));
    let cache = RecipeCache::new(source.clone());
    let random: Arc<dyn RandomSource> = Arc::new(SeededRandom::new(seed));
    (Arc::new(ServerResources::new(cache, random)), source)
}

/// Execute a registered tool and return its result
pub async fn call_tool(resources: &Arc<ServerResources>, name: &str, args: Value) -> ToolResult {
    let context = ToolExecutionContext::new(Arc::clone(resources));
    resources
        .tool_registry
        .execute(name, args, &context)
        .await
        .expect("tool execution should not fail at the protocol level")
}

/// Names of every recipe in `recipes`
pub fn recipe_names(recipes: &[Recipe]) -> Vec<String> {
    recipes.iter().map(|r| r.name.clone()).collect()
}
