// ABOUTME: Integration tests for the recipe lookup tools
// ABOUTME: Covers listing, category filtering, name lookup with suggestions, and validation failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HowToCook MCP Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use howtocook_mcp_server::models::{Recipe, Step};
use serde_json::{json, Value};

use common::{call_tool, create_test_resources, recipe_names, sample_corpus};

#[tokio::test]
async fn test_get_all_recipes_lists_name_and_description() {
    let mut corpus = sample_corpus();
    corpus[0].description = "经典中式早餐".to_owned();
    let (resources, _) = create_test_resources(corpus.clone());

    let result = call_tool(&resources, "getAllRecipes", json!({})).await;

    assert!(!result.is_error);
    assert_eq!(result.content["success"], true);
    assert_eq!(result.content["count"], corpus.len());
    assert_eq!(
        result.content["message"],
        format!("成功获取 {} 个菜谱的基本信息", corpus.len())
    );

    let listed = result.content["recipes"].as_array().unwrap();
    assert_eq!(listed.len(), corpus.len());
    assert_eq!(listed[0], json!({"name": "豆浆油条", "description": "经典中式早餐"}));
    assert!(listed[0].get("ingredients").is_none());
}

#[tokio::test]
async fn test_get_all_recipes_accepts_null_arguments() {
    let (resources, _) = create_test_resources(sample_corpus());
    let result = call_tool(&resources, "getAllRecipes", Value::Null).await;
    assert!(!result.is_error);
}

#[tokio::test]
async fn test_get_recipes_by_category_returns_simplified_records() {
    let (resources, _) = create_test_resources(sample_corpus());

    let result = call_tool(&resources, "getRecipesByCategory", json!({"category": "水产"})).await;

    assert!(!result.is_error);
    assert_eq!(result.content["category"], "水产");
    assert_eq!(result.content["count"], 2);
    let recipes = result.content["recipes"].as_array().unwrap();
    let names: Vec<&str> = recipes.iter().map(|r| r["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["清蒸鲈鱼", "油焖大虾"]);
    assert_eq!(recipes[1]["ingredients"], json!(["虾", "酱油"]));
    assert!(recipes[0].get("steps").is_none());
}

#[tokio::test]
async fn test_get_recipes_by_category_is_exact_match() {
    let (resources, _) = create_test_resources(sample_corpus());

    let result = call_tool(&resources, "getRecipesByCategory", json!({"category": "水"})).await;

    assert!(result.is_error);
    assert_eq!(result.content["success"], false);
    assert_eq!(
        result.content["availableCategories"],
        json!(["主食", "早餐", "水产", "素菜", "荤菜"])
    );
}

#[tokio::test]
async fn test_get_recipes_by_category_rejects_empty_category() {
    let (resources, _) = create_test_resources(sample_corpus());

    let result = call_tool(&resources, "getRecipesByCategory", json!({"category": ""})).await;

    assert!(result.is_error);
    assert_eq!(result.content["error"], "参数验证失败");
    assert_eq!(result.content["details"], json!(["category: 分类不能为空"]));
}

#[tokio::test]
async fn test_get_recipes_by_category_rejects_missing_category() {
    let (resources, _) = create_test_resources(sample_corpus());

    let result = call_tool(&resources, "getRecipesByCategory", json!({})).await;

    assert!(result.is_error);
    assert_eq!(result.content["details"], json!(["category: 分类不能为空"]));
}

#[tokio::test]
async fn test_get_recipes_by_category_names_mistyped_field() {
    let (resources, _) = create_test_resources(sample_corpus());

    let result = call_tool(&resources, "getRecipesByCategory", json!({"category": 5})).await;

    assert!(result.is_error);
    let details = result.content["details"].as_array().unwrap();
    assert_eq!(details.len(), 1);
    assert!(details[0]
        .as_str()
        .unwrap()
        .starts_with("category: invalid type: integer"));
}

#[tokio::test]
async fn test_get_recipe_by_id_exact_match_is_case_insensitive() {
    let mut corpus = sample_corpus();
    corpus.push(Recipe::new("Caesar Salad", "素菜", &["生菜", "面包丁"]));
    let (resources, _) = create_test_resources(corpus);

    let result = call_tool(&resources, "getRecipeById", json!({"recipeName": "caesar salad"})).await;

    assert!(!result.is_error);
    assert_eq!(result.content["recipe"]["name"], "Caesar Salad");
    assert_eq!(result.content["message"], "成功找到菜谱: Caesar Salad");
}

#[tokio::test]
async fn test_get_recipe_by_id_falls_back_to_substring() {
    let (resources, _) = create_test_resources(sample_corpus());

    let result = call_tool(&resources, "getRecipeById", json!({"recipeName": "鲈鱼"})).await;

    assert!(!result.is_error);
    assert_eq!(result.content["recipe"]["name"], "清蒸鲈鱼");
    assert_eq!(result.content["recipe"]["category"], "水产");
}

#[tokio::test]
async fn test_get_recipe_by_id_returns_full_record() {
    let mut dumplings = Recipe::new("饺子", "主食", &["面粉", "猪肉", "白菜"]);
    dumplings.description = "北方家常面食".to_owned();
    dumplings.steps = vec![
        Step {
            step: 1,
            description: "和面醒面".to_owned(),
        },
        Step {
            step: 2,
            description: "包好后下锅煮熟".to_owned(),
        },
    ];
    let mut corpus = sample_corpus();
    corpus.push(dumplings);
    let (resources, _) = create_test_resources(corpus);

    let result = call_tool(&resources, "getRecipeById", json!({"recipeName": "饺子"})).await;

    assert!(!result.is_error);
    let recipe = &result.content["recipe"];
    assert_eq!(recipe["name"], "饺子");
    assert_eq!(recipe["description"], "北方家常面食");
    let ingredients: Vec<&str> = recipe["ingredients"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["name"].as_str().unwrap())
        .collect();
    assert_eq!(ingredients, vec!["面粉", "猪肉", "白菜"]);
    assert_eq!(
        recipe["steps"],
        json!([
            {"step": 1, "description": "和面醒面"},
            {"step": 2, "description": "包好后下锅煮熟"}
        ])
    );
}

#[tokio::test]
async fn test_get_recipe_by_id_suggests_on_miss() {
    let (resources, _) = create_test_resources(sample_corpus());

    let result = call_tool(&resources, "getRecipeById", json!({"recipeName": "红烧排骨"})).await;

    assert!(result.is_error);
    assert_eq!(result.content["success"], false);
    assert_eq!(result.content["suggestions"], json!(["红烧肉"]));
    assert!(result.content["tip"].is_string());
}

#[tokio::test]
async fn test_get_recipe_by_id_omits_empty_suggestions() {
    let (resources, _) = create_test_resources(sample_corpus());

    let result = call_tool(&resources, "getRecipeById", json!({"recipeName": "披萨饼"})).await;

    assert!(result.is_error);
    assert!(result.content.get("suggestions").is_none());
}

#[tokio::test]
async fn test_get_recipe_by_id_caps_suggestions_at_five() {
    let corpus: Vec<Recipe> = (1..=8)
        .map(|i| Recipe::new(format!("家常菜{i}号"), "素菜", &["白菜"]))
        .collect();
    let (resources, _) = create_test_resources(corpus);

    let result = call_tool(&resources, "getRecipeById", json!({"recipeName": "家常豆腐"})).await;

    assert!(result.is_error);
    assert_eq!(result.content["suggestions"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_get_recipe_by_id_rejects_empty_name() {
    let (resources, _) = create_test_resources(sample_corpus());

    let result = call_tool(&resources, "getRecipeById", json!({"recipeName": ""})).await;

    assert!(result.is_error);
    assert_eq!(result.content["details"], json!(["recipeName: 菜谱名称不能为空"]));
}

#[tokio::test]
async fn test_duplicate_names_resolve_to_first_record() {
    let mut first = Recipe::new("红烧肉", "荤菜", &["猪肉", "冰糖"]);
    first.description = "第一份".to_owned();
    let mut second = Recipe::new("红烧肉", "荤菜", &["猪肉", "秘制酱料"]);
    second.description = "第二份".to_owned();
    let (resources, _) = create_test_resources(vec![first, second]);

    let result = call_tool(&resources, "getRecipeById", json!({"recipeName": "红烧肉"})).await;

    assert!(!result.is_error);
    assert_eq!(result.content["recipe"]["description"], "第一份");
}

#[tokio::test]
async fn test_lookup_tools_on_empty_corpus() {
    let (resources, _) = create_test_resources(Vec::new());

    let all = call_tool(&resources, "getAllRecipes", json!({})).await;
    assert_eq!(all.content["count"], 0);

    let by_category = call_tool(&resources, "getRecipesByCategory", json!({"category": "荤菜"})).await;
    assert!(by_category.is_error);
    assert_eq!(by_category.content["availableCategories"], json!([]));

    let by_name = call_tool(&resources, "getRecipeById", json!({"recipeName": "红烧肉"})).await;
    assert!(by_name.is_error);
}

#[test]
fn test_sample_corpus_names_are_unique() {
    let mut names = recipe_names(&sample_corpus());
    let total = names.len();
    names.sort();
    names.dedup();
    assert_eq!(names.len(), total);
}
