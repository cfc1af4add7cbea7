// ABOUTME: Tests for the file-backed recipe source
// ABOUTME: Reads corpus documents from temporary files and checks normalization and failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HowToCook MCP Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use howtocook_intelligence::SeededRandom;
use howtocook_mcp_server::cache::RecipeCache;
use howtocook_mcp_server::errors::ErrorCode;
use howtocook_mcp_server::providers::{FileRecipeSource, RecipeSource};
use serde_json::{json, Value};
use tempfile::TempDir;

use common::init_test_logging;

fn write_corpus(dir: &TempDir, document: &Value) -> PathBuf {
    let path = dir.path().join("all_recipes.json");
    fs::write(&path, serde_json::to_string(document).unwrap()).unwrap();
    path
}

#[tokio::test]
async fn test_file_source_normalizes_records() {
    init_test_logging();
    let dir = TempDir::new().unwrap();
    let path = write_corpus(
        &dir,
        &json!([
            {
                "id": "dishes-meat_dish-hongshaorou",
                "name": "红烧肉",
                "category": "荤菜",
                "difficulty": "★★★",
                "servings": 4,
                "ingredients": [
                    {"name": "五花肉", "quantity": 500.0, "unit": "g"},
                    "冰糖"
                ],
                "steps": ["切块", {"step": 5, "description": "收汁"}],
                "additional_notes": ["肥瘦相间更佳", "可加鹌鹑蛋"]
            },
            {"name": "白粥"},
            {}
        ]),
    );

    let source = FileRecipeSource::new(&path).with_random(Arc::new(SeededRandom::new(7)));
    let recipes = source.fetch_recipes().await.unwrap();

    assert_eq!(recipes.len(), 3);

    let pork = &recipes[0];
    assert_eq!(pork.id, "dishes-meat_dish-hongshaorou");
    assert_eq!(pork.servings, Some(4));
    assert_eq!(pork.ingredients[0].unit.as_deref(), Some("g"));
    assert_eq!(pork.ingredients[1].name, "冰糖");
    assert_eq!(pork.steps[0].step, 1);
    assert_eq!(pork.steps[1].step, 5);
    assert_eq!(pork.additional_notes.as_deref(), Some("肥瘦相间更佳\n可加鹌鹑蛋"));

    let porridge = &recipes[1];
    assert_eq!(porridge.id, "白粥");
    assert_eq!(porridge.category, "其他");
    assert!(porridge.ingredients.is_empty());

    let anonymous = &recipes[2];
    assert_eq!(anonymous.id.chars().count(), 9);
    assert!(anonymous
        .id
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
}

#[tokio::test]
async fn test_missing_file_is_a_storage_error() {
    let dir = TempDir::new().unwrap();
    let source = FileRecipeSource::new(dir.path().join("missing.json"));

    let error = source.fetch_recipes().await.unwrap_err();

    assert_eq!(error.code, ErrorCode::StorageError);
    assert!(source.describe().ends_with("missing.json"));
}

#[tokio::test]
async fn test_non_array_document_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_corpus(&dir, &json!({"recipes": []}));
    let source = FileRecipeSource::new(&path);

    let error = source.fetch_recipes().await.unwrap_err();

    assert_eq!(error.code, ErrorCode::InvalidInput);
    assert!(error.message.contains("expected array"));
}

#[tokio::test]
async fn test_malformed_json_is_a_serialization_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "[{\"name\": ").unwrap();

    let error = FileRecipeSource::new(&path).fetch_recipes().await.unwrap_err();

    assert_eq!(error.code, ErrorCode::SerializationError);
}

#[tokio::test]
async fn test_cache_over_unreadable_file_serves_empty_corpus() {
    init_test_logging();
    let dir = TempDir::new().unwrap();
    let source = Arc::new(FileRecipeSource::new(dir.path().join("absent.json")));

    let cache = RecipeCache::new(source);

    assert!(cache.get_or_refresh().await.is_empty());
}
