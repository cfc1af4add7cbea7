// ABOUTME: Reads the recipe corpus from a local JSON file
// ABOUTME: Same document shape as the remote source, for offline runs and tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HowToCook MCP Contributors

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use howtocook_intelligence::{RandomSource, ThreadRandom};
use serde_json::Value;
use tokio::fs;
use tracing::debug;

use crate::errors::{AppError, AppResult};
use crate::models::Recipe;

use super::normalize::normalize_recipes;
use super::RecipeSource;

/// Corpus stored on disk
pub struct FileRecipeSource {
    path: PathBuf,
    rng: Arc<dyn RandomSource>,
}

impl FileRecipeSource {
    /// Source reading `path` on every fetch
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            rng: Arc::new(ThreadRandom),
        }
    }

    /// Random source used for generated ids
    #[must_use]
    pub fn with_random(mut self, rng: Arc<dyn RandomSource>) -> Self {
        self.rng = rng;
        self
    }

    /// File path
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl RecipeSource for FileRecipeSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch_recipes(&self) -> AppResult<Vec<Recipe>> {
        debug!(path = %self.path.display(), "Reading recipes from file");

        let raw = fs::read_to_string(&self.path).await.map_err(|e| {
            AppError::from(e).with_resource_id(self.path.display().to_string())
        })?;
        let document: Value = serde_json::from_str(&raw)?;

        normalize_recipes(&document, self.rng.as_ref())
            .map_err(|e| e.with_resource_id(self.path.display().to_string()))
    }
}
