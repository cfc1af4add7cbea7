// ABOUTME: In-memory recipe source with switchable failures and artificial latency
// ABOUTME: Drives cache and tool tests without network or disk access
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HowToCook MCP Contributors

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::sleep;

use crate::errors::{AppError, AppResult};
use crate::models::Recipe;

use super::RecipeSource;

/// Corpus held in memory
#[derive(Debug, Default)]
pub struct StaticRecipeSource {
    recipes: Mutex<Vec<Recipe>>,
    failing: AtomicBool,
    fetches: AtomicUsize,
    delay: Option<Duration>,
}

impl StaticRecipeSource {
    /// Source returning `recipes` on every fetch
    #[must_use]
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self {
            recipes: Mutex::new(recipes),
            ..Self::default()
        }
    }

    /// Sleep for `delay` before answering each fetch
    #[must_use]
    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Replace the corpus returned by later fetches
    pub fn set_recipes(&self, recipes: Vec<Recipe>) {
        *self.recipes.lock().unwrap_or_else(PoisonError::into_inner) = recipes;
    }

    /// Make later fetches fail (or succeed again)
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Number of fetches attempted so far
    #[must_use]
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RecipeSource for StaticRecipeSource {
    fn describe(&self) -> String {
        "memory".to_owned()
    }

    async fn fetch_recipes(&self) -> AppResult<Vec<Recipe>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);

        if let Some(delay) = self.delay {
            sleep(delay).await;
        }

        if self.failing.load(Ordering::SeqCst) {
            return Err(AppError::external_service("memory", "scripted failure"));
        }

        Ok(self
            .recipes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }
}
