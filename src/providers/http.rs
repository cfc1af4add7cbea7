// ABOUTME: Fetches the recipe corpus from a remote JSON document over HTTPS
// ABOUTME: Uses a pooled reqwest client with request and connect timeouts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HowToCook MCP Contributors

use std::sync::Arc;

use async_trait::async_trait;
use howtocook_intelligence::{RandomSource, ThreadRandom};
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::errors::{AppError, AppResult};
use crate::models::Recipe;
use crate::utils::http_client::{create_client_with_timeout, shared_client};

use super::normalize::normalize_recipes;
use super::RecipeSource;

const SERVICE: &str = "recipe corpus";

/// Remote corpus document
pub struct HttpRecipeSource {
    url: String,
    client: Client,
    rng: Arc<dyn RandomSource>,
}

impl HttpRecipeSource {
    /// Source using the shared client and its default timeouts
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: shared_client().clone(),
            rng: Arc::new(ThreadRandom),
        }
    }

    /// Source with its own request and connect timeouts
    #[must_use]
    pub fn with_timeouts(url: impl Into<String>, timeout_secs: u64, connect_timeout_secs: u64) -> Self {
        Self {
            url: url.into(),
            client: create_client_with_timeout(timeout_secs, connect_timeout_secs),
            rng: Arc::new(ThreadRandom),
        }
    }

    /// Random source used for generated ids
    #[must_use]
    pub fn with_random(mut self, rng: Arc<dyn RandomSource>) -> Self {
        self.rng = rng;
        self
    }

    /// Document URL
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl RecipeSource for HttpRecipeSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn fetch_recipes(&self) -> AppResult<Vec<Recipe>> {
        debug!(url = %self.url, "Fetching recipes from remote URL");

        let response = self.client.get(&self.url).send().await.map_err(|e| {
            AppError::external_unavailable(SERVICE, format!("request failed: {e}")).with_source(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::external_service(
                SERVICE,
                format!("HTTP error! status: {status}"),
            ));
        }

        let document: Value = response.json().await.map_err(|e| {
            AppError::external_service(SERVICE, format!("invalid JSON body: {e}")).with_source(e)
        })?;

        normalize_recipes(&document, self.rng.as_ref())
    }
}
