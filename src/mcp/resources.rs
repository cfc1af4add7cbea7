// ABOUTME: Shared server resources: recipe cache, tool registry, random source
// ABOUTME: Built once at startup from ServerConfig and shared via Arc
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HowToCook MCP Contributors

use std::sync::Arc;
use std::time::Duration;

use howtocook_intelligence::{RandomSource, SeededRandom, ThreadRandom};
use tracing::info;

use crate::cache::RecipeCache;
use crate::config::ServerConfig;
use crate::providers::{FileRecipeSource, HttpRecipeSource, RecipeSource};
use crate::tools::ToolRegistry;

/// Resources every request can reach
pub struct ServerResources {
    /// Corpus cache
    pub cache: RecipeCache,
    /// Registered tools
    pub tool_registry: Arc<ToolRegistry>,
    /// Randomness for recommendations
    pub random: Arc<dyn RandomSource>,
}

impl ServerResources {
    /// Resources with the built-in tools registered
    #[must_use]
    pub fn new(cache: RecipeCache, random: Arc<dyn RandomSource>) -> Self {
        let mut registry = ToolRegistry::new();
        registry.register_builtin_tools();
        Self {
            cache,
            tool_registry: Arc::new(registry),
            random,
        }
    }

    /// Wire the corpus source, cache, and random source from configuration
    #[must_use]
    pub fn from_config(config: &ServerConfig) -> Self {
        let random: Arc<dyn RandomSource> = match config.random_seed {
            Some(seed) => {
                info!(seed, "Using seeded random source");
                Arc::new(SeededRandom::new(seed))
            }
            None => Arc::new(ThreadRandom),
        };

        let source: Arc<dyn RecipeSource> = match &config.recipes_file {
            Some(path) => Arc::new(FileRecipeSource::new(path.clone()).with_random(random.clone())),
            None => Arc::new(
                HttpRecipeSource::with_timeouts(
                    config.recipes_url.clone(),
                    config.fetch_timeout_secs,
                    config.connect_timeout_secs,
                )
                .with_random(random.clone()),
            ),
        };

        let cache = RecipeCache::new(source)
            .with_ttl(Duration::from_secs(config.cache_ttl_secs))
            .with_fetch_timeout(Duration::from_secs(config.fetch_timeout_secs));

        Self::new(cache, random)
    }
}
