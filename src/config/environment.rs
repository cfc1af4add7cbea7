// ABOUTME: Environment configuration for the recipe server
// ABOUTME: Parses corpus location, cache timing, HTTP timeouts, and the optional random seed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HowToCook MCP Contributors

//! Environment-based server configuration

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::constants::cache::{
    DEFAULT_HTTP_CONNECT_TIMEOUT_SECS, DEFAULT_RECIPES_URL, DEFAULT_RECIPE_CACHE_TTL_SECS,
    DEFAULT_RECIPE_FETCH_TIMEOUT_SECS,
};
use crate::constants::protocol::{SERVER_NAME, SERVER_VERSION};

/// Environment variable names read by [`ServerConfig::from_env`]
pub mod env_keys {
    /// Remote corpus document
    pub const RECIPES_URL: &str = "RECIPES_URL";
    /// Local corpus file, preferred over the URL when set
    pub const RECIPES_FILE: &str = "RECIPES_FILE";
    /// Snapshot time-to-live in seconds
    pub const RECIPE_CACHE_TTL_SECS: &str = "RECIPE_CACHE_TTL_SECS";
    /// Upper bound on one corpus fetch in seconds
    pub const RECIPE_FETCH_TIMEOUT_SECS: &str = "RECIPE_FETCH_TIMEOUT_SECS";
    /// TCP connect timeout in seconds
    pub const HTTP_CONNECT_TIMEOUT_SECS: &str = "HTTP_CONNECT_TIMEOUT_SECS";
    /// Seed for reproducible recommendations
    pub const RANDOM_SEED: &str = "RANDOM_SEED";
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// URL of the JSON corpus document
    pub recipes_url: String,
    /// Local corpus file; when set the URL is ignored
    pub recipes_file: Option<PathBuf>,
    /// Snapshot time-to-live
    pub cache_ttl_secs: u64,
    /// Upper bound on one corpus fetch
    pub fetch_timeout_secs: u64,
    /// HTTP connect timeout
    pub connect_timeout_secs: u64,
    /// Seed for the recommendation random source
    pub random_seed: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            recipes_url: DEFAULT_RECIPES_URL.to_owned(),
            recipes_file: None,
            cache_ttl_secs: DEFAULT_RECIPE_CACHE_TTL_SECS,
            fetch_timeout_secs: DEFAULT_RECIPE_FETCH_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_HTTP_CONNECT_TIMEOUT_SECS,
            random_seed: None,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but does not parse
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let recipes_file = env::var(env_keys::RECIPES_FILE)
            .ok()
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        let random_seed = match env::var(env_keys::RANDOM_SEED) {
            Ok(seed) if !seed.trim().is_empty() => Some(
                seed.trim()
                    .parse::<u64>()
                    .context("Invalid RANDOM_SEED value")?,
            ),
            _ => None,
        };

        let config = Self {
            recipes_url: env_var_or(env_keys::RECIPES_URL, DEFAULT_RECIPES_URL),
            recipes_file,
            cache_ttl_secs: env_var_or(
                env_keys::RECIPE_CACHE_TTL_SECS,
                &DEFAULT_RECIPE_CACHE_TTL_SECS.to_string(),
            )
            .parse()
            .context("Invalid RECIPE_CACHE_TTL_SECS value")?,
            fetch_timeout_secs: env_var_or(
                env_keys::RECIPE_FETCH_TIMEOUT_SECS,
                &DEFAULT_RECIPE_FETCH_TIMEOUT_SECS.to_string(),
            )
            .parse()
            .context("Invalid RECIPE_FETCH_TIMEOUT_SECS value")?,
            connect_timeout_secs: env_var_or(
                env_keys::HTTP_CONNECT_TIMEOUT_SECS,
                &DEFAULT_HTTP_CONNECT_TIMEOUT_SECS.to_string(),
            )
            .parse()
            .context("Invalid HTTP_CONNECT_TIMEOUT_SECS value")?,
            random_seed,
        };

        config.validate()?;
        Ok(config)
    }

    /// Reject settings the cache and HTTP client cannot work with
    ///
    /// # Errors
    ///
    /// Returns an error if a timeout is zero or no corpus location is set
    pub fn validate(&self) -> Result<()> {
        if self.fetch_timeout_secs == 0 {
            anyhow::bail!("RECIPE_FETCH_TIMEOUT_SECS must be greater than zero");
        }
        if self.connect_timeout_secs == 0 {
            anyhow::bail!("HTTP_CONNECT_TIMEOUT_SECS must be greater than zero");
        }
        if self.recipes_file.is_none() && self.recipes_url.trim().is_empty() {
            anyhow::bail!("RECIPES_URL must not be empty when RECIPES_FILE is unset");
        }
        Ok(())
    }

    /// Human-readable source of the corpus
    #[must_use]
    pub fn corpus_location(&self) -> String {
        self.recipes_file.as_ref().map_or_else(
            || self.recipes_url.clone(),
            |path| format!("file://{}", path.display()),
        )
    }

    /// One-line configuration summary for startup logs
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{SERVER_NAME} {SERVER_VERSION}: corpus={}, cache_ttl={}s, fetch_timeout={}s, connect_timeout={}s, random={}",
            self.corpus_location(),
            self.cache_ttl_secs,
            self.fetch_timeout_secs,
            self.connect_timeout_secs,
            self.random_seed
                .map_or_else(|| "thread".to_owned(), |seed| format!("seeded({seed})")),
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}
