// ABOUTME: RecipeCache owns the corpus snapshot, its refresh stamp, and the TTL
// ABOUTME: Refreshes on access when stale, falling back to the last good snapshot on failure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HowToCook MCP Contributors

//! # Recipe Cache
//!
//! The snapshot is replaced by reference, so readers holding an older `Arc`
//! keep a consistent view. Two callers that both find the cache stale may both
//! fetch; the later write wins.

use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;
use tokio::time::timeout;
use tracing::warn;

use crate::constants::cache::{DEFAULT_RECIPE_CACHE_TTL_SECS, DEFAULT_RECIPE_FETCH_TIMEOUT_SECS};
use crate::logging::AppLogger;
use crate::models::Recipe;
use crate::providers::RecipeSource;

use super::clock::{Clock, SystemClock};

#[derive(Default)]
struct CacheState {
    snapshot: Arc<Vec<Recipe>>,
    last_refresh: Option<Instant>,
}

impl CacheState {
    fn is_fresh(&self, now: Instant, ttl: Duration) -> bool {
        !self.snapshot.is_empty()
            && self
                .last_refresh
                .is_some_and(|at| now.saturating_duration_since(at) < ttl)
    }
}

/// Time-bounded cache of the recipe corpus
pub struct RecipeCache {
    source: Arc<dyn RecipeSource>,
    clock: Arc<dyn Clock>,
    ttl: Duration,
    fetch_timeout: Duration,
    state: RwLock<CacheState>,
}

impl RecipeCache {
    /// Cache with the default TTL and fetch timeout
    #[must_use]
    pub fn new(source: Arc<dyn RecipeSource>) -> Self {
        Self {
            source,
            clock: Arc::new(SystemClock),
            ttl: Duration::from_secs(DEFAULT_RECIPE_CACHE_TTL_SECS),
            fetch_timeout: Duration::from_secs(DEFAULT_RECIPE_FETCH_TIMEOUT_SECS),
            state: RwLock::new(CacheState::default()),
        }
    }

    /// Override the time-to-live
    #[must_use]
    pub const fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Override the fetch timeout
    #[must_use]
    pub const fn with_fetch_timeout(mut self, fetch_timeout: Duration) -> Self {
        self.fetch_timeout = fetch_timeout;
        self
    }

    /// Override the clock
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Configured time-to-live
    #[must_use]
    pub const fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Return the snapshot, refetching first if it is empty or older than the TTL
    ///
    /// Fetch failures and timeouts are logged and answered with the previous
    /// snapshot, which may be empty. Never retries.
    pub async fn get_or_refresh(&self) -> Arc<Vec<Recipe>> {
        {
            let state = self.state.read().await;
            if state.is_fresh(self.clock.now(), self.ttl) {
                return Arc::clone(&state.snapshot);
            }
        }

        let source = self.source.describe();
        let started = Instant::now();
        match timeout(self.fetch_timeout, self.source.fetch_recipes()).await {
            Ok(Ok(recipes)) => {
                let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
                AppLogger::log_corpus_refresh(&source, recipes.len(), duration_ms);
                let snapshot = Arc::new(recipes);
                let mut state = self.state.write().await;
                state.snapshot = Arc::clone(&snapshot);
                state.last_refresh = Some(self.clock.now());
                snapshot
            }
            Ok(Err(e)) => {
                warn!(source = %source, error = %e, "Recipe fetch failed, serving cached corpus");
                self.snapshot().await
            }
            Err(_) => {
                warn!(
                    source = %source,
                    timeout_secs = self.fetch_timeout.as_secs(),
                    "Recipe fetch timed out, serving cached corpus"
                );
                self.snapshot().await
            }
        }
    }

    /// Current snapshot without refreshing
    pub async fn snapshot(&self) -> Arc<Vec<Recipe>> {
        Arc::clone(&self.state.read().await.snapshot)
    }

    /// Force the next access to refetch; the snapshot stays as a fallback
    pub async fn invalidate(&self) {
        self.state.write().await.last_refresh = None;
    }

    /// Whether the next access would be served without fetching
    pub async fn is_fresh(&self) -> bool {
        self.state.read().await.is_fresh(self.clock.now(), self.ttl)
    }
}

impl fmt::Debug for RecipeCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecipeCache")
            .field("source", &self.source.describe())
            .field("ttl", &self.ttl)
            .field("fetch_timeout", &self.fetch_timeout)
            .finish_non_exhaustive()
    }
}
