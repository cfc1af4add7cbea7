// ABOUTME: Tests for the time-bounded recipe corpus cache
// ABOUTME: Drives expiry with a manual clock and failures with a scripted in-memory source
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HowToCook MCP Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::sync::Arc;
use std::time::Duration;

use howtocook_mcp_server::cache::{ManualClock, RecipeCache};
use howtocook_mcp_server::models::Recipe;
use howtocook_mcp_server::providers::StaticRecipeSource;

use common::{init_test_logging, recipe_names, sample_corpus};

const TTL: Duration = Duration::from_secs(300);

fn cache_with_clock(source: &Arc<StaticRecipeSource>) -> (RecipeCache, Arc<ManualClock>) {
    init_test_logging();
    let clock = Arc::new(ManualClock::new());
    let cache = RecipeCache::new(source.clone())
        .with_ttl(TTL)
        .with_clock(clock.clone());
    (cache, clock)
}

#[tokio::test]
async fn test_first_access_fetches_and_later_access_reuses() {
    let source = Arc::new(StaticRecipeSource::new(sample_corpus()));
    let (cache, clock) = cache_with_clock(&source);

    let first = cache.get_or_refresh().await;
    assert_eq!(first.len(), 13);
    assert_eq!(source.fetch_count(), 1);

    clock.advance(Duration::from_secs(299));
    let second = cache.get_or_refresh().await;
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(source.fetch_count(), 1);
    assert!(cache.is_fresh().await);
}

#[tokio::test]
async fn test_expired_snapshot_is_refetched() {
    let source = Arc::new(StaticRecipeSource::new(sample_corpus()));
    let (cache, clock) = cache_with_clock(&source);

    cache.get_or_refresh().await;
    source.set_recipes(vec![Recipe::new("糖醋排骨", "荤菜", &["排骨", "醋"])]);

    clock.advance(TTL);
    assert!(!cache.is_fresh().await);

    let refreshed = cache.get_or_refresh().await;
    assert_eq!(recipe_names(&refreshed), vec!["糖醋排骨".to_owned()]);
    assert_eq!(source.fetch_count(), 2);
}

#[tokio::test]
async fn test_failed_refresh_serves_previous_snapshot() {
    let source = Arc::new(StaticRecipeSource::new(sample_corpus()));
    let (cache, clock) = cache_with_clock(&source);

    let original = cache.get_or_refresh().await;
    source.set_failing(true);
    clock.advance(TTL + Duration::from_secs(1));

    let served = cache.get_or_refresh().await;
    assert!(Arc::ptr_eq(&original, &served));
    assert_eq!(source.fetch_count(), 2);

    // The stale stamp is kept, so the next access tries again
    let again = cache.get_or_refresh().await;
    assert_eq!(again.len(), 13);
    assert_eq!(source.fetch_count(), 3);
}

#[tokio::test]
async fn test_failure_with_no_prior_snapshot_yields_empty_corpus() {
    let source = Arc::new(StaticRecipeSource::new(sample_corpus()));
    source.set_failing(true);
    let (cache, _clock) = cache_with_clock(&source);

    let served = cache.get_or_refresh().await;
    assert!(served.is_empty());
    assert_eq!(source.fetch_count(), 1);

    source.set_failing(false);
    let recovered = cache.get_or_refresh().await;
    assert_eq!(recovered.len(), 13);
}

#[tokio::test]
async fn test_empty_snapshot_is_never_fresh() {
    let source = Arc::new(StaticRecipeSource::new(Vec::new()));
    let (cache, _clock) = cache_with_clock(&source);

    cache.get_or_refresh().await;
    cache.get_or_refresh().await;

    assert_eq!(source.fetch_count(), 2);
    assert!(!cache.is_fresh().await);
}

#[tokio::test]
async fn test_invalidate_forces_refetch_but_keeps_fallback() {
    let source = Arc::new(StaticRecipeSource::new(sample_corpus()));
    let (cache, _clock) = cache_with_clock(&source);

    cache.get_or_refresh().await;
    cache.invalidate().await;
    assert!(!cache.is_fresh().await);
    assert_eq!(cache.snapshot().await.len(), 13);

    cache.get_or_refresh().await;
    assert_eq!(source.fetch_count(), 2);
}

#[tokio::test]
async fn test_slow_source_times_out_to_cached_snapshot() {
    init_test_logging();
    let source = Arc::new(StaticRecipeSource::new(sample_corpus()).with_delay(Duration::from_millis(200)));
    let cache = RecipeCache::new(source.clone()).with_fetch_timeout(Duration::from_millis(20));

    let served = cache.get_or_refresh().await;

    assert!(served.is_empty());
    assert_eq!(source.fetch_count(), 1);
}

#[tokio::test]
async fn test_snapshot_does_not_fetch() {
    let source = Arc::new(StaticRecipeSource::new(sample_corpus()));
    let (cache, _clock) = cache_with_clock(&source);

    assert!(cache.snapshot().await.is_empty());
    assert_eq!(source.fetch_count(), 0);
    assert_eq!(cache.ttl(), TTL);
}
