// ABOUTME: Tests for environment-driven server configuration
// ABOUTME: Serialized because every case mutates process environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HowToCook MCP Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;
use std::path::PathBuf;

use howtocook_mcp_server::config::{env_keys, ServerConfig};
use howtocook_mcp_server::constants::cache::{
    DEFAULT_RECIPES_URL, DEFAULT_RECIPE_CACHE_TTL_SECS, DEFAULT_RECIPE_FETCH_TIMEOUT_SECS,
};
use serial_test::serial;

const ALL_KEYS: [&str; 6] = [
    env_keys::RECIPES_URL,
    env_keys::RECIPES_FILE,
    env_keys::RECIPE_CACHE_TTL_SECS,
    env_keys::RECIPE_FETCH_TIMEOUT_SECS,
    env_keys::HTTP_CONNECT_TIMEOUT_SECS,
    env_keys::RANDOM_SEED,
];

fn clear_env() {
    for key in ALL_KEYS {
        env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_defaults_when_environment_is_empty() {
    clear_env();

    let config = ServerConfig::from_env().unwrap();

    assert_eq!(config, ServerConfig::default());
    assert_eq!(config.recipes_url, DEFAULT_RECIPES_URL);
    assert_eq!(config.cache_ttl_secs, DEFAULT_RECIPE_CACHE_TTL_SECS);
    assert_eq!(config.fetch_timeout_secs, DEFAULT_RECIPE_FETCH_TIMEOUT_SECS);
    assert!(config.random_seed.is_none());
}

#[test]
#[serial]
fn test_overrides_are_read() {
    clear_env();
    env::set_var(env_keys::RECIPES_URL, "https://recipes.example.org/all.json");
    env::set_var(env_keys::RECIPE_CACHE_TTL_SECS, "60");
    env::set_var(env_keys::RECIPE_FETCH_TIMEOUT_SECS, "5");
    env::set_var(env_keys::HTTP_CONNECT_TIMEOUT_SECS, "2");
    env::set_var(env_keys::RANDOM_SEED, " 1234 ");

    let config = ServerConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.recipes_url, "https://recipes.example.org/all.json");
    assert_eq!(config.cache_ttl_secs, 60);
    assert_eq!(config.fetch_timeout_secs, 5);
    assert_eq!(config.connect_timeout_secs, 2);
    assert_eq!(config.random_seed, Some(1234));
}

#[test]
#[serial]
fn test_invalid_number_is_an_error() {
    clear_env();
    env::set_var(env_keys::RECIPE_CACHE_TTL_SECS, "five minutes");

    let error = ServerConfig::from_env().unwrap_err();
    clear_env();

    assert!(error.to_string().contains("RECIPE_CACHE_TTL_SECS"));
}

#[test]
#[serial]
fn test_invalid_seed_is_an_error() {
    clear_env();
    env::set_var(env_keys::RANDOM_SEED, "-3");

    let error = ServerConfig::from_env().unwrap_err();
    clear_env();

    assert!(error.to_string().contains("RANDOM_SEED"));
}

#[test]
#[serial]
fn test_zero_fetch_timeout_is_rejected() {
    clear_env();
    env::set_var(env_keys::RECIPE_FETCH_TIMEOUT_SECS, "0");

    let result = ServerConfig::from_env();
    clear_env();

    assert!(result.is_err());
}

#[test]
#[serial]
fn test_blank_optional_values_are_ignored() {
    clear_env();
    env::set_var(env_keys::RECIPES_FILE, "  ");
    env::set_var(env_keys::RANDOM_SEED, "");

    let config = ServerConfig::from_env().unwrap();
    clear_env();

    assert!(config.recipes_file.is_none());
    assert!(config.random_seed.is_none());
}

#[test]
#[serial]
fn test_recipes_file_takes_precedence_in_location() {
    clear_env();
    env::set_var(env_keys::RECIPES_FILE, "/srv/howtocook/all_recipes.json");
    env::set_var(env_keys::RECIPES_URL, "");

    let config = ServerConfig::from_env().unwrap();
    clear_env();

    assert_eq!(
        config.recipes_file,
        Some(PathBuf::from("/srv/howtocook/all_recipes.json"))
    );
    assert_eq!(config.corpus_location(), "file:///srv/howtocook/all_recipes.json");
}

#[test]
fn test_empty_url_without_file_fails_validation() {
    let config = ServerConfig {
        recipes_url: "   ".to_owned(),
        ..ServerConfig::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_summary_mentions_corpus_and_random_mode() {
    let threaded = ServerConfig::default();
    let summary = threaded.summary();
    assert!(summary.contains(DEFAULT_RECIPES_URL));
    assert!(summary.contains("random=thread"));

    let seeded = ServerConfig {
        random_seed: Some(42),
        ..ServerConfig::default()
    };
    assert!(seeded.summary().contains("random=seeded(42)"));
}
