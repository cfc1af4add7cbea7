// ABOUTME: Corpus cache constants for TTL, fetch timeouts, and the default source
// ABOUTME: Defaults used when the environment does not override them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HowToCook MCP Contributors

/// Remote JSON document holding the full recipe corpus
pub const DEFAULT_RECIPES_URL: &str = "https://weilei.site/all_recipes.json";

/// Corpus snapshot TTL (5 minutes)
pub const DEFAULT_RECIPE_CACHE_TTL_SECS: u64 = 300;

/// Upper bound on a single corpus fetch, including body download
pub const DEFAULT_RECIPE_FETCH_TIMEOUT_SECS: u64 = 30;

/// TCP connect timeout for the shared HTTP client
pub const DEFAULT_HTTP_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Length of the token generated for records with neither id nor name
pub const GENERATED_ID_LEN: usize = 9;
