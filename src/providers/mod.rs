// ABOUTME: Recipe corpus providers behind the async RecipeSource trait
// ABOUTME: HTTP document fetch, local file read, and an in-memory source for tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HowToCook MCP Contributors

//! # Corpus Providers
//!
//! A [`RecipeSource`] yields the full list of normalized recipes. The
//! [`RecipeCache`](crate::cache::RecipeCache) owns refresh policy; sources only
//! fetch.
//!
//! ## Example: Adding a New Source
//!
//! ```rust,no_run
//! use async_trait::async_trait;
//! use howtocook_mcp_server::errors::AppResult;
//! use howtocook_mcp_server::models::Recipe;
//! use howtocook_mcp_server::providers::RecipeSource;
//!
//! struct FixedSource(Vec<Recipe>);
//!
//! #[async_trait]
//! impl RecipeSource for FixedSource {
//!     fn describe(&self) -> String {
//!         "fixed".to_owned()
//!     }
//!
//!     async fn fetch_recipes(&self) -> AppResult<Vec<Recipe>> {
//!         Ok(self.0.clone())
//!     }
//! }
//! ```

/// Local JSON file source
pub mod file;
/// Remote JSON document source
pub mod http;
/// In-memory source with scripted failures
pub mod memory;
/// Raw record normalization
pub mod normalize;

use async_trait::async_trait;

use crate::errors::AppResult;
use crate::models::Recipe;

pub use file::FileRecipeSource;
pub use http::HttpRecipeSource;
pub use memory::StaticRecipeSource;
pub use normalize::{generate_id, normalize_recipes};

/// A supplier of the recipe corpus
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// Short description for logs (URL, path)
    fn describe(&self) -> String;

    /// Fetch and normalize the full corpus
    ///
    /// # Errors
    ///
    /// Returns `AppError` when the source cannot be read or is not a JSON array
    async fn fetch_recipes(&self) -> AppResult<Vec<Recipe>>;
}
