// ABOUTME: Defines ToolExecutionContext which gives tools access to the corpus and random source
// ABOUTME: Built per tools/call by the request processor from the shared ServerResources
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HowToCook MCP Contributors

//! # Tool Execution Context
//!
//! Provides a unified context object for tool execution, containing:
//! - access to the shared server resources
//! - request tracing information

use std::fmt;
use std::sync::Arc;

use howtocook_intelligence::RandomSource;
use serde_json::Value;

use crate::mcp::resources::ServerResources;
use crate::models::Recipe;

/// Context provided to every tool execution.
///
/// The `resources` field is shared across all contexts; cloning a context only
/// bumps the reference count.
#[derive(Clone)]
pub struct ToolExecutionContext {
    /// Access to all server resources (recipe cache, random source)
    pub resources: Arc<ServerResources>,
    /// Request ID for tracing/logging
    pub request_id: Option<Value>,
}

impl ToolExecutionContext {
    /// Create a new context
    #[must_use]
    pub const fn new(resources: Arc<ServerResources>) -> Self {
        Self {
            resources,
            request_id: None,
        }
    }

    /// Set request ID for tracing
    #[must_use]
    pub fn with_request_id(mut self, request_id: Value) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Current corpus, refreshed first if the cached copy is stale
    pub async fn recipes(&self) -> Arc<Vec<Recipe>> {
        self.resources.cache.get_or_refresh().await
    }

    /// Random source used by the recommendation tools
    #[must_use]
    pub fn random(&self) -> &dyn RandomSource {
        self.resources.random.as_ref()
    }

    /// Get tracing span attributes for this context
    #[must_use]
    pub fn span_attributes(&self) -> Vec<(&'static str, String)> {
        let mut attrs = Vec::new();
        if let Some(request_id) = &self.request_id {
            attrs.push(("request_id", request_id.to_string()));
        }
        attrs
    }
}

impl fmt::Debug for ToolExecutionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolExecutionContext")
            .field("request_id", &self.request_id)
            .field("resources", &"<ServerResources>")
            .finish()
    }
}
