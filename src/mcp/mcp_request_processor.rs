// ABOUTME: MCP request processing and protocol handling for the stdio server
// ABOUTME: Validates, routes, and executes JSON-RPC requests, including tools/call dispatch
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HowToCook MCP Contributors

use std::sync::Arc;
use std::time::Instant;

use serde_json::{json, Value};
use tracing::{debug, error, warn};

use super::resources::ServerResources;
use super::schema::{InitializeResponse, ToolCall};
use crate::errors::{AppError, AppResult, ToolError};
use crate::jsonrpc::{error_codes, JsonRpcRequest, JsonRpcResponse, JSONRPC_VERSION};
use crate::logging::AppLogger;
use crate::tools::ToolExecutionContext;

/// Processes MCP protocol requests with validation, routing, and execution
pub struct McpRequestProcessor {
    resources: Arc<ServerResources>,
}

impl McpRequestProcessor {
    /// Create a new MCP request processor
    #[must_use]
    pub const fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Handle an MCP request and return a response
    ///
    /// Notifications produce no response.
    pub async fn handle_request(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        let start_time = Instant::now();
        debug!(method = %request.method, id = ?request.id, "Received MCP request");

        if request.is_notification() {
            debug!(method = %request.method, "Handled notification");
            return None;
        }

        let response = self.process_or_error(request).await;

        debug!(
            duration_ms = elapsed_ms(start_time),
            success = response.is_success(),
            "Completed MCP request"
        );
        Some(response)
    }

    async fn process_or_error(&self, request: JsonRpcRequest) -> JsonRpcResponse {
        if let Err(e) = Self::validate_request(&request) {
            warn!(error = %e, "Rejected malformed request");
            return JsonRpcResponse::error(request.id, error_codes::INVALID_REQUEST, e.message);
        }

        match self.process_request(&request).await {
            Ok(response) => response,
            Err(e) => {
                error!(
                    "Failed to process MCP request: {} | method={}, id={:?}",
                    e, request.method, request.id
                );
                JsonRpcResponse::from_app_error(request.id, &e)
            }
        }
    }

    /// Route to the handler for `request.method`
    async fn process_request(&self, request: &JsonRpcRequest) -> AppResult<JsonRpcResponse> {
        match request.method.as_str() {
            "initialize" => Self::handle_initialize(request),
            "ping" => Ok(JsonRpcResponse::success(request.id.clone(), json!({}))),
            "tools/list" => Ok(self.handle_tools_list(request)),
            "tools/call" => Ok(self.handle_tools_call(request).await),
            "resources/list" => Ok(Self::empty_list(request, json!({ "resources": [] }))),
            "prompts/list" => Ok(Self::empty_list(request, json!({ "prompts": [] }))),
            _ => Ok(Self::handle_unknown_method(request)),
        }
    }

    /// Validate MCP request format and required fields
    fn validate_request(request: &JsonRpcRequest) -> AppResult<()> {
        if request.jsonrpc != JSONRPC_VERSION {
            return Err(AppError::invalid_input(format!(
                "Invalid JSON-RPC version: got '{}', expected '{}'",
                request.jsonrpc, JSONRPC_VERSION
            )));
        }

        if request.method.is_empty() {
            return Err(AppError::invalid_input("Missing method"));
        }

        Ok(())
    }

    fn handle_initialize(request: &JsonRpcRequest) -> AppResult<JsonRpcResponse> {
        debug!("Handling initialize request");
        let result = serde_json::to_value(InitializeResponse::default())?;
        Ok(JsonRpcResponse::success(request.id.clone(), result))
    }

    fn handle_tools_list(&self, request: &JsonRpcRequest) -> JsonRpcResponse {
        debug!("Handling tools/list request");
        let tools = self.resources.tool_registry.all_schemas();
        JsonRpcResponse::success(request.id.clone(), json!({ "tools": tools }))
    }

    async fn handle_tools_call(&self, request: &JsonRpcRequest) -> JsonRpcResponse {
        let id = request.id.clone();

        let Some(params) = request.params.clone() else {
            return JsonRpcResponse::error(
                id,
                error_codes::INVALID_PARAMS,
                "Missing parameters for tools/call",
            );
        };

        let call: ToolCall = match serde_json::from_value(params) {
            Ok(call) => call,
            Err(e) => {
                return JsonRpcResponse::error(
                    id,
                    error_codes::INVALID_PARAMS,
                    format!("Invalid tools/call parameters: {e}"),
                );
            }
        };

        let registry = &self.resources.tool_registry;
        if !registry.contains(&call.name) {
            warn!(tool = %call.name, "Unknown tool requested");
            return JsonRpcResponse::error(
                id,
                error_codes::METHOD_NOT_FOUND,
                ToolError::not_found(&call.name).to_string(),
            );
        }

        let mut context = ToolExecutionContext::new(Arc::clone(&self.resources));
        if let Some(request_id) = &id {
            context = context.with_request_id(request_id.clone());
        }

        debug!(tool = %call.name, attributes = ?context.span_attributes(), "Executing tool");
        let start_time = Instant::now();
        let arguments = call.arguments.unwrap_or(Value::Null);
        let outcome = registry
            .execute(&call.name, arguments, &context)
            .await
            .and_then(|result| {
                let is_error = result.is_error;
                Ok((is_error, serde_json::to_value(result.into_response()?)?))
            });
        let duration_ms = elapsed_ms(start_time);

        match outcome {
            Ok((is_error, response)) => {
                AppLogger::log_mcp_tool_call(&call.name, !is_error, duration_ms);
                JsonRpcResponse::success(id, response)
            }
            Err(e) => {
                error!(
                    mcp.tool = %call.name,
                    mcp.success = false,
                    mcp.duration_ms = duration_ms,
                    error = %e,
                    "Tool call failed"
                );
                JsonRpcResponse::error(
                    id,
                    error_codes::INTERNAL_ERROR,
                    ToolError::execution_failed(&call.name, e.message).to_string(),
                )
            }
        }
    }

    fn empty_list(request: &JsonRpcRequest, result: Value) -> JsonRpcResponse {
        debug!("Handling {} request", request.method);
        JsonRpcResponse::success(request.id.clone(), result)
    }

    fn handle_unknown_method(request: &JsonRpcRequest) -> JsonRpcResponse {
        warn!(method = %request.method, "Unknown MCP method");
        JsonRpcResponse::error(
            request.id.clone(),
            error_codes::METHOD_NOT_FOUND,
            format!("Method not found: {}", request.method),
        )
    }
}

fn elapsed_ms(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}
