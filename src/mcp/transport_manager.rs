// ABOUTME: Line-delimited JSON-RPC transport over stdin/stdout
// ABOUTME: Reads one request per line, processes requests in order, writes one response per line
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HowToCook MCP Contributors

use std::mem;
use std::sync::Arc;

use serde_json::Value;
use tokio::io::{
    self, AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader,
};
use tracing::{info, warn};

use super::mcp_request_processor::McpRequestProcessor;
use super::resources::ServerResources;
use crate::errors::AppResult;
use crate::jsonrpc::{error_codes, JsonRpcRequest, JsonRpcResponse};

/// Stdio transport for MCP communication
pub struct StdioTransport {
    processor: McpRequestProcessor,
}

impl StdioTransport {
    /// Creates a new stdio transport instance
    #[must_use]
    pub const fn new(resources: Arc<ServerResources>) -> Self {
        Self {
            processor: McpRequestProcessor::new(resources),
        }
    }

    /// Run over the process stdin/stdout until stdin closes
    ///
    /// # Errors
    ///
    /// Returns an error if stdio reading or writing fails
    pub async fn run(&self) -> AppResult<()> {
        info!("MCP stdio transport ready - listening on stdin/stdout");
        self.serve(BufReader::new(io::stdin()), io::stdout())
            .await
    }

    /// Serve requests from `reader`, writing responses to `writer`
    ///
    /// # Errors
    ///
    /// Returns an error if reading, writing, or response serialization fails
    pub async fn serve<R, W>(&self, mut reader: R, mut writer: W) -> AppResult<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut buf = Vec::new();

        while reader.read_until(b'\n', &mut buf).await? > 0 {
            let response = match String::from_utf8(mem::take(&mut buf)) {
                Ok(line) if line.trim().is_empty() => continue,
                Ok(line) => self.process_line(&line).await,
                Err(e) => {
                    warn!("Discarding non UTF-8 input line: {}", e);
                    Some(JsonRpcResponse::parse_error())
                }
            };

            if let Some(response) = response {
                let mut json = serde_json::to_string(&response)?;
                json.push('\n');
                writer.write_all(json.as_bytes()).await?;
                writer.flush().await?;
            }
        }

        info!("stdin closed, stopping stdio transport");
        Ok(())
    }

    async fn process_line(&self, line: &str) -> Option<JsonRpcResponse> {
        let message: Value = match serde_json::from_str(line) {
            Ok(message) => message,
            Err(e) => {
                warn!("Invalid JSON-RPC message: {}", e);
                return Some(JsonRpcResponse::parse_error());
            }
        };

        let id = message.get("id").cloned();
        match serde_json::from_value::<JsonRpcRequest>(message) {
            Ok(request) => self.processor.handle_request(request).await,
            Err(e) => {
                warn!("Failed to parse MCP request: {}", e);
                Some(JsonRpcResponse::error(
                    id,
                    error_codes::INVALID_REQUEST,
                    format!("Invalid request: {e}"),
                ))
            }
        }
    }
}
