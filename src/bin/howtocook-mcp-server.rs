// ABOUTME: Stdio server binary for the HowToCook recipe MCP server
// ABOUTME: Loads configuration, warms the recipe corpus, and serves MCP requests on stdin/stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HowToCook MCP Contributors

//! # HowToCook MCP Server Binary
//!
//! Startup fails when the corpus cannot be loaded at all; later refresh
//! failures are served from the cached snapshot.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use howtocook_mcp_server::{
    config::ServerConfig,
    logging,
    mcp::{ServerResources, StdioTransport},
    models::all_categories,
};
use tokio::signal;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "howtocook-mcp-server")]
#[command(about = "HowToCook MCP server - recipe lookup and meal planning over stdio")]
#[command(version)]
pub struct Args {
    /// Override the corpus document URL
    #[arg(long)]
    recipes_url: Option<String>,

    /// Load the corpus from a local JSON file instead of HTTP
    #[arg(long)]
    recipes_file: Option<PathBuf>,

    /// Override the corpus cache time-to-live in seconds
    #[arg(long)]
    cache_ttl_secs: Option<u64>,

    /// Seed the recommendation random source for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

impl Args {
    fn apply(self, config: &mut ServerConfig) {
        if let Some(url) = self.recipes_url {
            config.recipes_url = url;
        }
        if let Some(path) = self.recipes_file {
            config.recipes_file = Some(path);
        }
        if let Some(ttl) = self.cache_ttl_secs {
            config.cache_ttl_secs = ttl;
        }
        if let Some(seed) = self.seed {
            config.random_seed = Some(seed);
        }
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    args.apply(&mut config);
    config.validate()?;

    info!("正在初始化 HowToCook MCP 服务器...");
    info!("{}", config.summary());

    let resources = Arc::new(ServerResources::from_config(&config));

    let recipes = resources.cache.get_or_refresh().await;
    if recipes.is_empty() {
        error!("错误: 未能加载任何菜谱数据");
        return Ok(ExitCode::FAILURE);
    }

    info!("成功加载 {} 个菜谱", recipes.len());
    info!("可用分类: {}", all_categories(&recipes).join(", "));

    let transport = StdioTransport::new(Arc::clone(&resources));
    info!("HowToCook MCP 服务器已启动并准备接收请求");

    tokio::select! {
        result = transport.run() => {
            if let Err(e) = result {
                error!("Stdio transport failed: {}", e);
                return Ok(ExitCode::FAILURE);
            }
        }
        _ = signal::ctrl_c() => {
            info!("Received interrupt, shutting down");
        }
    }

    Ok(ExitCode::SUCCESS)
}
