//! Exemplar MCP Server
//!
//! A Model Context Protocol (MCP) server that exposes React Native coding
//! standards and code examples to AI agents over stdio transport.
//!
//! ## Usage
//!
//! ```bash
//! # Serve the resource tree in the current directory
//! exemplar-mcp
//!
//! # Serve a tree elsewhere
//! exemplar-mcp --root /srv/exemplar
//!
//! # Enable verbose logging
//! exemplar-mcp --verbose
//! ```
//!
//! ## MCP Configuration
//!
//! Add to your MCP client configuration (e.g. Claude Desktop or Windsurf):
//!
//! ```json
//! {
//!   "mcpServers": {
//!     "exemplar": {
//!       "command": "exemplar-mcp",
//!       "args": ["--root", "/srv/exemplar"]
//!     }
//!   }
//! }
//! ```
//!
//! ## Available Tools
//!
//! - **get_project_structure** / **get_api_communication** /
//!   **get_component_design** / **get_state_management**: standards documents
//! - **get_component_example** / **get_hook_example** /
//!   **get_service_example** / **get_screen_example** /
//!   **get_theme_example**: resolve one example by (possibly partial) name
//! - **list_available_examples**: all examples grouped by category

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use exemplar::config::ResourceConfig;
use exemplar::mcp::McpServer;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Exemplar MCP Server - expose coding standards and examples to AI agents
#[derive(Parser, Debug)]
#[command(name = "exemplar-mcp")]
#[command(
    author,
    version,
    about = "Exemplar MCP Server - Model Context Protocol interface for standards and examples"
)]
struct Args {
    /// Base directory containing the resources/ tree
    #[arg(long, short = 'r', env = "EXEMPLAR_ROOT")]
    root: Option<PathBuf>,

    /// Enable verbose logging (outputs to stderr)
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging to stderr (MCP uses stdout for protocol)
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        // By default, suppress all logging to avoid interfering with MCP protocol
        EnvFilter::new("error")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let root = match args.root {
        Some(root) => root,
        None => std::env::current_dir()?,
    };

    tracing::info!("Starting exemplar MCP server with root: {}", root.display());

    let config = ResourceConfig::new(root);

    // Early warning for deployment defects; individual requests still
    // degrade gracefully without it.
    let missing = config.verify();
    if !missing.is_empty() {
        tracing::warn!("{} expected resource directories are missing", missing.len());
    }

    McpServer::new(config).run()?;

    Ok(())
}
