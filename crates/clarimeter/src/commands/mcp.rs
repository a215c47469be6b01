//! MCP command: serve analysis tools over stdio.

use clap::Args;
use clarimeter_core::config::Config;
use rmcp::ServiceExt;
use tracing::{info, instrument};

use crate::server::ProjectServer;

/// Arguments for the `mcp` subcommand.
#[derive(Args, Debug, Default)]
pub struct McpArgs {
    // Transport is always stdio; settings come from config
}

/// Run the MCP server until the client disconnects.
#[instrument(name = "cmd_mcp", skip_all)]
pub async fn cmd_mcp(_args: McpArgs, config: Config) -> anyhow::Result<()> {
    let server = ProjectServer::from_config(&config);
    info!("starting MCP server on stdio");

    let service = server.serve(rmcp::transport::stdio()).await?;
    let reason = service.waiting().await?;

    info!(?reason, "MCP server stopped");
    Ok(())
}
