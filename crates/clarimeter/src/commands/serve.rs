//! Serve command: run the HTTP API.

use clap::Args;
use clarimeter_core::config::Config;
use tracing::{info, instrument};

use crate::http::{self, ApiState};

/// Arguments for the `serve` subcommand.
#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    /// Address to bind [default: 127.0.0.1]
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on [default: 5000]
    #[arg(long, short = 'p')]
    pub port: Option<u16>,
}

/// Serve `/analyze` and `/health` until interrupted.
#[instrument(name = "cmd_serve", skip_all)]
pub async fn cmd_serve(args: ServeArgs, config: Config) -> anyhow::Result<()> {
    let host = args.host.unwrap_or_else(|| config.host().to_string());
    let port = args.port.unwrap_or_else(|| config.port());
    let state = ApiState::from_config(&config);

    info!(
        %host,
        port,
        default_method = ?state.default_method,
        max_input_bytes = ?state.max_input_bytes,
        "starting HTTP API"
    );
    http::run_server(state, &host, port).await
}
