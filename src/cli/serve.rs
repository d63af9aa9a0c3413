//! `serve`: the REST API.

use clap::Args;
use tracing::info;

use skyforge::adapters::http::{api_router, AppState};
use skyforge::config::ConfigError;

use super::{CliError, Context};

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Overrides server.host
    #[arg(long)]
    pub host: Option<String>,

    /// Overrides server.port
    #[arg(long)]
    pub port: Option<u16>,
}

pub async fn serve(ctx: Context, args: ServeArgs) -> Result<(), CliError> {
    let mut server = ctx.config.server.clone();
    if let Some(host) = args.host {
        server.host = host;
    }
    if let Some(port) = args.port {
        server.port = port;
    }
    server.validate().map_err(ConfigError::from)?;
    let addr = server.socket_addr().map_err(ConfigError::from)?;

    let state = AppState::new(ctx.repository.clone(), ctx.generator.clone());
    let app = api_router(state, &server);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(
        %addr,
        engine = ctx.generator.engine_name(),
        profiles_dir = %ctx.config.storage.profiles_dir.display(),
        "Skyforge API listening"
    );
    axum::serve(listener, app).await?;
    Ok(())
}
