use anyhow::Result;
use colored::Colorize;
use library_api::{config, init_tracing, server};
use std::path::Path;
use tracing::info;

/// Execute the start command
///
/// This will:
/// 1. Load configuration
/// 2. Apply command-line overrides
/// 3. Start the server (blocks until shutdown)
pub async fn execute(config_path: &Path, host: Option<String>, port: Option<u16>) -> Result<()> {
    println!("{}", "Starting Library API...".green());

    let mut cfg = config::load_config(config_path)?;

    if let Some(host) = host {
        cfg.server.host = host;
    }
    if let Some(port) = port {
        cfg.server.port = port;
    }

    init_tracing(&cfg.server);
    info!("Configuration loaded from {}", config_path.display());

    server::start_server(cfg).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    // Note: Full testing of the start command requires actual server
    // startup and is covered by the integration tests
}
