use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use library_api::{config::ServerConfig, init_tracing};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let args = cli::Cli::parse();

    // The start command initializes tracing from the loaded configuration;
    // every other command logs with defaults
    if !matches!(args.get_command(), cli::Commands::Start { .. }) {
        init_tracing(&ServerConfig::default());
    }

    // Dispatch to appropriate command handler
    match args.get_command() {
        cli::Commands::Start { host, port } => {
            commands::start::execute(&args.config, host, port).await?;
        }
        cli::Commands::Config { action } => match action {
            cli::ConfigCommands::Show => commands::config::show(&args.config)?,
            cli::ConfigCommands::Validate => commands::config::validate(&args.config)?,
        },
        cli::Commands::Version => {
            println!("Library API v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
