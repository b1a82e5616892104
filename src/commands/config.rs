use anyhow::Result;
use colored::Colorize;
use library_api::config;
use std::path::Path;
use tracing::info;

/// Execute the config show command
///
/// Displays the effective configuration after merging defaults, the file,
/// and environment overrides
pub fn show(config_path: &Path) -> Result<()> {
    println!("{}", "Loading configuration...".yellow());
    info!("Loading configuration for display");

    let cfg = config::load_config(config_path)?;

    println!("{}", "Current Configuration:".green().bold());
    println!();

    // Serialize to TOML format
    let toml_string = toml::to_string_pretty(&cfg)?;
    println!("{}", toml_string);

    info!("Configuration displayed successfully");
    Ok(())
}

/// Execute the config validate command
pub fn validate(config_path: &Path) -> Result<()> {
    println!("{}", "Validating configuration...".yellow());
    info!("Validating configuration file");

    let cfg = config::load_config(config_path)?;

    println!("{}", "✓ Configuration is valid".green());
    println!();
    println!("{}", "Summary:".bold());
    println!("  Listen address: {}:{}", cfg.server.host, cfg.server.port);
    println!(
        "  Metrics: {}",
        endpoint_summary(cfg.metrics.enabled, &cfg.metrics.endpoint)
    );
    println!(
        "  Docs: {}",
        endpoint_summary(cfg.docs.enabled, &cfg.docs.path)
    );
    println!("  CORS origins: {}", origins_summary(&cfg.cors.allowed_origins));

    info!("Configuration validation successful");
    Ok(())
}

fn endpoint_summary(enabled: bool, path: &str) -> String {
    if enabled {
        path.to_string()
    } else {
        "disabled".to_string()
    }
}

fn origins_summary(origins: &[String]) -> String {
    if origins.is_empty() {
        "any".to_string()
    } else {
        origins.join(", ")
    }
}
