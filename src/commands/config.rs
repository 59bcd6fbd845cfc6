use anyhow::Result;
use tracing::info;

use skipquote::config;

/// Execute the config show command
///
/// Displays the current configuration as TOML
pub fn show() -> Result<()> {
    info!("Loading configuration for display");

    let cfg = config::load_config()?;

    println!("Current Configuration:");
    println!();

    let toml_string = toml::to_string_pretty(&cfg)?;
    println!("{}", toml_string);

    Ok(())
}

/// Execute the config validate command
///
/// Validates the configuration file
pub fn validate() -> Result<()> {
    println!("Validating configuration...");
    info!("Validating configuration file");

    let cfg = config::load_config()?;

    println!("✓ Configuration is valid");
    println!();
    println!("Summary:");
    println!("  Endpoint: {}", cfg.api.base_url);
    println!("  Timeout: {}s", cfg.api.timeout_seconds);
    println!(
        "  Location: {} ({})",
        cfg.location.postcode, cfg.location.area
    );

    info!("Configuration validation successful");
    Ok(())
}
