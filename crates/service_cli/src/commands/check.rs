//! Check command implementation
//!
//! Prints the effective configuration after file loading, environment
//! overrides and validation.

use tracing::info;

use crate::config::CliConfig;
use crate::Result;

/// Run the check command
pub fn run(config: &CliConfig) -> Result<()> {
    info!("Checking configuration...");
    print!("{}", render(config)?);
    info!("Configuration check complete");
    Ok(())
}

/// The configuration as TOML followed by a status line.
pub fn render(config: &CliConfig) -> Result<String> {
    config.validate()?;
    let mut out = toml::to_string_pretty(config)?;
    out.push_str("\nConfiguration OK\n");
    Ok(out)
}
