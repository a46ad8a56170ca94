use anyhow::Result;
use clap::Parser;

use mail_composer::cli::{self, Cli};
use mail_composer::config::Settings;
use mail_composer::telemetry::init_tracing;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let settings = Settings::load(cli.config.as_deref())?;

    // Initialize tracing
    init_tracing(&settings.logging);
    tracing::debug!("Configuration loaded");

    if let Err(e) = cli::run(cli, &settings) {
        tracing::error!(code = %e.code(), error = %e, "Command failed");
        return Err(e.into());
    }

    Ok(())
}
