use anyhow::{Context, Result};
use config::{AppConfig, init_logging};

fn main() -> Result<()> {
    init_logging();

    let config = AppConfig::default();
    gui::run(config).context("failed to start the PeersChat window")?;

    tracing::info!("launcher window closed");
    Ok(())
}
