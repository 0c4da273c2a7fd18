//! Serve command: a built site plus the style-check API.

use std::path::{Path, PathBuf};

use anyhow::Result;
use folio_server::{ServeConfig, SiteServer};

use crate::config;

/// Run the serve command.
pub async fn run(config_path: &Path, port: Option<u16>, dir: Option<PathBuf>) -> Result<()> {
    let file_config = config::load(config_path)?;

    let site_dir = dir.unwrap_or(file_config.build.output);
    if !site_dir.exists() {
        anyhow::bail!(
            "Directory not found: {}. Run 'folio build' first.",
            site_dir.display()
        );
    }

    let config = ServeConfig {
        host: file_config.server.host,
        port: port.unwrap_or(file_config.server.port),
        site_dir,
        upstream_url: file_config.server.upstream_url,
        ..ServeConfig::default()
    };

    SiteServer::new(config).start().await?;

    Ok(())
}
