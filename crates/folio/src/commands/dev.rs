//! Development command: build, serve, rebuild on content changes.

use std::path::Path;

use anyhow::Result;
use folio_server::{FileWatcher, ServeConfig, SiteServer, WatchEvent};
use folio_site::{BuildConfig, SiteBuilder};

use crate::config;

/// Run the dev command.
pub async fn run(config_path: &Path, port: Option<u16>, open: bool) -> Result<()> {
    let file_config = config::load(config_path)?;

    let build_config = BuildConfig {
        content_dir: file_config.content.dir.clone(),
        assets_dir: file_config.content.assets.clone(),
        output_dir: file_config.build.output.clone(),
        base_url: file_config.site.base_url.clone(),
        title: file_config.site.title.clone(),
        // Skip minification for fast rebuilds
        minify: false,
    };

    let result = SiteBuilder::new(build_config.clone()).build().await?;
    tracing::info!("Built {} pages in {}ms", result.pages, result.duration_ms);

    // Rebuild whenever content or assets change
    let watch_paths = vec![
        file_config.content.dir.clone(),
        file_config.content.assets.clone(),
    ];
    let (watcher, mut rx) = FileWatcher::new(&watch_paths)?;

    tokio::spawn(async move {
        while let Some(event) = rx.recv().await {
            match &event {
                WatchEvent::ContentChanged(path) => {
                    tracing::info!("Content changed: {}", path.display());
                }
                WatchEvent::AssetChanged(path) => {
                    tracing::info!("Asset changed: {}", path.display());
                }
                WatchEvent::Created(path) | WatchEvent::Deleted(path) => {
                    tracing::info!("Tree changed: {}", path.display());
                }
            }

            match SiteBuilder::new(build_config.clone()).build().await {
                Ok(result) => {
                    tracing::info!("Rebuilt {} pages in {}ms", result.pages, result.duration_ms);
                }
                Err(e) => {
                    tracing::warn!("Rebuild failed: {}", e);
                }
            }
        }
        // Keep watcher alive
        drop(watcher);
    });

    let serve_config = ServeConfig {
        host: file_config.server.host,
        port: port.unwrap_or(file_config.server.port),
        site_dir: file_config.build.output,
        upstream_url: file_config.server.upstream_url,
        open,
        ..ServeConfig::default()
    };

    SiteServer::new(serve_config).start().await?;

    Ok(())
}
