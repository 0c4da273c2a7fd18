//! Static site build command.

use std::path::{Path, PathBuf};

use anyhow::Result;
use folio_site::{BuildConfig, SiteBuilder};

use crate::config;

/// Run the build command.
pub async fn run(config_path: &Path, output: Option<PathBuf>, no_minify: bool) -> Result<()> {
    tracing::info!("Building site...");

    let file_config = config::load(config_path)?;

    let config = BuildConfig {
        content_dir: file_config.content.dir,
        assets_dir: file_config.content.assets,
        output_dir: output.unwrap_or(file_config.build.output),
        base_url: file_config.site.base_url,
        title: file_config.site.title,
        minify: if no_minify {
            false
        } else {
            file_config.build.minify
        },
    };

    let result = SiteBuilder::new(config).build().await?;

    if !result.report.is_empty() {
        tracing::warn!(
            "{} content file(s) were skipped or downgraded; see warnings above",
            result.report.len()
        );
    }

    tracing::info!(
        "Built {} pages and copied {} assets in {}ms",
        result.pages,
        result.assets,
        result.duration_ms
    );

    tracing::info!("Output: {}", result.output_dir.display());

    Ok(())
}
