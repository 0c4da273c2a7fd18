//! Site configuration (site.toml).
//!
//! Every field is defaulted, so an absent file yields a working default
//! config. The file existing but failing to parse is an error.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use folio_server::DEFAULT_API_URL;

/// Configuration file structure (site.toml).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct ConfigFile {
    pub site: SiteSettings,
    pub content: ContentSettings,
    pub build: BuildSettings,
    pub server: ServerSettings,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteSettings {
    pub title: String,
    pub base_url: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            title: "Portfolio".to_string(),
            base_url: "/".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ContentSettings {
    pub dir: PathBuf,
    pub assets: PathBuf,
}

impl Default for ContentSettings {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("content"),
            assets: PathBuf::from("assets"),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct BuildSettings {
    pub output: PathBuf,
    pub minify: bool,
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            output: PathBuf::from("_site"),
            minify: true,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub upstream_url: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 4000,
            upstream_url: DEFAULT_API_URL.to_string(),
        }
    }
}

/// Load configuration from site.toml if it exists.
/// Returns an error if the config file exists but is malformed.
pub fn load(path: &Path) -> Result<ConfigFile> {
    if !path.exists() {
        return Ok(ConfigFile::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config: ConfigFile = toml::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    tracing::info!("Loaded config from {}", path.display());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_complete() {
        let config = ConfigFile::default();

        assert_eq!(config.site.title, "Portfolio");
        assert_eq!(config.content.dir, PathBuf::from("content"));
        assert_eq!(config.build.output, PathBuf::from("_site"));
        assert!(config.build.minify);
        assert_eq!(config.server.port, 4000);
    }

    #[test]
    fn partial_files_fall_back_per_section() {
        let config: ConfigFile = toml::from_str(
            r#"
            [site]
            title = "My work"

            [server]
            port = 8080
            "#,
        )
        .unwrap();

        assert_eq!(config.site.title, "My work");
        assert_eq!(config.site.base_url, "/");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
    }
}
