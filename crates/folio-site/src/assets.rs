//! Asset passthrough copy.
//!
//! The assets tree is mirrored into the output directory byte-for-byte,
//! except CSS, which is minified when minification is enabled.

use std::fs;
use std::io;
use std::path::Path;

use walkdir::WalkDir;

/// Copies the assets directory into the build output.
pub struct AssetPipeline {
    minify: bool,
}

impl AssetPipeline {
    pub fn new(minify: bool) -> Self {
        Self { minify }
    }

    /// Mirror `source` into `dest`, returning the number of files copied.
    /// A missing source directory is a warning, not an error.
    pub fn copy(&self, source: &Path, dest: &Path) -> io::Result<usize> {
        if !source.exists() {
            tracing::warn!("assets directory not found: {}", source.display());
            return Ok(0);
        }

        let mut copied = 0;

        for entry in WalkDir::new(source)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let relative = path.strip_prefix(source).unwrap_or(path);
            let target = dest.join(relative);
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }

            let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
            if self.minify && ext == "css" {
                let css = fs::read_to_string(path)?;
                let minified = Self::minify_css(&css).unwrap_or(css);
                fs::write(&target, minified)?;
            } else {
                fs::copy(path, &target)?;
            }
            copied += 1;
        }

        Ok(copied)
    }

    /// Minify CSS using lightningcss.
    pub fn minify_css(css: &str) -> Result<String, String> {
        use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};

        let stylesheet = StyleSheet::parse(css, ParserOptions::default())
            .map_err(|e| format!("CSS parse error: {}", e))?;

        let minified = stylesheet
            .to_css(PrinterOptions {
                minify: true,
                ..Default::default()
            })
            .map_err(|e| format!("CSS minify error: {}", e))?;

        Ok(minified.code)
    }
}
