//! Scaffold a new site in the current directory.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command.
pub async fn run(yes: bool) -> Result<()> {
    tracing::info!("Initializing folio site...");

    let content_dir = Path::new("content");

    if content_dir.exists() && !yes {
        tracing::warn!("content/ directory already exists. Use --yes to overwrite.");
        return Ok(());
    }

    for dir in [
        "content/projects/content-design",
        "content/projects/creative",
        "content/pages",
        "content/blog",
        "assets/css",
    ] {
        fs::create_dir_all(dir).with_context(|| format!("Failed to create {dir}"))?;
    }

    let files = [
        ("site.toml", DEFAULT_CONFIG),
        ("content/navigation.xml", DEFAULT_NAVIGATION),
        (
            "content/projects/content-design/error-messages.xml",
            DEFAULT_PROJECT,
        ),
        ("content/pages/about.xml", DEFAULT_PAGE),
        ("content/blog/hello.xml", DEFAULT_POST),
        ("assets/css/site.css", DEFAULT_CSS),
    ];

    for (path, contents) in files {
        if Path::new(path).exists() && !yes {
            continue;
        }
        fs::write(path, contents).with_context(|| format!("Failed to write {path}"))?;
        tracing::info!("Created {path}");
    }

    tracing::info!("Initialization complete!");
    tracing::info!("Run 'folio dev' to start the development server.");

    Ok(())
}

const DEFAULT_CONFIG: &str = r#"# Folio configuration

[site]
# Site title, shown in the sidebar and page titles
title = "Portfolio"

# Base URL (for deployment under a sub-path)
base_url = "/"

[content]
# Content source directory
dir = "content"

# Assets directory, copied through to the output
assets = "assets"

[build]
# Output directory for the built site
output = "_site"

# Minify CSS assets
minify = true

[server]
host = "127.0.0.1"
port = 4000
"#;

const DEFAULT_NAVIGATION: &str = r#"<navigation>
  <section>
    <label>Work</label>
    <landing>/</landing>
    <link><label>Projects</label><path>/</path></link>
    <link><label>Blog</label><path>/blog/</path></link>
  </section>
  <section>
    <label>About</label>
    <link><label>About me</label><path>/about/</path></link>
  </section>
</navigation>
"#;

const DEFAULT_PROJECT: &str = r#"<project>
  <meta>
    <id>error-messages</id>
    <title>Error message overhaul</title>
    <tags>
      <tag>ux-writing</tag>
      <tag>errors</tag>
    </tags>
  </meta>
  <p>Rewrote every error message in the product to lead with the problem
  and follow with the next step.</p>
</project>
"#;

const DEFAULT_PAGE: &str = r#"<page>
  <meta>
    <id>about</id>
    <title>About</title>
  </meta>
  <p>I design content. This site is where the work lives.</p>
</page>
"#;

const DEFAULT_POST: &str = r#"<post>
  <meta>
    <id>hello</id>
    <title>Hello</title>
    <date>2025-01-01</date>
  </meta>
  <p>First post.</p>
</post>
"#;

const DEFAULT_CSS: &str = r#"* {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: system-ui, -apple-system, sans-serif;
  line-height: 1.6;
}

.layout {
  display: grid;
  grid-template-columns: 280px 1fr;
  min-height: 100vh;
}

.sidebar {
  border-right: 1px solid #e5e5e5;
  padding: 1.5rem;
}

.nav-label {
  font-weight: 600;
}

.nav-list {
  list-style: none;
  margin: 0.5rem 0 1.5rem;
}

.main {
  max-width: 800px;
  padding: 2rem;
}

.tag-list {
  display: flex;
  gap: 0.5rem;
  list-style: none;
}

.tag {
  background: #f0f0f0;
  border-radius: 0.25rem;
  font-size: 0.85rem;
  padding: 0.1rem 0.5rem;
}
"#;
