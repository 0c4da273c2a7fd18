//! Static site builder.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use rayon::prelude::*;

use folio_content::{xml, Category, ContentLoader, LoadReport, Page, Post, Project};

use crate::assets::AssetPipeline;
use crate::templates::{CategoryGroup, PostCard, ProjectCard, SiteContext, TemplateEngine};

/// Configuration for building a site.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Content source directory
    pub content_dir: PathBuf,

    /// Assets source directory
    pub assets_dir: PathBuf,

    /// Output directory
    pub output_dir: PathBuf,

    /// Base URL for the site
    pub base_url: String,

    /// Site title
    pub title: String,

    /// Minify CSS assets
    pub minify: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("content"),
            assets_dir: PathBuf::from("assets"),
            output_dir: PathBuf::from("_site"),
            base_url: "/".to_string(),
            title: "Portfolio".to_string(),
            minify: true,
        }
    }
}

/// Result of a build operation.
#[derive(Debug)]
pub struct BuildResult {
    /// Number of HTML pages written
    pub pages: usize,

    /// Number of asset files copied
    pub assets: usize,

    /// Total build time in milliseconds
    pub duration_ms: u64,

    /// Output directory
    pub output_dir: PathBuf,

    /// Content diagnostics collected during the load
    pub report: LoadReport,
}

/// Errors that can occur during build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Failed to render template: {0}")]
    Template(String),

    #[error("Failed to write output: {0}")]
    Write(String),
}

impl From<minijinja::Error> for BuildError {
    fn from(e: minijinja::Error) -> Self {
        BuildError::Template(e.to_string())
    }
}

/// Static site builder.
pub struct SiteBuilder {
    config: BuildConfig,
    templates: TemplateEngine,
}

impl SiteBuilder {
    /// Create a new site builder.
    pub fn new(config: BuildConfig) -> Self {
        Self {
            config,
            templates: TemplateEngine::new(),
        }
    }

    /// Build the site: load content, render every page, copy assets.
    ///
    /// Content problems never fail the build; they come back in the result's
    /// report. Template and filesystem problems do.
    pub async fn build(&self) -> Result<BuildResult, BuildError> {
        let start = Instant::now();

        fs::create_dir_all(&self.config.output_dir)
            .map_err(|e| BuildError::Write(e.to_string()))?;

        let site = ContentLoader::new(&self.config.content_dir).load_site();

        let ctx = SiteContext {
            title: self.config.title.clone(),
            base_url: self.config.base_url.clone(),
            navigation: site.navigation.clone(),
        };

        let mut pages_written = 0;

        // Project index
        let groups = self.category_groups(&site.projects);
        let html = self.templates.render_index(&ctx, &groups)?;
        self.write_page(&self.config.output_dir.join("index.html"), &html)?;
        pages_written += 1;

        // Standalone pages
        for (id, page) in &site.pages {
            let html = self.render_page(&ctx, id, page)?;
            self.write_page(&self.config.output_dir.join(id).join("index.html"), &html)?;
            pages_written += 1;
        }

        // Project and post pages are independent of each other
        let results: Vec<Result<(), BuildError>> = site
            .projects
            .par_iter()
            .map(|project| self.build_project(&ctx, project))
            .chain(site.posts.par_iter().map(|post| self.build_post(&ctx, post)))
            .collect();

        for result in results {
            result?;
            pages_written += 1;
        }

        // Blog index
        let cards = self.post_cards(&site.posts);
        let html = self.templates.render_blog(&ctx, &cards)?;
        self.write_page(&self.config.output_dir.join("blog").join("index.html"), &html)?;
        pages_written += 1;

        // Assets
        let assets = AssetPipeline::new(self.config.minify)
            .copy(&self.config.assets_dir, &self.config.output_dir.join("assets"))
            .map_err(|e| BuildError::Write(e.to_string()))?;

        let duration = start.elapsed();

        Ok(BuildResult {
            pages: pages_written,
            assets,
            duration_ms: duration.as_millis() as u64,
            output_dir: self.config.output_dir.clone(),
            report: site.report,
        })
    }

    fn category_groups(&self, projects: &[Project]) -> Vec<CategoryGroup> {
        [Category::ContentDesign, Category::Creative]
            .into_iter()
            .map(|category| CategoryGroup {
                label: category_label(category).to_string(),
                projects: projects
                    .iter()
                    .filter(|p| p.category == category)
                    .map(|p| ProjectCard {
                        id: p.meta.id.clone(),
                        title: title_of(&p.meta.title, &p.meta.id),
                        url: format!("{}projects/{}/", self.config.base_url, p.meta.id),
                        tags: p.meta.tags.clone(),
                    })
                    .collect(),
            })
            .filter(|group| !group.projects.is_empty())
            .collect()
    }

    fn post_cards(&self, posts: &[Post]) -> Vec<PostCard> {
        posts
            .iter()
            .map(|post| PostCard {
                id: post.meta.id.clone(),
                title: title_of(&post.meta.title, &post.meta.id),
                url: format!("{}blog/{}/", self.config.base_url, post.meta.id),
                date: format_date(post),
            })
            .collect()
    }

    fn render_page(
        &self,
        ctx: &SiteContext,
        id: &str,
        page: &Page,
    ) -> Result<String, BuildError> {
        let title = title_of(&page.meta.title, id);
        let content = xml::to_html(&page.body);
        Ok(self.templates.render_page(ctx, &title, &content)?)
    }

    fn build_project(&self, ctx: &SiteContext, project: &Project) -> Result<(), BuildError> {
        let title = title_of(&project.meta.title, &project.meta.id);
        let content = xml::to_html(&project.body);
        let html = self.templates.render_project(
            ctx,
            &title,
            project.category.as_str(),
            &project.meta.tags,
            &content,
        )?;

        let path = self
            .config
            .output_dir
            .join("projects")
            .join(&project.meta.id)
            .join("index.html");
        self.write_page(&path, &html)
    }

    fn build_post(&self, ctx: &SiteContext, post: &Post) -> Result<(), BuildError> {
        let title = title_of(&post.meta.title, &post.meta.id);
        let content = xml::to_html(&post.body);
        let html = self
            .templates
            .render_post(ctx, &title, &format_date(post), &content)?;

        let path = self
            .config
            .output_dir
            .join("blog")
            .join(&post.meta.id)
            .join("index.html");
        self.write_page(&path, &html)
    }

    fn write_page(&self, path: &Path, html: &str) -> Result<(), BuildError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| BuildError::Write(e.to_string()))?;
        }
        fs::write(path, html).map_err(|e| BuildError::Write(e.to_string()))
    }
}

fn category_label(category: Category) -> &'static str {
    match category {
        Category::ContentDesign => "Content design",
        Category::Creative => "Creative",
    }
}

fn format_date(post: &Post) -> String {
    post.date.format("%B %-d, %Y").to_string()
}

/// A page without a title falls back to its capitalized id.
fn title_of(title: &Option<String>, id: &str) -> String {
    match title {
        Some(title) => title.clone(),
        None => capitalize(id),
    }
}

/// Capitalize first letter of a string.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn scaffold(root: &Path) {
        for dir in [
            "content/projects/content-design",
            "content/projects/creative",
            "content/pages",
            "content/blog",
            "assets/css",
        ] {
            fs::create_dir_all(root.join(dir)).unwrap();
        }

        fs::write(
            root.join("content/navigation.xml"),
            r#"<navigation>
                 <section>
                   <label>Work</label>
                   <link><label>Projects</label><path>/</path></link>
                 </section>
               </navigation>"#,
        )
        .unwrap();
        fs::write(
            root.join("content/projects/content-design/errors.xml"),
            r#"<project>
                 <meta>
                   <id>errors</id>
                   <title>Error messages</title>
                   <tags><tag>ux-writing</tag></tags>
                 </meta>
                 <p>Rewriting error copy.</p>
               </project>"#,
        )
        .unwrap();
        fs::write(
            root.join("content/pages/about.xml"),
            "<page><meta><id>about</id><title>About</title></meta><p>Hi.</p></page>",
        )
        .unwrap();
        fs::write(
            root.join("content/blog/launch.xml"),
            r#"<post>
                 <meta><id>launch</id><title>Launch</title><date>2025-03-14</date></meta>
                 <p>We launched.</p>
               </post>"#,
        )
        .unwrap();
        fs::write(root.join("assets/css/site.css"), "body { margin: 0; }").unwrap();
    }

    #[tokio::test]
    async fn builds_a_complete_site() {
        let temp = tempdir().unwrap();
        scaffold(temp.path());
        let out = temp.path().join("_site");

        let builder = SiteBuilder::new(BuildConfig {
            content_dir: temp.path().join("content"),
            assets_dir: temp.path().join("assets"),
            output_dir: out.clone(),
            ..BuildConfig::default()
        });

        let result = builder.build().await.unwrap();

        // index + about + project + post + blog index
        assert_eq!(result.pages, 5);
        assert_eq!(result.assets, 1);
        assert!(result.report.is_empty());

        assert!(out.join("index.html").exists());
        assert!(out.join("about/index.html").exists());
        assert!(out.join("projects/errors/index.html").exists());
        assert!(out.join("blog/launch/index.html").exists());
        assert!(out.join("blog/index.html").exists());
        assert!(out.join("assets/css/site.css").exists());

        let index = fs::read_to_string(out.join("index.html")).unwrap();
        assert!(index.contains("Error messages"));
        assert!(index.contains("Work"));

        let post = fs::read_to_string(out.join("blog/launch/index.html")).unwrap();
        assert!(post.contains("March 14, 2025"));
        assert!(post.contains("We launched."));
    }

    #[tokio::test]
    async fn content_problems_surface_in_the_report_not_as_errors() {
        let temp = tempdir().unwrap();
        scaffold(temp.path());
        fs::write(
            temp.path().join("content/blog/broken.xml"),
            "<post><meta>",
        )
        .unwrap();

        let builder = SiteBuilder::new(BuildConfig {
            content_dir: temp.path().join("content"),
            assets_dir: temp.path().join("assets"),
            output_dir: temp.path().join("_site"),
            ..BuildConfig::default()
        });

        let result = builder.build().await.unwrap();

        assert_eq!(result.report.len(), 1);
    }

    #[tokio::test]
    async fn empty_content_tree_still_builds() {
        let temp = tempdir().unwrap();
        let out = temp.path().join("_site");

        let builder = SiteBuilder::new(BuildConfig {
            content_dir: temp.path().join("content"),
            assets_dir: temp.path().join("assets"),
            output_dir: out.clone(),
            ..BuildConfig::default()
        });

        let result = builder.build().await.unwrap();

        // index + blog index
        assert_eq!(result.pages, 2);
        assert!(out.join("index.html").exists());
    }
}
