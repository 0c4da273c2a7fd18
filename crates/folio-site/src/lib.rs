//! Static site builder for folio portfolios.
//!
//! Renders the loaded content collections through embedded templates into an
//! output directory and copies the assets tree through unmodified.

pub mod assets;
pub mod builder;
pub mod templates;

pub use assets::AssetPipeline;
pub use builder::{BuildConfig, BuildError, BuildResult, SiteBuilder};
pub use templates::{SiteContext, TemplateEngine};
