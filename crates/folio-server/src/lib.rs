//! Runtime server for folio sites.
//!
//! Serves the built static site and exposes one API endpoint: a stateless
//! proxy that forwards copy to an external text-generation service for
//! style-guide correction. Also provides the file watcher dev mode uses to
//! trigger rebuilds.

pub mod extract;
pub mod rules;
pub mod server;
pub mod style_check;
pub mod upstream;
pub mod watcher;

pub use rules::ContentType;
pub use server::{ServeConfig, ServerError, SiteServer};
pub use style_check::{Change, StyleCheckResult};
pub use upstream::{StyleClient, UpstreamError, DEFAULT_API_URL};
pub use watcher::{FileWatcher, WatchEvent};
