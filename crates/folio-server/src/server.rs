//! The runtime HTTP server.
//!
//! `/api/style-check` is the proxy endpoint; every other `/api` path is a
//! JSON 404; everything else falls through to the built static site.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::Router;
use tower_http::services::ServeDir;

use crate::style_check::{self, reject};
use crate::upstream::{StyleClient, DEFAULT_API_URL};

/// Configuration for the runtime server.
#[derive(Debug, Clone)]
pub struct ServeConfig {
    /// Host to bind to
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Directory holding the built site
    pub site_dir: PathBuf,

    /// Messages endpoint of the upstream style service
    pub upstream_url: String,

    /// Environment variable holding the upstream credential, read per request
    pub api_key_env: String,

    /// Open browser on start
    pub open: bool,
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 4000,
            site_dir: PathBuf::from("_site"),
            upstream_url: DEFAULT_API_URL.to_string(),
            api_key_env: "ANTHROPIC_API_KEY".to_string(),
            open: false,
        }
    }
}

/// Errors that can occur with the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid listen address {0}")]
    Address(String),

    #[error("Failed to bind to {0}: {1}")]
    Bind(SocketAddr, String),
}

/// Shared per-process state; immutable after startup.
pub struct AppState {
    pub upstream: StyleClient,
    pub api_key_env: String,
}

/// The site server.
pub struct SiteServer {
    config: ServeConfig,
}

impl SiteServer {
    pub fn new(config: ServeConfig) -> Self {
        Self { config }
    }

    /// Build the application router. Exposed so tests can drive the full
    /// routing surface without a fixed port.
    pub fn router(config: &ServeConfig) -> Router {
        let state = Arc::new(AppState {
            upstream: StyleClient::new(config.upstream_url.clone()),
            api_key_env: config.api_key_env.clone(),
        });

        let api = Router::new()
            .route(
                "/style-check",
                post(style_check::style_check)
                    .options(preflight)
                    .fallback(method_not_allowed),
            )
            .fallback(api_not_found)
            .with_state(state);

        Router::new()
            .nest("/api", api)
            .fallback_service(ServeDir::new(&config.site_dir))
    }

    /// Bind and serve until the process exits.
    pub async fn start(self) -> Result<(), ServerError> {
        let addr: SocketAddr = format!("{}:{}", self.config.host, self.config.port)
            .parse()
            .map_err(|_| {
                ServerError::Address(format!("{}:{}", self.config.host, self.config.port))
            })?;

        let app = Self::router(&self.config);

        tracing::info!(
            "Serving {} at http://{}",
            self.config.site_dir.display(),
            addr
        );

        if self.config.open {
            let _ = open::that(format!("http://{addr}"));
        }

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| ServerError::Bind(addr, e.to_string()))?;

        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::Bind(addr, e.to_string()))?;

        Ok(())
    }
}

/// CORS preflight: permissive headers, no body, no business logic.
async fn preflight() -> Response {
    let mut response = StatusCode::NO_CONTENT.into_response();
    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("POST, OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );
    response
}

async fn method_not_allowed() -> Response {
    reject(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}

async fn api_not_found() -> Response {
    reject(StatusCode::NOT_FOUND, "Not found")
}
