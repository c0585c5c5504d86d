//! HTTP server for the TalentHub frontend bundle.
//!
//! Serves the compiled Leptos app. Every path without a matching file
//! gets `index.html`, so the footer's client routes (`/jobs`,
//! `/recruiter/applications`, ...) survive a hard reload.
//!
//! # Endpoints
//!
//! | Method | Path      | Description                          |
//! |--------|-----------|--------------------------------------|
//! | GET    | `/health` | Health check                         |
//! | GET    | `/*`      | Static file, else `index.html`       |

use axum::{
    http::{header, HeaderValue, Method},
    response::Json,
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use super::types::HealthResponse;
use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};

/// A bound server, ready to run.
pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Check the bundle and bind the listener, but do not serve yet.
    ///
    /// With `port = 0` the OS picks a port; [`Application::port`] reports it.
    pub async fn build(config: &ServerConfig) -> ServerResult<Self> {
        check_bundle(config)?;

        let addr = config.address();
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|source| ServerError::Bind {
                addr: addr.clone(),
                source,
            })?;
        let port = listener.local_addr()?.port();
        let router = router(config);

        tracing::info!(
            "TalentHub server listening on http://{}:{} (bundle: {})",
            config.host,
            port,
            config.dist_dir.display()
        );

        Ok(Self {
            port,
            listener,
            router,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> ServerResult<()> {
        axum::serve(self.listener, self.router).await?;
        Ok(())
    }
}

/// Build and run the server until it stops.
pub async fn start_server(config: &ServerConfig) -> ServerResult<()> {
    Application::build(config).await?.run_until_stopped().await
}

/// Routes plus middleware. Does not touch the filesystem.
pub fn router(config: &ServerConfig) -> Router {
    let static_files =
        ServeDir::new(&config.dist_dir).fallback(ServeFile::new(config.index_file()));

    Router::new()
        .route("/health", get(health))
        .fallback_service(static_files)
        .layer(cors_layer(config))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::HEAD, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    if config.allows_any_origin() {
        return cors.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin '{}'", origin);
                None
            }
        })
        .collect();
    cors.allow_origin(origins)
}

fn check_bundle(config: &ServerConfig) -> ServerResult<()> {
    if !config.dist_dir.is_dir() {
        return Err(ServerError::MissingDist(config.dist_dir.clone()));
    }
    if !config.index_file().is_file() {
        return Err(ServerError::MissingIndex(config.dist_dir.clone()));
    }
    Ok(())
}

/// Health check endpoint
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
