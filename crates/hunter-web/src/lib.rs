//! Logic Hunter Web Server
//!
//! Axum-based JSON relay in front of the analysis and post orchestrators,
//! optionally serving a built frontend.

pub mod routes;
pub mod state;

use axum::{
    routing::{get, post},
    Router,
};
use hunter_core::HunterConfig;
use std::path::{Path, PathBuf};
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use state::AppState;

/// Where and how to serve.
#[derive(Debug, Clone)]
pub struct ServeOptions {
    pub host: String,
    pub port: u16,
    /// Directory of a built frontend. Unknown paths fall back to its
    /// `index.html`.
    pub static_dir: Option<PathBuf>,
}

fn api_routes(state: AppState) -> Router {
    let api = Router::new()
        .route("/status", get(routes::status::status))
        .route("/analyze", post(routes::analyze::analyze))
        .route("/generate-post", post(routes::post::generate_post))
        .with_state(state);

    Router::new().nest("/api", api)
}

/// Tracing and permissive CORS. Applied last so every route and fallback
/// is covered.
fn with_layers(router: Router) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    router.layer(TraceLayer::new_for_http()).layer(cors)
}

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    with_layers(api_routes(state))
}

/// Router that also serves a frontend bundle from `dir`.
pub fn create_router_with_static(state: AppState, dir: &Path) -> Router {
    let index = dir.join("index.html");
    with_layers(
        api_routes(state).fallback_service(ServeDir::new(dir).fallback(ServeFile::new(index))),
    )
}

/// Run the web server.
pub async fn run_server(config: &HunterConfig, options: ServeOptions) -> anyhow::Result<()> {
    let state = AppState::from_config(config)?;
    let app = match &options.static_dir {
        Some(dir) => {
            tracing::info!(dir = %dir.display(), "Serving static frontend");
            create_router_with_static(state, dir)
        }
        None => create_router(state),
    };

    let addr = format!("{}:{}", options.host, options.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(
        external_api_configured = config.external_api_configured(),
        "Web server listening on http://{}",
        addr
    );

    axum::serve(listener, app).await?;
    Ok(())
}
