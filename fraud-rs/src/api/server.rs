//! API Server - HTTP server for REST API

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::api::handlers::{self, AppState};
use crate::config::ServerConfig;
use crate::engine::EngineHandle;

/// API Server configuration
pub struct ApiServer {
    state: Arc<AppState>,
    addr: String,
    max_upload_bytes: usize,
}

impl ApiServer {
    pub fn new(engine: Arc<EngineHandle>, config: &ServerConfig) -> Self {
        Self {
            state: Arc::new(AppState { engine }),
            addr: config.listen_addr.clone(),
            max_upload_bytes: config.max_upload_bytes,
        }
    }

    /// Build the router with all routes
    pub fn router(&self) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        let api_routes = Router::new()
            .route("/predict", post(handlers::predict_text))
            .route("/predict/file", post(handlers::predict_file))
            .route("/rules", get(handlers::list_rules))
            .route("/admin/reload", post(handlers::reload_model));

        Router::new()
            .route("/health", get(handlers::health))
            .nest("/api", api_routes)
            .layer(DefaultBodyLimit::max(self.max_upload_bytes))
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(cors),
            )
            .with_state(self.state.clone())
    }

    /// Start the API server
    pub async fn run(&self) -> std::io::Result<()> {
        let router = self.router();

        info!("Starting API server on {}", self.addr);

        let listener = tokio::net::TcpListener::bind(&self.addr).await?;
        axum::serve(listener, router).await?;

        Ok(())
    }
}
