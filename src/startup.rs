//! Application startup and lifecycle management.

use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::error::ApiError;
use crate::handlers::{health::health_check, solve::solve};
use crate::services::providers::gemini::GeminiTextProvider;
use crate::services::providers::TextProvider;

/// Shared application state, immutable after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub text_provider: Arc<dyn TextProvider>,
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with the Gemini provider.
    pub async fn build(config: AppConfig) -> Result<Self, ApiError> {
        let provider = GeminiTextProvider::new(config.gemini.clone())
            .map_err(|e| ApiError::Config(anyhow::anyhow!(e)))?;

        tracing::info!(model = %config.gemini.model, "Initialized Gemini text provider");

        Self::build_with_provider(config, Arc::new(provider)).await
    }

    /// Build with an injected provider. Tests use this to avoid the network.
    pub async fn build_with_provider(
        config: AppConfig,
        text_provider: Arc<dyn TextProvider>,
    ) -> Result<Self, ApiError> {
        // Port 0 binds a random port for testing.
        let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind listener to {}: {}", addr, e);
            ApiError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Listening on port {}", port);

        let state = AppState {
            config: Arc::new(config),
            text_provider,
        };

        Ok(Self {
            port,
            listener,
            state,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until stopped.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let router = build_router(self.state);
        axum::serve(self.listener, router).await
    }
}

pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/bfhl", post(solve))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
