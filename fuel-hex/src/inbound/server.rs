//! HTTP Server configuration and startup.

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use fuel_client::PriceClient;
use fuel_types::PriceSource;

use super::handlers::{self, AppState};

/// HTTP Server for the fuel price API.
pub struct HttpServer<S: PriceSource> {
    state: Arc<AppState<S>>,
}

impl<S: PriceSource + 'static> HttpServer<S> {
    /// Creates a new HTTP server around an already-connected client.
    pub fn new(client: PriceClient<S>) -> Self {
        Self {
            state: Arc::new(AppState { client }),
        }
    }

    /// Builds the Axum router with all routes.
    pub fn router(&self) -> Router {
        let fuel: Router<Arc<AppState<S>>> = Router::new()
            .route("/provinces", get(handlers::list_provinces::<S>))
            .route("/prices/{code}", get(handlers::get_prices::<S>))
            .route("/last-update", get(handlers::last_update::<S>));

        Router::new()
            .route("/", get(handlers::root))
            .route("/health", get(handlers::health))
            .route("/api-docs/openapi.json", get(handlers::openapi_json))
            .nest("/fuel", fuel)
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Runs the server on the given address with graceful shutdown.
    pub async fn run(self, addr: &str) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("Server listening on {}", listener.local_addr()?);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}
