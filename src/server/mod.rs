//! REST API over the menu store, cart, demo auth and AI extraction.

pub mod error;
pub mod guard;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use state::AppState;

use crate::config::AppConfig;
use axum::{routing::get, Router};
use log::{error, info};
use std::sync::Arc;
use std::time::Duration;
use tokio::{net::TcpListener, signal};
use tower_http::cors::{Any, CorsLayer};

pub type AppStateArc = Arc<AppState>;

/// Build the application router
pub fn router(state: AppStateArc) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/", get(routes::health))
        .nest("/api/auth", routes::auth::routes())
        .nest("/api/menu", routes::menu::routes())
        .nest("/api/ai", routes::ai::routes())
        .nest("/api/cart", routes::cart::routes())
        .fallback(routes::not_found)
        .layer(cors)
        .with_state(state)
}

/// Bind and serve until Ctrl+C or SIGTERM
pub async fn serve(config: AppConfig) -> std::io::Result<()> {
    info!("Initializing state...");
    let state = Arc::new(AppState::from_config(&config));
    let app = router(state);

    let address = format!("{}:{}", config.server.host, config.server.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await?;
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!("Failed to install signal handler: {}", e);
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
}
