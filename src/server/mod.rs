use std::any::Any;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    http::{HeaderValue, Method, header::CONTENT_TYPE},
    response::Response,
    routing::{get, post},
};
use tokio::{net::TcpListener, signal};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

pub mod error;
pub mod routes;
pub mod state;

use crate::catalog::{FoodCatalog, load_catalog};
use crate::config::Config;
use crate::error::{NutriError, Result};
use crate::server::error::internal_error_response;
use crate::server::routes::{recommend_handler, root_handler};
pub use state::AppState;

/// Build the HTTP router over a prepared state.
pub fn build_router(state: Arc<AppState>) -> Result<Router> {
    let cors_origin = &state.config.cors_origin;
    let origin: HeaderValue = cors_origin
        .parse()
        .map_err(|_| NutriError::Config(format!("invalid CORS origin: {cors_origin}")))?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Ok(Router::new()
        .route("/", get(root_handler))
        .route("/api/recommend", post(recommend_handler))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state))
}

/// Load the catalog, bind, and serve until a shutdown signal arrives.
///
/// A catalog that cannot be loaded is logged and replaced by an empty one;
/// every slot then comes back empty.
pub async fn start_server(config: Config) -> Result<()> {
    info!("Loading food catalog from {}", config.catalog_path.display());
    let catalog = load_catalog(&config.catalog_path).unwrap_or_else(|e| {
        error!("Failed to load food catalog: {e}");
        FoodCatalog::empty()
    });

    let state = AppState::new(catalog, config);
    let app = build_router(state.clone())?;

    let address = format!("0.0.0.0:{}", state.config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await?;
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    error!("Handler panicked: {detail}");
    internal_error_response()
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {e}");
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
                error!("Failed to install signal handler: {e}");
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
