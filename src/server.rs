use anyhow::Result;
use axum::{
    extract::DefaultBodyLimit,
    http::HeaderValue,
    middleware,
    routing::get,
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::{net::SocketAddr, sync::Arc};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

use crate::{
    config::{Config, CorsConfig},
    handlers,
    metrics,
    middleware::track_requests,
    signals::setup_signal_handlers,
    store::BookStore,
};

/// Start the Library API server
///
/// This function:
/// 1. Initializes metrics
/// 2. Sets up signal handlers for graceful shutdown
/// 3. Creates the Axum application
/// 4. Binds to the configured address
/// 5. Serves requests with graceful shutdown support
pub async fn start_server(config: Config) -> Result<()> {
    // Initialize metrics
    info!("Initializing Prometheus metrics...");
    let metrics_handle = Arc::new(metrics::init_metrics());

    // Setup signal handlers (SIGTERM, SIGINT for shutdown)
    let (shutdown_tx, signal_handle) = setup_signal_handlers();
    let mut shutdown_rx = shutdown_tx.subscribe();

    // Create shared state
    let config = Arc::new(config);
    let app_state = handlers::books::AppState {
        config: config.clone(),
        store: Arc::new(BookStore::new()),
    };

    // Build the Axum router
    let app = create_router(&config, app_state, metrics_handle);

    // Create socket address
    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    info!("Starting Library API on {}", addr);
    info!(
        "Configuration: metrics {}, docs {}, cors {}",
        endpoint_summary(config.metrics.enabled, &config.metrics.endpoint),
        endpoint_summary(config.docs.enabled, &config.docs.path),
        cors_summary(&config.cors),
    );

    // Bind to address
    let listener = tokio::net::TcpListener::bind(addr).await?;

    // Serve with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            // Wait for shutdown signal
            let _ = shutdown_rx.recv().await;
            info!("Shutdown signal received, draining connections...");
        })
        .await?;

    // Wait for signal handler task to complete
    signal_handle.await?;
    info!("Server stopped gracefully");

    Ok(())
}

/// Create the Axum router with all routes and middleware
///
/// The book routes carry the request-tracking middleware; probes, metrics
/// exposition, and docs are mounted outside it so they do not count
/// themselves.
pub fn create_router(
    config: &Config,
    app_state: handlers::books::AppState,
    metrics_handle: Arc<PrometheusHandle>,
) -> Router {
    // Book routes, instrumented by the request-tracking middleware
    let book_routes = Router::new()
        .route(
            "/books",
            get(handlers::books::list_books).post(handlers::books::create_book),
        )
        .route(
            "/books/:id",
            get(handlers::books::get_book)
                .put(handlers::books::update_book)
                .delete(handlers::books::delete_book),
        )
        .layer(middleware::from_fn(track_requests))
        .with_state(app_state.clone());

    // Public endpoints (no request tracking)
    let mut app: Router = Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check));

    if config.metrics.enabled {
        app = app.route(
            &config.metrics.endpoint,
            get(handlers::metrics_handler::metrics).with_state(metrics_handle),
        );
    }

    if config.docs.enabled {
        let docs_routes = Router::new()
            .route(&config.docs.path, get(handlers::docs::docs_index))
            .route(
                &format!("{}/openapi.yaml", config.docs.path),
                get(handlers::docs::openapi_document),
            )
            .with_state(app_state);
        app = app.merge(docs_routes);
    }

    app.merge(book_routes)
        // Limit request body size to 1MB to prevent memory exhaustion
        .layer(DefaultBodyLimit::max(1024 * 1024))
        .layer(build_cors_layer(&config.cors))
        .layer(TraceLayer::new_for_http())
}

/// Build the CORS layer from configuration
///
/// An empty origin list allows any origin; unparseable entries were already
/// rejected by config validation.
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    let allow_origin = if config.allowed_origins.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(
            config
                .allowed_origins
                .iter()
                .filter_map(|origin| origin.parse::<HeaderValue>().ok()),
        )
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}

fn endpoint_summary(enabled: bool, path: &str) -> String {
    if enabled {
        path.to_string()
    } else {
        "disabled".to_string()
    }
}

fn cors_summary(config: &CorsConfig) -> String {
    if config.allowed_origins.is_empty() {
        "any origin".to_string()
    } else {
        format!("{} origin(s)", config.allowed_origins.len())
    }
}
