use crate::server::{routes, websocket};
use crate::state::AppState;
use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// Build the Axum application
pub fn build_app(state: AppState) -> Router {
    // CORS defaults to local dev origins; override only for explicit
    // open deployments.
    let allow_any_origin = std::env::var("VIBESCOPE_ALLOW_ANY_ORIGIN")
        .ok()
        .is_some_and(|v| v == "1" || v.eq_ignore_ascii_case("true"));
    let cors = if allow_any_origin {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::new()
            .allow_origin(AllowOrigin::list([
                HeaderValue::from_static("http://localhost:5173"),
                HeaderValue::from_static("http://127.0.0.1:5173"),
            ]))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    // API routes
    let api_routes = Router::new()
        // Health
        .route("/health", get(routes::health))
        // Analysis
        .route("/analyze", post(routes::analyze))
        .route("/results", get(routes::get_results))
        // Statistics
        .route("/stats/sentiment", get(routes::sentiment_stats))
        .route("/stats/sources", get(routes::source_stats))
        .route("/stats/totals", get(routes::get_totals))
        // Exports
        .route("/export/:format", get(routes::export));

    Router::new()
        .nest("/api", api_routes)
        .route("/ws", get(websocket::websocket_handler))
        .layer(cors)
        .with_state(state)
}

/// Run the server
pub async fn run_server(state: AppState, addr: SocketAddr) -> anyhow::Result<()> {
    let app = build_app(state);

    tracing::info!("Starting Vibescope dashboard server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
