use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::CorsLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{health_handler, parse_handler, root_handler};
use crate::presentation::state::AppState;

pub fn create_router(state: AppState) -> Router {
    // Mirrors the request origin so credentials are allowed from anywhere.
    let cors = CorsLayer::very_permissive();

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let body_limit = DefaultBodyLimit::max(state.settings.upload.body_limit_bytes());

    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/parse", post(parse_handler).layer(body_limit))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
