use axum::{Router, routing::get};
use tower_http::cors::{Any, CorsLayer};

pub mod handlers;
pub mod models;

pub fn create_router() -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::root_handler))
        // API routes
        .nest(
            "/api",
            Router::new().route("/search", get(handlers::search_handler)),
        )
        .layer(cors)
}
