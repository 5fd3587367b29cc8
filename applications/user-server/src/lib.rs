//! User Server Library
//!
//! HTTP service exposing CRUD over the user resource, backed by an injected
//! [`user_core::UserStore`].
//!
//! This library exposes the router and its components so the binary and the
//! integration tests build the exact same application.

pub mod api;
pub mod config;
pub mod error;
pub mod state;

use axum::{routing::get, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

// Re-export commonly used types for convenience
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use state::AppState;

/// Build the application router
///
/// Both `/api/users` and `/api/users/` are served. Methods a path does not
/// support are answered with 405 by the method router.
pub fn create_router(app_state: AppState) -> Router {
    let collection = get(api::users::list_users).post(api::users::create_user);

    let api_routes = Router::new()
        .route("/users", collection.clone())
        .route("/users/", collection)
        .route(
            "/users/:id",
            get(api::users::get_user)
                .patch(api::users::update_user)
                .delete(api::users::delete_user),
        );

    Router::new()
        .route("/health", get(api::health::health))
        .route("/status", get(api::health::status))
        .nest("/api", api_routes)
        .fallback(fallback)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}

async fn fallback() -> ServerError {
    ServerError::NotFound("Not found".to_string())
}
