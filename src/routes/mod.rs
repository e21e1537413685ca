pub mod collection;
pub mod dashboard;
pub mod health;
pub mod profile;
pub mod session;

use crate::{
    AppState,
    errors::ApiError,
    models::{Event, Listing, Post, Question, Service},
};
use axum::{
    Router,
    extract::FromRequest,
    routing::{delete, get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// JSON request body. Malformed or incomplete bodies are rejected as
/// [`ApiError::ValidationError`] instead of axum's plain-text 422.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct Payload<T>(pub T);

/// Build the full router around `state`.
pub fn router(state: AppState) -> Router {
    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Public routes (no session required)
        .route("/health", get(health::health_check))
        .route("/auth/signin", post(session::signin))
        // Dashboard routes (session required)
        .route("/dashboard", get(dashboard::overview))
        .route(
            "/profile/me",
            get(profile::get_profile).put(profile::update_profile),
        )
        .route("/profile/me/interests", post(profile::add_interest))
        .route(
            "/profile/me/interests/{interest}",
            delete(profile::remove_interest),
        )
        .merge(collection::routes::<Post>())
        .merge(collection::routes::<Listing>())
        .merge(collection::routes::<Event>())
        .merge(collection::routes::<Service>())
        .merge(collection::routes::<Question>())
        // Add state and middleware
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
