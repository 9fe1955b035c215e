//! Route definitions for the ShopAdmin HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via Axum's `State` extractor.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{delete, get, patch, post, put},
};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
///
/// Receives the fully-constructed `AppState` and threads it through
/// every route via `.with_state(state)`.
pub fn build_router(state: AppState) -> Router {
    let max_body = state.config.server.max_body_bytes as usize;

    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(tenant_routes())
        .merge(category_routes())
        .merge(product_routes())
        .merge(plan_routes())
        .merge(subscription_routes())
        .merge(faq_routes())
        .merge(home_setting_routes())
        .merge(upload_routes())
        .merge(health_routes());

    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(max_body))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Auth endpoints: login, refresh, me
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/refresh", post(handlers::auth::refresh))
        .route("/auth/me", get(handlers::auth::me))
}

/// User administration endpoints
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(handlers::users::list))
        .route("/users", post(handlers::users::create))
        .route("/users/{id}", get(handlers::users::get))
        .route("/users/{id}", patch(handlers::users::update))
        .route("/users/{id}", delete(handlers::users::delete))
        .route("/users/{id}/password", put(handlers::users::change_password))
}

/// Tenant administration endpoints
fn tenant_routes() -> Router<AppState> {
    Router::new()
        .route("/tenants", get(handlers::tenants::list))
        .route("/tenants", post(handlers::tenants::create))
        .route("/tenants/{id}", get(handlers::tenants::get))
        .route("/tenants/{id}", patch(handlers::tenants::update))
        .route("/tenants/{id}", delete(handlers::tenants::delete))
}

/// Category catalog endpoints
fn category_routes() -> Router<AppState> {
    Router::new()
        .route("/categories", get(handlers::categories::list))
        .route("/categories", post(handlers::categories::create))
        .route("/categories/{id}", get(handlers::categories::get))
        .route("/categories/{id}", patch(handlers::categories::update))
        .route("/categories/{id}", delete(handlers::categories::delete))
}

/// Product catalog endpoints
fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(handlers::products::list))
        .route("/products", post(handlers::products::create))
        .route("/products/{id}", get(handlers::products::get))
        .route("/products/{id}", patch(handlers::products::update))
        .route("/products/{id}", delete(handlers::products::delete))
}

/// Subscription plan endpoints
fn plan_routes() -> Router<AppState> {
    Router::new()
        .route("/plans", get(handlers::plans::list))
        .route("/plans", post(handlers::plans::create))
        .route("/plans/{id}", get(handlers::plans::get))
        .route("/plans/{id}", patch(handlers::plans::update))
        .route("/plans/{id}", delete(handlers::plans::delete))
}

/// Tenant subscription endpoints
fn subscription_routes() -> Router<AppState> {
    Router::new()
        .route("/subscriptions", get(handlers::subscriptions::list))
        .route("/subscriptions", post(handlers::subscriptions::create))
        .route("/subscriptions/{id}", get(handlers::subscriptions::get))
        .route("/subscriptions/{id}", patch(handlers::subscriptions::update))
        .route("/subscriptions/{id}", delete(handlers::subscriptions::delete))
}

/// FAQ endpoints
fn faq_routes() -> Router<AppState> {
    Router::new()
        .route("/faqs", get(handlers::faqs::list))
        .route("/faqs", post(handlers::faqs::create))
        .route("/faqs/{id}", get(handlers::faqs::get))
        .route("/faqs/{id}", patch(handlers::faqs::update))
        .route("/faqs/{id}", delete(handlers::faqs::delete))
}

/// Home page setting endpoints
fn home_setting_routes() -> Router<AppState> {
    Router::new()
        .route("/home-settings", get(handlers::home_settings::list))
        .route("/home-settings", post(handlers::home_settings::create))
        .route("/home-settings/{id}", get(handlers::home_settings::get))
        .route("/home-settings/{id}", patch(handlers::home_settings::update))
        .route(
            "/home-settings/{id}",
            delete(handlers::home_settings::delete),
        )
}

/// Image upload endpoints
fn upload_routes() -> Router<AppState> {
    Router::new().route("/uploads/images", post(handlers::uploads::upload_image))
}

/// Health check endpoint
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
