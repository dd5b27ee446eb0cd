//! Food Ordering Service - HTTP/JSON backend
//!
//! A REST API for a food-ordering web application: user/admin
//! authentication with server-side sessions, menu browsing, order
//! placement and management, and auxiliary forms (feedback, contact,
//! dish suggestions).
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Database**: PostgreSQL with sqlx (async queries)
//! - **Authentication**: argon2 password hashes, opaque session cookies
//! - **Format**: JSON requests/responses
//!
//! Every route is a direct mapping from verb+path to one SQL statement;
//! there are no multi-statement transactions and no cross-request shared
//! state beyond the session store.

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod state;

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;

/// Build the application router over the given state.
///
/// Separated from `main` so integration tests can drive the router
/// directly with `tower::ServiceExt::oneshot`.
pub fn app(state: AppState) -> Router {
    Router::new()
        // Auth
        .route("/register", post(handlers::auth::register))
        .route("/login", post(handlers::auth::login))
        .route("/logout", get(handlers::auth::logout))
        .route("/api/get-users", get(handlers::auth::list_users))
        // Checkout orders
        .route("/place-order", post(handlers::orders::place_order))
        .route("/get-all-orders", get(handlers::orders::list_orders))
        .route("/get-order/{order_id}", get(handlers::orders::get_order))
        .route("/edit-order/{order_id}", put(handlers::orders::edit_order))
        .route(
            "/delete-order/{order_id}",
            delete(handlers::orders::delete_order),
        )
        // Menu
        .route("/menu", get(handlers::menu::list_menu_items))
        .route("/order", post(handlers::menu::place_simple_order))
        // Auxiliary forms
        .route("/api/submitFeedback", post(handlers::forms::submit_feedback))
        .route("/api/getAllFeedback", get(handlers::forms::list_feedback))
        .route("/api/contact", post(handlers::forms::submit_contact))
        .route("/api/get-contacts", get(handlers::forms::list_contacts))
        .route("/suggest-dish", post(handlers::forms::suggest_dish))
        .route(
            "/api/your-taste-submissions",
            get(handlers::forms::list_suggestions),
        )
        // Health
        .route("/health", get(handlers::health::health_check))
        // Request tracing for observability
        .layer(TraceLayer::new_for_http())
        // The storefront is served separately and calls cross-origin
        .layer(CorsLayer::permissive())
        .with_state(state)
}
