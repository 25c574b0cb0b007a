//! Route definitions for the Comanda HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`. The
//! router receives `AppState` and passes it to all handlers via axum's
//! `State` extractor.

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use axum::http::HeaderValue;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(client_routes())
        .merge(kitchen_staff_routes())
        .merge(courier_routes())
        .merge(category_routes())
        .merge(product_routes())
        .merge(order_routes())
        .merge(order_item_routes())
        .merge(status_history_routes())
        .merge(rating_routes())
        .merge(assignment_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state);

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Auth endpoints: login, signup, session info, logout.
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/signup", post(handlers::auth::signup))
        .route("/auth/session-info", get(handlers::auth::session_info))
        .route("/auth/logout", post(handlers::auth::logout))
}

/// Client CRUD and lock probe.
fn client_routes() -> Router<AppState> {
    Router::new()
        .route("/clients", get(handlers::client::list))
        .route("/clients", post(handlers::client::create))
        .route("/clients/{id}", get(handlers::client::get))
        .route("/clients/{id}", put(handlers::client::update))
        .route("/clients/{id}", delete(handlers::client::delete))
        .route("/clients/{id}/lock", get(handlers::client::lock))
}

/// Kitchen staff CRUD and lock probe.
fn kitchen_staff_routes() -> Router<AppState> {
    Router::new()
        .route("/kitchen-staff", get(handlers::staff::list))
        .route("/kitchen-staff", post(handlers::staff::create))
        .route("/kitchen-staff/{id}", get(handlers::staff::get))
        .route("/kitchen-staff/{id}", put(handlers::staff::update))
        .route("/kitchen-staff/{id}", delete(handlers::staff::delete))
        .route("/kitchen-staff/{id}/lock", get(handlers::staff::lock))
}

/// Courier CRUD and lock probe.
fn courier_routes() -> Router<AppState> {
    Router::new()
        .route("/couriers", get(handlers::courier::list))
        .route("/couriers", post(handlers::courier::create))
        .route("/couriers/{id}", get(handlers::courier::get))
        .route("/couriers/{id}", put(handlers::courier::update))
        .route("/couriers/{id}", delete(handlers::courier::delete))
        .route("/couriers/{id}/lock", get(handlers::courier::lock))
}

/// Category catalog, CRUD, and lock probe.
fn category_routes() -> Router<AppState> {
    Router::new()
        .route("/categories", get(handlers::category::list))
        .route("/categories", post(handlers::category::create))
        .route("/categories/active", get(handlers::category::list_active))
        .route("/categories/search", get(handlers::category::search))
        .route("/categories/{id}", get(handlers::category::get))
        .route("/categories/{id}", put(handlers::category::update))
        .route("/categories/{id}", delete(handlers::category::delete))
        .route(
            "/categories/{id}/deactivate",
            put(handlers::category::deactivate),
        )
        .route("/categories/{id}/lock", get(handlers::category::lock))
}

/// Product catalog, CRUD, and lock probe.
fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(handlers::product::list))
        .route("/products", post(handlers::product::create))
        .route("/products/active", get(handlers::product::list_active))
        .route("/products/featured", get(handlers::product::list_featured))
        .route("/products/search", get(handlers::product::search))
        .route("/products/category/{id}", get(handlers::product::by_category))
        .route("/products/{id}", get(handlers::product::get))
        .route("/products/{id}", put(handlers::product::update))
        .route("/products/{id}", delete(handlers::product::delete))
        .route(
            "/products/{id}/deactivate",
            put(handlers::product::deactivate),
        )
        .route("/products/{id}/lock", get(handlers::product::lock))
}

/// Order CRUD, queries, and lock probe.
fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/orders", get(handlers::order::list))
        .route("/orders", post(handlers::order::create))
        .route("/orders/today", get(handlers::order::today))
        .route("/orders/client/{client_id}", get(handlers::order::by_client))
        .route("/orders/status/{status}", get(handlers::order::by_status))
        .route("/orders/{id}", get(handlers::order::get))
        .route("/orders/{id}", put(handlers::order::update))
        .route("/orders/{id}", delete(handlers::order::delete))
        .route(
            "/orders/{id}/status/{status}",
            put(handlers::order::update_status),
        )
        .route("/orders/{id}/lock", get(handlers::order::lock))
}

/// Order line-item CRUD and queries.
fn order_item_routes() -> Router<AppState> {
    Router::new()
        .route("/order-items", get(handlers::order_item::list))
        .route("/order-items", post(handlers::order_item::create))
        .route(
            "/order-items/special-instructions",
            get(handlers::order_item::with_special_instructions),
        )
        .route(
            "/order-items/order/{order_id}",
            get(handlers::order_item::by_order),
        )
        .route(
            "/order-items/order/{order_id}",
            delete(handlers::order_item::delete_by_order),
        )
        .route(
            "/order-items/product/{product_id}",
            get(handlers::order_item::by_product),
        )
        .route("/order-items/{id}", get(handlers::order_item::get))
        .route("/order-items/{id}", put(handlers::order_item::update))
        .route("/order-items/{id}", delete(handlers::order_item::delete))
}

/// Status-history queries, append, and lock probe.
fn status_history_routes() -> Router<AppState> {
    Router::new()
        .route("/status-history", get(handlers::history::list))
        .route("/status-history", post(handlers::history::create))
        .route(
            "/status-history/order/{order_id}",
            get(handlers::history::by_order),
        )
        .route(
            "/status-history/order/{order_id}/latest",
            get(handlers::history::latest_for_order),
        )
        .route(
            "/status-history/status/{status}",
            get(handlers::history::by_status),
        )
        .route(
            "/status-history/client/{client_id}",
            get(handlers::history::by_client),
        )
        .route("/status-history/{id}", get(handlers::history::get))
        .route("/status-history/{id}", delete(handlers::history::delete))
        .route("/status-history/{id}/lock", get(handlers::history::lock))
}

/// Rating CRUD, aggregates, and lock probe.
fn rating_routes() -> Router<AppState> {
    Router::new()
        .route("/ratings", get(handlers::rating::list))
        .route("/ratings", post(handlers::rating::create))
        .route("/ratings/order/{order_id}", get(handlers::rating::by_order))
        .route(
            "/ratings/client/{client_id}",
            get(handlers::rating::by_client),
        )
        .route(
            "/ratings/average/order/{order_id}",
            get(handlers::rating::average_for_order),
        )
        .route(
            "/ratings/average/client/{client_id}",
            get(handlers::rating::average_for_client),
        )
        .route("/ratings/{id}", get(handlers::rating::get))
        .route("/ratings/{id}", put(handlers::rating::update))
        .route("/ratings/{id}", delete(handlers::rating::delete))
        .route("/ratings/{id}/lock", get(handlers::rating::lock))
}

/// Delivery-assignment CRUD, queries, and lock probe.
fn assignment_routes() -> Router<AppState> {
    Router::new()
        .route("/assignments", get(handlers::assignment::list))
        .route("/assignments", post(handlers::assignment::create))
        .route("/assignments/pending", get(handlers::assignment::pending))
        .route(
            "/assignments/order/{order_id}",
            get(handlers::assignment::by_order),
        )
        .route(
            "/assignments/courier/{courier_id}",
            get(handlers::assignment::by_courier),
        )
        .route("/assignments/{id}", get(handlers::assignment::get))
        .route("/assignments/{id}", put(handlers::assignment::update))
        .route("/assignments/{id}", delete(handlers::assignment::delete))
        .route(
            "/assignments/{id}/deliver",
            put(handlers::assignment::deliver),
        )
        .route("/assignments/{id}/lock", get(handlers::assignment::lock))
}

/// Liveness probe.
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

/// Builds the CORS layer from configuration.
fn build_cors_layer(state: &AppState) -> CorsLayer {
    let origins = &state.config.server.cors_allowed_origins;

    if origins.iter().any(|o| o == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let parsed: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(parsed))
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
