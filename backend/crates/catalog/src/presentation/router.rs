//! Category Router

use axum::{
    Router, middleware,
    routing::{post, put},
};
use std::sync::Arc;

use crate::application::config::CatalogConfig;
use crate::presentation::handlers;
use crate::presentation::middleware::{CategoryMiddlewareState, validate_category_body};

/// Create the category router
///
/// Every route is guarded by `validate_category_body`; mount it under
/// `/api/categories`.
pub fn category_router(config: CatalogConfig) -> Router {
    let state = CategoryMiddlewareState {
        config: Arc::new(config),
    };

    Router::new()
        .route("/", post(handlers::create_category))
        .route("/{id}", put(handlers::update_category))
        .route_layer(middleware::from_fn_with_state(state, validate_category_body))
}
