//! Route tables and the assembled application.

mod api;
mod common;

pub use api::api_routes;
pub use common::common_routes_with_ready;

use axum::Router;
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};

use crate::state::AppState;

/// Request bodies above this size are rejected before any handler runs.
const BODY_LIMIT_BYTES: usize = 100 * 1024;

/// Full application: operational routes at the root, records API under /api.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(common_routes_with_ready(state.clone()))
        .nest("/api", api_routes(state))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES))
}
