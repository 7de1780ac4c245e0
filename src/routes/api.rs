//! Records API route table.

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::handlers::{addresses, customers};
use crate::state::AppState;

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/customers", post(customers::create).get(customers::list))
        .route(
            "/customers/:id",
            get(customers::get)
                .put(customers::update)
                .delete(customers::delete),
        )
        .route("/customers/:id/full", get(customers::get_full))
        .route(
            "/customers/:id/addresses",
            post(addresses::create).get(addresses::list),
        )
        .route(
            "/addresses/:id",
            put(addresses::update).delete(addresses::delete),
        )
        .with_state(state)
}
