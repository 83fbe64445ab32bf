pub mod health;

use axum::{routing::get, Router};

use crate::pogs::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        .route(
            "/pogs",
            get(handlers::handle_list_pogs).post(handlers::handle_create_pog),
        )
        .route(
            "/pogs/:id",
            get(handlers::handle_get_pog)
                .put(handlers::handle_update_pog)
                .delete(handlers::handle_delete_pog),
        )
        .with_state(state)
}
