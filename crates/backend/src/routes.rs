use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;

/// All application routes.
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // SCENARIO LIFECYCLE
        // ========================================
        .route(
            "/api/scenarios",
            get(handlers::a001_scenario::list_all).post(handlers::a001_scenario::create),
        )
        .route(
            "/api/scenarios/:id",
            get(handlers::a001_scenario::get_by_id)
                .put(handlers::a001_scenario::update)
                .delete(handlers::a001_scenario::delete),
        )
        .route(
            "/api/scenarios/:id/duplicate",
            post(handlers::a001_scenario::duplicate),
        )
        // ========================================
        // AD-HOC SIMULATIONS (no persistence)
        // ========================================
        .route("/api/simulations", post(handlers::simulations::simulate))
}
