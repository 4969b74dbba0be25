use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use axum::routing::put;
use guichet_orchestrator::Orchestrator;

use crate::handlers::technician_handlers::availability_states;
use crate::handlers::technician_handlers::set_availability_status;
use crate::handlers::technician_handlers::technician_board;
use crate::handlers::technician_handlers::technician_stats;

// This function is only for providing the correct routes.
pub async fn technician_scope(state: Arc<Orchestrator>) -> Router {
    Router::new()
        .route("/technicians", get(technician_board))
        .route("/technicians/{technician_id}/stats", get(technician_stats))
        .route(
            "/technicians/{technician_id}/availability-status",
            put(set_availability_status),
        )
        .route("/availability-states", get(availability_states))
        .with_state(state)
}
