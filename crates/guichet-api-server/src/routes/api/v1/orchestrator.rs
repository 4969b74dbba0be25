use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use guichet_orchestrator::Orchestrator;

use crate::handlers::orchestrator_handlers::orchestrator_status;

pub async fn orchestrator_scope(state: Arc<Orchestrator>) -> Router {
    Router::new()
        .route("/orchestrator", get(orchestrator_status))
        .with_state(state)
}
