use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use guichet_orchestrator::Orchestrator;
use guichet_orchestrator::OrchestratorStatusResponse;

pub async fn orchestrator_status(
    State(orchestrator): State<Arc<Orchestrator>>,
) -> Json<OrchestratorStatusResponse> {
    Json(orchestrator.status_summary())
}
