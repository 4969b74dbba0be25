use std::sync::Arc;

use axum::Json;
use axum::extract::Path;
use axum::extract::State;
use guichet_orchestrator::AvailabilityStateName;
use guichet_orchestrator::AvailabilityStatusUpdated;
use guichet_orchestrator::Orchestrator;
use guichet_orchestrator::SetAvailabilityStatusRequest;
use guichet_orchestrator::TechnicianBoardResponse;
use guichet_orchestrator::TechnicianId;
use guichet_orchestrator::TechnicianStatsResponse;

use crate::routes::api::ApiError;

/// The board is precomputed by the orchestrator's refresh loop, so this
/// handler never waits on the environment lock.
pub async fn technician_board(
    State(orchestrator): State<Arc<Orchestrator>>,
) -> Json<TechnicianBoardResponse> {
    Json(orchestrator.board())
}

pub async fn technician_stats(
    State(orchestrator): State<Arc<Orchestrator>>,
    Path(technician_id): Path<String>,
) -> Result<Json<TechnicianStatsResponse>, ApiError> {
    let technician_id = TechnicianId::new(&technician_id);

    let stats = orchestrator
        .technician_stats(&technician_id)?
        .ok_or(ApiError::UnknownTechnician(technician_id))?;

    Ok(Json(stats))
}

pub async fn set_availability_status(
    State(orchestrator): State<Arc<Orchestrator>>,
    Path(technician_id): Path<String>,
    Json(request): Json<SetAvailabilityStatusRequest>,
) -> Result<Json<AvailabilityStatusUpdated>, ApiError> {
    let technician_id = TechnicianId::new(&technician_id);

    let updated = orchestrator
        .set_availability_status(&technician_id, request.availability_status)?
        .ok_or(ApiError::UnknownTechnician(technician_id))?;

    Ok(Json(updated))
}

pub async fn availability_states(
    State(orchestrator): State<Arc<Orchestrator>>,
) -> Json<Vec<AvailabilityStateName>> {
    Json(orchestrator.availability_state_names())
}
