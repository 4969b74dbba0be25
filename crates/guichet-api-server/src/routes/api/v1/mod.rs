pub mod orchestrator;
pub mod technician;

use std::sync::Arc;

use axum::Router;
use guichet_orchestrator::Orchestrator;

pub async fn api_scope(orchestrator: Arc<Orchestrator>) -> Router {
    Router::new()
        .merge(technician::technician_scope(orchestrator.clone()).await)
        .merge(orchestrator::orchestrator_scope(orchestrator).await)
}
