use serde::Deserialize;
use serde::Serialize;

/// Operational summary of the running orchestrator.
#[derive(PartialEq, Eq, Clone, Debug, Serialize, Deserialize)]
pub struct OrchestratorStatusResponse {
    pub roster_size: usize,
    pub open_tickets: usize,
    pub refresh_seconds: u64,
    pub timezone: String,
}
