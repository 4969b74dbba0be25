use guichet_staffing_environment::technician_environment::availability::ManualStatus;
use serde::Deserialize;
use serde::Serialize;

/// Body of the availability-status update. The status type is the narrow
/// manual one, so a request naming any other state fails deserialization
/// before it reaches the orchestrator.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Serialize, Deserialize)]
pub struct SetAvailabilityStatusRequest {
    pub availability_status: ManualStatus,
}
