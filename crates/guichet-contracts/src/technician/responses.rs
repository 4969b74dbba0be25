use chrono::DateTime;
use chrono::Utc;
use guichet_staffing_environment::technician_environment::availability::AvailabilityState;
use guichet_staffing_environment::technician_environment::availability::ManualStatus;
use guichet_staffing_environment::technician_environment::technician::Technician;
use guichet_staffing_environment::ticket::performance::TechnicianPerformance;
use serde::Deserialize;
use serde::Serialize;

/// One row of the technician board.
#[derive(PartialEq, Clone, Debug, Serialize, Deserialize)]
pub struct TechnicianStatusResponse {
    pub id: String,
    pub full_name: String,
    pub agency: Option<String>,
    pub specialization: String,
    pub state: AvailabilityState,
    pub label: String,
    pub color: String,
    pub workload_ratio: String,
    pub open_tickets: usize,
}

impl TechnicianStatusResponse {
    pub fn new(
        technician: &Technician,
        state: AvailabilityState,
        label: &str,
        color: String,
        workload_ratio: String,
        open_tickets: usize,
    ) -> Self {
        Self {
            id: technician.id.to_string(),
            full_name: technician.full_name.clone(),
            agency: technician.agency.as_ref().map(|agency| agency.0.clone()),
            specialization: technician.specialization.variant_name().to_string(),
            state,
            label: label.to_string(),
            color,
            workload_ratio,
            open_tickets,
        }
    }
}

/// The whole board, stamped with when and in whose local time it was drawn.
#[derive(PartialEq, Clone, Debug, Serialize, Deserialize)]
pub struct TechnicianBoardResponse {
    pub generated_at: DateTime<Utc>,
    pub local_time: String,
    pub technicians: Vec<TechnicianStatusResponse>,
}

impl TechnicianBoardResponse {
    pub fn new(
        generated_at: DateTime<Utc>,
        local_time: String,
        technicians: Vec<TechnicianStatusResponse>,
    ) -> Self {
        Self {
            generated_at,
            local_time,
            technicians,
        }
    }
}

/// Per-technician performance figures, field for field what the previous
/// stats endpoint reported.
#[derive(PartialEq, Clone, Debug, Serialize, Deserialize)]
pub struct TechnicianStatsResponse {
    pub technician_id: String,
    pub full_name: String,
    pub email: String,
    pub agency: Option<String>,
    pub specialization: String,
    pub work_hours: Option<String>,
    pub availability_status: ManualStatus,
    pub workload_ratio: String,
    pub assigned_tickets_count: usize,
    pub in_progress_tickets_count: usize,
    pub resolved_tickets_count: usize,
    pub closed_tickets_count: usize,
    pub resolved_today: usize,
    pub resolved_this_month: usize,
    pub avg_resolution_time_days: f64,
    pub avg_response_time_minutes: f64,
    pub success_rate: f64,
}

impl TechnicianStatsResponse {
    pub fn new(
        technician: &Technician,
        performance: TechnicianPerformance,
        availability_status: ManualStatus,
    ) -> Self {
        Self {
            technician_id: technician.id.to_string(),
            full_name: technician.full_name.clone(),
            email: technician.email.clone(),
            agency: technician.agency.as_ref().map(|agency| agency.0.clone()),
            specialization: technician.specialization.variant_name().to_string(),
            work_hours: technician.work_hours.clone(),
            availability_status,
            workload_ratio: performance.workload_ratio,
            assigned_tickets_count: performance.assigned_count,
            in_progress_tickets_count: performance.in_progress_count,
            resolved_tickets_count: performance.resolved_count,
            closed_tickets_count: performance.closed_count,
            resolved_today: performance.resolved_today,
            resolved_this_month: performance.resolved_this_month,
            avg_resolution_time_days: performance.avg_resolution_time_days,
            avg_response_time_minutes: performance.avg_response_time_minutes,
            success_rate: performance.success_rate,
        }
    }
}

/// One entry of the availability-state listing clients use to draw pickers
/// and legends.
#[derive(PartialEq, Clone, Debug, Serialize, Deserialize)]
pub struct AvailabilityStateName {
    pub value: AvailabilityState,
    pub label: String,
    pub color: String,
}

/// Acknowledgement of a manual status change.
#[derive(PartialEq, Eq, Clone, Debug, Serialize, Deserialize)]
pub struct AvailabilityStatusUpdated {
    pub message: String,
    pub availability_status: ManualStatus,
}

impl AvailabilityStatusUpdated {
    pub fn new(availability_status: ManualStatus) -> Self {
        Self {
            message: "Statut de disponibilité mis à jour".to_string(),
            availability_status,
        }
    }
}
