use chrono::DateTime;
use chrono::Datelike;
use chrono::NaiveTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::technician_environment::availability::ManualStatus;
use crate::technician_environment::technician::TechnicianId;
use crate::ticket::TicketLedger;
use crate::ticket::status::TicketStatus;

/// How many concurrent tickets a technician absorbs before the workload
/// flips their derived status, and the ceiling the displayed ratio caps at.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Serialize, Deserialize)]
pub struct WorkloadPolicy {
    pub busy_threshold: u32,
    pub max_concurrent: u32,
}

impl Default for WorkloadPolicy {
    fn default() -> Self {
        Self {
            busy_threshold: 3,
            max_concurrent: 5,
        }
    }
}

impl WorkloadPolicy {
    pub fn derive_status(&self, in_progress_count: usize) -> ManualStatus {
        if (in_progress_count as u32) < self.busy_threshold {
            ManualStatus::Available
        } else {
            ManualStatus::Busy
        }
    }

    /// Displayed as `current/max`, with the current load clamped to the
    /// ceiling so an overloaded technician still reads `5/5`.
    pub fn ratio(&self, in_progress_count: usize) -> String {
        let current = (in_progress_count as u32).min(self.max_concurrent);
        format!("{}/{}", current, self.max_concurrent)
    }
}

/// One technician's ticket history boiled down to the numbers the stats
/// surfaces show.
#[derive(PartialEq, Clone, Debug, Serialize, Deserialize)]
pub struct TechnicianPerformance {
    pub assigned_count: usize,
    pub in_progress_count: usize,
    pub resolved_count: usize,
    pub closed_count: usize,
    pub resolved_today: usize,
    pub resolved_this_month: usize,
    pub avg_resolution_time_days: f64,
    pub avg_response_time_minutes: f64,
    pub success_rate: f64,
    pub workload_ratio: String,
}

impl TechnicianPerformance {
    /// Walks the ledger once per aspect and averages only over tickets that
    /// actually carry the timestamps an aspect needs. Resolution time runs
    /// from assignment to resolution in days, response time from creation
    /// to assignment in minutes, and both settle to 0 with no samples.
    pub fn measure(
        ticket_ledger: &TicketLedger,
        technician_id: &TechnicianId,
        workload_policy: WorkloadPolicy,
        now: DateTime<Utc>,
    ) -> Self {
        let assigned_count = ticket_ledger.for_technician(technician_id).count();
        let in_progress_count = ticket_ledger.in_progress_count(technician_id);
        let resolved_count = ticket_ledger
            .for_technician(technician_id)
            .filter(|ticket| ticket.status == TicketStatus::Resolved)
            .count();
        let closed_count = ticket_ledger
            .for_technician(technician_id)
            .filter(|ticket| ticket.status == TicketStatus::Closed)
            .count();

        let resolution_days: Vec<f64> = ticket_ledger
            .for_technician(technician_id)
            .filter(|ticket| ticket.status.is_resolved_or_closed())
            .filter_map(|ticket| match (ticket.assigned_at, ticket.resolved_at) {
                (Some(assigned_at), Some(resolved_at)) => {
                    Some((resolved_at - assigned_at).num_seconds() as f64 / 86_400.0)
                }
                _ => None,
            })
            .collect();

        let response_minutes: Vec<f64> = ticket_ledger
            .for_technician(technician_id)
            .filter(|ticket| ticket.status.is_resolved_or_closed())
            .filter_map(|ticket| match (ticket.created_at, ticket.assigned_at) {
                (Some(created_at), Some(assigned_at)) => {
                    Some((assigned_at - created_at).num_seconds() as f64 / 60.0)
                }
                _ => None,
            })
            .collect();

        let success_rate = if assigned_count > 0 {
            round_to(closed_count as f64 / assigned_count as f64 * 100.0, 1)
        } else {
            0.0
        };

        let today_start = now.date_naive().and_time(NaiveTime::MIN).and_utc();
        let month_start = today_start
            .with_day(1)
            .expect("the first day of the month always exists");

        let resolved_since = |boundary: DateTime<Utc>| {
            ticket_ledger
                .for_technician(technician_id)
                .filter(|ticket| ticket.status.is_resolved_or_closed())
                .filter(|ticket| ticket.resolved_at.map_or(false, |at| at >= boundary))
                .count()
        };

        Self {
            assigned_count,
            in_progress_count,
            resolved_count,
            closed_count,
            resolved_today: resolved_since(today_start),
            resolved_this_month: resolved_since(month_start),
            avg_resolution_time_days: round_to(mean(&resolution_days), 1),
            avg_response_time_minutes: round_to(mean(&response_minutes), 0),
            success_rate,
            workload_ratio: workload_policy.ratio(in_progress_count),
        }
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}
