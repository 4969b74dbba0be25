use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use anyhow::Result;
use chrono::DateTime;
use chrono::Utc;
use guichet_configuration::SystemConfigurations;
use guichet_contracts::technician::responses::TechnicianBoardResponse;
use guichet_contracts::technician::responses::TechnicianStatusResponse;
use guichet_staffing_environment::StaffingEnvironment;
use itertools::Itertools;
use tracing::debug;
use tracing::instrument;

use crate::Orchestrator;
use crate::RefreshSignal;

/// Draws the whole board from one consistent snapshot of the environment,
/// rows ordered by technician name.
#[instrument(level = "info", skip_all)]
pub fn compute_board(
    staffing_environment: &StaffingEnvironment,
    system_configurations: &SystemConfigurations,
    now: DateTime<Utc>,
) -> TechnicianBoardResponse {
    let staffing = &system_configurations.staffing;
    let local_clock_time = staffing.local_clock_time(now);

    let technicians = staffing_environment
        .technician_environment
        .technicians
        .values()
        .sorted_by(|left, right| left.full_name.cmp(&right.full_name))
        .map(|technician| {
            let state = technician.availability_at(local_clock_time);
            let style = system_configurations.status_display.style(state);
            let in_progress_count = staffing_environment
                .ticket_ledger
                .in_progress_count(&technician.id);
            let open_tickets = staffing_environment.ticket_ledger.open_count(&technician.id);

            TechnicianStatusResponse::new(
                technician,
                state,
                &style.label,
                style.hex_color(),
                staffing.workload.ratio(in_progress_count),
                open_tickets,
            )
        })
        .collect();

    TechnicianBoardResponse::new(now, local_clock_time.to_string(), technicians)
}

/// Rebuilds the board on a fixed cadence, and early whenever a status write
/// nudges it. Resolves only if the orchestrator is gone.
pub async fn run_board_refresh(
    orchestrator: Arc<Orchestrator>,
    refresh_receiver: flume::Receiver<RefreshSignal>,
) -> Result<()> {
    let board_seconds = orchestrator
        .system_configurations
        .load()
        .refresh
        .board_seconds
        .max(1);
    let mut interval = tokio::time::interval(Duration::from_secs(board_seconds));

    loop {
        tokio::select! {
            _ = interval.tick() => {
                orchestrator.refresh_board()?;
            }
            refresh_signal = refresh_receiver.recv_async() => {
                let refresh_signal = refresh_signal
                    .context("every refresh notifier is gone, so is the orchestrator")?;
                debug!(?refresh_signal, "board refresh nudged");
                orchestrator.refresh_board()?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use chrono::DateTime;
    use guichet_configuration::SystemConfigurations;
    use guichet_configuration::refresh::Refresh;
    use guichet_configuration::staffing::Staffing;
    use guichet_configuration::status_display::StatusDisplay;
    use guichet_configuration::status_display::StatusStyle;
    use guichet_staffing_environment::StaffingEnvironment;
    use guichet_staffing_environment::technician_environment::TechnicianEnvironment;
    use guichet_staffing_environment::technician_environment::availability::AvailabilityState;
    use guichet_staffing_environment::technician_environment::technician::Technician;
    use guichet_staffing_environment::technician_environment::technician::TechnicianId;
    use guichet_staffing_environment::ticket::TicketLedger;
    use guichet_staffing_environment::ticket::TicketRecord;
    use guichet_staffing_environment::ticket::performance::WorkloadPolicy;
    use guichet_staffing_environment::ticket::status::TicketStatus;

    use super::compute_board;

    fn style(label: &str) -> StatusStyle {
        StatusStyle {
            label: label.to_string(),
            color: (76, 175, 80),
        }
    }

    fn test_configurations() -> SystemConfigurations {
        SystemConfigurations {
            status_display: StatusDisplay {
                available: style("Disponible"),
                busy: style("Occupé"),
                on_break: style("En pause"),
                unavailable: style("Indisponible"),
            },
            refresh: Refresh::default(),
            staffing: Staffing {
                timezone: chrono_tz::Tz::UTC,
                default_work_hours: None,
                roster: PathBuf::from("unused"),
                tickets: None,
                workload: WorkloadPolicy::default(),
            },
            database_path: PathBuf::from("unused"),
        }
    }

    #[test]
    fn the_board_is_ordered_by_name_and_carries_resolved_states() {
        let mut technician_environment = TechnicianEnvironment::default();
        technician_environment.insert(
            Technician::builder("tech-martin", "Paul Martin", "paul.martin@example.fr")
                .work_hours("08:00-12:00 / 13:00-17:00")
                .build(),
        );
        technician_environment.insert(
            Technician::builder("tech-dupont", "Marie Dupont", "marie.dupont@example.fr")
                .work_hours("08:00-12:00 / 13:00-17:00")
                .availability_status("occupé")
                .build(),
        );

        let mut ticket_ledger = TicketLedger::new();
        ticket_ledger.push(
            TicketRecord::builder("T-100", "Écran noir au démarrage")
                .status(TicketStatus::InProgress)
                .assigned_technician(TechnicianId::new("tech-dupont"))
                .build(),
        );

        let staffing_environment = StaffingEnvironment::builder()
            .technician_environment(technician_environment)
            .ticket_ledger(ticket_ledger)
            .build();

        // 09:00 UTC, inside both technicians' morning range.
        let now = DateTime::parse_from_rfc3339("2026-03-16T09:00:00Z")
            .unwrap()
            .to_utc();

        let board = compute_board(&staffing_environment, &test_configurations(), now);

        assert_eq!(board.local_time, "09:00");
        assert_eq!(board.technicians.len(), 2);

        let first = &board.technicians[0];
        assert_eq!(first.full_name, "Marie Dupont");
        assert_eq!(first.state, AvailabilityState::Busy);
        assert_eq!(first.label, "Occupé");
        assert_eq!(first.workload_ratio, "1/5");
        assert_eq!(first.open_tickets, 1);

        let second = &board.technicians[1];
        assert_eq!(second.full_name, "Paul Martin");
        assert_eq!(second.state, AvailabilityState::Available);
        assert_eq!(second.workload_ratio, "0/5");
    }

    #[test]
    fn off_hours_and_breaks_show_on_the_board() {
        let mut technician_environment = TechnicianEnvironment::default();
        technician_environment.insert(
            Technician::builder("tech-dupont", "Marie Dupont", "marie.dupont@example.fr")
                .work_hours("08:00-12:00 / 13:00-17:00")
                .build(),
        );

        let staffing_environment = StaffingEnvironment::builder()
            .technician_environment(technician_environment)
            .build();
        let system_configurations = test_configurations();

        let midday_break = DateTime::parse_from_rfc3339("2026-03-16T12:30:00Z")
            .unwrap()
            .to_utc();
        let board = compute_board(&staffing_environment, &system_configurations, midday_break);
        assert_eq!(board.technicians[0].state, AvailabilityState::OnBreak);
        assert_eq!(board.technicians[0].label, "En pause");

        let evening = DateTime::parse_from_rfc3339("2026-03-16T20:00:00Z")
            .unwrap()
            .to_utc();
        let board = compute_board(&staffing_environment, &system_configurations, evening);
        assert_eq!(board.technicians[0].state, AvailabilityState::Unavailable);
        assert_eq!(board.technicians[0].label, "Indisponible");
    }
}
