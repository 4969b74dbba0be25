pub mod board;
pub mod database;
pub mod logging;
pub mod model_initializers;

use std::sync::Arc;
use std::sync::Mutex;

use anyhow::Context;
use anyhow::Result;
use arc_swap::ArcSwap;
use chrono::Utc;
use guichet_staffing_environment::StaffingEnvironment;
use guichet_staffing_environment::ticket::performance::TechnicianPerformance;
use strum::IntoEnumIterator;
use tokio::task::JoinHandle;
use tracing::info;
use tracing::instrument;

use crate::database::DatabaseConnection;
use crate::logging::LogHandles;
use crate::logging::LoggingGuards;

pub use guichet_configuration::SystemConfigurations;
pub use guichet_contracts::AvailabilityState;
pub use guichet_contracts::ManualStatus;
pub use guichet_contracts::orchestrator::OrchestratorStatusResponse;
pub use guichet_contracts::technician::requests::SetAvailabilityStatusRequest;
pub use guichet_contracts::technician::responses::AvailabilityStateName;
pub use guichet_contracts::technician::responses::AvailabilityStatusUpdated;
pub use guichet_contracts::technician::responses::TechnicianBoardResponse;
pub use guichet_contracts::technician::responses::TechnicianStatsResponse;
pub use guichet_contracts::technician::responses::TechnicianStatusResponse;
pub use guichet_staffing_environment::technician_environment::technician::TechnicianId;

/// Why the board should be rebuilt ahead of its cadence.
#[derive(Clone, Copy, Debug)]
pub enum RefreshSignal {
    StatusChanged,
}

/// Owns the staffing environment and everything derived from it. All
/// surfaces, the HTTP API as much as the refresh loop, go through here; no
/// other piece of the system holds state.
pub struct Orchestrator {
    pub staffing_environment: Arc<Mutex<StaffingEnvironment>>,
    pub system_configurations: Arc<ArcSwap<SystemConfigurations>>,
    pub board: Arc<ArcSwap<TechnicianBoardResponse>>,
    pub refresh_notifier: flume::Sender<RefreshSignal>,
    pub log_handles: LogHandles,
    _logging_guards: LoggingGuards,
}

impl Orchestrator {
    /// Reads every configuration, loads or initializes the environment
    /// database, draws the first board, and spawns the refresh loop. The
    /// returned handle resolves only if that loop dies.
    pub fn new() -> Result<(Arc<Self>, JoinHandle<Result<()>>)> {
        let (log_handles, logging_guards) = logging::setup_logging()?;

        let system_configurations = SystemConfigurations::read_all_configs()?;
        let staffing_environment =
            DatabaseConnection::staffing_environment(&system_configurations.load())?;

        let initial_board = {
            let staffing_environment = staffing_environment.lock().unwrap();
            board::compute_board(
                &staffing_environment,
                &system_configurations.load(),
                Utc::now(),
            )
        };

        let (refresh_notifier, refresh_receiver) = flume::unbounded();

        let orchestrator = Arc::new(Orchestrator {
            staffing_environment,
            system_configurations,
            board: Arc::new(ArcSwap::new(Arc::new(initial_board))),
            refresh_notifier,
            log_handles,
            _logging_guards: logging_guards,
        });

        let refresh_handle = tokio::spawn(board::run_board_refresh(
            Arc::clone(&orchestrator),
            refresh_receiver,
        ));

        info!("orchestrator started");

        Ok((orchestrator, refresh_handle))
    }

    /// The board as of the last refresh. Reads never touch the environment
    /// lock; they see whatever the refresh loop last stored.
    pub fn board(&self) -> TechnicianBoardResponse {
        self.board.load().as_ref().clone()
    }

    #[instrument(level = "info", skip_all)]
    pub fn refresh_board(&self) -> Result<()> {
        let system_configurations = self.system_configurations.load();
        let staffing_environment = self.staffing_environment.lock().unwrap();

        let board = board::compute_board(&staffing_environment, &system_configurations, Utc::now());
        self.board.store(Arc::new(board));

        Ok(())
    }

    /// Performance figures for one technician, `Ok(None)` when the roster
    /// does not know the id.
    #[instrument(level = "info", skip_all)]
    pub fn technician_stats(
        &self,
        technician_id: &TechnicianId,
    ) -> Result<Option<TechnicianStatsResponse>> {
        let system_configurations = self.system_configurations.load();
        let staffing_environment = self.staffing_environment.lock().unwrap();

        let Some(technician) = staffing_environment.technician_environment.get(technician_id)
        else {
            return Ok(None);
        };

        let workload_policy = system_configurations.staffing.workload;
        let performance = TechnicianPerformance::measure(
            &staffing_environment.ticket_ledger,
            technician_id,
            workload_policy,
            Utc::now(),
        );
        let derived_status = workload_policy.derive_status(performance.in_progress_count);

        Ok(Some(TechnicianStatsResponse::new(
            technician,
            performance,
            derived_status,
        )))
    }

    /// Writes the manual status through to the environment database and
    /// nudges the board, `Ok(None)` when the roster does not know the id.
    #[instrument(level = "info", skip_all)]
    pub fn set_availability_status(
        &self,
        technician_id: &TechnicianId,
        availability_status: ManualStatus,
    ) -> Result<Option<AvailabilityStatusUpdated>> {
        let system_configurations = self.system_configurations.load();
        let mut staffing_environment = self.staffing_environment.lock().unwrap();

        let Some(technician) = staffing_environment
            .technician_environment
            .get_mut(technician_id)
        else {
            return Ok(None);
        };

        technician.availability_status = Some(availability_status.as_wire_str().to_string());

        DatabaseConnection::persist(&staffing_environment, &system_configurations.database_path)?;

        info!(
            technician_id = %technician_id,
            availability_status = %availability_status,
            "availability status updated"
        );

        self.refresh_notifier
            .send(RefreshSignal::StatusChanged)
            .context("the board refresh loop is gone")?;

        Ok(Some(AvailabilityStatusUpdated::new(availability_status)))
    }

    pub fn status_summary(&self) -> OrchestratorStatusResponse {
        let system_configurations = self.system_configurations.load();
        let staffing_environment = self.staffing_environment.lock().unwrap();

        let open_tickets = staffing_environment
            .ticket_ledger
            .tickets
            .iter()
            .filter(|ticket| ticket.status.is_open())
            .count();

        OrchestratorStatusResponse {
            roster_size: staffing_environment.technician_environment.len(),
            open_tickets,
            refresh_seconds: system_configurations.refresh.board_seconds,
            timezone: system_configurations.staffing.timezone.to_string(),
        }
    }

    /// Every availability state with its configured label and color, for
    /// clients drawing pickers and legends.
    pub fn availability_state_names(&self) -> Vec<AvailabilityStateName> {
        let system_configurations = self.system_configurations.load();

        AvailabilityState::iter()
            .map(|state| {
                let style = system_configurations.status_display.style(state);
                AvailabilityStateName {
                    value: state,
                    label: style.label.clone(),
                    color: style.hex_color(),
                }
            })
            .collect()
    }
}
