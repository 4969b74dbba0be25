pub mod technician_environment;
pub mod ticket;

use serde::Deserialize;
use serde::Serialize;

use self::technician_environment::TechnicianEnvironment;
use self::ticket::TicketLedger;

/// Everything the helpdesk knows about its staff and their work. Loaded
/// once at startup and owned by the orchestrator afterwards.
#[derive(Clone, Default, Serialize, Deserialize, Debug)]
pub struct StaffingEnvironment {
    pub technician_environment: TechnicianEnvironment,
    pub ticket_ledger: TicketLedger,
}

impl StaffingEnvironment {
    pub fn builder() -> StaffingEnvironmentBuilder {
        StaffingEnvironmentBuilder::default()
    }
}

#[derive(Default)]
pub struct StaffingEnvironmentBuilder {
    technician_environment: Option<TechnicianEnvironment>,
    ticket_ledger: Option<TicketLedger>,
}

impl StaffingEnvironmentBuilder {
    pub fn build(self) -> StaffingEnvironment {
        StaffingEnvironment {
            technician_environment: self.technician_environment.unwrap_or_default(),
            ticket_ledger: self.ticket_ledger.unwrap_or_default(),
        }
    }

    pub fn technician_environment(mut self, technician_environment: TechnicianEnvironment) -> Self {
        self.technician_environment = Some(technician_environment);
        self
    }

    pub fn ticket_ledger(mut self, ticket_ledger: TicketLedger) -> Self {
        self.ticket_ledger = Some(ticket_ledger);
        self
    }
}
