use anyhow::Context;
use anyhow::Result;
use guichet_configuration::SystemConfigurations;
use guichet_configuration::roster_specifications::RosterSpecifications;
use guichet_staffing_environment::StaffingEnvironment;
use guichet_staffing_environment::technician_environment::TechnicianEnvironment;
use guichet_staffing_environment::ticket::TicketLedger;
use tracing::info;

/// Builds the first staffing environment of a deployment from the
/// hand-maintained roster and, when configured, a ticket feed export.
pub fn initialize_staffing_environment(
    system_configurations: &SystemConfigurations,
) -> Result<StaffingEnvironment> {
    let staffing = &system_configurations.staffing;

    let roster = RosterSpecifications::read_from(&staffing.roster)?;
    let mut technician_environment = TechnicianEnvironment::from(roster);

    // Technicians enrolled without explicit hours follow the agency default.
    if let Some(default_work_hours) = &staffing.default_work_hours {
        for technician in technician_environment.technicians.values_mut() {
            if technician.work_hours.is_none() {
                technician.work_hours = Some(default_work_hours.clone());
            }
        }
    }

    let ticket_ledger = match &staffing.tickets {
        Some(tickets_path) => {
            let contents = std::fs::read_to_string(tickets_path).with_context(|| {
                format!("could not read the ticket feed export {}", tickets_path.display())
            })?;
            serde_json::from_str::<TicketLedger>(&contents).with_context(|| {
                format!("could not parse the ticket feed export {}", tickets_path.display())
            })?
        }
        None => TicketLedger::new(),
    };

    info!(
        technicians = technician_environment.len(),
        tickets = ticket_ledger.tickets.len(),
        "staffing environment initialized from source data"
    );

    Ok(StaffingEnvironment::builder()
        .technician_environment(technician_environment)
        .ticket_ledger(ticket_ledger)
        .build())
}
