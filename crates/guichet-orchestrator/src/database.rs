use std::path::Path;
use std::sync::Arc;
use std::sync::Mutex;

use anyhow::Context;
use anyhow::Result;
use guichet_configuration::SystemConfigurations;
use guichet_staffing_environment::StaffingEnvironment;
use tracing::info;

use crate::model_initializers;

/// The whole staffing environment persists as one JSON document. Swapping
/// in a real database later only has to touch this module.
pub struct DatabaseConnection {}

impl DatabaseConnection {
    pub fn staffing_environment(
        system_configurations: &SystemConfigurations,
    ) -> Result<Arc<Mutex<StaffingEnvironment>>> {
        let database_path = &system_configurations.database_path;

        let staffing_environment = if database_path.exists() {
            initialize_from_database(database_path)?
        } else {
            initialize_from_source_data_and_initialize_database(system_configurations)?
        };

        Ok(Arc::new(Mutex::new(staffing_environment)))
    }

    pub fn persist(staffing_environment: &StaffingEnvironment, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(staffing_environment)
            .context("could not serialize the staffing environment")?;
        std::fs::write(path, json)
            .with_context(|| format!("could not write the environment database {}", path.display()))
    }
}

fn initialize_from_database(path: &Path) -> Result<StaffingEnvironment> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("could not read the environment database {}", path.display()))?;

    serde_json::from_str::<StaffingEnvironment>(&data)
        .with_context(|| format!("could not parse the environment database {}", path.display()))
}

fn initialize_from_source_data_and_initialize_database(
    system_configurations: &SystemConfigurations,
) -> Result<StaffingEnvironment> {
    let staffing_environment =
        model_initializers::initialize_staffing_environment(system_configurations)?;

    DatabaseConnection::persist(&staffing_environment, &system_configurations.database_path)?;
    info!(
        database_path = %system_configurations.database_path.display(),
        "environment database initialized from source data"
    );

    Ok(staffing_environment)
}
