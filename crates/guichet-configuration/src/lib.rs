pub mod refresh;
pub mod roster_specifications;
pub mod staffing;
pub mod status_display;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use anyhow::Result;
use arc_swap::ArcSwap;
use serde::de::DeserializeOwned;

use crate::refresh::Refresh;
use crate::staffing::Staffing;
use crate::status_display::StatusDisplay;

/// Every configuration the system reads, loaded centrally into the
/// orchestrator, which then injects the pieces where they belong.
#[derive(Debug)]
pub struct SystemConfigurations {
    pub status_display: StatusDisplay,
    pub refresh: Refresh,
    pub staffing: Staffing,
    pub database_path: PathBuf,
}

impl SystemConfigurations {
    /// Configurations are only ever handed out wrapped, so no caller ends
    /// up holding a stray copy that a reload cannot reach.
    pub fn read_all_configs() -> Result<Arc<ArcSwap<SystemConfigurations>>> {
        let status_display = read_toml_config("./configuration/status_display.toml")?;
        let refresh = read_toml_config("./configuration/refresh.toml")?;
        let staffing = read_toml_config("./configuration/staffing.toml")?;

        let database_path_string = dotenvy::var("GUICHET_DATABASE_PATH")
            .context("GUICHET_DATABASE_PATH has to be set")?;

        Ok(Arc::new(ArcSwap::new(Arc::new(SystemConfigurations {
            status_display,
            refresh,
            staffing,
            database_path: PathBuf::from(database_path_string),
        }))))
    }
}

fn read_toml_config<T>(path: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("could not read configuration file {path}"))?;
    toml::from_str(&contents).with_context(|| format!("could not parse configuration file {path}"))
}
