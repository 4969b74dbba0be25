use std::path::PathBuf;

use chrono::DateTime;
use chrono::Utc;
use chrono_tz::Tz;
use guichet_staffing_environment::technician_environment::availability::ClockTime;
use guichet_staffing_environment::ticket::performance::WorkloadPolicy;
use serde::Deserialize;
use serde::Serialize;

/// Where the roster and ticket feed live, and in whose timezone the
/// technicians' schedules are read.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Staffing {
    pub timezone: Tz,
    #[serde(default)]
    pub default_work_hours: Option<String>,
    pub roster: PathBuf,
    #[serde(default)]
    pub tickets: Option<PathBuf>,
    #[serde(default)]
    pub workload: WorkloadPolicy,
}

impl Staffing {
    /// The agency wall clock, reduced to the minute the availability
    /// resolution works at.
    pub fn local_clock_time(&self, now: DateTime<Utc>) -> ClockTime {
        ClockTime::from(now.with_timezone(&self.timezone).time())
    }
}
