use std::fmt::Display;

use serde::Deserialize;
use serde::Serialize;

use super::availability::AvailabilityState;
use super::availability::ClockTime;
use super::availability::TechnicianAvailabilityInput;
use super::availability::resolve_availability;

#[derive(Hash, Eq, PartialEq, Ord, PartialOrd, Clone, Debug, Serialize, Deserialize)]
pub struct TechnicianId(pub String);

impl TechnicianId {
    pub fn new(technician_id: &str) -> Self {
        Self(technician_id.to_string())
    }
}

impl Display for TechnicianId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The branch office a technician works out of.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agency(pub String);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub enum Specialization {
    #[serde(rename = "materiel")]
    Materiel,
    #[serde(rename = "applicatif")]
    Applicatif,
    #[default]
    #[serde(rename = "unknown")]
    Unknown,
}

// Specializations come in from foreign records; anything unrecognized is
// kept as Unknown instead of failing the whole roster.
impl<'de> Deserialize<'de> for Specialization {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let specialization_string = String::deserialize(deserializer)?;
        Ok(Specialization::new_from_string(&specialization_string))
    }
}

impl Specialization {
    pub fn new_from_string(specialization_string: &str) -> Self {
        match specialization_string {
            "materiel" => Specialization::Materiel,
            "applicatif" => Specialization::Applicatif,
            _ => Specialization::Unknown,
        }
    }

    pub fn variant_name(&self) -> &'static str {
        match self {
            Specialization::Materiel => "materiel",
            Specialization::Applicatif => "applicatif",
            Specialization::Unknown => "unknown",
        }
    }
}

impl Display for Specialization {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.variant_name())
    }
}

/// One roster entry. `work_hours` and `availability_status` hold whatever
/// text the account carries in the ticketing backend; both are interpreted
/// at resolution time and never rejected on the way in.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Technician {
    pub id: TechnicianId,
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub agency: Option<Agency>,
    #[serde(default)]
    pub specialization: Specialization,
    #[serde(default)]
    pub work_hours: Option<String>,
    #[serde(default)]
    pub availability_status: Option<String>,
}

impl Technician {
    pub fn builder(technician_id: &str, full_name: &str, email: &str) -> TechnicianBuilder {
        TechnicianBuilder(Technician {
            id: TechnicianId::new(technician_id),
            full_name: full_name.to_string(),
            email: email.to_string(),
            agency: None,
            specialization: Specialization::Unknown,
            work_hours: None,
            availability_status: None,
        })
    }

    /// Resolves the live availability of this record at the given
    /// wall-clock instant.
    pub fn availability_at(&self, now: ClockTime) -> AvailabilityState {
        resolve_availability(TechnicianAvailabilityInput {
            work_hours: self.work_hours.as_deref(),
            manual_status: self.availability_status.as_deref(),
            now,
        })
    }
}

pub struct TechnicianBuilder(Technician);

impl TechnicianBuilder {
    pub fn build(self) -> Technician {
        self.0
    }

    pub fn agency(mut self, agency: &str) -> Self {
        self.0.agency = Some(Agency(agency.to_string()));
        self
    }

    pub fn specialization(mut self, specialization: Specialization) -> Self {
        self.0.specialization = specialization;
        self
    }

    pub fn work_hours(mut self, work_hours: &str) -> Self {
        self.0.work_hours = Some(work_hours.to_string());
        self
    }

    pub fn availability_status(mut self, availability_status: &str) -> Self {
        self.0.availability_status = Some(availability_status.to_string());
        self
    }
}
