use std::path::Path;

use anyhow::Context;
use anyhow::Result;
use guichet_staffing_environment::technician_environment::TechnicianEnvironment;
use guichet_staffing_environment::technician_environment::technician::Technician;
use serde::Deserialize;
use serde::Serialize;

/// The technician roster as maintained by hand in TOML. Record fields are
/// forgiving for the same reason the technician type is: rosters are edited
/// by people.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RosterSpecifications {
    pub technicians: Vec<Technician>,
}

impl RosterSpecifications {
    pub fn read_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("could not read roster file {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("could not parse roster file {}", path.display()))
    }
}

impl From<RosterSpecifications> for TechnicianEnvironment {
    fn from(roster: RosterSpecifications) -> Self {
        let mut technician_environment = TechnicianEnvironment::default();
        for technician in roster.technicians {
            technician_environment.insert(technician);
        }
        technician_environment
    }
}

#[cfg(test)]
mod tests {
    use guichet_staffing_environment::technician_environment::TechnicianEnvironment;
    use guichet_staffing_environment::technician_environment::technician::Specialization;
    use guichet_staffing_environment::technician_environment::technician::TechnicianId;

    use super::RosterSpecifications;

    #[test]
    fn a_hand_written_roster_becomes_an_environment() {
        let roster: RosterSpecifications = toml::from_str(
            r#"
            [[technicians]]
            id = "tech-dupont"
            full_name = "Marie Dupont"
            email = "marie.dupont@example.fr"
            agency = "Agence de Lyon"
            specialization = "materiel"
            work_hours = "08:30-12:30 / 14:00-17:30"
            availability_status = "occupé"

            [[technicians]]
            id = "tech-martin"
            full_name = "Paul Martin"
            email = "paul.martin@example.fr"
            specialization = "télécoms"
            "#,
        )
        .unwrap();

        let environment = TechnicianEnvironment::from(roster);

        assert_eq!(environment.len(), 2);

        let dupont = environment.get(&TechnicianId::new("tech-dupont")).unwrap();
        assert_eq!(dupont.specialization, Specialization::Materiel);
        assert_eq!(dupont.work_hours.as_deref(), Some("08:30-12:30 / 14:00-17:30"));

        // Specializations the roster invents are kept as unknown rather
        // than rejected.
        let martin = environment.get(&TechnicianId::new("tech-martin")).unwrap();
        assert_eq!(martin.specialization, Specialization::Unknown);
        assert_eq!(martin.agency, None);
    }
}
