pub mod availability;
pub mod technician;
pub mod work_schedule;

use std::collections::HashMap;

use serde::Deserialize;
use serde::Serialize;

use self::technician::Technician;
use self::technician::TechnicianId;

/// The roster of technicians the helpdesk can dispatch. Keyed by the
/// identifier the ticketing backend assigns to each account.
#[derive(Clone, Default, Serialize, Deserialize, Debug)]
pub struct TechnicianEnvironment {
    pub technicians: HashMap<TechnicianId, Technician>,
}

impl TechnicianEnvironment {
    pub fn insert(&mut self, technician: Technician) {
        self.technicians.insert(technician.id.clone(), technician);
    }

    pub fn get(&self, technician_id: &TechnicianId) -> Option<&Technician> {
        self.technicians.get(technician_id)
    }

    pub fn get_mut(&mut self, technician_id: &TechnicianId) -> Option<&mut Technician> {
        self.technicians.get_mut(technician_id)
    }

    pub fn len(&self) -> usize {
        self.technicians.len()
    }

    pub fn is_empty(&self) -> bool {
        self.technicians.is_empty()
    }
}
