pub mod orchestrator;
pub mod technician;

pub use guichet_staffing_environment::technician_environment::availability::AvailabilityState;
pub use guichet_staffing_environment::technician_environment::availability::ManualStatus;
