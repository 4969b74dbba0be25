pub mod orchestrator_handlers;
pub mod technician_handlers;
