mod config;
mod simulation;

pub use config::SimulationConfig;
pub use simulation::Simulation;
