// Domain layer - Core simulation engine
pub mod domain;

// Application layer - Use cases and coordination
pub mod application;

// Pattern text formats
pub mod codec;

pub mod error;

// Re-exports for convenience
pub use domain::{
    Board, BoundingBox, CellMatrix, GrowthEvent, RuleRegistry, RuleSet, StepMode, presets,
};
pub use application::{Simulation, SimulationConfig};
pub use codec::RlePattern;
pub use error::{LifeError, Result};
