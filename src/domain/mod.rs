mod cell;
mod coordinate;
mod rules;
mod registry;
mod matrix;
mod bounding_box;
mod board;
mod concurrent;
mod patterns;
mod step_mode;

pub use cell::{Cell, State};
pub use coordinate::Coordinate;
pub use rules::{NeighbourRange, RuleSet, MAX_NEIGHBOURS};
pub use registry::RuleRegistry;
pub use matrix::CellMatrix;
pub use bounding_box::BoundingBox;
pub use board::{Board, GrowthEvent, GrowthObserver};
pub use concurrent::available_workers;
pub use patterns::{Pattern, presets};
pub use step_mode::StepMode;
