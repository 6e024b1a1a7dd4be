//! Selects how a board advances a generation.
//!
//! Both strategies produce identical grids; the choice only trades thread
//! start-up cost against throughput on large, busy boards.

use serde::{Deserialize, Serialize};

/// Available stepping strategies
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepMode {
    /// Interest set evaluated on the calling thread
    #[default]
    Sequential,
    /// Row partitions evaluated by a per-step worker pool
    Concurrent,
}

impl StepMode {
    /// Get all available modes
    pub fn all() -> Vec<StepMode> {
        vec![StepMode::Sequential, StepMode::Concurrent]
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            StepMode::Sequential => "Sequential",
            StepMode::Concurrent => "Concurrent",
        }
    }

    /// Short description for help output
    pub fn description(&self) -> &'static str {
        match self {
            StepMode::Sequential => "interest set, single thread",
            StepMode::Concurrent => "interest set, row partitions across all cores",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_sequential() {
        assert_eq!(StepMode::default(), StepMode::Sequential);
    }

    #[test]
    fn test_names_are_unique() {
        let names: Vec<_> = StepMode::all().iter().map(|m| m.name()).collect();
        let mut unique = names.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(names.len(), unique.len());
    }

    #[test]
    fn test_serde_uses_lowercase() {
        let json = serde_json::to_string(&StepMode::Concurrent).unwrap();
        assert_eq!(json, "\"concurrent\"");
        let mode: StepMode = serde_json::from_str("\"sequential\"").unwrap();
        assert_eq!(mode, StepMode::Sequential);
    }
}
