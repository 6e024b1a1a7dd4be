//! Simulation configuration, stored as JSON.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::StepMode;
use crate::error::Result;

/// Everything needed to set a simulation up without code
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Board height
    pub rows: usize,

    /// Board width
    pub cols: usize,

    /// Grow at the edges instead of wrapping
    pub dynamic: bool,

    /// Registry name (`Conway`, `HighLife`, ...) or a rule string (`B36/S23`)
    pub rule: String,

    /// How each generation is computed
    pub step_mode: StepMode,

    /// Library pattern inserted at start-up
    pub pattern: Option<String>,

    /// Generations to run
    pub generations: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            rows: 64,
            cols: 64,
            dynamic: false,
            rule: "Conway".to_string(),
            step_mode: StepMode::Sequential,
            pattern: None,
            generations: 100,
        }
    }
}

impl SimulationConfig {
    /// Load configuration from file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
