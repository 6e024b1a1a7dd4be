use std::time::Instant;

use rand::Rng;
use tracing::{debug, info};

use super::config::SimulationConfig;
use crate::codec::RlePattern;
use crate::domain::{Board, RuleRegistry, StepMode, presets};
use crate::error::{LifeError, Result};

/// Simulation drives a board.
/// This is the application layer that coordinates domain logic.
#[derive(Debug)]
pub struct Simulation {
    pub board: Board,
    pub registry: RuleRegistry,
    pub step_mode: StepMode,
    pub last_step_time_ms: f32,
}

impl Simulation {
    /// Wrap an existing board with the built-in rule registry
    pub fn new(board: Board) -> Self {
        Self {
            board,
            registry: RuleRegistry::with_builtins(),
            step_mode: StepMode::default(),
            last_step_time_ms: 0.0,
        }
    }

    /// Build board, rule and starting pattern from a configuration
    pub fn from_config(config: &SimulationConfig) -> Result<Self> {
        let registry = RuleRegistry::with_builtins();
        let rule_set = registry.resolve(&config.rule)?;
        let board = Board::new(config.rows, config.cols, rule_set).with_dynamic(config.dynamic);

        let mut simulation = Self::new(board)
            .with_registry(registry)
            .with_step_mode(config.step_mode);
        if let Some(name) = &config.pattern {
            simulation.insert_preset(name)?;
        }
        Ok(simulation)
    }

    /// Replace the rule registry (builder pattern)
    pub fn with_registry(mut self, registry: RuleRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Set the stepping strategy (builder pattern)
    pub fn with_step_mode(mut self, step_mode: StepMode) -> Self {
        self.step_mode = step_mode;
        self
    }

    /// Switch rule by registry name or rule string
    pub fn set_rule(&mut self, name_or_rule: &str) -> Result<()> {
        let rule_set = self.registry.resolve(name_or_rule)?;
        self.board.set_rule_set(rule_set);
        Ok(())
    }

    /// Insert a library pattern by name
    pub fn insert_preset(&mut self, name: &str) -> Result<()> {
        let pattern = presets::find(name)
            .ok_or_else(|| LifeError::validation(format!("unknown pattern '{name}'")))?;
        info!(pattern = pattern.name, "inserting preset");
        self.board.insert_pattern(&pattern.matrix());
        Ok(())
    }

    /// Insert a decoded pattern and adopt its rule
    pub fn load_rle(&mut self, pattern: &RlePattern) -> Result<()> {
        self.board.set_rule_set(pattern.rule_set()?);
        self.board.insert_pattern(pattern.matrix());
        Ok(())
    }

    /// Current live content as a pattern, named after the generation
    pub fn extract_rle(&self) -> RlePattern {
        RlePattern::from_board(&self.board)
            .with_comments([format!("#C generation {}", self.board.generation())])
    }

    /// Advance one generation with the selected strategy
    pub fn step(&mut self) -> Result<()> {
        let start = Instant::now();
        match self.step_mode {
            StepMode::Sequential => self.board.next_generation(),
            StepMode::Concurrent => self.board.next_generation_concurrent()?,
        }
        self.last_step_time_ms = start.elapsed().as_secs_f32() * 1000.0;
        Ok(())
    }

    /// Advance `generations` steps, stopping early once everything is dead
    pub fn run(&mut self, generations: u64) -> Result<()> {
        let start = Instant::now();
        for _ in 0..generations {
            self.step()?;
            if self.board.alive_count() == 0 {
                debug!(generation = self.board.generation(), "population died out");
                break;
            }
        }
        info!(
            generation = self.board.generation(),
            alive = self.board.alive_count(),
            rows = self.board.rows(),
            cols = self.board.cols(),
            elapsed_ms = start.elapsed().as_secs_f32() * 1000.0,
            "run finished"
        );
        Ok(())
    }

    /// Clear the board and reset counters
    pub fn clear(&mut self) {
        self.board.clear();
    }

    /// Randomize the board and reset the generation counter
    pub fn randomize<R: Rng>(&mut self, density: f64, rng: &mut R) {
        self.board.clear();
        self.board.randomize(density, rng);
    }
}
