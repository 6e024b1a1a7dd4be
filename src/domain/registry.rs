use std::collections::BTreeMap;

use tracing::debug;

use super::rules::RuleSet;
use crate::error::{LifeError, Result};

/// Named collection of rule sets.
///
/// Starts with the built-ins and accepts custom entries. Names are matched
/// case-insensitively but reported as registered.
#[derive(Clone, Debug)]
pub struct RuleRegistry {
    /// Keyed by lowercase name; value keeps the display name
    entries: BTreeMap<String, (String, RuleSet)>,
}

impl RuleRegistry {
    /// Registry without any rule
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Registry holding Conway, HighLife, Seeds and Day&Night
    pub fn with_builtins() -> Self {
        let mut registry = Self::empty();
        registry.register("Conway", RuleSet::conway());
        registry.register("HighLife", RuleSet::high_life());
        registry.register("Seeds", RuleSet::seeds());
        registry.register("Day&Night", RuleSet::day_and_night());
        registry
    }

    /// Add or replace a named rule set
    pub fn register(&mut self, name: impl Into<String>, rule_set: RuleSet) {
        let name = name.into();
        debug!(%name, rule = %rule_set, "registering rule set");
        self.entries
            .insert(name.to_lowercase(), (name, rule_set));
    }

    /// Look a rule set up by name
    pub fn get(&self, name: &str) -> Result<&RuleSet> {
        self.entries
            .get(&name.trim().to_lowercase())
            .map(|(_, rule_set)| rule_set)
            .ok_or_else(|| LifeError::UnknownRule(name.to_string()))
    }

    /// Look up by name, falling back to parsing `name_or_rule` as a rule string
    pub fn resolve(&self, name_or_rule: &str) -> Result<RuleSet> {
        match self.get(name_or_rule) {
            Ok(rule_set) => Ok(rule_set.clone()),
            Err(unknown) => name_or_rule.parse().map_err(|_| unknown),
        }
    }

    /// Name a rule set is registered under, if any
    pub fn name_of(&self, rule_set: &RuleSet) -> Option<&str> {
        self.entries
            .values()
            .find(|(_, candidate)| candidate == rule_set)
            .map(|(name, _)| name.as_str())
    }

    /// Registered names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.values().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}
