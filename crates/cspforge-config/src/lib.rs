//! Configuration system for CspForge.
//!
//! Load search configuration from TOML or YAML files to pick the
//! propagator, the variable ordering, the number of solutions to collect
//! and the termination limits without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use cspforge_config::{PropagatorType, SearchConfig};
//! use std::time::Duration;
//!
//! let config = SearchConfig::from_toml_str(r#"
//!     propagator = "fc"
//!     variable_ordering = "degree"
//!     solution_limit = 0
//!
//!     [termination]
//!     seconds_spent_limit = 30
//!     node_count_limit = 100000
//! "#).unwrap();
//!
//! assert_eq!(config.propagator, PropagatorType::Fc);
//! assert_eq!(config.solution_limit(), None);
//! assert_eq!(config.time_limit(), Some(Duration::from_secs(30)));
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use cspforge_config::SearchConfig;
//!
//! let config = SearchConfig::load("search.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main search configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SearchConfig {
    /// Propagator run after every assignment.
    #[serde(default)]
    pub propagator: PropagatorType,

    /// Rule for picking the next variable to assign.
    #[serde(default)]
    pub variable_ordering: VariableOrderingType,

    /// Number of solutions to collect before stopping; 0 collects all.
    #[serde(default = "default_solution_limit")]
    pub solution_limit: usize,

    /// Termination configuration.
    #[serde(default)]
    pub termination: Option<TerminationConfig>,
}

fn default_solution_limit() -> usize {
    1
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            propagator: PropagatorType::default(),
            variable_ordering: VariableOrderingType::default(),
            solution_limit: default_solution_limit(),
            termination: None,
        }
    }
}

impl SearchConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML or YAML file, chosen by extension.
    ///
    /// Files without a `.yaml`/`.yml` extension are read as TOML.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist or fails to parse.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_file(path),
            Some("toml") | None => Self::from_toml_file(path),
            Some(other) => Err(ConfigError::Invalid(format!(
                "unsupported config file extension: .{other}"
            ))),
        }
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the propagator.
    pub fn with_propagator(mut self, propagator: PropagatorType) -> Self {
        self.propagator = propagator;
        self
    }

    /// Sets the variable ordering.
    pub fn with_variable_ordering(mut self, ordering: VariableOrderingType) -> Self {
        self.variable_ordering = ordering;
        self
    }

    /// Sets the number of solutions to collect.
    pub fn with_solution_limit(mut self, limit: usize) -> Self {
        self.solution_limit = limit;
        self
    }

    /// Collects every solution.
    pub fn with_all_solutions(self) -> Self {
        self.with_solution_limit(0)
    }

    /// Sets the termination time limit.
    pub fn with_termination_seconds(mut self, seconds: u64) -> Self {
        self.termination = Some(TerminationConfig {
            seconds_spent_limit: Some(seconds),
            ..self.termination.unwrap_or_default()
        });
        self
    }

    /// Sets the maximum number of search nodes.
    pub fn with_node_count_limit(mut self, limit: u64) -> Self {
        self.termination = Some(TerminationConfig {
            node_count_limit: Some(limit),
            ..self.termination.unwrap_or_default()
        });
        self
    }

    /// Returns the solution limit, or `None` when every solution is wanted.
    pub fn solution_limit(&self) -> Option<usize> {
        (self.solution_limit > 0).then_some(self.solution_limit)
    }

    /// Returns the termination time limit, if configured.
    ///
    /// Convenience method that delegates to `termination.time_limit()`.
    pub fn time_limit(&self) -> Option<Duration> {
        self.termination.as_ref().and_then(|t| t.time_limit())
    }

    /// Returns the node count limit, if configured.
    pub fn node_count_limit(&self) -> Option<u64> {
        self.termination.as_ref().and_then(|t| t.node_count_limit)
    }
}

/// Propagator run by the search after each assignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PropagatorType {
    /// Plain backtracking: only check fully assigned constraints.
    Bt,

    /// Forward checking on constraints with one unassigned variable.
    Fc,

    /// Generalized arc consistency.
    #[default]
    Gac,
}

/// Variable ordering heuristic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VariableOrderingType {
    /// First unassigned variable in insertion order.
    FirstUnassigned,

    /// Smallest current domain first.
    #[default]
    MinimumRemainingValues,

    /// Most constraints shared with other unassigned variables first.
    Degree,
}

/// Termination configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct TerminationConfig {
    /// Maximum seconds to spend searching.
    pub seconds_spent_limit: Option<u64>,

    /// Maximum milliseconds to spend searching.
    pub millis_spent_limit: Option<u64>,

    /// Maximum number of search nodes (assignments tried).
    pub node_count_limit: Option<u64>,
}

impl TerminationConfig {
    /// Returns the time limit as a Duration, if any.
    ///
    /// Seconds and milliseconds add up; a sum beyond `Duration::MAX` saturates.
    pub fn time_limit(&self) -> Option<Duration> {
        let limit = Duration::from_secs(self.seconds_spent_limit.unwrap_or(0))
            .saturating_add(Duration::from_millis(self.millis_spent_limit.unwrap_or(0)));
        if limit.is_zero() {
            None
        } else {
            Some(limit)
        }
    }
}
