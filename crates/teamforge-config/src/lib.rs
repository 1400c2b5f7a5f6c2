//! Configuration system for TeamForge.
//!
//! Load optimizer configuration from TOML or YAML files to choose the team
//! size, required heroes, per-match bonuses and search strategy without code
//! changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use teamforge_config::{GateMode, OptimizerConfig, SearchStrategy};
//! use std::time::Duration;
//!
//! let config = OptimizerConfig::from_toml_str(r#"
//!     team_size = 9
//!     top_k = 3
//!     core_heroes = ["Irithel", "Hanabi"]
//!     enhancements = ["Marksman"]
//!
//!     [search]
//!     strategy = "exhaustive"
//!     gate_mode = "penalty"
//!
//!     [termination]
//!     seconds_spent_limit = 30
//! "#).unwrap();
//!
//! assert_eq!(config.team_size, 9);
//! assert_eq!(config.search.strategy, SearchStrategy::Exhaustive);
//! assert_eq!(config.search.gate_mode, GateMode::Penalty);
//! assert_eq!(config.time_limit(), Some(Duration::from_secs(30)));
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use teamforge_config::OptimizerConfig;
//!
//! let config = OptimizerConfig::load("teamforge.toml").unwrap_or_default();
//! assert_eq!(config.team_size, 5);
//! ```

use std::fmt;
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

const DEFAULT_TEAM_SIZE: usize = 5;
const DEFAULT_TOP_K: usize = 5;

fn default_team_size() -> usize {
    DEFAULT_TEAM_SIZE
}

fn default_top_k() -> usize {
    DEFAULT_TOP_K
}

fn default_true() -> bool {
    true
}

/// Main optimizer configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct OptimizerConfig {
    /// Number of heroes on every team.
    #[serde(default = "default_team_size")]
    pub team_size: usize,

    /// Number of ranked teams to return.
    #[serde(default = "default_top_k")]
    pub top_k: usize,

    /// Hero names that must appear in every team.
    #[serde(default)]
    pub core_heroes: Vec<String>,

    /// Whether repeated core hero names are dropped (true) or rejected.
    #[serde(default = "default_true")]
    pub allow_duplicate_core: bool,

    /// Special-ability selection: zero or exactly two hero names.
    #[serde(default)]
    pub special_ability: Vec<String>,

    /// Flat trait enhancements by trait name; repeats accumulate.
    #[serde(default)]
    pub enhancements: Vec<String>,

    #[serde(default)]
    pub search: SearchConfig,

    #[serde(default)]
    pub termination: Option<TerminationConfig>,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            team_size: DEFAULT_TEAM_SIZE,
            top_k: DEFAULT_TOP_K,
            core_heroes: Vec::new(),
            allow_duplicate_core: true,
            special_ability: Vec::new(),
            enhancements: Vec::new(),
            search: SearchConfig::default(),
            termination: None,
        }
    }
}

impl OptimizerConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
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

    /// Rejects values no search can run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.team_size == 0 {
            return Err(ConfigError::Invalid(
                "team_size must be at least 1".to_string(),
            ));
        }
        if self.top_k == 0 {
            return Err(ConfigError::Invalid("top_k must be at least 1".to_string()));
        }
        if let ThreadCount::Count(0) = self.search.thread_count {
            return Err(ConfigError::Invalid(
                "thread_count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn with_team_size(mut self, team_size: usize) -> Self {
        self.team_size = team_size;
        self
    }

    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    /// Adds a required hero by name.
    pub fn with_core_hero(mut self, name: impl Into<String>) -> Self {
        self.core_heroes.push(name.into());
        self
    }

    pub fn with_search(mut self, search: SearchConfig) -> Self {
        self.search = search;
        self
    }

    /// Sets the termination time limit.
    pub fn with_termination_seconds(mut self, seconds: u64) -> Self {
        self.termination = Some(TerminationConfig {
            seconds_spent_limit: Some(seconds),
        });
        self
    }

    /// Returns the termination time limit, if configured.
    pub fn time_limit(&self) -> Option<Duration> {
        self.termination.as_ref().and_then(|t| t.time_limit())
    }
}

/// How candidate teams are enumerated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStrategy {
    /// Incremental depth-first search with gate pruning.
    #[default]
    Pruned,

    /// Every combination re-scored from scratch.
    Exhaustive,
}

impl fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchStrategy::Pruned => write!(f, "pruned"),
            SearchStrategy::Exhaustive => write!(f, "exhaustive"),
        }
    }
}

/// How the gating trait constrains results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GateMode {
    /// Teams that miss the gate are never returned.
    #[default]
    Enforce,

    /// Teams that miss the gate are returned with the score penalty.
    Penalty,
}

impl fmt::Display for GateMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GateMode::Enforce => write!(f, "enforce"),
            GateMode::Penalty => write!(f, "penalty"),
        }
    }
}

/// Worker thread count for the search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ThreadCount {
    /// Single-threaded search.
    #[default]
    None,

    /// Automatically determine thread count.
    Auto,

    /// Specific number of threads.
    Count(usize),
}

impl ThreadCount {
    /// Resolves to a worker count, capped by the number of independent
    /// branches.
    pub fn resolve(&self, branch_count: usize) -> usize {
        let threads = match self {
            ThreadCount::None => 1,
            ThreadCount::Auto => std::thread::available_parallelism()
                .map(|p| p.get())
                .unwrap_or(1),
            ThreadCount::Count(n) => *n,
        };
        threads.min(branch_count).max(1)
    }
}

impl fmt::Display for ThreadCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThreadCount::None => write!(f, "none"),
            ThreadCount::Auto => write!(f, "auto"),
            ThreadCount::Count(n) => write!(f, "{}", n),
        }
    }
}

/// Search configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SearchConfig {
    #[serde(default)]
    pub strategy: SearchStrategy,

    #[serde(default)]
    pub gate_mode: GateMode,

    #[serde(default)]
    pub thread_count: ThreadCount,
}

impl SearchConfig {
    pub fn with_strategy(mut self, strategy: SearchStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_gate_mode(mut self, gate_mode: GateMode) -> Self {
        self.gate_mode = gate_mode;
        self
    }

    pub fn with_thread_count(mut self, thread_count: ThreadCount) -> Self {
        self.thread_count = thread_count;
        self
    }
}

/// Termination configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct TerminationConfig {
    /// Maximum seconds to spend searching.
    pub seconds_spent_limit: Option<u64>,
}

impl TerminationConfig {
    /// Returns the time limit as a Duration, if any.
    pub fn time_limit(&self) -> Option<Duration> {
        self.seconds_spent_limit
            .filter(|&s| s > 0)
            .map(Duration::from_secs)
    }
}
