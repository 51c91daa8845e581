//! Load configuration types

use serde::{Deserialize, Serialize};

/// Default number of concurrent client loops
pub const DEFAULT_CLIENTS: usize = 10;

/// Default number of tables at the restaurant
pub const DEFAULT_TABLES: usize = 100;

/// Default number of iterations between per-client progress lines
pub const DEFAULT_STATS_INTERVAL: u64 = 1000;

/// Load configuration
///
/// Defines how many client loops to run and how many tables they spread
/// their traffic over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadConfig {
    /// Number of concurrent client loops
    pub clients: usize,

    /// Number of tables; loops pick uniformly from `0..tables`
    pub tables: usize,

    /// Iterations between per-client progress lines (0 disables them)
    #[serde(default = "default_stats_interval")]
    pub stats_interval: u64,

    /// Base seed for the per-client RNGs; client `i` uses `seed + i`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

fn default_stats_interval() -> u64 {
    DEFAULT_STATS_INTERVAL
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            clients: DEFAULT_CLIENTS,
            tables: DEFAULT_TABLES,
            stats_interval: DEFAULT_STATS_INTERVAL,
            seed: None,
        }
    }
}

impl LoadConfig {
    /// Create a new config for `clients` loops over `tables` tables
    pub fn new(clients: usize, tables: usize) -> Self {
        Self {
            clients,
            tables,
            ..Default::default()
        }
    }

    /// Set the progress line interval
    pub fn with_stats_interval(mut self, interval: u64) -> Self {
        self.stats_interval = interval;
        self
    }

    /// Set the base RNG seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.clients == 0 {
            return Err(ConfigError::InvalidClients(
                "client count must be at least 1".into(),
            ));
        }

        if self.tables == 0 {
            return Err(ConfigError::InvalidTables(
                "table count must be at least 1".into(),
            ));
        }

        Ok(())
    }

    /// Seed for the client with the given ordinal
    pub fn seed_for(&self, client_id: usize) -> Option<u64> {
        self.seed.map(|seed| seed.wrapping_add(client_id as u64))
    }
}

/// Configuration validation errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Invalid client count
    #[error("Invalid client count: {0}")]
    InvalidClients(String),

    /// Invalid table count
    #[error("Invalid table count: {0}")]
    InvalidTables(String),
}
