//! Builder pattern for Dispatcher construction

use std::sync::Arc;

use crate::config::LoadConfig;
use crate::error::{BenchError, BenchResult};
use crate::traits::TableClient;

use super::executor::Dispatcher;

/// Builder for creating a Dispatcher with validated configuration
///
/// # Example
///
/// ```ignore
/// let dispatcher = DispatcherBuilder::new()
///     .clients(10)
///     .tables(100)
///     .client(client)
///     .build()?;
/// ```
pub struct DispatcherBuilder {
    config: LoadConfig,
    client: Option<Arc<dyn TableClient>>,
}

impl DispatcherBuilder {
    /// Create a new dispatcher builder with default configuration
    pub fn new() -> Self {
        Self {
            config: LoadConfig::default(),
            client: None,
        }
    }

    /// Set the full load configuration
    pub fn config(mut self, config: LoadConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the number of client loops
    pub fn clients(mut self, clients: usize) -> Self {
        self.config.clients = clients;
        self
    }

    /// Set the number of tables
    pub fn tables(mut self, tables: usize) -> Self {
        self.config.tables = tables;
        self
    }

    /// Set the base RNG seed
    pub fn seed(mut self, seed: Option<u64>) -> Self {
        self.config.seed = seed;
        self
    }

    /// Set the table client shared by all loops
    pub fn client(mut self, client: Arc<dyn TableClient>) -> Self {
        self.client = Some(client);
        self
    }

    /// Build the dispatcher
    ///
    /// # Errors
    ///
    /// Returns an error if the client is not set or the configuration is invalid.
    pub fn build(self) -> BenchResult<Dispatcher> {
        let client = self
            .client
            .ok_or_else(|| BenchError::missing_config("client"))?;

        self.config.validate()?;

        Ok(Dispatcher::new(self.config, client))
    }
}

impl Default for DispatcherBuilder {
    fn default() -> Self {
        Self::new()
    }
}
