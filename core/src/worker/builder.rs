//! Builder pattern for Worker construction

use crate::config::DEFAULT_STATS_INTERVAL;
use crate::error::{BenchError, BenchResult};
use crate::traits::TableClient;

use super::executor::Worker;

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;

/// Builder for creating Worker instances
///
/// # Example
/// ```ignore
/// let worker = WorkerBuilder::new(0)
///     .client(client)
///     .num_tables(100)
///     .seed(Some(42))
///     .build()?;
/// ```
pub struct WorkerBuilder {
    id: usize,
    client: Option<Arc<dyn TableClient>>,
    num_tables: Option<usize>,
    seed: Option<u64>,
    stats_interval: u64,
}

impl WorkerBuilder {
    /// Create a new builder with the given client ordinal
    pub fn new(id: usize) -> Self {
        Self {
            id,
            client: None,
            num_tables: None,
            seed: None,
            stats_interval: DEFAULT_STATS_INTERVAL,
        }
    }

    /// Set the table client
    pub fn client(mut self, client: Arc<dyn TableClient>) -> Self {
        self.client = Some(client);
        self
    }

    /// Set the number of tables to choose from
    pub fn num_tables(mut self, num_tables: usize) -> Self {
        self.num_tables = Some(num_tables);
        self
    }

    /// Seed the table selection RNG (`None` seeds from OS entropy)
    pub fn seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Set the progress line interval (0 disables progress lines)
    pub fn stats_interval(mut self, interval: u64) -> Self {
        self.stats_interval = interval;
        self
    }

    /// Build the Worker
    ///
    /// # Errors
    /// Returns an error if a required field is missing or there are no tables.
    pub fn build(self) -> BenchResult<Worker> {
        let client = self.client.ok_or(BenchError::missing_config("client"))?;
        let num_tables = self
            .num_tables
            .ok_or(BenchError::missing_config("num_tables"))?;

        if num_tables == 0 {
            return Err(BenchError::config("num_tables must be at least 1"));
        }

        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Worker::new(
            self.id,
            client,
            num_tables,
            rng,
            self.stats_interval,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MockTableClient;

    #[test]
    fn test_builder_missing_client() {
        let result = WorkerBuilder::new(0).num_tables(10).build();

        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(err.to_string().contains("client"));
    }

    #[test]
    fn test_builder_missing_num_tables() {
        let result = WorkerBuilder::new(0).seed(Some(1)).build();

        assert!(matches!(result, Err(BenchError::MissingConfig(_))));
    }

    #[test]
    fn test_builder_rejects_zero_tables() {
        // The builder is the only way to get a Worker outside this crate
        let result = WorkerBuilder::new(0)
            .client(Arc::new(MockTableClient::new()))
            .num_tables(0)
            .build();

        assert!(matches!(result, Err(BenchError::Config(_))));
    }
}
