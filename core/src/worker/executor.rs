//! Client loop execution

use crate::error::ErrorKind;
use crate::request::item_name;
use crate::response::Outcome;
use crate::traits::{ApiError, TableClient};

use super::stats::WorkerStats;

use rand::rngs::StdRng;
use rand::Rng;
use std::sync::Arc;

/// How an iteration ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IterationOutcome {
    /// Create, fetch, list and delete all ran; the delete succeeded
    Completed,
    /// Create was refused because the table is full
    TableFull,
    /// Create failed for any other reason
    CreateFailed,
    /// The item was gone by the time it was fetched; no delete was sent
    ItemVanished,
    /// The item was gone by the time it was deleted
    DeleteRaced,
    /// Delete failed for any other reason
    DeleteFailed,
}

/// Position in the per-iteration state machine
#[derive(Debug, Clone, PartialEq, Eq)]
enum Step {
    SelectTable,
    Create { table_id: usize },
    Fetch { table_id: usize, uuid: String },
    List { table_id: usize, uuid: String },
    Delete { table_id: usize, uuid: String },
}

/// Result of running one step
#[derive(Debug)]
enum Transition {
    /// Move on to the next step of this iteration
    Next(Step),
    /// End the iteration; the loop starts over at table selection
    Restart(IterationOutcome),
}

/// Worker runs one virtual client: select table -> create -> fetch -> list -> delete -> repeat
///
/// Each worker owns its RNG and stats. The only thing shared with other
/// workers is the [`TableClient`], whose connection pool is reused.
pub struct Worker {
    /// Client ordinal, used only to attribute log lines
    id: usize,

    /// Table service client (shared across workers via Arc)
    client: Arc<dyn TableClient>,

    /// Tables are drawn uniformly from `0..num_tables`
    num_tables: usize,

    /// Per-worker table selection
    rng: StdRng,

    /// Iterations between progress lines (0 disables them)
    stats_interval: u64,

    stats: WorkerStats,
}

impl Worker {
    /// Create a new worker; `num_tables` has already been checked by the builder
    pub(crate) fn new(
        id: usize,
        client: Arc<dyn TableClient>,
        num_tables: usize,
        rng: StdRng,
        stats_interval: u64,
    ) -> Self {
        Self {
            id,
            client,
            num_tables,
            rng,
            stats_interval,
            stats: WorkerStats::new(),
        }
    }

    /// Run the client loop forever
    ///
    /// There is no stop condition and no delay between iterations. The task
    /// ends only when the runtime is torn down or the task is aborted.
    ///
    /// Each iteration ends with a `yield_now`, so a client whose requests
    /// fail without ever suspending still leaves the scheduler to other tasks.
    pub async fn run(mut self) {
        self.stats.start();

        tracing::debug!(
            client_id = self.id,
            num_tables = self.num_tables,
            endpoint = self.client.endpoint(),
            "Client loop started"
        );

        loop {
            self.run_iteration().await;

            if self.stats_interval > 0 && self.stats.iterations() % self.stats_interval == 0 {
                tracing::debug!(
                    client_id = self.id,
                    iterations = self.stats.iterations(),
                    completed = self.stats.completed,
                    expected_failures = self.stats.expected_failures(),
                    unexpected_failures = self.stats.unexpected_failures(),
                    iterations_per_second = self.stats.iterations_per_second(),
                    "Client loop progress"
                );
            }

            tokio::task::yield_now().await;
        }
    }

    /// Run a single iteration against a freshly selected table
    pub async fn run_iteration(&mut self) -> IterationOutcome {
        let mut step = Step::SelectTable;
        let outcome = loop {
            match self.advance(step).await {
                Transition::Next(next) => step = next,
                Transition::Restart(outcome) => break outcome,
            }
        };
        self.stats.record(outcome);
        outcome
    }

    async fn advance(&mut self, step: Step) -> Transition {
        match step {
            Step::SelectTable => Transition::Next(Step::Create {
                table_id: self.select_table(),
            }),
            Step::Create { table_id } => self.create(table_id).await,
            Step::Fetch { table_id, uuid } => self.fetch(table_id, uuid).await,
            Step::List { table_id, uuid } => self.list(table_id, uuid).await,
            Step::Delete { table_id, uuid } => self.delete(table_id, uuid).await,
        }
    }

    fn select_table(&mut self) -> usize {
        self.rng.gen_range(0..self.num_tables)
    }

    async fn create(&self, table_id: usize) -> Transition {
        let item_names = vec![item_name(table_id)];
        let result = self
            .client
            .add_items(table_id, &item_names)
            .await
            .and_then(|items| {
                tracing::info!(client_id = self.id, table_id, ?items, "Added item");
                // Only the first echoed item is tracked
                items
                    .into_iter()
                    .next()
                    .map(|item| item.uuid)
                    .ok_or(ApiError::EmptyCreateResponse { table_id })
            });

        match Outcome::from_result(result, Some(ErrorKind::TableFull)) {
            Outcome::Success(uuid) => Transition::Next(Step::Fetch { table_id, uuid }),
            Outcome::Expected(_, _) => {
                tracing::error!(client_id = self.id, table_id, "Table is full");
                Transition::Restart(IterationOutcome::TableFull)
            }
            Outcome::Unexpected(err) => {
                tracing::error!(client_id = self.id, table_id, error = %err, "Failed to add item");
                Transition::Restart(IterationOutcome::CreateFailed)
            }
        }
    }

    async fn fetch(&self, table_id: usize, uuid: String) -> Transition {
        let result = self.client.get_item(table_id, &uuid).await;

        match Outcome::from_result(result, Some(ErrorKind::NotFound)) {
            Outcome::Success(item) => {
                tracing::info!(client_id = self.id, table_id, ?item, "Got item");
            }
            Outcome::Expected(_, _) => {
                tracing::warn!(
                    client_id = self.id,
                    table_id,
                    uuid = %uuid,
                    "Tried to get item, but item is missing"
                );
                return Transition::Restart(IterationOutcome::ItemVanished);
            }
            Outcome::Unexpected(err) => {
                tracing::error!(
                    client_id = self.id,
                    table_id,
                    uuid = %uuid,
                    error = %err,
                    "Failed to get item"
                );
            }
        }

        Transition::Next(Step::List { table_id, uuid })
    }

    async fn list(&self, table_id: usize, uuid: String) -> Transition {
        let result = self.client.get_items(table_id).await;

        match Outcome::from_result(result, None) {
            Outcome::Success(items) => {
                tracing::info!(client_id = self.id, table_id, ?items, "Got all items of table");
            }
            Outcome::Expected(_, err) | Outcome::Unexpected(err) => {
                tracing::error!(
                    client_id = self.id,
                    table_id,
                    error = %err,
                    "Failed to list items"
                );
            }
        }

        Transition::Next(Step::Delete { table_id, uuid })
    }

    async fn delete(&self, table_id: usize, uuid: String) -> Transition {
        let result = self.client.remove_item(table_id, &uuid).await;

        match Outcome::from_result(result, Some(ErrorKind::NotFound)) {
            Outcome::Success(()) => {
                tracing::info!(client_id = self.id, table_id, uuid = %uuid, "Removed item");
                Transition::Restart(IterationOutcome::Completed)
            }
            Outcome::Expected(_, _) => {
                tracing::warn!(
                    client_id = self.id,
                    table_id,
                    uuid = %uuid,
                    "Tried to remove item, but item is missing"
                );
                Transition::Restart(IterationOutcome::DeleteRaced)
            }
            Outcome::Unexpected(err) => {
                tracing::error!(
                    client_id = self.id,
                    table_id,
                    uuid = %uuid,
                    error = %err,
                    "Failed to remove item"
                );
                Transition::Restart(IterationOutcome::DeleteFailed)
            }
        }
    }

    /// Get the client ordinal
    pub fn id(&self) -> usize {
        self.id
    }

    /// Get the number of tables this worker spreads load over
    pub fn num_tables(&self) -> usize {
        self.num_tables
    }

    /// Get the iteration counts so far
    pub fn stats(&self) -> &WorkerStats {
        &self.stats
    }
}

impl std::fmt::Debug for Worker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Worker")
            .field("id", &self.id)
            .field("endpoint", &self.client.endpoint())
            .field("num_tables", &self.num_tables)
            .field("stats_interval", &self.stats_interval)
            .finish()
    }
}
