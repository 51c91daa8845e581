//! Dispatcher execution logic

use std::sync::Arc;
use std::time::Duration;

use futures::future::select_all;
use tokio::task::JoinHandle;

use crate::config::LoadConfig;
use crate::error::{BenchError, BenchResult};
use crate::traits::TableClient;
use crate::worker::{Worker, WorkerBuilder};

/// Dispatcher launches the client loops
pub struct Dispatcher {
    /// Load configuration
    pub(crate) config: LoadConfig,

    /// Table client (shared across loops)
    pub(crate) client: Arc<dyn TableClient>,
}

impl Dispatcher {
    /// Create a new dispatcher
    ///
    /// Use `DispatcherBuilder` for a validated construction.
    pub fn new(config: LoadConfig, client: Arc<dyn TableClient>) -> Self {
        Self { config, client }
    }

    /// Get the load configuration
    pub fn config(&self) -> &LoadConfig {
        &self.config
    }

    /// Build one worker per client ordinal without starting them
    pub fn workers(&self) -> BenchResult<Vec<Worker>> {
        (0..self.config.clients)
            .map(|client_id| {
                WorkerBuilder::new(client_id)
                    .client(Arc::clone(&self.client))
                    .num_tables(self.config.tables)
                    .seed(self.config.seed_for(client_id))
                    .stats_interval(self.config.stats_interval)
                    .build()
            })
            .collect()
    }

    /// Spawn every client loop onto the current tokio runtime
    ///
    /// Returns as soon as the tasks exist. The handles resolve only if a loop
    /// panics or is aborted.
    pub fn spawn(&self) -> BenchResult<Vec<JoinHandle<()>>> {
        let workers = self.workers()?;

        tracing::info!(
            clients = self.config.clients,
            tables = self.config.tables,
            endpoint = self.client.endpoint(),
            "Dispatching client loops"
        );

        Ok(workers
            .into_iter()
            .map(|worker| tokio::spawn(worker.run()))
            .collect())
    }

    /// Block until the server answers, polling every `poll_interval`
    ///
    /// Runs once before dispatch; the client loops themselves never sleep.
    pub async fn wait_until_ready(&self, poll_interval: Duration) {
        tracing::info!(endpoint = self.client.endpoint(), "Waiting for server to be ready");

        let mut attempts: u64 = 0;
        while let Err(e) = self.client.ping().await {
            attempts += 1;
            tracing::debug!(attempts, error = %e, "Server not ready");
            tokio::time::sleep(poll_interval).await;
        }

        tracing::info!(attempts, "Server is ready");
    }
}

/// Wait on every client loop at once and report the first one that stops
///
/// Client loops never return, so a resolved handle is always an error: the
/// loop panicked, was aborted, or returned. Which ordinal stopped is carried
/// in the error. Returns `Ok` only when there is nothing to watch.
pub async fn supervise(handles: Vec<JoinHandle<()>>) -> BenchResult<()> {
    if handles.is_empty() {
        return Ok(());
    }

    let (result, client_id, remaining) = select_all(handles).await;
    tracing::error!(client_id, still_running = remaining.len(), "Client loop stopped");

    let reason = match result {
        Ok(()) => "returned from its loop".to_string(),
        Err(err) => err.to_string(),
    };
    Err(BenchError::dispatch(format!("client {} stopped: {}", client_id, reason)))
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("config", &self.config)
            .field("endpoint", &self.client.endpoint())
            .finish()
    }
}
