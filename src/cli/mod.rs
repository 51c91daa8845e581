//! CLI argument parsing and command handling

use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use std::time::Duration;
use tablet_bench_core::config::{DEFAULT_CLIENTS, DEFAULT_STATS_INTERVAL, DEFAULT_TABLES};
use tablet_bench_core::{supervise, DispatcherBuilder, LoadConfig};
use tablet_bench_vendors::{HttpTableClient, DEFAULT_BASE_URL};

/// tablet-bench - hammer the restaurant API with concurrent clients
#[derive(Parser, Debug)]
#[command(name = "tablet-bench")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Number of client loops
    #[arg(short, long, default_value_t = DEFAULT_CLIENTS)]
    pub clients: usize,

    /// Number of tables at the restaurant
    #[arg(short, long, default_value_t = DEFAULT_TABLES)]
    pub tables: usize,

    /// Server address, without the /v1 prefix
    #[arg(short, long, env = "TABLET_BENCH_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Poll the server until it answers before starting the clients
    #[arg(long)]
    pub wait_for_server: bool,

    /// Interval between readiness polls, in milliseconds
    #[arg(long, default_value_t = 500)]
    pub ready_poll_ms: u64,

    /// Iterations between per-client progress lines at debug level (0 disables)
    #[arg(long, default_value_t = DEFAULT_STATS_INTERVAL)]
    pub stats_interval: u64,

    /// Base seed for table selection; client i uses seed + i
    #[arg(long)]
    pub seed: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Load configuration described by these arguments
    pub fn load_config(&self) -> LoadConfig {
        let config =
            LoadConfig::new(self.clients, self.tables).with_stats_interval(self.stats_interval);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }

    /// Start the client loops and run until one of them stops
    pub async fn run(&self) -> Result<()> {
        tracing::info!(
            clients = self.clients,
            tables = self.tables,
            base_url = %self.base_url,
            "Starting tablet-bench"
        );

        let client = HttpTableClient::new(&self.base_url).context("Failed to build HTTP client")?;
        let dispatcher = DispatcherBuilder::new()
            .config(self.load_config())
            .client(Arc::new(client))
            .build()
            .context("Invalid load configuration")?;

        if self.wait_for_server {
            dispatcher
                .wait_until_ready(Duration::from_millis(self.ready_poll_ms))
                .await;
        }

        let handles = dispatcher.spawn().context("Failed to dispatch clients")?;

        // Loops never return; the first handle to resolve ends the process
        supervise(handles).await.context("Client loop stopped")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["tablet-bench"]).unwrap();
        assert_eq!(cli.clients, 10);
        assert_eq!(cli.tables, 100);
        assert!(!cli.wait_for_server);
        assert_eq!(cli.ready_poll_ms, 500);
        assert!(cli.seed.is_none());
        assert_eq!(cli.load_config(), LoadConfig::default());
    }

    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::try_parse_from(["tablet-bench", "-c", "3", "-t", "5"]).unwrap();
        let config = cli.load_config();
        assert_eq!(config.clients, 3);
        assert_eq!(config.tables, 5);
    }

    #[test]
    fn test_cli_seed_and_interval() {
        let cli = Cli::try_parse_from([
            "tablet-bench",
            "--seed",
            "9",
            "--stats-interval",
            "0",
            "--base-url",
            "http://10.0.0.2:8888",
        ])
        .unwrap();
        let config = cli.load_config();
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.stats_interval, 0);
        assert_eq!(cli.base_url, "http://10.0.0.2:8888");
    }

    #[test]
    fn test_cli_rejects_non_integer_counts() {
        assert!(Cli::try_parse_from(["tablet-bench", "--clients", "many"]).is_err());
        assert!(Cli::try_parse_from(["tablet-bench", "--tables", "-1"]).is_err());
    }

    #[tokio::test]
    async fn test_run_rejects_malformed_base_url() {
        let cli = Cli::try_parse_from(["tablet-bench", "--base-url", "not a url"]).unwrap();

        // Fails at start-up instead of launching loops that can never connect
        let err = cli.run().await.unwrap_err();
        assert!(format!("{:#}", err).contains("Invalid base URL"));
    }
}
