//! Worker module: the per-client operation loop
//!
//! Each Worker is one virtual client hammering the table service. Its loop
//! is deliberately plain: **select table -> create -> fetch -> list ->
//! delete -> repeat**, forever, with no think time and no backoff.
//!
//! Every API call is reduced to an [`Outcome`](crate::response::Outcome)
//! before the loop branches on it:
//!
//! | Step   | Expected failure | On expected            | On unexpected       |
//! |--------|------------------|------------------------|---------------------|
//! | create | table full (429) | restart                | restart             |
//! | fetch  | not found (404)  | restart, skip delete   | log, continue       |
//! | list   | none             | -                      | log, continue       |
//! | delete | not found (404)  | restart                | restart             |
//!
//! # Example
//!
//! ```ignore
//! use tablet_bench_core::worker::WorkerBuilder;
//!
//! let worker = WorkerBuilder::new(0)
//!     .client(client)
//!     .num_tables(100)
//!     .build()?;
//!
//! tokio::spawn(worker.run());
//! ```

mod builder;
mod executor;
mod stats;

pub use builder::WorkerBuilder;
pub use executor::{IterationOutcome, Worker};
pub use stats::WorkerStats;
