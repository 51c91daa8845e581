//! tablet-bench-core: load generation against the restaurant table/item API
//!
//! This crate holds everything except the HTTP transport:
//!
//! - The `TableClient` trait and its error taxonomy
//! - Request/response types and the `Outcome` classification
//! - The per-client operation loop (`Worker`)
//! - The `Dispatcher` that fans loops out onto the tokio runtime

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod dispatcher;
pub mod error;
pub mod request;
pub mod response;
pub mod traits;
pub mod worker;

#[cfg(test)]
mod test_support;

pub use config::{ConfigError, LoadConfig};
pub use dispatcher::{supervise, Dispatcher, DispatcherBuilder};
pub use error::*;
pub use request::*;
pub use response::*;
pub use traits::*;
pub use worker::{IterationOutcome, Worker, WorkerBuilder, WorkerStats};
