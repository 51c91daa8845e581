//! Table client implementations
//!
//! This crate provides implementations of the `TableClient` trait:
//!
//! - [`HttpTableClient`]: the restaurant REST API over reqwest

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod http;

pub use http::{HttpTableClient, DEFAULT_BASE_URL};
