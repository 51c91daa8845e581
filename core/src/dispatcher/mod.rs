//! Dispatcher: fans out independent client loops
//!
//! The Dispatcher starts one [`Worker`](crate::worker::Worker) per client
//! ordinal and walks away. Loops share nothing but the table client, never
//! coordinate, and never finish. [`supervise`] lets a caller notice the one
//! way a loop can end: a panic.
//!
//! # Example
//!
//! ```ignore
//! use tablet_bench_core::{DispatcherBuilder, LoadConfig};
//!
//! let dispatcher = DispatcherBuilder::new()
//!     .config(LoadConfig::new(10, 100))
//!     .client(client)
//!     .build()?;
//!
//! dispatcher.wait_until_ready(Duration::from_millis(500)).await;
//! let handles = dispatcher.spawn()?;
//! supervise(handles).await?;
//! ```

mod builder;
mod executor;

pub use builder::DispatcherBuilder;
pub use executor::{supervise, Dispatcher};
