//! Response types and outcome classification

use crate::error::ErrorKind;
use crate::traits::ApiError;
use serde::{Deserialize, Serialize};

/// An item as returned by the table service
///
/// Only `uuid` is required; the remaining fields default when the server
/// leaves them out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Server-assigned identifier
    pub uuid: String,

    /// Item name as sent at creation
    #[serde(default)]
    pub name: String,

    /// Table the item belongs to
    #[serde(default)]
    pub table_id: usize,

    /// Creation time (unix seconds)
    #[serde(default)]
    pub created_at: i64,

    /// Time the item is ready to serve (unix seconds)
    #[serde(default)]
    pub ready_at: i64,

    /// Whether the item has been removed
    #[serde(default)]
    pub is_removed: bool,
}

/// Outcome of one API call, as seen by the client loop
///
/// The loop branches on this instead of looking at raw status codes. Which
/// [`ErrorKind`] counts as expected depends on the step that made the call.
#[derive(Debug)]
pub enum Outcome<T> {
    /// The call succeeded
    Success(T),
    /// The call failed in a way the step is designed to tolerate
    Expected(ErrorKind, ApiError),
    /// Any other failure
    Unexpected(ApiError),
}

impl<T> Outcome<T> {
    /// Classify a call result against the failure kind the step tolerates
    pub fn from_result(result: Result<T, ApiError>, expected: Option<ErrorKind>) -> Self {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(err) => {
                let kind = err.kind();
                if Some(kind) == expected {
                    Outcome::Expected(kind, err)
                } else {
                    Outcome::Unexpected(err)
                }
            }
        }
    }

    /// Check if the call succeeded
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }
}
