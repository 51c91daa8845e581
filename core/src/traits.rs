//! Core trait for table service clients
//!
//! The trait is defined in core so the client loop can be driven by any
//! transport. The HTTP implementation lives in the vendors crate.

use crate::error::ErrorKind;
use crate::response::Item;
use async_trait::async_trait;

// ============================================================================
// Table Client Trait
// ============================================================================

/// Client for the restaurant table/item API
///
/// Every method maps to exactly one request. Implementations must not retry,
/// back off or sleep: the client loop relies on failures coming straight back.
#[async_trait]
pub trait TableClient: Send + Sync {
    /// Human-readable endpoint description for logs
    fn endpoint(&self) -> &str;

    /// `POST /v1/table/{table_id}/items`
    async fn add_items(&self, table_id: usize, item_names: &[String])
        -> Result<Vec<Item>, ApiError>;

    /// `GET /v1/table/{table_id}/item/{uuid}`
    async fn get_item(&self, table_id: usize, uuid: &str) -> Result<Item, ApiError>;

    /// `GET /v1/table/{table_id}/items`
    async fn get_items(&self, table_id: usize) -> Result<Vec<Item>, ApiError>;

    /// `DELETE /v1/table/{table_id}/item/{uuid}`
    async fn remove_item(&self, table_id: usize, uuid: &str) -> Result<(), ApiError>;

    /// Succeeds once the server answers any request at all
    async fn ping(&self) -> Result<(), ApiError>;
}

/// Table API errors
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// HTTP/network error, including undecodable bodies
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The table is at capacity
    #[error("Table full: {message}")]
    TableFull {
        /// Response body
        message: String,
    },

    /// The item or table does not exist
    #[error("Not found: {message}")]
    NotFound {
        /// Response body
        message: String,
    },

    /// Any other non-success status
    #[error("Unexpected status: {status} - {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body
        message: String,
    },

    /// The configured base URL cannot address an HTTP server
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl {
        /// URL as given
        url: String,
        /// Why it was rejected
        reason: String,
    },

    /// A create call succeeded but echoed back no items
    #[error("Create on table {table_id} returned no items")]
    EmptyCreateResponse {
        /// Table the create was sent to
        table_id: usize,
    },
}

impl ApiError {
    /// Build the error for a non-success status code
    pub fn from_status(status: u16, message: String) -> Self {
        match ErrorKind::from_status(status) {
            ErrorKind::TableFull => ApiError::TableFull { message },
            ErrorKind::NotFound => ApiError::NotFound { message },
            ErrorKind::Unexpected => ApiError::Status { status, message },
        }
    }

    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::TableFull { .. } => ErrorKind::TableFull,
            ApiError::NotFound { .. } => ErrorKind::NotFound,
            ApiError::Http(_)
            | ApiError::Status { .. }
            | ApiError::InvalidBaseUrl { .. }
            | ApiError::EmptyCreateResponse { .. } => ErrorKind::Unexpected,
        }
    }
}
