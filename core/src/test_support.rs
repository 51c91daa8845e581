//! Scripted table client shared by the worker and dispatcher tests

use crate::response::Item;
use crate::traits::{ApiError, TableClient};

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// A recorded API call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Create {
        table_id: usize,
        item_names: Vec<String>,
    },
    Fetch {
        table_id: usize,
        uuid: String,
    },
    List {
        table_id: usize,
    },
    Delete {
        table_id: usize,
        uuid: String,
    },
}

impl Call {
    pub fn table_id(&self) -> usize {
        match self {
            Call::Create { table_id, .. }
            | Call::Fetch { table_id, .. }
            | Call::List { table_id }
            | Call::Delete { table_id, .. } => *table_id,
        }
    }

    pub fn is_create(&self) -> bool {
        matches!(self, Call::Create { .. })
    }
}

#[derive(Debug, Clone, Copy)]
pub enum CreateMode {
    /// Echo this many items back
    Ok(usize),
    TableFull,
    ServerError,
}

#[derive(Debug, Clone, Copy)]
pub enum ReadMode {
    Ok,
    NotFound,
    ServerError,
}

pub struct MockTableClient {
    create: CreateMode,
    fetch: ReadMode,
    list: ReadMode,
    delete: ReadMode,
    ping_failures: AtomicUsize,
    counter: AtomicUsize,
    yields: bool,
    calls: Mutex<Vec<Call>>,
}

impl MockTableClient {
    pub fn new() -> Self {
        Self {
            create: CreateMode::Ok(1),
            fetch: ReadMode::Ok,
            list: ReadMode::Ok,
            delete: ReadMode::Ok,
            ping_failures: AtomicUsize::new(0),
            counter: AtomicUsize::new(0),
            yields: true,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_create(mut self, mode: CreateMode) -> Self {
        self.create = mode;
        self
    }

    pub fn with_fetch(mut self, mode: ReadMode) -> Self {
        self.fetch = mode;
        self
    }

    pub fn with_list(mut self, mode: ReadMode) -> Self {
        self.list = mode;
        self
    }

    pub fn with_delete(mut self, mode: ReadMode) -> Self {
        self.delete = mode;
        self
    }

    pub fn with_ping_failures(self, n: usize) -> Self {
        self.ping_failures.store(n, Ordering::SeqCst);
        self
    }

    /// Answer every call without suspending, like a request that fails
    /// before it reaches the network.
    pub fn without_yield(mut self) -> Self {
        self.yields = false;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn pings_remaining(&self) -> usize {
        self.ping_failures.load(Ordering::SeqCst)
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    async fn pause(&self) {
        if self.yields {
            // Every real request yields; keep spawned loops cooperative.
            tokio::task::yield_now().await;
        }
    }

    fn item(uuid: String, name: String, table_id: usize) -> Item {
        Item {
            uuid,
            name,
            table_id,
            created_at: 0,
            ready_at: 0,
            is_removed: false,
        }
    }

    fn read_result(mode: ReadMode) -> Result<(), ApiError> {
        match mode {
            ReadMode::Ok => Ok(()),
            ReadMode::NotFound => Err(ApiError::from_status(404, "missing".into())),
            ReadMode::ServerError => Err(ApiError::from_status(500, "boom".into())),
        }
    }
}

#[async_trait]
impl TableClient for MockTableClient {
    fn endpoint(&self) -> &str {
        "mock"
    }

    async fn add_items(
        &self,
        table_id: usize,
        item_names: &[String],
    ) -> Result<Vec<Item>, ApiError> {
        self.record(Call::Create {
            table_id,
            item_names: item_names.to_vec(),
        });
        self.pause().await;

        match self.create {
            CreateMode::Ok(count) => {
                let n = self.counter.fetch_add(1, Ordering::SeqCst);
                let name = item_names.first().cloned().unwrap_or_default();
                Ok((0..count)
                    .map(|k| Self::item(format!("uuid-{}-{}", n, k), name.clone(), table_id))
                    .collect())
            }
            CreateMode::TableFull => Err(ApiError::from_status(429, "full".into())),
            CreateMode::ServerError => Err(ApiError::from_status(500, "boom".into())),
        }
    }

    async fn get_item(&self, table_id: usize, uuid: &str) -> Result<Item, ApiError> {
        self.record(Call::Fetch {
            table_id,
            uuid: uuid.to_string(),
        });
        self.pause().await;

        Self::read_result(self.fetch)
            .map(|()| Self::item(uuid.to_string(), format!("{}-dish", table_id), table_id))
    }

    async fn get_items(&self, table_id: usize) -> Result<Vec<Item>, ApiError> {
        self.record(Call::List { table_id });
        self.pause().await;

        Self::read_result(self.list).map(|()| Vec::new())
    }

    async fn remove_item(&self, table_id: usize, uuid: &str) -> Result<(), ApiError> {
        self.record(Call::Delete {
            table_id,
            uuid: uuid.to_string(),
        });
        self.pause().await;

        Self::read_result(self.delete)
    }

    async fn ping(&self) -> Result<(), ApiError> {
        let remaining = self.ping_failures.load(Ordering::SeqCst);
        if remaining > 0 {
            self.ping_failures.store(remaining - 1, Ordering::SeqCst);
            return Err(ApiError::from_status(503, "starting".into()));
        }
        Ok(())
    }
}
