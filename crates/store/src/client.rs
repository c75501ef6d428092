use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use pulse_core::model::Response;
use serde_json::Value;
use thiserror::Error;

/// Errors surfaced by store adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StoreError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("store request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Contract for the external service that keeps submitted response sets.
///
/// The store is opaque: appends return whatever acknowledgement body the
/// service produced, and listings return the raw stored records.
#[async_trait]
pub trait ResponseStore: Send + Sync {
    /// Persist one complete, ordered response set.
    ///
    /// Returns the store's acknowledgement verbatim.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the submission cannot be stored.
    async fn append_responses(&self, responses: &[Response]) -> Result<String, StoreError>;

    /// Fetch every previously stored submission.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store cannot be read.
    async fn list_submissions(&self) -> Result<Vec<Value>, StoreError>;
}

/// Simple in-memory store implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    submissions: Arc<Mutex<Vec<Value>>>,
    list_calls: Arc<AtomicUsize>,
}

impl InMemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            submissions: Arc::new(Mutex::new(Vec::new())),
            list_calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Snapshot of the stored submissions, without counting as a read.
    #[must_use]
    pub fn appended(&self) -> Vec<Value> {
        self.submissions
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    /// Number of successfully appended submissions.
    #[must_use]
    pub fn append_count(&self) -> usize {
        self.submissions
            .lock()
            .map(|guard| guard.len())
            .unwrap_or_default()
    }

    /// Number of times `list_submissions` has been called.
    #[must_use]
    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ResponseStore for InMemoryStore {
    async fn append_responses(&self, responses: &[Response]) -> Result<String, StoreError> {
        let record =
            serde_json::to_value(responses).map_err(|e| StoreError::Connection(e.to_string()))?;
        let mut guard = self
            .submissions
            .lock()
            .map_err(|e| StoreError::Connection(e.to_string()))?;
        guard.push(record);
        Ok(format!(r#"{{"stored":{}}}"#, guard.len()))
    }

    async fn list_submissions(&self) -> Result<Vec<Value>, StoreError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        let guard = self
            .submissions
            .lock()
            .map_err(|e| StoreError::Connection(e.to_string()))?;
        Ok(guard.clone())
    }
}
