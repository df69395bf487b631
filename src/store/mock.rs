//! Mock record sources for headless tests.

use crate::error::{FetchError, Result};
use crate::model::EmployeeRecord;
use crate::store::RecordSource;
use async_trait::async_trait;
use tokio::sync::Notify;

/// Returns a canned list of records on every fetch.
pub struct StaticSource {
    rows: Vec<EmployeeRecord>,
}

impl StaticSource {
    pub fn new(rows: Vec<EmployeeRecord>) -> Self {
        Self { rows }
    }

    /// A source that successfully returns zero rows.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }
}

#[async_trait]
impl RecordSource for StaticSource {
    async fn fetch_employees(&self) -> Result<Vec<EmployeeRecord>> {
        Ok(self.rows.clone())
    }
}

/// Fails every fetch with a fixed message.
pub struct FailingSource {
    message: String,
}

impl FailingSource {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[async_trait]
impl RecordSource for FailingSource {
    async fn fetch_employees(&self) -> Result<Vec<EmployeeRecord>> {
        Err(FetchError::fetch_failed(self.message.clone()))
    }
}

/// Holds the fetch open until [`PendingSource::release`] is called, so tests
/// can observe the view while the request is still in flight.
pub struct PendingSource {
    gate: Notify,
    rows: Vec<EmployeeRecord>,
}

impl PendingSource {
    pub fn new(rows: Vec<EmployeeRecord>) -> Self {
        Self {
            gate: Notify::new(),
            rows,
        }
    }

    /// Lets the in-flight fetch settle. A release before the fetch reaches
    /// its wait is remembered, so there is no ordering race in tests.
    pub fn release(&self) {
        self.gate.notify_one();
    }
}

#[async_trait]
impl RecordSource for PendingSource {
    async fn fetch_employees(&self) -> Result<Vec<EmployeeRecord>> {
        self.gate.notified().await;
        Ok(self.rows.clone())
    }
}
