//! Access to the remote employee store.
//!
//! The view talks to the store through the [`RecordSource`] trait so tests
//! can run headless against mock sources while the server runs against
//! Postgres.

mod mock;
mod postgres;

pub use mock::{FailingSource, PendingSource, StaticSource};
pub use postgres::PgEmployeeStore;

use crate::error::Result;
use crate::model::EmployeeRecord;
use async_trait::async_trait;

/// A read-only source of employee records.
///
/// One operation: fetch the full projection, ordered ascending by `id` as
/// the store returns it. Implementations never re-sort.
#[async_trait]
pub trait RecordSource: Send + Sync {
    async fn fetch_employees(&self) -> Result<Vec<EmployeeRecord>>;
}
