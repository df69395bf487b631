use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One row of the remote `Employee` table, projected under the view's own
/// field names. The store's display-style column names (`"First name"`,
/// `"Email ID"`, ...) are aliased to these fields in the query itself, so
/// the row decodes without per-field renames.
///
/// Only `id` is guaranteed present; every other column may be NULL and
/// renders as an empty cell. `created_at` is part of the projection but is
/// never rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct EmployeeRecord {
    pub id: i64,
    pub created_at: Option<DateTime<Utc>>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub date_of_joining: Option<NaiveDate>,
    pub status: Option<String>,
    pub mobile: Option<String>,
}
