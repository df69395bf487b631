use crate::error::{FetchError, Result};
use crate::model::EmployeeRecord;
use crate::store::RecordSource;
use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, error};

/// The one query the page issues: project the `Employee` table's
/// display-style column names under the view's field names, ascending by id.
/// `Status` was created with a capital letter, so it needs quoting like the
/// multi-word columns.
const EMPLOYEE_QUERY: &str = r#"
SELECT
    id,
    created_at,
    "First name"      AS first_name,
    "Last name"       AS last_name,
    "Email ID"        AS email,
    "Date of Joining" AS date_of_joining,
    "Status"          AS status,
    "Mobile number"   AS mobile
FROM "Employee"
ORDER BY id ASC
"#;

/// Read-only store client backed by a shared Postgres pool.
pub struct PgEmployeeStore {
    pool: PgPool,
}

impl PgEmployeeStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordSource for PgEmployeeStore {
    async fn fetch_employees(&self) -> Result<Vec<EmployeeRecord>> {
        debug!(sql = %EMPLOYEE_QUERY.trim(), "Fetching employees");

        let rows = sqlx::query_as::<_, EmployeeRecord>(EMPLOYEE_QUERY)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to fetch employees");
                FetchError::from(e)
            })?;

        Ok(rows)
    }
}
