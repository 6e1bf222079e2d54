//! Employee Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{EMPLOYEE_TABLE, EmployeeContent, EmployeeRecord, record_id};
use serde::Deserialize;
use surrealdb::Surreal;
use surrealdb::engine::any::Any;

/// Largest LIMIT/START value SurrealQL accepts
const MAX_WINDOW: u64 = u32::MAX as u64;

#[derive(Debug, Deserialize)]
struct CountRow {
    count: u64,
}

#[derive(Clone, Debug)]
pub struct EmployeeRepository {
    base: BaseRepository,
}

impl EmployeeRepository {
    pub fn new(db: Surreal<Any>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Create an employee; the store assigns its id
    pub async fn create(&self, content: EmployeeContent) -> RepoResult<EmployeeRecord> {
        let mut result = self
            .base
            .db()
            .query("CREATE type::table($table) CONTENT $data RETURN AFTER")
            .bind(("table", EMPLOYEE_TABLE))
            .bind(("data", content))
            .await?;

        let created: Option<EmployeeRecord> = result.take(0)?;
        created.ok_or_else(|| RepoError::Database("Failed to create employee".to_string()))
    }

    /// Find employee by key (contacts unresolved)
    pub async fn find_by_id(&self, key: &str) -> RepoResult<Option<EmployeeRecord>> {
        let emp: Option<EmployeeRecord> = self
            .base
            .db()
            .select(record_id(EMPLOYEE_TABLE, key))
            .await?;
        Ok(emp)
    }

    /// One page of employees in the store's natural (id) order
    ///
    /// A window starting past the largest START the store accepts is empty
    /// without a round-trip; oversized limits are capped.
    pub async fn find_page(&self, skip: u64, limit: u64) -> RepoResult<Vec<EmployeeRecord>> {
        if skip > MAX_WINDOW {
            return Ok(Vec::new());
        }

        let mut result = self
            .base
            .db()
            .query("SELECT * FROM type::table($table) LIMIT $limit START $start")
            .bind(("table", EMPLOYEE_TABLE))
            .bind(("limit", limit.min(MAX_WINDOW)))
            .bind(("start", skip))
            .await?;
        let employees: Vec<EmployeeRecord> = result.take(0)?;
        Ok(employees)
    }

    /// Total number of employees
    pub async fn count(&self) -> RepoResult<u64> {
        let mut result = self
            .base
            .db()
            .query("SELECT count() FROM type::table($table) GROUP ALL")
            .bind(("table", EMPLOYEE_TABLE))
            .await?;
        let row: Option<CountRow> = result.take(0)?;
        Ok(row.map(|r| r.count).unwrap_or(0))
    }

    /// Merge the employee's profile fields into its stored document
    ///
    /// Fails with `NotFound` when the employee vanished since it was loaded.
    pub async fn update_fields(&self, employee: &EmployeeRecord) -> RepoResult<()> {
        let mut result = self
            .base
            .db()
            .query("UPDATE $id MERGE $data RETURN AFTER")
            .bind(("id", employee.id.clone()))
            .bind(("data", EmployeeContent::from_profile(employee.profile())))
            .await?;
        let updated: Option<EmployeeRecord> = result.take(0)?;
        updated
            .map(|_| ())
            .ok_or_else(|| RepoError::NotFound("Employee".to_string()))
    }

    /// Hard delete an employee, returning the removed document
    pub async fn delete(&self, key: &str) -> RepoResult<Option<EmployeeRecord>> {
        let mut result = self
            .base
            .db()
            .query("DELETE $id RETURN BEFORE")
            .bind(("id", record_id(EMPLOYEE_TABLE, key)))
            .await?;
        let deleted: Option<EmployeeRecord> = result.take(0)?;
        Ok(deleted)
    }
}
