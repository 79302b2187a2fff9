//! Postgres-backed `EmployeeStore`.

use async_trait::async_trait;

use db::repository::employees as emp_repo;
use db::{DbError, DbPool, Employee};

use crate::EmployeeStore;

/// The production store: thin dispatch onto the db crate's repository
/// functions.  Each call acquires a pooled connection for its own scope
/// and releases it on completion or failure.
pub struct PgEmployeeStore {
    pool: DbPool,
}

impl PgEmployeeStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeStore for PgEmployeeStore {
    async fn add(&self, employee: &Employee) -> Result<Employee, DbError> {
        emp_repo::insert_employee(&self.pool, employee).await
    }

    async fn get(&self, id: i32) -> Result<Option<Employee>, DbError> {
        emp_repo::fetch_employee(&self.pool, id).await
    }
}
