//! The `EmployeeStore` trait — the persistence contract the service
//! depends on.

use async_trait::async_trait;

use db::{DbError, Employee};

/// Insert-and-lookup persistence for employees.
///
/// Deliberately narrow: no update, no delete, no listing.  Absence on
/// lookup is `Ok(None)`, never an error; inserting an existing id is
/// [`DbError::DuplicateId`], never an overwrite.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// Persist a new employee and return the row as stored.
    async fn add(&self, employee: &Employee) -> Result<Employee, DbError>;

    /// Look up an employee by primary key.
    async fn get(&self, id: i32) -> Result<Option<Employee>, DbError>;
}
