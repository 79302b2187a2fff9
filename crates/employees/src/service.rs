//! Employee use-case service.
//!
//! Builds the entity value from primitive inputs and delegates persistence
//! to the injected store.  No validation beyond what construction needs:
//! any name and any salary the column type accepts are accepted here too.

use rust_decimal::Decimal;
use tracing::debug;

use db::{DbError, Employee};

use crate::EmployeeStore;

/// Service wrapper over an [`EmployeeStore`] implementation.
pub struct EmployeeService<S: EmployeeStore> {
    store: S,
}

impl<S: EmployeeStore> EmployeeService<S> {
    /// Creates a service using the provided store implementation.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Persist a new employee built from the given fields.
    ///
    /// Store errors (including [`DbError::DuplicateId`]) pass through
    /// unchanged.
    pub async fn add_employee(
        &self,
        id: i32,
        name: impl Into<String>,
        salary: Decimal,
    ) -> Result<Employee, DbError> {
        debug!(id, "adding employee");
        self.store.add(&Employee::new(id, name, salary)).await
    }

    /// Look up an employee by id; absence is `Ok(None)`.
    pub async fn get_employee(&self, id: i32) -> Result<Option<Employee>, DbError> {
        debug!(id, "looking up employee");
        self.store.get(id).await
    }
}
