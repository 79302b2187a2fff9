//! `MemoryEmployeeStore` — a test double for `EmployeeStore`.
//!
//! Useful in unit and integration tests where a real Postgres instance is
//! either unavailable or irrelevant.  It honors the same contract as the
//! production store: duplicate ids are rejected, lookups of absent ids
//! return `None`.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;

use db::{DbError, Employee};

use crate::EmployeeStore;

/// In-memory store keyed by employee id.
#[derive(Debug, Default)]
pub struct MemoryEmployeeStore {
    rows: Mutex<BTreeMap<i32, Employee>>,
}

impl MemoryEmployeeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows currently held.
    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl EmployeeStore for MemoryEmployeeStore {
    async fn add(&self, employee: &Employee) -> Result<Employee, DbError> {
        let mut rows = self.rows.lock().unwrap();
        if rows.contains_key(&employee.id) {
            return Err(DbError::DuplicateId(employee.id));
        }
        rows.insert(employee.id, employee.clone());
        Ok(employee.clone())
    }

    async fn get(&self, id: i32) -> Result<Option<Employee>, DbError> {
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }
}
