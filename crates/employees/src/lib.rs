//! `employees` crate — the employee capability seam and service façade.
//!
//! [`EmployeeStore`] is the persistence contract; [`PgEmployeeStore`] is the
//! one production implementation, and [`MemoryEmployeeStore`] is a drop-in
//! double for tests.  [`EmployeeService`] sits on top and is what callers
//! use.

pub mod memory;
pub mod pg;
pub mod service;
pub mod store;

pub use db::{DbError, Employee};
pub use memory::MemoryEmployeeStore;
pub use pg::PgEmployeeStore;
pub use service::EmployeeService;
pub use store::EmployeeStore;
