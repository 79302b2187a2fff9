//! `db` crate — pure persistence layer.
//!
//! Provides connection configuration, a connection pool, the typed employee
//! row struct, and repository functions for the employees table.  No business
//! logic lives here.

pub mod config;
pub mod error;
pub mod models;
pub mod pool;
pub mod repository;

pub use config::{ConfigError, ConnectConfig};
pub use error::DbError;
pub use models::Employee;
pub use pool::DbPool;
