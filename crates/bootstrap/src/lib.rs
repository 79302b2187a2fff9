//! One-shot PostgreSQL bootstrap: wait for the server, create the
//! target database if needed, apply the schema.
//!
//! The pieces compose through [`Initializer`], but each step is public
//! on its own so callers can run, say, just the wait loop.

pub mod cancel;
pub mod error;
pub mod init;
pub mod provision;
pub mod schema;
pub mod wait;

pub use cancel::CancelToken;
pub use error::{BootstrapError, Step};
pub use init::{InitConfig, InitReport, Initializer, SchemaOutcome};
pub use provision::{ensure_database, Provisioned};
pub use schema::{apply_schema, schema_present};
pub use wait::{wait_for_server, WaitConfig};
