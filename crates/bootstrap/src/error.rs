use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// The initialization step a failure is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    WaitForServer,
    EnsureDatabase,
    ImportSchema,
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Step::WaitForServer => "wait-for-server",
            Step::EnsureDatabase => "ensure-database",
            Step::ImportSchema => "import-schema",
        };
        write!(f, "{name}")
    }
}

/// Failures raised by the initialization pipeline.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// No attempt succeeded within the configured window. Carries the
    /// error from the last attempt.
    #[error("database server not reachable after {attempts} attempts over {elapsed:?}: {source}")]
    ConnectTimeout {
        attempts: u32,
        elapsed: Duration,
        #[source]
        source: sqlx::Error,
    },

    #[error("wait for the database server was cancelled")]
    Cancelled,

    #[error("could not provision database {name:?}: {source}")]
    Provision {
        name: String,
        #[source]
        source: sqlx::Error,
    },

    /// The schema file does not exist. Kept distinct from [`SchemaRead`]
    /// so a bad path is recognizable without parsing io error kinds.
    ///
    /// [`SchemaRead`]: BootstrapError::SchemaRead
    #[error("schema file not found: {}", .path.display())]
    SchemaMissing { path: PathBuf },

    #[error("could not read schema file {}: {source}", .path.display())]
    SchemaRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The batch failed mid-flight; statements before the failing one
    /// stay applied.
    #[error("could not apply schema to database {database:?}: {source}")]
    SchemaApply {
        database: String,
        #[source]
        source: sqlx::Error,
    },
}

impl BootstrapError {
    /// Which pipeline step produced this error.
    pub fn step(&self) -> Step {
        match self {
            BootstrapError::ConnectTimeout { .. } | BootstrapError::Cancelled => {
                Step::WaitForServer
            }
            BootstrapError::Provision { .. } => Step::EnsureDatabase,
            BootstrapError::SchemaMissing { .. }
            | BootstrapError::SchemaRead { .. }
            | BootstrapError::SchemaApply { .. } => Step::ImportSchema,
        }
    }
}
